use startup_nav::config::HostConfig;
use startup_nav::error::Result;
use startup_nav::host;

#[tokio::main]
async fn main() -> Result<()> {
    let config = HostConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.default_log)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    eprintln!("startup-nav v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Onboarding complete: {}", config.onboarding_complete);
    match &config.open_url {
        Some(url) => eprintln!("   Startup entry: view {}", url),
        None => eprintln!("   Startup entry: launch"),
    }
    eprintln!("   Commands: launch, view <url>, record <url>, dispatch, share <text>, finish, recreate, relaunch, status, /quit\n");

    host::run(config).await
}
