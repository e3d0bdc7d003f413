//! CLI host: stdin/stdout REPL for driving the coordinator by hand.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::config::HostConfig;
use crate::error::{Error, Result};

use super::Host;

/// Run the REPL until `/quit`, EOF, or Ctrl+C.
///
/// Lines are read on a separate task; every coordinator call happens here,
/// one command at a time.
pub async fn run(config: HostConfig) -> Result<()> {
    let mut host = Host::new(&config);
    host.start(config.startup_entry());
    println!("{}", host.status());

    let (tx, mut rx) = mpsc::unbounded_channel::<std::io::Result<String>>();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(Ok(line)).is_err() {
                        break;
                    }
                }
                Ok(None) => break, // EOF
                Err(e) => {
                    let _ = tx.send(Err(e));
                    break;
                }
            }
        }
    });

    eprint!("> ");
    loop {
        let line = tokio::select! {
            biased;
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl+C received, shutting down...");
                break;
            }
            line = rx.recv() => match line {
                Some(line) => line?,
                None => {
                    tracing::info!("Input closed, shutting down...");
                    break;
                }
            },
        };

        let line = line.trim();
        if line.is_empty() {
            eprint!("> ");
            continue;
        }

        match host.execute(line) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {
                tracing::info!("Shutdown command received, exiting...");
                break;
            }
            Err(Error::Command(e)) => eprintln!("Error: {e}"),
            Err(e) => return Err(e),
        }
        eprint!("> ");
    }

    Ok(())
}
