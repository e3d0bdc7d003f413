//! Screen surface: the host capability the coordinator calls out to.

/// Host-provided capability for querying onboarding status and requesting screens.
///
/// The coordinator never renders anything itself. It asks the surface whether
/// onboarding is still required and tells it which screen to present.
pub trait ScreenSurface {
    /// Whether the onboarding flow must still be shown.
    ///
    /// Queried on every decision; the answer may change between calls.
    fn should_show_onboarding(&self) -> bool;

    /// Show the content screen navigated to `target`.
    fn show_content(&mut self, target: &str);

    /// Show the default home screen.
    fn show_home(&mut self);

    /// Show the onboarding flow.
    fn show_onboarding(&mut self);
}

impl<T: ScreenSurface + ?Sized> ScreenSurface for &mut T {
    fn should_show_onboarding(&self) -> bool {
        (**self).should_show_onboarding()
    }

    fn show_content(&mut self, target: &str) {
        (**self).show_content(target)
    }

    fn show_home(&mut self) {
        (**self).show_home()
    }

    fn show_onboarding(&mut self) {
        (**self).show_onboarding()
    }
}

impl<T: ScreenSurface + ?Sized> ScreenSurface for Box<T> {
    fn should_show_onboarding(&self) -> bool {
        (**self).should_show_onboarding()
    }

    fn show_content(&mut self, target: &str) {
        (**self).show_content(target)
    }

    fn show_home(&mut self) {
        (**self).show_home()
    }

    fn show_onboarding(&mut self) {
        (**self).show_onboarding()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        onboarding: bool,
        calls: Vec<&'static str>,
    }

    impl ScreenSurface for Counter {
        fn should_show_onboarding(&self) -> bool {
            self.onboarding
        }
        fn show_content(&mut self, _target: &str) {
            self.calls.push("content");
        }
        fn show_home(&mut self) {
            self.calls.push("home");
        }
        fn show_onboarding(&mut self) {
            self.calls.push("onboarding");
        }
    }

    fn drive<S: ScreenSurface>(mut surface: S) {
        if surface.should_show_onboarding() {
            surface.show_onboarding();
        } else {
            surface.show_home();
        }
        surface.show_content("x");
    }

    #[test]
    fn mut_ref_forwards_to_inner() {
        let mut counter = Counter {
            onboarding: true,
            ..Default::default()
        };
        drive(&mut counter);
        assert_eq!(counter.calls, vec!["onboarding", "content"]);
    }

    #[test]
    fn boxed_trait_object_forwards() {
        let boxed: Box<dyn ScreenSurface> = Box::new(Counter::default());
        assert!(!boxed.should_show_onboarding());
        drive(boxed);
    }
}
