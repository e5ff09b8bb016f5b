//! Progress reporting for long-running matrix work
//!
//! Progress is an observer driven by the caller around a computation. The
//! arithmetic itself never reports progress and never waits on it.

/// Receives start/finish notifications from an orchestration loop
pub trait Progress {
    /// Work described by `label` has started
    fn start(&mut self, label: &str);

    /// The current piece of work has finished
    fn finish(&mut self);

    /// Run `work` between a start and a finish notification
    fn track<R>(&mut self, label: &str, work: impl FnOnce() -> R) -> R
    where
        Self: Sized,
    {
        self.start(label);
        let result = work();
        self.finish();
        result
    }
}

/// Progress sink that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn start(&mut self, _label: &str) {}

    fn finish(&mut self) {}
}

#[cfg(feature = "cli")]
mod spinner {
    use std::time::Duration;

    use indicatif::{ProgressBar, ProgressStyle};

    use super::Progress;

    const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Terminal spinner shown while a computation runs
    ///
    /// The spinner ticks on indicatif's background thread and is cleared on
    /// finish, leaving no trace in the output.
    #[derive(Default)]
    pub struct Spinner {
        bar: Option<ProgressBar>,
    }

    impl Spinner {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Progress for Spinner {
        fn start(&mut self, label: &str) {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{msg} {spinner}") {
                bar.set_style(style.tick_chars("|/-\\ "));
            }
            bar.set_message(label.to_string());
            bar.enable_steady_tick(TICK_INTERVAL);
            self.bar = Some(bar);
        }

        fn finish(&mut self) {
            if let Some(bar) = self.bar.take() {
                bar.finish_and_clear();
            }
        }
    }
}

#[cfg(feature = "cli")]
pub use spinner::Spinner;
