use std::{process::Termination, time::Instant};

/// A redirect page written by [`publish()`](crate::publish).
#[derive(Debug)]
pub struct RedirectOutput {
    pub path: String,
    pub file_path: String,
    pub target: String,
}

/// Metadata returned by [`publish()`](crate::publish) after a successful build.
#[derive(Debug)]
pub struct BuildOutput {
    pub start_time: Instant,
    pub redirects: Vec<RedirectOutput>,
    /// Paths no rewrite applied to. They are left to the normal rendering of the site.
    pub skipped: Vec<String>,
}

impl BuildOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            redirects: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub(crate) fn add_redirect(&mut self, path: String, file_path: String, target: String) {
        self.redirects.push(RedirectOutput {
            path,
            file_path,
            target,
        });
    }

    pub(crate) fn add_skipped(&mut self, path: String) {
        self.skipped.push(path);
    }
}

impl Default for BuildOutput {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Termination for BuildOutput {
    fn report(self) -> std::process::ExitCode {
        0.into()
    }
}
