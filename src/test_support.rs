//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Mutex;

use crate::Theme;
use crate::core::navigation::NavigationTiming;
use crate::core::profile::Profile;
use crate::core::state::App;
use crate::tui::launcher::{LaunchError, Launcher};

/// A launcher that records URLs instead of opening them.
#[derive(Default)]
pub struct RecordingLauncher {
    pub opened: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl Launcher for RecordingLauncher {
    async fn open(&self, url: &str) -> Result<(), LaunchError> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            Err(LaunchError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no handler",
            )))
        } else {
            Ok(())
        }
    }
}

/// Creates a test App with the default profile and timings.
pub fn test_app() -> App {
    App::new(Profile::default(), Theme::Dark, NavigationTiming::default())
}
