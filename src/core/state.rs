//! # Application State
//!
//! Core state for Folio. Domain logic only - no TUI-specific types.
//! Presentation state (selection, focus, typed text) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigator: SectionNavigator      // active section + transition lock
//! ├── profile: Profile                 // what the portfolio shows
//! ├── theme: Theme                     // dark / light
//! ├── toast: Option<Toast>             // transient notification
//! ├── contact_errors: ValidationErrors // last failed contact submission
//! └── status_message: String           // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use crate::Theme;
use crate::core::config::ResolvedConfig;
use crate::core::contact::ValidationErrors;
use crate::core::navigation::{NavigationTiming, SectionNavigator};
use crate::core::profile::{Profile, Section};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
        now: Instant,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
            expires_at: now + TOAST_DURATION,
        }
    }
}

pub struct App {
    pub navigator: SectionNavigator,
    pub profile: Profile,
    pub theme: Theme,
    pub toast: Option<Toast>,
    pub contact_errors: ValidationErrors,
    pub status_message: String,
}

impl App {
    pub fn new(profile: Profile, theme: Theme, timing: NavigationTiming) -> Self {
        let sections = NonZeroUsize::new(Section::ALL.len()).unwrap_or(NonZeroUsize::MIN);
        Self {
            navigator: SectionNavigator::new(sections, timing),
            profile,
            theme,
            toast: None,
            contact_errors: ValidationErrors::default(),
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.profile.clone(), config.theme, config.timing)
    }

    pub fn active_section(&self) -> Section {
        Section::from_index(self.navigator.active_index()).unwrap_or(Section::About)
    }

    /// Earliest instant at which a `Tick` will change something.
    pub fn next_deadline(&self) -> Option<Instant> {
        let toast = self.toast.as_ref().map(|t| t.expires_at);
        match (self.navigator.next_deadline(), toast) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
