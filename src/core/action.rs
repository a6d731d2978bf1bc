//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User clicks a tab? That's `Action::Navigate(index)`.
//! Mouse wheel turns? That's `Action::Wheel(delta)`.
//!
//! The `update()` function takes the current state, an action and the
//! current instant, mutates the state and returns an `Effect` for the
//! adapter to carry out. No I/O here.
//!
//! ```text
//! State + Action + now  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};
use std::time::Instant;

use crate::core::contact::{ContactForm, ValidationErrors, mailto_link};
use crate::core::state::{App, Toast, ToastVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Web,
    Mail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub url: String,
    pub kind: LinkKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Explicit tab selection (click or key). Not debounced.
    Navigate(usize),
    /// Raw wheel input; positive is downward.
    Wheel(f64),
    /// Fire expired timers.
    Tick,
    ToggleTheme,
    SubmitContact(ContactForm),
    OpenLink(String),
    LinkOpened {
        request: LinkRequest,
        result: Result<(), String>,
    },
    DismissToast,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    OpenLink(LinkRequest),
    /// Open the mail client and clear the contact form.
    SendMail(LinkRequest),
}

pub fn update(app: &mut App, action: Action, now: Instant) -> Effect {
    match action {
        Action::Navigate(index) => {
            let target = isize::try_from(index).unwrap_or(isize::MAX);
            if app.navigator.request_navigate(target, now) {
                app.status_message.clear();
            }
            Effect::None
        }
        Action::Wheel(delta_y) => {
            app.navigator.on_wheel(delta_y, now);
            Effect::None
        }
        Action::Tick => {
            app.navigator.tick(now);
            if app.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
                app.toast = None;
            }
            Effect::None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            app.status_message = format!("Theme: {}", app.theme.label());
            Effect::None
        }
        Action::SubmitContact(form) => match form.validate() {
            Ok(()) => {
                app.contact_errors = ValidationErrors::default();
                let url = mailto_link(&app.profile.email, &form);
                info!("Contact form valid, opening mail client");
                app.toast = Some(Toast::new(
                    "Opening Email Client",
                    "Please complete sending the email in your mail application.",
                    ToastVariant::Info,
                    now,
                ));
                Effect::SendMail(LinkRequest {
                    url,
                    kind: LinkKind::Mail,
                })
            }
            Err(errors) => {
                debug!("Contact form rejected with {} issue(s)", errors.len());
                app.contact_errors = errors;
                Effect::None
            }
        },
        Action::OpenLink(url) => {
            app.status_message = format!("Opening {}", url);
            Effect::OpenLink(LinkRequest {
                url,
                kind: LinkKind::Web,
            })
        }
        Action::LinkOpened { request, result } => {
            match (result, request.kind) {
                (Ok(()), LinkKind::Web) => {
                    app.status_message = format!("Opened {}", request.url);
                }
                (Ok(()), LinkKind::Mail) => {}
                (Err(e), LinkKind::Mail) => {
                    warn!("Mail client failed to open: {}", e);
                    app.toast = Some(Toast::new(
                        "Error",
                        "Could not open email client.",
                        ToastVariant::Destructive,
                        now,
                    ));
                }
                (Err(e), LinkKind::Web) => {
                    warn!("Failed to open {}: {}", request.url, e);
                    app.toast = Some(Toast::new(
                        "Error",
                        format!("Could not open {}", request.url),
                        ToastVariant::Destructive,
                        now,
                    ));
                }
            }
            Effect::None
        }
        Action::DismissToast => {
            app.toast = None;
            Effect::None
        }
        Action::Quit => {
            app.navigator.shutdown();
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::core::contact::{Field, FieldError};
    use crate::core::profile::Section;
    use crate::core::state::TOAST_DURATION;
    use crate::test_support::test_app;
    use std::time::Duration;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Lovely engines you have.".to_string(),
        }
    }

    #[test]
    fn test_navigate_is_immediate() {
        let mut app = test_app();
        let now = Instant::now();
        assert_eq!(update(&mut app, Action::Navigate(2), now), Effect::None);
        assert_eq!(app.active_section(), Section::Contact);
        assert!(app.navigator.is_transitioning());
    }

    #[test]
    fn test_navigate_out_of_range_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(usize::MAX), Instant::now());
        assert_eq!(app.active_section(), Section::About);
        assert!(!app.navigator.is_transitioning());
    }

    #[test]
    fn test_wheel_waits_for_tick() {
        let mut app = test_app();
        let now = Instant::now();
        update(&mut app, Action::Wheel(1.0), now);
        assert_eq!(app.active_section(), Section::About);

        let debounce = app.navigator.timing().debounce;
        update(&mut app, Action::Tick, now + debounce);
        assert_eq!(app.active_section(), Section::Projects);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = test_app();
        update(&mut app, Action::ToggleTheme, Instant::now());
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.status_message, "Theme: light");
        update(&mut app, Action::ToggleTheme, Instant::now());
        assert_eq!(app.theme, Theme::Dark);
    }

    #[test]
    fn test_invalid_contact_records_errors() {
        let mut app = test_app();
        let form = ContactForm {
            email: "nope".to_string(),
            ..valid_form()
        };
        let effect = update(&mut app, Action::SubmitContact(form), Instant::now());
        assert_eq!(effect, Effect::None);
        assert_eq!(
            app.contact_errors.for_field(Field::Email),
            Some(FieldError::InvalidEmail)
        );
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_valid_contact_sends_mail_and_clears_errors() {
        let mut app = test_app();
        let now = Instant::now();
        update(&mut app, Action::SubmitContact(ContactForm::default()), now);
        assert!(!app.contact_errors.is_empty());

        let effect = update(&mut app, Action::SubmitContact(valid_form()), now);
        match effect {
            Effect::SendMail(request) => {
                assert_eq!(request.kind, LinkKind::Mail);
                assert!(request.url.starts_with("mailto:wpbaris@gmail.com?subject="));
            }
            other => panic!("Expected SendMail, got {:?}", other),
        }
        assert!(app.contact_errors.is_empty());
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.title, "Opening Email Client");
        assert_eq!(toast.variant, ToastVariant::Info);
    }

    #[test]
    fn test_mail_failure_shows_destructive_toast() {
        let mut app = test_app();
        let request = LinkRequest {
            url: "mailto:x@y.io".to_string(),
            kind: LinkKind::Mail,
        };
        update(
            &mut app,
            Action::LinkOpened {
                request,
                result: Err("no handler".to_string()),
            },
            Instant::now(),
        );
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "Could not open email client.");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_open_link_effect_and_result() {
        let mut app = test_app();
        let url = "https://github.com/urnere".to_string();
        let effect = update(&mut app, Action::OpenLink(url.clone()), Instant::now());
        let request = LinkRequest {
            url: url.clone(),
            kind: LinkKind::Web,
        };
        assert_eq!(effect, Effect::OpenLink(request.clone()));

        update(
            &mut app,
            Action::LinkOpened {
                request,
                result: Ok(()),
            },
            Instant::now(),
        );
        assert_eq!(app.status_message, format!("Opened {}", url));
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_toast_expires_on_tick() {
        let mut app = test_app();
        let now = Instant::now();
        update(&mut app, Action::SubmitContact(valid_form()), now);
        assert!(app.toast.is_some());

        update(&mut app, Action::Tick, now + TOAST_DURATION - Duration::from_millis(1));
        assert!(app.toast.is_some());
        update(&mut app, Action::Tick, now + TOAST_DURATION);
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_dismiss_toast() {
        let mut app = test_app();
        update(&mut app, Action::SubmitContact(valid_form()), Instant::now());
        update(&mut app, Action::DismissToast, Instant::now());
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_quit_cancels_timers() {
        let mut app = test_app();
        let now = Instant::now();
        update(&mut app, Action::Navigate(1), now);
        update(&mut app, Action::Wheel(1.0), now);
        assert_eq!(update(&mut app, Action::Quit, now), Effect::Quit);
        assert_eq!(app.navigator.next_deadline(), None);
    }
}
