//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: owner name, status message and theme indicator
//! - `TabBar`: the bottom section navigator (also resolves tab clicks)
//! - `AboutPanel`: bio and initials badge
//! - `SocialLinks`: hotkey row for external profiles
//! - `ToastView`: bottom-right notification
//! - `ProjectDialog`: project detail overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`, handles `TuiEvent`s and emits a
//! component-specific event; a transient wrapper borrows it to render:
//! - `ProjectsState` / `ProjectGallery`: selectable, scrollable project cards
//! - `ContactFormState` / `ContactPanel`: the three-field contact form
//! - `ProjectDialogState`: which project the dialog shows
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TabBar::new(app.navigator.active_index(), app.navigator.is_transitioning(), palette)
//!     .render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! TabBar::render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status line)
//! ├── tab_bar.rs         (section tabs + hit testing)
//! ├── about.rs           (About section)
//! ├── projects.rs        (Projects section)
//! ├── project_dialog.rs  (project detail overlay)
//! ├── contact_form.rs    (Contact section)
//! ├── social_links.rs    (social hotkey row)
//! └── toast.rs           (notification overlay)
//! ```

pub mod about;
pub mod contact_form;
pub mod project_dialog;
pub mod projects;
pub mod social_links;
pub mod tab_bar;
pub mod title_bar;
pub mod toast;

pub use about::AboutPanel;
pub use contact_form::{ContactEvent, ContactFormState, ContactPanel};
pub use project_dialog::{DialogEvent, ProjectDialog, ProjectDialogState};
pub use projects::{ProjectGallery, ProjectsEvent, ProjectsState};
pub use social_links::SocialLinks;
pub use tab_bar::{TAB_BAR_HEIGHT, TabBar};
pub use title_bar::TitleBar;
pub use toast::ToastView;
