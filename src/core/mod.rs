//! # Core Application Logic
//!
//! This module contains Folio's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • SectionNavigator     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigation`]: active section, debounced wheel input, transition lock
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`profile`]: sections, projects and social links
//! - [`contact`]: contact form validation and `mailto:` links
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod contact;
pub mod navigation;
pub mod profile;
pub mod state;
