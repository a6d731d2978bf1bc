//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event, a background
//! action, or a timer expiring. The poll timeout is the time left until
//! `App::next_deadline()` (transition cooldown, wheel debounce, toast
//! expiry), capped at 500ms, and every iteration feeds `Action::Tick`.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic.

mod component;
pub mod components;
mod event;
pub mod launcher;
pub mod markdown;
pub mod theme;
mod ui;

use log::{debug, error, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::profile::Section;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::tab_bar;
use crate::tui::components::{
    ContactEvent, ContactFormState, DialogEvent, ProjectDialogState, ProjectsEvent, ProjectsState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::launcher::{Launcher, SystemLauncher, spawn_open};

/// Longest the loop sleeps when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Terminals report wheel notches without magnitude; one notch is one unit.
const WHEEL_STEP: f64 = 1.0;

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate sections and trigger hotkeys.
    Browse,
    /// Keys edit the contact form. Only valid while Contact is showing.
    Edit,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub projects: ProjectsState,
    pub contact: ContactFormState,
    // Modal input mode
    pub mode: InputMode,
    // Project detail overlay (None = hidden)
    pub dialog: Option<ProjectDialogState>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            projects: ProjectsState::new(app.profile.featured_projects().len()),
            contact: ContactFormState::new(),
            mode: InputMode::Browse,
            dialog: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement lets Ctrl+J and Esc arrive unambiguously; terminals
        // without the protocol ignore it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);
    let launcher: Arc<dyn Launcher> = Arc::new(SystemLauncher);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui, &launcher));

    // Runs on every exit path, including I/O errors out of the loop
    app.navigator.shutdown();
    ratatui::restore();
    if let Err(e) = &result {
        error!("Event loop failed: {}", e);
    }
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    launcher: &Arc<dyn Launcher>,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        if app.next_deadline().is_some_and(|deadline| deadline <= now) {
            needs_redraw = true;
        }
        update(app, Action::Tick, now);
        sync_with_active_section(app, tui);

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        // Process first event + drain ALL pending events before next draw
        let mut next = poll_event_timeout(timeout)?;
        while let Some(event) = next {
            needs_redraw = true;
            let area = terminal.get_frame().area();
            let effect = dispatch(app, tui, event, area, Instant::now());
            if perform(effect, launcher, &tx) {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }

        // Results from background tasks (link launches)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(app, action, Instant::now());
            if perform(effect, launcher, &tx) {
                return Ok(());
            }
        }
    }
}

/// Carry out an effect. Returns `true` when the loop should stop.
fn perform(effect: Effect, launcher: &Arc<dyn Launcher>, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::OpenLink(request) | Effect::SendMail(request) => {
            spawn_open(launcher.clone(), request, tx.clone());
            false
        }
    }
}

/// Route one terminal event according to the current mode and overlays.
///
/// `area` is the full frame, needed to resolve tab clicks.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    area: Rect,
    now: Instant,
) -> Effect {
    sync_with_active_section(app, tui);
    let effect = match event {
        TuiEvent::Resize => Effect::None,
        // ForceQuit (Ctrl+C) always quits regardless of mode
        TuiEvent::ForceQuit => update(app, Action::Quit, now),
        // The dialog is modal: mouse input behind it is ignored
        TuiEvent::WheelUp | TuiEvent::WheelDown | TuiEvent::MouseClick(..)
            if tui.dialog.is_some() =>
        {
            Effect::None
        }
        TuiEvent::WheelUp => update(app, Action::Wheel(-WHEEL_STEP), now),
        TuiEvent::WheelDown => update(app, Action::Wheel(WHEEL_STEP), now),
        TuiEvent::MouseClick(column, row) => {
            match tab_bar::hit_test(column, row, ui::screen_layout(area).tabs) {
                Some(index) => update(app, Action::Navigate(index), now),
                None => Effect::None,
            }
        }
        event if tui.dialog.is_some() => handle_dialog_key(app, tui, &event, now),
        event => match tui.mode {
            InputMode::Edit => handle_edit_key(app, tui, &event, now),
            InputMode::Browse => handle_browse_key(app, tui, &event, now),
        },
    };

    sync_with_active_section(app, tui);
    effect
}

/// Edit mode only applies while Contact is showing and the project dialog
/// only while Projects is; a wheel commit fired by `Tick` can move away
/// underneath either.
fn sync_with_active_section(app: &App, tui: &mut TuiState) {
    let section = app.active_section();
    if tui.mode == InputMode::Edit && section != Section::Contact {
        tui.mode = InputMode::Browse;
    }
    if tui.dialog.is_some() && section != Section::Projects {
        tui.dialog = None;
    }
}

fn open_project(app: &mut App, index: usize, now: Instant) -> Effect {
    let link = app
        .profile
        .featured_projects()
        .get(index)
        .map(|p| p.link.clone());
    match link {
        Some(link) => update(app, Action::OpenLink(link), now),
        None => Effect::None,
    }
}

fn handle_dialog_key(app: &mut App, tui: &mut TuiState, event: &TuiEvent, now: Instant) -> Effect {
    let Some(dialog) = tui.dialog.as_mut() else {
        return Effect::None;
    };
    match dialog.handle_event(event) {
        Some(DialogEvent::Close) => {
            tui.dialog = None;
            Effect::None
        }
        Some(DialogEvent::OpenProject(index)) => open_project(app, index, now),
        None => Effect::None,
    }
}

fn handle_edit_key(app: &mut App, tui: &mut TuiState, event: &TuiEvent, now: Instant) -> Effect {
    match tui.contact.handle_event(event) {
        Some(ContactEvent::Submit(form)) => {
            let effect = update(app, Action::SubmitContact(form), now);
            if matches!(effect, Effect::SendMail(_)) {
                tui.contact.reset();
                tui.mode = InputMode::Browse;
            }
            effect
        }
        Some(ContactEvent::Leave) => {
            tui.mode = InputMode::Browse;
            Effect::None
        }
        None => Effect::None,
    }
}

fn handle_browse_key(app: &mut App, tui: &mut TuiState, event: &TuiEvent, now: Instant) -> Effect {
    let active = app.navigator.active_index();
    let count = app.navigator.section_count();

    match event {
        TuiEvent::InputChar(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1).unwrap_or(0);
            update(app, Action::Navigate(index), now)
        }
        TuiEvent::CursorRight => update(app, Action::Navigate(active + 1), now),
        TuiEvent::CursorLeft => match active.checked_sub(1) {
            Some(index) => update(app, Action::Navigate(index), now),
            None => Effect::None,
        },
        TuiEvent::Tab => update(app, Action::Navigate((active + 1) % count), now),
        TuiEvent::BackTab => update(app, Action::Navigate((active + count - 1) % count), now),
        TuiEvent::InputChar('t') => update(app, Action::ToggleTheme, now),
        TuiEvent::InputChar('q') => update(app, Action::Quit, now),
        TuiEvent::Escape if app.toast.is_some() => update(app, Action::DismissToast, now),
        TuiEvent::Escape => update(app, Action::Quit, now),
        TuiEvent::InputChar(c) if app.profile.social_for_key(*c).is_some() => {
            let url = app
                .profile
                .social_for_key(*c)
                .map(|s| s.url.clone())
                .unwrap_or_default();
            update(app, Action::OpenLink(url), now)
        }
        event => match app.active_section() {
            Section::About => Effect::None,
            Section::Projects => match tui.projects.handle_event(event) {
                Some(ProjectsEvent::ShowDetails(index)) => {
                    tui.dialog = Some(ProjectDialogState::new(index));
                    Effect::None
                }
                Some(ProjectsEvent::OpenProject(index)) => open_project(app, index, now),
                Some(ProjectsEvent::OpenRepos) => {
                    let url = app.profile.github_repos_url();
                    update(app, Action::OpenLink(url), now)
                }
                None => Effect::None,
            },
            Section::Contact => match event {
                TuiEvent::Submit | TuiEvent::InputChar('e') => {
                    tui.mode = InputMode::Edit;
                    Effect::None
                }
                _ => Effect::None,
            },
        },
    }
}
