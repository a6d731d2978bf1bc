use crate::core::profile::Section;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    AboutPanel, ContactPanel, ProjectDialog, ProjectGallery, SocialLinks, TAB_BAR_HEIGHT, TabBar,
    TitleBar, ToastView,
};
use crate::tui::theme::Palette;
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding};

/// Screen regions, top to bottom. Shared by drawing and mouse hit testing.
pub struct ScreenLayout {
    pub title: Rect,
    pub main: Rect,
    pub socials: Rect,
    pub tabs: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, main, socials, tabs] =
        Layout::vertical([Length(1), Min(0), Length(1), Length(TAB_BAR_HEIGHT)]).areas(area);
    ScreenLayout {
        title,
        main,
        socials,
        tabs,
    }
}

fn panel_hint(section: Section, mode: InputMode) -> String {
    match (section, mode) {
        (Section::About, _) => format!(
            " ←/→ or 1-{} switch section · t theme · q quit ",
            Section::ALL.len()
        ),
        (Section::Projects, _) => " ↑/↓ select · Enter details · o open · m more ".to_string(),
        (Section::Contact, InputMode::Browse) => " Enter or e edit · q quit ".to_string(),
        (Section::Contact, InputMode::Edit) => " editing · Esc done ".to_string(),
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let palette = Palette::for_theme(app.theme);
    let layout = screen_layout(frame.area());
    let section = app.active_section();
    let transitioning = app.navigator.is_transitioning();

    TitleBar::new(
        app.profile.name.clone(),
        app.status_message.clone(),
        app.theme,
    )
    .render(frame, layout.title);

    // Section panel
    let mut border = palette.border();
    if transitioning {
        border = border.add_modifier(Modifier::DIM);
    }
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(Span::styled(format!(" {} ", section.label()), palette.heading()))
        .title_bottom(
            Line::from(Span::styled(panel_hint(section, tui.mode), palette.muted())).centered(),
        )
        .padding(Padding::horizontal(1));
    let inner = block.inner(layout.main);
    frame.render_widget(block, layout.main);

    match section {
        Section::About => AboutPanel::new(&app.profile, palette).render(frame, inner),
        Section::Projects => ProjectGallery::new(
            &mut tui.projects,
            app.profile.featured_projects(),
            app.profile.github_repos_url(),
            palette,
        )
        .render(frame, inner),
        Section::Contact => ContactPanel::new(
            &mut tui.contact,
            &app.contact_errors,
            &app.profile.email,
            &app.profile.location,
            tui.mode == InputMode::Edit,
            palette,
        )
        .render(frame, inner),
    }

    SocialLinks::new(&app.profile.socials, palette).render(frame, layout.socials);
    TabBar::new(app.navigator.active_index(), transitioning, palette).render(frame, layout.tabs);

    // Overlays
    if let Some(dialog) = tui.dialog
        && let Some(project) = app.profile.featured_projects().get(dialog.index)
    {
        ProjectDialog::new(project, palette).render(frame, frame.area());
    }
    if let Some(toast) = &app.toast {
        ToastView::new(toast, palette).render(frame, frame.area());
    }
}
