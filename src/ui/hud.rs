use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameSession;

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    /// Best score recorded on the current grid size.
    pub high_score: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &GameSession,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(session, info)).alignment(Alignment::Center),
        status_area,
    );

    play_area
}

fn status_line<'a>(session: &GameSession, info: &HudInfo<'a>) -> Line<'a> {
    let label = Style::default().fg(info.theme.ui_muted);
    let value = Style::default()
        .fg(info.theme.hud_score)
        .add_modifier(Modifier::BOLD);
    let bounds = session.bounds();
    let config = session.config();

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(session.score().to_string(), value),
        Span::styled("  Hi ", label),
        Span::styled(info.high_score.max(session.score()).to_string(), value),
        Span::styled("  Speed ", label),
        Span::styled((config.speed_index + 1).to_string(), value),
        Span::styled("  Grid ", label),
        Span::styled(format!("{}x{}", bounds.width, bounds.height), value),
        Span::styled("  Bridges ", label),
        Span::styled(session.bridges.len().to_string(), value),
    ])
}
