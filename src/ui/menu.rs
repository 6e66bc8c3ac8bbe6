use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;
use crate::setup::{SetupField, SetupMenu};
use crate::snake::CrashReason;

/// Draws the pre-game settings picker as a centered popup.
pub fn render_setup_menu(frame: &mut Frame<'_>, area: Rect, menu: &SetupMenu, theme: &Theme) {
    let popup = centered_popup(area, 60, 60);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("BRIDGE SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let mut body: Vec<Line<'_>> = SetupField::ALL
        .iter()
        .map(|field| setup_row(menu, *field, theme))
        .collect();
    body.push(Line::from(""));
    body.push(Line::from("[Enter]/[Space] Begin"));
    body.push(Line::from("[Q]/[Esc] Quit"));

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" setup ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Up/Down select, Left/Right adjust"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.ui_muted)),
        footer_row,
    );
}

fn setup_row(menu: &SetupMenu, field: SetupField, theme: &Theme) -> Line<'static> {
    let text = format!("{:<8} - {:>3} +", field.label(), menu.value_text(field));
    if field == menu.selected() {
        Line::styled(
            format!("> {text} <"),
            Style::default()
                .fg(theme.menu_selected)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::from(format!("  {text}  "))
    }
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    death_reason: Option<CrashReason>,
    theme: &Theme,
) {
    let popup = centered_popup(area, 80, 70);
    frame.render_widget(Clear, popup);

    let is_new_high = score > high_score;
    let lines = vec![
        Line::styled(
            "GAME OVER",
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {}", high_score.max(score))),
        Line::from(crash_text(death_reason)),
        Line::from(if is_new_high { "New high score!" } else { "" }),
        Line::from("[Enter] Setup  [Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Draws the board-filled screen as a centered popup.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::styled(
            "BOARD FILLED",
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("Score: {score}")),
        Line::from(""),
        Line::from("[Enter] Setup  [Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" victory ")),
        popup,
    );
}

fn crash_text(reason: Option<CrashReason>) -> &'static str {
    match reason {
        Some(CrashReason::Wall) => "Cause: hit wall",
        Some(CrashReason::BridgeTurn) => "Cause: turned on a bridge",
        Some(CrashReason::SelfCollision) => "Cause: hit yourself",
        None => "",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::{SessionConfig, THEME_MEADOW};
    use crate::setup::{SetupField, SetupMenu};
    use crate::snake::CrashReason;

    use super::{centered_popup, crash_text, setup_row};

    #[test]
    fn popup_stays_inside_area() {
        let area = Rect::new(0, 0, 40, 20);
        let popup = centered_popup(area, 60, 50);

        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
    }

    #[test]
    fn selected_row_is_marked() {
        let menu = SetupMenu::new(SessionConfig::default());

        let selected = setup_row(&menu, SetupField::Width, &THEME_MEADOW).to_string();
        let other = setup_row(&menu, SetupField::Height, &THEME_MEADOW).to_string();

        assert!(selected.starts_with("> width"));
        assert!(selected.contains("21"));
        assert!(other.starts_with("  height"));
    }

    #[test]
    fn every_crash_has_a_cause() {
        for reason in [
            CrashReason::Wall,
            CrashReason::BridgeTurn,
            CrashReason::SelfCollision,
        ] {
            assert!(crash_text(Some(reason)).starts_with("Cause:"));
        }
    }
}
