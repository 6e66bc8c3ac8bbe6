use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridConfig, Theme, BORDER_HALF_BLOCK, GLYPH_BRIDGE, GLYPH_FOOD, GLYPH_SNAKE_BODY,
    GLYPH_SNAKE_HEAD, GLYPH_SNAKE_ON_BRIDGE, GLYPH_SNAKE_UNDER_BRIDGE,
};
use crate::game::{GameSession, GameStatus};
use crate::setup::SetupMenu;
use crate::snake::{Position, SegmentLayer};
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_setup_menu, render_victory_menu};

/// Renders a full game frame from immutable session state.
pub fn render(frame: &mut Frame<'_>, session: &GameSession, hud_info: HudInfo<'_>) {
    let area = frame.area();
    let theme = hud_info.theme;
    let play_area = render_hud(frame, area, session, &hud_info);
    let play_area = fit_play_area(play_area, session.bounds());

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_bridges(frame, inner, session, theme);
    render_food(frame, inner, session, theme);
    // A crashed snake disappears; score and food stay on screen.
    if session.status != GameStatus::GameOver {
        render_snake(frame, inner, session, theme);
    }

    match session.status {
        GameStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            session.score(),
            hud_info.high_score,
            session.death_reason,
            theme,
        ),
        GameStatus::Victory => render_victory_menu(frame, play_area, session.score(), theme),
        GameStatus::Playing => {}
    }
}

/// Renders the pre-game settings screen.
pub fn render_setup(frame: &mut Frame<'_>, menu: &SetupMenu, theme: &Theme) {
    let area = frame.area();
    render_setup_menu(frame, area, menu, theme);
}

fn fit_play_area(area: Rect, bounds: GridConfig) -> Rect {
    let width = (bounds.width + 2).min(area.width);
    let height = (bounds.height + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_bridges(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for bridge in session.bridges.iter() {
        let Some((x, y)) = logical_to_terminal(inner, session.bounds(), bridge.position) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_BRIDGE, Style::new().fg(theme.bridge));
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, session.bounds(), session.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let buffer = frame.buffer_mut();
    let segments: Vec<_> = session.snake.segments().collect();

    for (index, segment) in segments.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, session.bounds(), segment.position) else {
            continue;
        };

        // The segment on the deck hides the one passing beneath it.
        if segment.layer == SegmentLayer::UnderBridge
            && segments.iter().any(|other| {
                other.position == segment.position && other.layer == SegmentLayer::OnBridge
            })
        {
            continue;
        }

        let colour = if index == 0 {
            theme.snake_head
        } else if index % 2 == 1 {
            theme.snake_body_alt
        } else {
            theme.snake_body
        };

        let (glyph, style) = match segment.layer {
            SegmentLayer::OnBridge => (GLYPH_SNAKE_ON_BRIDGE, Style::new().fg(colour)),
            SegmentLayer::UnderBridge => (
                GLYPH_SNAKE_UNDER_BRIDGE,
                Style::new().fg(colour).add_modifier(Modifier::DIM),
            ),
            SegmentLayer::Flat if index == 0 => (
                GLYPH_SNAKE_HEAD,
                Style::new().fg(colour).add_modifier(Modifier::BOLD),
            ),
            SegmentLayer::Flat => (GLYPH_SNAKE_BODY, Style::new().fg(colour)),
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridConfig, position: Position) -> Option<(u16, u16)> {
    if !bounds.contains(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
