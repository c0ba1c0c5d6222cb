use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::controller::View;
use crate::game::GameStatus;

const SEPARATOR: &str = " │ ";

/// Renders the score row above and the controls row below the board.
///
/// Returns the area left for the board.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, view: &View<'_>) -> Rect {
    let [score_area, play_area, controls_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(view)).alignment(Alignment::Center),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(controls_hint(view.status)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        controls_area,
    );

    play_area
}

fn score_line(view: &View<'_>) -> Line<'static> {
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let high_score_style = if view.new_high_score {
        value.fg(Color::Yellow)
    } else {
        value
    };

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(view.score.to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw("High: "),
        Span::styled(view.high_score.to_string(), high_score_style),
        Span::raw(SEPARATOR),
        Span::raw("Length: "),
        Span::styled(view.snake.len().to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw("Tick: "),
        Span::styled(format!("{}ms", view.speed_ms), value),
    ])
    .style(Style::default().fg(Color::Gray))
}

fn controls_hint(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "[Enter] start  [Q] quit",
        GameStatus::Running => "arrows/WASD or drag to steer  [Space/Esc] pause  [R] restart",
        GameStatus::Paused => "[Space/Esc/Enter] resume  [R] restart  [Q] quit",
        GameStatus::Over => "[Enter] play again  [R] reset  [Q] quit",
    }
}
