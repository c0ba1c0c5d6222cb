use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::controller::View;
use crate::game::GameStatus;
use crate::grid::{Board, Cell};
use crate::input::Direction;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Terminal columns per board cell; two keep cells roughly square.
pub const COLUMNS_PER_CELL: u16 = 2;

pub const BOARD_BG: Color = Color::Rgb(44, 62, 80);
pub const GRID_BG: Color = Color::Rgb(52, 73, 94);
pub const SNAKE_HEAD: Color = Color::Rgb(46, 204, 113);
pub const SNAKE_BODY: Color = Color::Rgb(39, 174, 96);
pub const FOOD: Color = Color::Rgb(231, 76, 60);
pub const FOOD_SHINE: Color = Color::Rgb(255, 107, 107);

const GLYPH_CELL: &str = "  ";
const GLYPH_SOLID: &str = "██";
const GLYPH_EYES: &str = "••";
const GLYPH_EYES_UP: &str = "˙˙";
const GLYPH_EYES_DOWN: &str = "..";
const GLYPH_EYES_LEFT: &str = "• ";
const GLYPH_EYES_RIGHT: &str = " •";
const GLYPH_FOOD: &str = "▐▌";

/// Renders the full game frame from an immutable view.
pub fn render(frame: &mut Frame<'_>, view: &View<'_>) {
    let play_area = render_hud(frame, frame.area(), view);
    let board_area = centered_board(play_area, view.board);

    let border_color = if view.pulse { FOOD_SHINE } else { GRID_BG };
    let block = Block::bordered()
        .border_style(Style::new().fg(border_color).bg(Color::Reset))
        .title(" snake ");
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, view.board);
    render_food(frame, inner, view);
    render_snake(frame, inner, view);

    match view.status {
        GameStatus::Idle => render_start_menu(frame, board_area, view.high_score),
        GameStatus::Paused => render_pause_menu(frame, board_area),
        GameStatus::Over => render_game_over_menu(frame, board_area, view),
        GameStatus::Running => {}
    }
}

fn centered_board(area: Rect, board: Board) -> Rect {
    let columns = u16::try_from(board.columns()).unwrap_or(u16::MAX);
    let width = columns.saturating_mul(COLUMNS_PER_CELL).saturating_add(2);
    let height = columns.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board_area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    board_area
}

/// Checkerboard background standing in for grid lines.
fn render_cells(frame: &mut Frame<'_>, inner: Rect, board: Board) {
    let buffer = frame.buffer_mut();
    for row in 0..board.columns() {
        for column in 0..board.columns() {
            let Some((x, y)) = cell_to_terminal(inner, board, board.cell_at(column, row)) else {
                continue;
            };
            let bg = if (row + column) % 2 == 0 {
                BOARD_BG
            } else {
                GRID_BG
            };
            buffer.set_string(x, y, GLYPH_CELL, Style::new().bg(bg));
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, view: &View<'_>) {
    let Some((x, y)) = cell_to_terminal(inner, view.board, view.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(FOOD).bg(BOARD_BG));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, view: &View<'_>) {
    let length = view.snake.len();
    let buffer = frame.buffer_mut();

    for (index, segment) in view.snake.segments().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, view.board, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                head_glyph(view.direction),
                Style::new()
                    .fg(Color::White)
                    .bg(SNAKE_HEAD)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        let color = fade(SNAKE_BODY, BOARD_BG, body_intensity(index, length));
        buffer.set_string(x, y, GLYPH_SOLID, Style::new().fg(color));
    }
}

/// Eyes on the head, looking the way the snake is moving.
#[must_use]
pub fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_EYES_UP,
        Direction::Down => GLYPH_EYES_DOWN,
        Direction::Left => GLYPH_EYES_LEFT,
        Direction::Right => GLYPH_EYES_RIGHT,
        Direction::None => GLYPH_EYES,
    }
}

/// Opacity of a body segment; 1.0 next to the head, down to 0.7 at the tail.
#[must_use]
pub fn body_intensity(index: usize, length: usize) -> f32 {
    if length == 0 {
        return 1.0;
    }
    1.0 - (index as f32 / length as f32) * 0.3
}

/// Blends `color` over `background` at the given opacity.
#[must_use]
pub fn fade(color: Color, background: Color, intensity: f32) -> Color {
    let (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) = (color, background) else {
        return color;
    };
    let mix = |front: u8, back: u8| {
        let blended = f32::from(front) * intensity + f32::from(back) * (1.0 - intensity);
        blended.round().clamp(0.0, 255.0) as u8
    };
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}

fn cell_to_terminal(inner: Rect, board: Board, cell: Cell) -> Option<(u16, u16)> {
    let (column, row) = board.column_row(cell)?;

    let x_offset = u16::try_from(column).ok()?.checked_mul(COLUMNS_PER_CELL)?;
    let y_offset = u16::try_from(row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
