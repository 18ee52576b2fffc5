use super::params::Field;
use super::point::Point;
use super::{Phase, Snapshot};
use crate::consts;
use crate::logo::Logo;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect, Size},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::collections::HashMap;

static INSTRUCTIONS: &[&str] = &[
    "Move the snake with ← ↓ ↑ →, w a s d, or h j k l",
    "Eat the cherries, but don't hit the wall or yourself!",
];

impl Widget for Snapshot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        if self.phase == Phase::Title {
            render_title(display, buf);
            return;
        }
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" SCORE: {:02}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);
        Line::styled(format!("BEST: {:02} ", self.best), consts::SCORE_BAR_STYLE)
            .right_aligned()
            .render(score_area, buf);

        let field = self.params.field;
        let step = self.params.step;
        let columns = u16::try_from(field.columns(step)).unwrap_or(u16::MAX);
        let lines = u16::try_from(field.rows(step))
            .unwrap_or(u16::MAX)
            .div_ceil(2);
        let block_area = center_rect(
            block_area,
            Size {
                width: columns.saturating_add(2),
                height: lines.saturating_add(2),
            },
        );
        Block::bordered().render(block_area, buf);

        let mut canvas = Canvas::new(self);
        for &p in self.snake.body() {
            canvas.plot(p, consts::SNAKE_COLOR);
        }
        if let Some(cherry) = self.cherry {
            canvas.plot(cherry, consts::CHERRY_COLOR);
        }
        // Draw the head last so that, if it's a collision, it covers whatever
        // it collided with
        let head_color = if self.phase == Phase::GameOver {
            consts::COLLISION_COLOR
        } else {
            consts::SNAKE_COLOR
        };
        canvas.plot(self.snake.head(), head_color);
        canvas.render(block_area.inner(Margin::new(1, 1)), buf);

        match self.phase {
            Phase::Title | Phase::Running => (),
            Phase::Paused => render_paused(display, buf),
            Phase::GameOver => {
                Span::styled(" — GAME OVER —", consts::BANNER_STYLE).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Press "),
                    Span::styled("Enter", consts::KEY_STYLE),
                    Span::raw(" to start again — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

fn render_title(display: Rect, buf: &mut Buffer) {
    let [logo_area, prompt_area, instructions_area] = Layout::vertical([
        Logo::HEIGHT,
        1,
        u16::try_from(INSTRUCTIONS.len()).unwrap_or(u16::MAX),
    ])
    .flex(Flex::Center)
    .spacing(1)
    .areas(display);
    let [logo_area] = Layout::horizontal([Logo::WIDTH])
        .flex(Flex::Center)
        .areas(logo_area);
    Logo.render(logo_area, buf);
    Line::styled("Press any key to begin", consts::PROMPT_STYLE)
        .centered()
        .render(prompt_area, buf);
    Text::from_iter(INSTRUCTIONS.iter().copied())
        .centered()
        .render(instructions_area, buf);
}

/*
 * ┌─────── PAUSED ───────┐
 * │  Press p to resume   │
 * └──────────────────────┘
 */
fn render_paused(display: Rect, buf: &mut Buffer) {
    let area = center_rect(
        display,
        Size {
            width: 24,
            height: 3,
        },
    );
    Clear.render(area, buf);
    let block = Block::bordered()
        .title(" PAUSED ")
        .title_alignment(Alignment::Center)
        .title_style(consts::BANNER_STYLE)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    block.render(area, buf);
    Line::from_iter([
        Span::raw("Press "),
        Span::styled("p", consts::KEY_STYLE),
        Span::raw(" to resume"),
    ])
    .centered()
    .render(inner, buf);
}

/// Plots board positions onto a grid of cells and draws them with half-block
/// glyphs, two cells per terminal row.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Canvas {
    field: Field,
    step: i32,
    cells: HashMap<(i32, i32), Color>,
}

impl Canvas {
    fn new(snapshot: Snapshot<'_>) -> Canvas {
        Canvas {
            field: snapshot.params.field,
            step: snapshot.params.step,
            cells: HashMap::new(),
        }
    }

    /// Colour the cell containing `p`.  Positions outside the field (like
    /// the placeholder tail segments) are skipped.
    fn plot(&mut self, p: Point, color: Color) {
        if let Some(cell) = self.field.cell_of(p, self.step) {
            self.cells.insert(cell, color);
        }
    }
}

impl Widget for Canvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for pos in area.positions() {
            let col = i32::from(pos.x - area.x);
            let row = 2 * i32::from(pos.y - area.y);
            let upper = self.cells.get(&(col, row)).copied();
            let lower = self.cells.get(&(col, row + 1)).copied();
            let Some(cell) = buf.cell_mut(pos) else {
                continue;
            };
            match (upper, lower) {
                (Some(up), Some(down)) => {
                    cell.set_char(consts::UPPER_HALF_BLOCK)
                        .set_style(Style::new().fg(up).bg(down));
                }
                (Some(up), None) => {
                    cell.set_char(consts::UPPER_HALF_BLOCK)
                        .set_style(Style::new().fg(up));
                }
                (None, Some(down)) => {
                    cell.set_char(consts::LOWER_HALF_BLOCK)
                        .set_style(Style::new().fg(down));
                }
                (None, None) => (),
            }
        }
    }
}
