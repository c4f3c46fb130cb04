//! Stateless UI rendering for hangman.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect as Area},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Wrap,
        canvas::{Canvas, Line as Stroke},
    },
};
use strictly_hangman_game::{Canvas as _, Difficulty, DisplayList, MAX_WRONG_GUESSES, Rect};
use strum::IntoEnumIterator;

use super::app::App;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Gallows and word
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Hangman")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_gallows(frame, body[0], app.session().canvas());
    draw_word_panel(frame, body[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Type a letter to guess | Enter: new word | Tab: difficulty | Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_gallows(frame: &mut Frame, area: Area, list: &DisplayList) {
    let (width, height) = (list.width(), list.height());
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Gallows"))
        .marker(Marker::Braille)
        .x_bounds([0.0, f64::from(width)])
        .y_bounds([0.0, f64::from(height)])
        .paint(|ctx| {
            for rect in list.visible() {
                for (x1, y1, x2, y2) in strokes(rect, height) {
                    ctx.draw(&Stroke::new(x1, y1, x2, y2, Color::White));
                }
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_word_panel(frame: &mut Frame, area: Area, app: &App) {
    let session = app.session();
    let word = session
        .word_holder_text()
        .unwrap_or_else(|| "No word yet".to_string());

    let mut lines = vec![
        Line::from(Span::styled(
            word,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Guesses: {}", session.guesses_text())),
        Line::from(format!(
            "Wrong: {}/{}",
            session.wrong_guesses(),
            MAX_WRONG_GUESSES
        )),
        Line::from(""),
    ];
    lines.push(difficulty_line(app.difficulty()));

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Word"));
    frame.render_widget(panel, area);
}

fn difficulty_line(current: Difficulty) -> Line<'static> {
    let spans: Vec<Span> = Difficulty::iter()
        .map(|difficulty| {
            let style = if difficulty == current {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {} ", difficulty), style)
        })
        .collect();
    Line::from(spans)
}

/// Line segments that shade a filled rectangle on a y-up canvas.
///
/// Canvas units put the origin top-left; the widget puts it bottom-left,
/// so y is flipped against the surface height. Strokes run along the
/// longer side, one per unit across the shorter side.
fn strokes(rect: &Rect, surface_height: u32) -> Vec<(f64, f64, f64, f64)> {
    let left = f64::from(rect.x);
    let right = f64::from(rect.right());
    let top = f64::from(surface_height.saturating_sub(rect.y));
    let bottom = f64::from(surface_height.saturating_sub(rect.bottom()));

    if rect.width >= rect.height {
        (0..=rect.height)
            .map(|step| {
                let y = bottom + f64::from(step);
                (left, y, right, y)
            })
            .collect()
    } else {
        (0..=rect.width)
            .map(|step| {
                let x = left + f64::from(step);
                (x, bottom, x, top)
            })
            .collect()
    }
}
