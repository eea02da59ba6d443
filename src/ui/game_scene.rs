//! UI rendering for the flappy game scene.

use crate::game::types::{
    GamePhase, Session, BIRD_X, FIELD_HEIGHT, FIELD_WIDTH, GROUND_BAND, PIPE_GAP, PIPE_WIDTH,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the whole scene: score bar, play area, message bar, and the
/// game-over overlay when the run has ended.
pub fn render_game(frame: &mut Frame, session: &Session) {
    let area = frame.size();

    let block = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 6 || inner.width < 16 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(inner);

    render_score_bar(frame, chunks[0], session);
    render_play_area(frame, chunks[1], session);
    render_message_bar(frame, chunks[2], session);

    if session.phase == GamePhase::GameOver {
        render_game_over_overlay(frame, inner, session);
    }
}

/// Current and best score readouts.
fn render_score_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let line = Line::from(vec![
        Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", session.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Best: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", session.best_score),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Project the world onto the cell grid, line by line. Precedence per cell:
/// bird, pipe segment, gap edge highlight, ground band, empty sky.
fn render_play_area(frame: &mut Frame, area: Rect, session: &Session) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    // World units per cell
    let x_scale = FIELD_WIDTH / width as f64;
    let y_scale = FIELD_HEIGHT / height as f64;

    let bird_row = ((session.bird.y / y_scale) as usize).min(height - 1);
    let bird_col = ((BIRD_X / x_scale) as usize).min(width - 1);

    // Tilt from current velocity, visual feedback only. Physics and
    // collision keep treating the bird as an axis-aligned circle.
    let tilt = session.bird.vy.atan2(5.0) * 0.3;
    let beak = if tilt < -0.15 {
        "▲"
    } else if tilt > 0.15 {
        "▼"
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let wy = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        'cell: for col in 0..width {
            let wx = (col as f64 + 0.5) * x_scale;

            // Body with eye, beak tilted by velocity
            if row == bird_row && col == bird_col {
                spans.push(Span::styled(
                    "◉",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }
            if row == bird_row && col == bird_col + 1 {
                spans.push(Span::styled(beak, Style::default().fg(Color::Yellow)));
                continue;
            }

            for pipe in &session.pipes {
                if wx >= pipe.x && wx <= pipe.x + PIPE_WIDTH {
                    if wy < pipe.top || wy > pipe.top + PIPE_GAP {
                        spans.push(Span::styled("█", Style::default().fg(Color::Green)));
                    } else if wy - pipe.top < y_scale || pipe.top + PIPE_GAP - wy < y_scale {
                        // Gap highlight along the passable band's edges
                        spans.push(Span::styled("░", Style::default().fg(Color::Green)));
                    } else {
                        spans.push(Span::raw(" "));
                    }
                    continue 'cell;
                }
            }

            if wy > FIELD_HEIGHT - GROUND_BAND {
                // Two-step gradient toward the bottom edge
                let depth = (wy - (FIELD_HEIGHT - GROUND_BAND)) / GROUND_BAND;
                if depth < 0.5 {
                    spans.push(Span::styled("░", Style::default().fg(Color::Green)));
                } else {
                    spans.push(Span::styled("▒", Style::default().fg(Color::DarkGray)));
                }
                continue;
            }

            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Contextual prompt plus key hints. Empty during active play.
fn render_message_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let (message, color) = match session.phase {
        GamePhase::Start => ("Click or press Space to jump!", Color::Yellow),
        GamePhase::Playing => ("", Color::Reset),
        GamePhase::GameOver => ("Game Over!", Color::Red),
    };

    let hints = match session.phase {
        GamePhase::GameOver => " [Enter/R] Restart   [Q] Quit",
        _ => " [Space/Up/Enter/Click] Jump   [Q] Quit",
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Centered end-of-run summary.
fn render_game_over_overlay(frame: &mut Frame, area: Rect, session: &Session) {
    let overlay = centered_rect(30, 7, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" GAME OVER ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let best_line = if session.score > 0 && session.score == session.best_score {
        Line::from(Span::styled(
            format!("New best: {}!", session.best_score),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("Best: {}", session.best_score),
            Style::default().fg(Color::Yellow),
        ))
    };

    let text = vec![
        Line::from(format!("Score: {}", session.score)),
        best_line,
        Line::from(""),
        Line::from(Span::styled(
            "[Enter/R] Restart  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

/// A width × height rect centered in the given area, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
