//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::timer::Mode;
use crate::tui::app::{App, SettingsField};
use crate::tui::theme::Theme;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let theme = app.theme();

    // Paint the themed background across the whole screen
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
        frame.area(),
    );

    // Create layout: header, timer, progress, session line, quote, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode banner
            Constraint::Min(3),    // Remaining time
            Constraint::Length(3), // Progress gauge
            Constraint::Length(1), // Session counter
            Constraint::Length(3), // Quote overlay
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_banner(frame, app, &theme, chunks[0]);
    render_time(frame, app, &theme, chunks[1]);
    render_progress(frame, app, &theme, chunks[2]);
    render_session_counter(frame, app, &theme, chunks[3]);
    render_quote(frame, app, &theme, chunks[4]);
    render_status_bar(frame, app, &theme, chunks[5]);

    if app.show_settings {
        render_settings(frame, app, &theme);
    }
}

/// Accent color for the current mode.
const fn mode_color(mode: Mode, theme: &Theme) -> ratatui::style::Color {
    match mode {
        Mode::Work => theme.work,
        Mode::Break => theme.rest,
        Mode::Completed => theme.done,
    }
}

/// Render the mode banner with its icon.
fn render_banner(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let state = app.snapshot();

    let icon = match state.mode {
        Mode::Work => "🧠",
        Mode::Break => "☕",
        Mode::Completed => "✅",
    };

    let banner = Paragraph::new(format!("{icon} {}", state.mode))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(mode_color(state.mode, theme))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );

    frame.render_widget(banner, area);
}

/// Render the remaining time, or "Done!" once completed.
fn render_time(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let state = app.snapshot();

    let text = if state.mode == Mode::Completed {
        "Done!".to_string()
    } else {
        app.format_remaining()
    };

    // Vertically center the clock within its area
    let pad = area.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::default(); pad as usize];
    lines.push(Line::from(Span::styled(
        text,
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD),
    )));

    let clock = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(clock, area);
}

/// Render the phase progress gauge.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_progress(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let state = app.snapshot();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .gauge_style(Style::default().fg(mode_color(state.mode, theme)))
        .percent(state.progress_percent.round() as u16);

    frame.render_widget(gauge, area);
}

/// Render the "Session i of n" line.
fn render_session_counter(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let state = app.snapshot();

    let counter = Paragraph::new(format!(
        "Session {} of {}",
        state.current_session,
        app.config().total_sessions()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(theme.muted));

    frame.render_widget(counter, area);
}

/// Render the motivational quote while its display window is open.
fn render_quote(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let Some(quote) = app.quote() else { return };

    let paragraph = Paragraph::new(quote)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.rest).add_modifier(Modifier::ITALIC))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );

    frame.render_widget(paragraph, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let run_hint = if app.is_running() { "pause" } else { "start" };
    let sound_hint = if app.sound_enabled { "on" } else { "off" };

    let status = Paragraph::new(format!(
        "space:{run_hint} | r:reset | s:settings | d:theme | m:sound({sound_hint}) | q:quit"
    ))
    .style(Style::default().fg(theme.muted));

    frame.render_widget(status, area);
}

/// Render the settings panel as a centered popup.
fn render_settings(frame: &mut Frame<'_>, app: &App, theme: &Theme) {
    let area = centered_rect(50, 40, frame.area());
    frame.render_widget(Clear, area);

    let config = app.config();
    let fields = [
        (
            SettingsField::WorkMinutes,
            format!("< {} >", config.work_minutes()),
        ),
        (
            SettingsField::BreakMinutes,
            format!("< {} >", config.break_minutes()),
        ),
        (
            SettingsField::TotalSessions,
            format!("< {} >", config.total_sessions()),
        ),
        (
            SettingsField::Sound,
            if app.sound_enabled { "ON" } else { "OFF" }.to_string(),
        ),
        (
            SettingsField::Theme,
            app.theme_setting.to_string(),
        ),
    ];

    let lines: Vec<Line<'_>> = fields
        .iter()
        .map(|(field, value)| {
            let selected = *field == app.selected_field;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(mode_color(app.snapshot().mode, theme))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };
            Line::from(Span::styled(
                format!("{marker}{:<22}{value}", field.label()),
                style,
            ))
        })
        .collect();

    let panel = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .title(" Settings (↑/↓ select, ←/→ adjust, Esc close) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );

    frame.render_widget(panel, area);
}

/// Compute a centered rectangle taking the given percentages of the area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
