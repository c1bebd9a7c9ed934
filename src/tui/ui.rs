//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, InputField};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, four field rows, timer, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Minutes input
            Constraint::Length(3), // Previous task
            Constraint::Length(3), // Completed input
            Constraint::Length(3), // Plan input
            Constraint::Min(5),    // Timer display
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_input(
        frame,
        app,
        " Set timer (minutes) ",
        &app.minutes_input,
        Some(InputField::Minutes),
        chunks[1],
    );
    render_input(
        frame,
        app,
        " Previous Task ",
        &app.previous_task,
        None,
        chunks[2],
    );
    render_input(
        frame,
        app,
        " Completed ",
        &app.done_input,
        Some(InputField::Done),
        chunks[3],
    );
    render_input(
        frame,
        app,
        " Plan ",
        &app.plan_input,
        Some(InputField::Plan),
        chunks[4],
    );
    render_timer(frame, app, chunks[5]);
    render_status_bar(frame, app, chunks[6]);

    if let Some(message) = &app.alert {
        render_alert(frame, message);
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = if app.timer.is_running() {
        "running"
    } else {
        "idle"
    };
    let title = format!(" tomata ({state}) ");

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render one labeled field.
///
/// `field` is None for the read-only previous-task display.
fn render_input(
    frame: &mut Frame<'_>,
    app: &App,
    title: &str,
    value: &str,
    field: Option<InputField>,
    area: Rect,
) {
    let focused = field.is_some_and(|f| f == app.focus);
    let editable = field.is_some_and(|f| app.field_editable(f));

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if field.is_some() && !editable {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let shown = if focused && editable {
        format!("{value}▏")
    } else {
        value.to_string()
    };

    let widget = Paragraph::new(shown).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    frame.render_widget(widget, area);
}

/// Render the countdown display.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let style = if app.flash_lit {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    };

    let timer = Paragraph::new(app.timer.format_remaining())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(timer, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("Tab:field | Enter:start | Ctrl+R:reset | Esc:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render the modal expiry alert over the rest of the UI.
fn render_alert(frame: &mut Frame<'_>, message: &str) {
    let area = centered_rect(60, 20, frame.area());

    let alert = Paragraph::new(format!("{message}\n\nPress Enter to dismiss"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" ⏰ Time's up "),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(alert, area);
}

/// Centered sub-rectangle taking the given percentages of `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}
