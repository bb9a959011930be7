//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Category;
use crate::output::formatters::format_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.input_mode {
        InputMode::Guessing => {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[1]);

            render_board(f, app, main_chunks[0]);
            render_messages(f, app, main_chunks[1]);
        }
        InputMode::Story => render_story(f, app, chunks[1]),
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🐝 LETTER POT  {}",
        format_letters(app.round.pool().key())
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Length(3), // Point values
            Constraint::Min(5),    // Found words
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_points(f, app, chunks[1]);
    render_found(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let score = app.round.session().score();
    let max = app.round.max_possible();
    let ratio = if max == 0 {
        0.0
    } else {
        (f64::from(score) / f64::from(max)).min(1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(ratio)
        .label(format!("{score} / {max}"));

    f.render_widget(gauge, area);
}

fn render_points(f: &mut Frame, app: &App, area: Rect) {
    let table = app.round.table();
    let spans: Vec<Span> = table
        .letters()
        .into_iter()
        .flat_map(|letter| {
            let points = table.points(letter).unwrap_or_default();
            [
                Span::styled(
                    (letter as char).to_ascii_uppercase().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{points:<3}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Points ").borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Noun => Color::Cyan,
        Category::PluralNoun => Color::Blue,
        Category::Verb => Color::Green,
        Category::Adjective => Color::Magenta,
        Category::Pronoun => Color::Yellow,
    }
}

fn render_found(f: &mut Frame, app: &App, area: Rect) {
    let found = app.round.found();

    let lines: Vec<Line> = found
        .iter()
        .map(|(category, words)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", category.name()),
                    Style::default()
                        .fg(category_color(category))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(words.join(", ")),
            ])
        })
        .collect();

    let title = format!(
        " Found {} of {} ",
        app.round.session().guessed().len(),
        app.round.playable_words().len()
    );
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Hint => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_story(f: &mut Frame, app: &App, area: Rect) {
    let Some(summary) = &app.summary else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}: ", summary.player),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} / {} points", summary.score, summary.possible),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!(", {} words found", summary.found)),
        ]),
    ];

    if summary.missed > 0 {
        lines.push(Line::from(format!(
            "You missed {} words. Here's a few: {}",
            summary.missed,
            summary.missed_sample.join(", ")
        )));
    } else {
        lines.push(Line::styled(
            "You found every word!",
            Style::default().fg(Color::Green),
        ));
    }
    lines.push(Line::from(""));

    lines.extend(summary.story.text.lines().map(|l| Line::from(l.to_string())));

    for unknown in &summary.story.unknown {
        lines.push(Line::styled(
            format!("left unfilled: {unknown}"),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Your Story ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.story_scroll, 0));

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Give me a word (or HELP or DONE) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Story => (" Round over ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.input_mode {
        InputMode::Guessing => format!(
            "Player: {} | Hints left: {} | Enter: Submit | Esc: Quit",
            app.round.session().player(),
            app.round.session().hints_remaining()
        ),
        InputMode::Story => "↑/↓: Scroll | q: Quit".to_string(),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
