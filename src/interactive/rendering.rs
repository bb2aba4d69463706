//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::dictionary::Dictionary;
use crate::output::formatters::{HELP_TEXT, length_badge, words_header};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(6),    // Words and messages
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[2]);

    render_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_help(f, chunks[3]);

    match app.input_mode {
        InputMode::Alert => render_alert(f, app),
        InputMode::ScoreSheet => render_score_sheet(f, app),
        InputMode::Typing => {}
    }
}

fn render_header<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let header = Paragraph::new(app.controller.root_word().to_uppercase())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_words<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let used_words = app.controller.used_words();
    let items: Vec<ListItem> = used_words
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(length_badge(word), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();

    let title = words_header(used_words.len());
    let list = List::new(items).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from(HELP_TEXT),
        Line::from(Span::styled(
            "Enter: Submit | Ctrl-N: New Word | Tab: Scores | Esc: Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(help, area);
}

fn render_alert<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let Some(alert) = &app.alert else {
        return;
    };

    let area = centered(f.area(), 50, 7);
    let content = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_score_sheet<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let scores = app.controller.score_history();
    let height = (scores.len() as u16).saturating_add(4).min(f.area().height);
    let area = centered(f.area(), 40, height.max(5));

    let rows: Vec<Row> = scores
        .iter()
        .map(|entry| Row::new(vec![entry.word.clone(), entry.score.to_string()]))
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(70), Constraint::Percentage(30)])
        .header(
            Row::new(vec!["Word", "Score"]).style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title(" Scores ")
                .title_bottom(" Tab: Close ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_widget(table, area);
}

/// Rectangle of the given size centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
