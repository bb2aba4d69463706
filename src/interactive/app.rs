//! TUI application state and logic

use crate::core::ValidationResult;
use crate::dictionary::Dictionary;
use crate::session::SessionController;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<D: Dictionary> {
    pub controller: SessionController<D>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
    ScoreSheet,
}

/// A rejection popup waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<D: Dictionary> App<D> {
    #[must_use]
    pub fn new(controller: SessionController<D>) -> Self {
        Self {
            controller,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Find the words hidden in the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            alert: None,
            input_mode: InputMode::Typing,
            should_quit: false,
        }
    }

    /// Submit the typed word
    pub fn submit_input(&mut self) {
        let candidate = std::mem::take(&mut self.input_buffer);

        match self.controller.submit(&candidate) {
            ValidationResult::Accepted => {
                let score = self.controller.score();
                let text = format!(
                    "Found '{}' ({score} so far)",
                    self.controller.used_words()[0]
                );
                self.add_message(&text, MessageStyle::Success);
            }
            ValidationResult::Rejected(reason) => {
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message: reason.message(self.controller.root_word()),
                });
                self.input_mode = InputMode::Alert;
                self.add_message(reason.title(), MessageStyle::Error);
            }
        }
    }

    /// Finish the round and draw a new root word
    pub fn new_word(&mut self) {
        let previous = self.controller.root_word().to_string();
        let score = self.controller.score();
        self.controller.restart();
        self.input_buffer.clear();
        self.add_message(
            &format!("{previous}: {score} words. New word!"),
            MessageStyle::Info,
        );
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    pub fn toggle_scores(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::ScoreSheet => InputMode::Typing,
            _ => InputMode::ScoreSheet,
        };
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::ScoreSheet => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Tab) {
                    self.toggle_scores();
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_word();
                }
                KeyCode::Tab => {
                    self.toggle_scores();
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.submit_input();
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("Terminal setup complete");

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!("Key: {:?}", key.code);
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
