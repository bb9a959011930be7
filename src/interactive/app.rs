//! TUI application state and logic

use crate::game::{Command, GuessError, HintError, Round, RoundSummary};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<'a> {
    pub round: Round<'a>,
    pub template: String,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub summary: Option<RoundSummary>,
    pub story_scroll: u16,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Story,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Hint,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(round: Round<'a>, template: impl Into<String>, rng: StdRng) -> Self {
        let mut app = Self {
            round,
            template: template.into(),
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: Vec::new(),
            summary: None,
            story_scroll: 0,
            should_quit: false,
            rng,
        };

        app.add_message(
            &format!("Okay, {}... find words of 4+ letters.", app.round.session().player()),
            MessageStyle::Info,
        );
        app.add_message(
            "Type 'word' or 'word:category'. HELP for a hint, DONE to finish.",
            MessageStyle::Info,
        );
        app
    }

    /// Act on the current input line
    pub fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);

        match Command::parse(&line) {
            Ok(Command::Empty) => {}
            Ok(Command::Done) => self.finish(),
            Ok(Command::Help) => self.request_hint(),
            Ok(Command::Guess { word, category }) => match self.round.guess(&word, category) {
                Ok(accepted) => self.add_message(
                    &format!(
                        "{} as {} for {} points",
                        accepted.word.to_uppercase(),
                        accepted.category,
                        accepted.earned
                    ),
                    MessageStyle::Success,
                ),
                Err(GuessError::AlreadyGuessed(word)) => self.add_message(
                    &format!("You've already guessed \"{word}\""),
                    MessageStyle::Error,
                ),
                Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            },
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn request_hint(&mut self) {
        match self.round.hint(&mut self.rng) {
            Ok(masked) => {
                let left = self.round.session().hints_remaining();
                self.add_message(
                    &format!("Hint: {masked} ({left} left)"),
                    MessageStyle::Hint,
                );
            }
            Err(HintError::NoHintsLeft) => {
                self.add_message("You have used up all your hints", MessageStyle::Error);
            }
            Err(HintError::Exhausted) => {
                self.add_message("You've found every word!", MessageStyle::Success);
            }
        }
    }

    /// End the guessing phase and build the story
    pub fn finish(&mut self) {
        let summary = self.round.finish(&self.template, &mut self.rng);
        self.summary = Some(summary);
        self.input_mode = InputMode::Story;
        self.story_scroll = 0;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_input(),
                    _ => {}
                },
                InputMode::Story => match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Up => app.story_scroll = app.story_scroll.saturating_sub(1),
                    KeyCode::Down => app.story_scroll = app.story_scroll.saturating_add(1),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
