//! TUI application state and logic

use crate::game::{GameStatus, GuessError, Session};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub session: Session,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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
    Warning,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, mut rng: StdRng) -> Self {
        let session = Session::start(dictionary, &mut rng);

        Self {
            dictionary,
            session,
            rng,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Guess the secret 5-letter word. You have 6 tries.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.session.is_over() => match key.code {
                KeyCode::Enter | KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) => {
                if c.is_ascii_alphabetic() && self.input_buffer.len() < 5 {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();
        if let Err(err) = self.session.submit(&guess, self.dictionary).map(|_| ()) {
            let text = match err {
                GuessError::Malformed { .. } => {
                    "🚫 Please enter a valid 5-letter word.".to_string()
                }
                GuessError::NotInDictionary(word) => {
                    format!("🧐 {} is not in the word list.", word.text().to_uppercase())
                }
                GuessError::GameOver(_) => {
                    "The game is over. Press 'n' for a new game.".to_string()
                }
            };
            self.add_message(&text, MessageStyle::Warning);
            return;
        }

        self.input_buffer.clear();
        match self.session.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                let celebration = match self.session.attempts() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or Esc to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                let secret = self.session.secret().text().to_uppercase();
                self.add_message(
                    &format!("❌ You lost! The word was: {secret}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or Esc to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.restart(self.dictionary, &mut self.rng);
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("🔄 New game started!", MessageStyle::Info);
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
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
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
