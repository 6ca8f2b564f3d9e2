//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::output::formatters::length_badge;
use crate::round::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<D: Dictionary> {
    pub session: Session<D>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// A rejection waiting to be acknowledged
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<D: Dictionary> App<D> {
    /// Wrap a session and start its first round
    pub fn new(mut session: Session<D>) -> Self {
        session.new_round();

        let mut app = Self {
            session,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Make words of {}+ letters from the root word.",
                app.session.rules().min_length
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Submit whatever is in the input buffer
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input) {
            Ok(Some(accepted)) => {
                self.add_message(
                    &format!(
                        "{} {} +{}",
                        accepted.text,
                        length_badge(accepted.score_delta),
                        accepted.score_delta
                    ),
                    MessageStyle::Success,
                );
            }
            Ok(None) => {}
            Err(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
                self.alert = Some(Alert {
                    title: rejection.title().to_string(),
                    message: rejection.message(),
                });
            }
        }
    }

    /// Start a new round on a fresh root word
    pub fn new_word(&mut self) {
        self.input_buffer.clear();
        self.alert = None;
        let root = self.session.new_round().to_uppercase();
        self.add_message(&format!("New root word: {root}"), MessageStyle::Info);
    }

    pub fn reset_score(&mut self) {
        self.session.reset_score();
        self.add_message("Score reset.", MessageStyle::Info);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
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

        // An open alert swallows everything until it is dismissed
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_word();
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_score();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
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

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(score) => {
            println!("Thanks for playing! Final score: {score}");
            Ok(())
        }
        Err(err) => {
            log::error!("TUI terminated: {err}");
            Err(err)
        }
    }
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<usize> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.session.state().score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::round::Rules;

    fn app() -> App<WordListDictionary> {
        let session = Session::with_seed(
            vec!["silkworm".to_string()],
            WordListDictionary::embedded(),
            Rules::default(),
            3,
        );
        App::new(session)
    }

    fn press(app: &mut App<WordListDictionary>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<WordListDictionary>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn new_app_starts_round() {
        let app = app();
        assert_eq!(app.session.state().root(), "silkworm");
        assert_eq!(app.session.state().round_number(), 1);
        assert!(app.alert.is_none());
    }

    #[test]
    fn typing_and_submitting_a_word() {
        let mut app = app();
        type_word(&mut app, "Silk");

        assert!(app.input_buffer.is_empty());
        assert!(app.alert.is_none());
        assert_eq!(app.session.state().score(), 4);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Success));
    }

    #[test]
    fn rejection_opens_alert() {
        let mut app = app();
        type_word(&mut app, "sword");

        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word is not recognised");
        assert_eq!(alert.message, "That word doesn't fit into the original word.");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let mut app = app();
        type_word(&mut app, "mlik");
        assert!(app.alert.is_some());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());
        assert!(app.alert.is_some());

        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn backspace_edits_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('w'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "w");
    }

    #[test]
    fn unbound_ctrl_keys_do_not_type() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert!(app.input_buffer.is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert_eq!(app.input_buffer, "S");
    }

    #[test]
    fn ctrl_n_starts_new_round() {
        let mut app = app();
        type_word(&mut app, "worm");

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.session.state().round_number(), 2);
        assert_eq!(app.session.state().used_words().len(), 0);
        assert_eq!(app.session.state().score(), 4);
    }

    #[test]
    fn ctrl_r_resets_score() {
        let mut app = app();
        type_word(&mut app, "worm");

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.session.state().score(), 0);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
