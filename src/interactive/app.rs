//! TUI application state and logic

use crate::core::Word;
use crate::game::{Session, banner_text};
use crate::providers::{FarewellTexts, LivesPool, RandomWordProvider};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<RandomWordProvider<'a>>,
    pub pool: &'a LivesPool,
    pub farewells: FarewellTexts,
    pub banner: Option<String>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app, drawing the first word from the pool
    ///
    /// # Errors
    ///
    /// Returns an error if the word pool is empty.
    pub fn new(words: &'a [Word], pool: &'a LivesPool) -> Result<Self> {
        let provider = RandomWordProvider::new(words);
        let session = Session::new(provider, pool.max_wrong_guesses())?;
        let farewells = FarewellTexts::new(pool.names());

        Ok(Self {
            session,
            pool,
            farewells,
            banner: None,
            should_quit: false,
        })
    }

    /// Submit a letter guess and refresh the banner
    pub fn guess(&mut self, letter: char) {
        self.session.round_mut().submit(letter);
        self.refresh_banner();
    }

    /// Start a fresh round
    ///
    /// Only reachable from the key handler once the round is over, but safe
    /// to call at any time.
    ///
    /// # Errors
    ///
    /// Returns an error if the word provider fails.
    pub fn new_round(&mut self) -> Result<()> {
        self.session.new_round()?;
        self.banner = None;
        Ok(())
    }

    /// Re-derive the banner from the current outcome
    ///
    /// The farewell text is resolved once per state change rather than per
    /// frame, so the randomly chosen template doesn't flicker between redraws.
    fn refresh_banner(&mut self) {
        let outcome = self.session.round().outcome();
        self.banner = banner_text(&outcome, &self.farewells);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
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
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let is_over = app.session.round().outcome().is_over;

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                // New-round action is exposed only once the round is over;
                // while playing, 'n' is a guess like any other letter
                KeyCode::Char('n') if is_over => {
                    app.new_round()?;
                }
                KeyCode::Char('q') if is_over => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    app.guess(c);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_words() -> Vec<Word> {
        vec![Word::new("cat").unwrap()]
    }

    #[test]
    fn app_starts_with_no_banner() {
        let words = fixture_words();
        let pool = LivesPool::standard();
        let app = App::new(&words, &pool).unwrap();

        assert_eq!(app.banner, None);
        assert!(!app.should_quit);
        assert!(!app.session.round().outcome().is_over);
    }

    #[test]
    fn wrong_guess_sets_farewell_banner() {
        let words = fixture_words();
        let pool = LivesPool::standard();
        let mut app = App::new(&words, &pool).unwrap();

        app.guess('x');

        // First language lost is HTML
        let banner = app.banner.clone().unwrap();
        assert!(banner.contains("HTML"), "banner was: {banner}");
    }

    #[test]
    fn correct_guess_keeps_banner_neutral() {
        let words = fixture_words();
        let pool = LivesPool::standard();
        let mut app = App::new(&words, &pool).unwrap();

        app.guess('c');
        assert_eq!(app.banner, None);
    }

    #[test]
    fn winning_sets_victory_banner() {
        let words = fixture_words();
        let pool = LivesPool::standard();
        let mut app = App::new(&words, &pool).unwrap();

        for c in ['c', 'a', 't'] {
            app.guess(c);
        }

        let banner = app.banner.clone().unwrap();
        assert!(banner.contains("You win"));
    }

    #[test]
    fn new_round_clears_banner() {
        let words = fixture_words();
        let pool = LivesPool::standard();
        let mut app = App::new(&words, &pool).unwrap();

        app.guess('x');
        assert!(app.banner.is_some());

        app.new_round().unwrap();
        assert_eq!(app.banner, None);
        assert!(app.session.round().guesses().is_empty());
    }

    #[test]
    fn empty_word_pool_errors() {
        let words: Vec<Word> = Vec::new();
        let pool = LivesPool::standard();
        assert!(App::new(&words, &pool).is_err());
    }
}
