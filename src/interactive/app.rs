//! TUI application state and logic

use super::confetti::Confetti;
use super::rendering;
use crate::core::{Game, GuessResult, Letter, Outcome};
use crate::view::FAREWELL_VARIANTS;
use crate::wordlists::DynSupplier;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// Animation frame interval
const TICK_RATE: Duration = Duration::from_millis(33);

/// Application state
pub struct App {
    pub game: Game,
    supplier: DynSupplier,
    /// Which farewell phrasing to show for the latest mistake
    pub farewell_variant: usize,
    pub confetti: Option<Confetti>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Session statistics, gone when the app exits
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    fn record(&mut self, outcome: Outcome) {
        self.total_games += 1;
        if outcome == Outcome::Won {
            self.games_won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(mut supplier: DynSupplier) -> Self {
        let word = supplier.random_word();
        tracing::info!(word_len = word.len(), "Starting first round");

        Self {
            game: Game::new(word),
            supplier,
            farewell_variant: 0,
            confetti: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Guess a letter and react to the result
    pub fn guess(&mut self, letter: Letter) -> GuessResult {
        let result = self.game.guess(letter);

        match result {
            GuessResult::Wrong => {
                self.farewell_variant = rand::rng().random_range(0..FAREWELL_VARIANTS);
                tracing::debug!(%letter, wrong = self.game.wrong_guess_count(), "Wrong guess");
            }
            GuessResult::Correct => tracing::debug!(%letter, "Correct guess"),
            _ => return result,
        }

        let outcome = self.game.outcome();
        if outcome.is_terminal() {
            self.stats.record(outcome);
            tracing::info!(
                ?outcome,
                word = self.game.word().text(),
                guesses = self.game.guessed().len(),
                "Round finished"
            );

            // Fire and forget; the game never looks at it
            if outcome == Outcome::Won {
                self.confetti = Some(Confetti::burst(&mut rand::rng()));
            }
        }

        result
    }

    /// Start a new round
    ///
    /// Only offered once the current round is over. Returns whether a new
    /// round was started.
    pub fn new_game(&mut self) -> bool {
        if !self.game.is_over() {
            return false;
        }

        let word = self.supplier.random_word();
        tracing::info!(word_len = word.len(), "Starting new round");
        self.game.start_new_round(word);
        self.confetti = None;
        self.farewell_variant = 0;
        true
    }

    /// Advance cosmetic animations by one frame
    pub fn tick(&mut self) {
        if let Some(confetti) = &mut self.confetti {
            confetti.tick();
            if confetti.is_finished() {
                self.confetti = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                self.new_game();
            }
            KeyCode::Char('n' | 'N') if self.game.is_over() => {
                self.new_game();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(letter) = Letter::from_char(c) {
                    self.guess(letter);
                }
            }
            _ => {}
        }
    }

    /// Left click at a terminal cell, given the full frame area
    pub fn handle_click(&mut self, frame: Rect, column: u16, row: u16) {
        let regions = rendering::regions(frame);

        if let Some(letter) = rendering::key_at(regions.keyboard, column, row) {
            self.guess(letter);
        } else if self.game.is_over()
            && rendering::new_game_button(regions.new_game).contains((column, row).into())
        {
            self.new_game();
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

    // Restore terminal even if the loop failed
    let restored = restore_terminal(&mut terminal);
    finish(res, restored)
}

/// Outcome of a session: a loop error wins over a restore error
fn finish(res: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        tracing::error!("TUI loop failed: {err:#}");
    }
    if let Err(err) = &restored {
        tracing::error!("Failed to restore terminal: {err:#}");
    }
    res.and(restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| rendering::ui(f, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let frame = Rect::new(0, 0, size.width, size.height);
                    app.handle_click(frame, mouse.column, mouse.row);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
