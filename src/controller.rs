use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::PULSE_DURATION;
use crate::game::{GameState, GameStatus, TickOutcome};
use crate::grid::{Board, Cell};
use crate::input::{Direction, GameInput, InputAdapter, InputEvent};
use crate::rules::CollisionKind;
use crate::scheduler::TickTimer;
use crate::score::HighScoreStore;
use crate::snake::Snake;

/// Whether the frame loop should keep going.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Read-only snapshot handed to the render sink each frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub snake: &'a Snake,
    pub food: Cell,
    pub board: Board,
    pub direction: Direction,
    pub status: GameStatus,
    pub death_reason: Option<CollisionKind>,
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    pub speed_ms: u64,
    /// True shortly after food was eaten.
    pub pulse: bool,
}

/// Owns one game session: state, tick timer, input adapter and high score.
///
/// Input only ever buffers intents on the state; the snake and food change
/// exclusively inside [`Controller::poll`] when the timer fires.
pub struct Controller<S: HighScoreStore> {
    state: GameState,
    timer: TickTimer,
    input: InputAdapter,
    store: S,
    high_score: u32,
    new_high_score: bool,
    last_food_at: Option<Instant>,
}

impl<S: HighScoreStore> Controller<S> {
    /// Wraps `state` and reads the high score once from `store`.
    ///
    /// An unreadable store counts as a high score of zero.
    pub fn new(state: GameState, store: S) -> Self {
        let high_score = store.load().unwrap_or_else(|error| {
            warn!("failed to load high score, starting from 0: {error}");
            0
        });
        let input = InputAdapter::new(state.config().min_swipe_distance);

        Self {
            state,
            timer: TickTimer::new(),
            input,
            store,
            high_score,
            new_high_score: false,
            last_food_at: None,
        }
    }

    /// Translates a raw input event and applies the resulting intent.
    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> Control {
        match self.input.translate(event) {
            Some(input) => self.handle_input(input, now),
            None => Control::Continue,
        }
    }

    /// Applies one intent.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> Control {
        match input {
            GameInput::Direction(direction) => {
                self.state.buffer_direction(direction);
            }
            GameInput::TogglePause => self.toggle_pause(now),
            GameInput::Confirm => self.confirm(now),
            GameInput::Restart => self.restart(),
            GameInput::Quit => return Control::Quit,
        }
        Control::Continue
    }

    /// Idle -> Running; arms the timer at the current speed.
    pub fn start(&mut self, now: Instant) -> bool {
        if !self.state.start() {
            return false;
        }
        self.new_high_score = false;
        self.timer.start(self.state.interval(), now);
        info!("game started at {}ms per tick", self.state.speed_ms());
        true
    }

    /// Pauses a running game or resumes a paused one at its current speed.
    pub fn toggle_pause(&mut self, now: Instant) {
        if self.state.pause() {
            self.timer.stop();
        } else if self.state.resume() {
            self.timer.start(self.state.interval(), now);
        }
    }

    /// Start from idle, resume from pause, or play again after game over.
    pub fn confirm(&mut self, now: Instant) {
        match self.state.status {
            GameStatus::Idle => {
                self.start(now);
            }
            GameStatus::Paused => self.toggle_pause(now),
            GameStatus::Over => {
                self.restart();
                self.start(now);
            }
            GameStatus::Running => {}
        }
    }

    /// Cancels the timer and reinitialises the game in the idle state.
    pub fn restart(&mut self) {
        self.timer.stop();
        self.state.reset();
        self.new_high_score = false;
        self.last_food_at = None;
    }

    /// Runs a tick if the timer is due.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.timer.poll(now) {
            return None;
        }
        Some(self.tick(now))
    }

    /// Runs one tick immediately and applies its side effects.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let outcome = self.state.tick();

        match outcome {
            TickOutcome::Ate { speed_changed } => {
                self.last_food_at = Some(now);
                if speed_changed {
                    self.timer.reschedule(self.state.interval(), now);
                }
            }
            TickOutcome::Collided(_) => {
                self.timer.stop();
                self.record_high_score();
            }
            TickOutcome::Moved | TickOutcome::Skipped => {}
        }

        outcome
    }

    fn record_high_score(&mut self) {
        let score = self.state.score();
        if score <= self.high_score {
            return;
        }

        info!("new high score {score} (previous {})", self.high_score);
        self.high_score = score;
        self.new_high_score = true;
        if let Err(error) = self.store.save(score) {
            warn!("failed to save high score: {error}");
        }
    }

    /// Time left before the next tick, `None` while no timer is live.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    #[must_use]
    pub fn view(&self, now: Instant) -> View<'_> {
        let pulse = self
            .last_food_at
            .is_some_and(|eaten_at| now.saturating_duration_since(eaten_at) < PULSE_DURATION);

        View {
            snake: &self.state.snake,
            food: self.state.food,
            board: self.state.board(),
            direction: self.state.direction(),
            status: self.state.status,
            death_reason: self.state.death_reason,
            score: self.state.score(),
            high_score: self.high_score,
            new_high_score: self.new_high_score,
            speed_ms: self.state.speed_ms(),
            pulse,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Control, Controller};
    use crate::config::GameConfig;
    use crate::game::{GameState, GameStatus, TickOutcome};
    use crate::grid::Cell;
    use crate::input::{Direction, GameInput, InputEvent, Key};
    use crate::score::{HighScoreStore, MemoryStore, ScoreError};

    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn load(&self) -> Result<u32, ScoreError> {
            Err(std::io::Error::other("store unavailable").into())
        }

        fn save(&mut self, _score: u32) -> Result<(), ScoreError> {
            Err(std::io::Error::other("store unavailable").into())
        }
    }

    fn controller(seed: u64) -> Controller<MemoryStore> {
        Controller::new(
            GameState::new_with_seed(GameConfig::default(), seed),
            MemoryStore::default(),
        )
    }

    #[test]
    fn idle_controller_has_no_timer() {
        let controller = controller(1);

        assert_eq!(controller.state().status, GameStatus::Idle);
        assert!(!controller.timer().is_active());
        assert_eq!(controller.time_until_tick(Instant::now()), None);
    }

    #[test]
    fn confirm_starts_the_timer_at_initial_speed() {
        let mut controller = controller(2);
        let now = Instant::now();

        controller.handle_input(GameInput::Confirm, now);

        assert_eq!(controller.state().status, GameStatus::Running);
        assert_eq!(controller.timer().interval(), Some(Duration::from_millis(150)));
    }

    #[test]
    fn food_reschedules_at_new_speed() {
        let mut controller = controller(3);
        let start = Instant::now();
        controller.start(start);
        controller.state_mut().food = Cell::new(220, 200);
        controller.handle_input(GameInput::Direction(Direction::Right), start);

        let tick_at = start + Duration::from_millis(150);
        assert_eq!(
            controller.poll(tick_at),
            Some(TickOutcome::Ate {
                speed_changed: true
            })
        );

        assert_eq!(controller.timer().interval(), Some(Duration::from_millis(140)));
        assert_eq!(
            controller.time_until_tick(tick_at),
            Some(Duration::from_millis(140))
        );
        assert!(controller.view(tick_at).pulse);
        assert!(!controller.view(tick_at + Duration::from_millis(500)).pulse);
    }

    #[test]
    fn game_over_stops_timer() {
        let mut controller = controller(4);
        let now = Instant::now();
        controller.start(now);
        controller.state_mut().snake = crate::snake::Snake::new(Cell::new(0, 0));
        controller.handle_input(GameInput::Direction(Direction::Up), now);

        let outcome = controller.tick(now);

        assert!(matches!(outcome, TickOutcome::Collided(_)));
        assert_eq!(controller.state().status, GameStatus::Over);
        assert!(!controller.timer().is_active());
    }

    #[test]
    fn confirm_after_game_over_plays_again() {
        let mut controller = controller(5);
        let now = Instant::now();
        controller.start(now);
        controller.state_mut().snake = crate::snake::Snake::new(Cell::new(0, 0));
        controller.handle_input(GameInput::Direction(Direction::Left), now);
        controller.tick(now);

        controller.handle_input(GameInput::Confirm, now);

        assert_eq!(controller.state().status, GameStatus::Running);
        assert_eq!(controller.state().snake.head(), Cell::new(200, 200));
        assert_eq!(controller.state().score(), 0);
        assert!(controller.timer().is_active());
    }

    #[test]
    fn restart_returns_to_idle_from_any_state() {
        let mut controller = controller(6);
        let now = Instant::now();
        controller.start(now);
        controller.toggle_pause(now);

        controller.handle_event(InputEvent::Key(Key::Char('r')), now);

        assert_eq!(controller.state().status, GameStatus::Idle);
        assert!(!controller.timer().is_active());
    }

    #[test]
    fn unavailable_store_degrades_to_zero() {
        let mut controller = Controller::new(
            GameState::new_with_seed(GameConfig::default(), 7),
            BrokenStore,
        );
        assert_eq!(controller.high_score(), 0);

        let now = Instant::now();
        controller.start(now);
        controller.state_mut().food = Cell::new(220, 200);
        controller.handle_input(GameInput::Direction(Direction::Right), now);
        controller.tick(now);
        controller.state_mut().snake = crate::snake::Snake::new(Cell::new(380, 0));
        controller.tick(now);

        // Save failed, but the session still remembers the new best.
        assert_eq!(controller.state().status, GameStatus::Over);
        assert_eq!(controller.high_score(), 10);
        assert!(controller.view(now).new_high_score);
    }

    #[test]
    fn quit_is_reported_to_the_loop() {
        let mut controller = controller(8);

        assert_eq!(
            controller.handle_event(InputEvent::Key(Key::Char('q')), Instant::now()),
            Control::Quit
        );
    }
}
