/// Travel direction of the snake.
///
/// `None` is the resting direction of a fresh game; the snake stays put
/// until the first direction input arrives.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::None => Self::None,
        }
    }

    /// Unit vector in screen coordinates (y grows downwards).
    #[must_use]
    pub fn unit(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::None => (0, 0),
        }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    !next.is_none() && next != current.opposite()
}

/// Keys the game reacts to, independent of the terminal backend.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Space,
    Esc,
    Enter,
    Interrupt,
}

/// Raw events emitted by an input source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Key),
    TouchStart { x: f32, y: f32 },
    TouchEnd { x: f32, y: f32 },
}

/// High-level intents consumed by the controller.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    TogglePause,
    Confirm,
    Restart,
    Quit,
}

/// Maps a key to its intent.
#[must_use]
pub fn map_key(key: Key) -> Option<GameInput> {
    let input = match key {
        Key::Up => GameInput::Direction(Direction::Up),
        Key::Down => GameInput::Direction(Direction::Down),
        Key::Left => GameInput::Direction(Direction::Left),
        Key::Right => GameInput::Direction(Direction::Right),
        Key::Char(c) => match c.to_ascii_lowercase() {
            'w' => GameInput::Direction(Direction::Up),
            's' => GameInput::Direction(Direction::Down),
            'a' => GameInput::Direction(Direction::Left),
            'd' => GameInput::Direction(Direction::Right),
            'r' => GameInput::Restart,
            'q' => GameInput::Quit,
            ' ' => GameInput::TogglePause,
            _ => return None,
        },
        Key::Space | Key::Esc => GameInput::TogglePause,
        Key::Enter => GameInput::Confirm,
        Key::Interrupt => GameInput::Quit,
    };
    Some(input)
}

/// Tracks one touch gesture from start to end.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    min_distance: f32,
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            start: None,
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Completes the gesture and returns the swiped direction, if any.
    ///
    /// The dominant axis wins; ties count as vertical. The displacement along
    /// that axis must exceed the minimum distance.
    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (start_x, start_y) = self.start.take()?;
        swipe_direction(x - start_x, y - start_y, self.min_distance)
    }
}

/// Classifies a swipe displacement.
#[must_use]
pub fn swipe_direction(delta_x: f32, delta_y: f32, min_distance: f32) -> Option<Direction> {
    if delta_x.abs() > delta_y.abs() {
        if delta_x.abs() <= min_distance {
            return None;
        }
        Some(if delta_x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        if delta_y.abs() <= min_distance {
            return None;
        }
        Some(if delta_y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

/// Turns raw input events into game intents.
#[derive(Debug, Clone, Copy)]
pub struct InputAdapter {
    swipe: SwipeTracker,
}

impl InputAdapter {
    #[must_use]
    pub fn new(min_swipe_distance: f32) -> Self {
        Self {
            swipe: SwipeTracker::new(min_swipe_distance),
        }
    }

    pub fn translate(&mut self, event: InputEvent) -> Option<GameInput> {
        match event {
            InputEvent::Key(key) => map_key(key),
            InputEvent::TouchStart { x, y } => {
                self.swipe.touch_start(x, y);
                None
            }
            InputEvent::TouchEnd { x, y } => self.swipe.touch_end(x, y).map(GameInput::Direction),
        }
    }
}
