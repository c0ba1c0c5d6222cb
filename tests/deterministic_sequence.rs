use std::time::{Duration, Instant};

use grid_snake::config::GameConfig;
use grid_snake::controller::Controller;
use grid_snake::game::{GameState, GameStatus, TickOutcome};
use grid_snake::grid::Cell;
use grid_snake::input::{Direction, GameInput, InputEvent, Key};
use grid_snake::rules::CollisionKind;
use grid_snake::score::MemoryStore;

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut controller = Controller::new(
        GameState::new_with_seed(GameConfig::default(), 42),
        MemoryStore::default(),
    );
    let start = Instant::now();

    controller.handle_event(InputEvent::Key(Key::Enter), start);
    controller.state_mut().food = Cell::new(200, 180);
    controller.handle_event(InputEvent::Key(Key::Char('w')), start);

    // Nothing happens before the first interval elapses.
    assert_eq!(controller.poll(start + Duration::from_millis(100)), None);

    let mut now = start + Duration::from_millis(150);
    assert_eq!(
        controller.poll(now),
        Some(TickOutcome::Ate {
            speed_changed: true
        })
    );
    assert_eq!(controller.state().score(), 10);
    assert_eq!(controller.state().snake.len(), 2);
    assert_eq!(controller.state().snake.head(), Cell::new(200, 180));

    // Keep the next food out of the way and run into the top wall.
    let mut ticks = 0;
    loop {
        controller.state_mut().food = Cell::new(0, 380);
        now += Duration::from_millis(140);
        match controller.poll(now) {
            Some(TickOutcome::Moved) => ticks += 1,
            Some(TickOutcome::Collided(kind)) => {
                assert_eq!(kind, CollisionKind::Wall);
                break;
            }
            other => panic!("unexpected tick result {other:?}"),
        }
    }

    // Nine rows lie above y=180 before the head leaves the board.
    assert_eq!(ticks, 9);
    assert_eq!(controller.state().status, GameStatus::Over);
    assert_eq!(controller.high_score(), 10);
    assert_eq!(controller.store().stored(), Some(10));
    assert_eq!(controller.poll(now + Duration::from_secs(1)), None);
}

#[test]
fn swipe_steers_the_snake() {
    let mut controller = Controller::new(
        GameState::new_with_seed(GameConfig::default(), 7),
        MemoryStore::default(),
    );
    let now = Instant::now();
    controller.handle_input(GameInput::Confirm, now);
    controller.state_mut().food = Cell::new(0, 0);

    controller.handle_event(InputEvent::TouchStart { x: 100.0, y: 100.0 }, now);
    controller.handle_event(InputEvent::TouchEnd { x: 100.0, y: 160.0 }, now);
    assert_eq!(controller.state().pending_direction(), Direction::Down);

    controller.tick(now);
    assert_eq!(controller.state().snake.head(), Cell::new(200, 220));

    // A short drag is ignored.
    controller.handle_event(InputEvent::TouchStart { x: 100.0, y: 100.0 }, now);
    controller.handle_event(InputEvent::TouchEnd { x: 120.0, y: 100.0 }, now);
    assert_eq!(controller.state().pending_direction(), Direction::Down);
}
