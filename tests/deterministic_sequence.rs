use bridge_snake::bridge::{Bridge, BridgeSet};
use bridge_snake::config::{GridConfig, SessionConfig};
use bridge_snake::food::Food;
use bridge_snake::game::{GameSession, GameStatus};
use bridge_snake::input::Direction;
use bridge_snake::snake::{CrashReason, Position, SegmentLayer, Snake};

fn classic_session(seed: u64) -> GameSession {
    let config = SessionConfig {
        bridge_count: 0,
        ..SessionConfig::default()
    };
    GameSession::new_with_seed(config, seed).expect("session should start")
}

fn body(session: &GameSession) -> Vec<Position> {
    session.snake.segments().map(|segment| segment.position).collect()
}

#[test]
fn first_bite_grows_and_moves_food() {
    let mut session = classic_session(42);
    assert_eq!(
        session.bounds(),
        GridConfig {
            width: 21,
            height: 11
        }
    );
    assert_eq!(session.snake.head(), Position { x: 10, y: 5 });
    session.food = Food::new(Position { x: 11, y: 5 });

    session.apply_direction(Direction::Right);
    session.tick().expect("tick");

    assert!(session.is_running());
    assert_eq!(session.snake.length(), 2);
    assert_eq!(
        body(&session),
        vec![Position { x: 11, y: 5 }, Position { x: 10, y: 5 }]
    );
    assert!(!session.snake.contains(session.food.position));
}

#[test]
fn running_into_the_right_wall_ends_the_game() {
    let mut session = classic_session(7);
    session.snake = Snake::new(Position { x: 20, y: 5 });
    session.food = Food::new(Position { x: 0, y: 0 });

    session.apply_direction(Direction::Right);
    session.tick().expect("tick");

    assert_eq!(session.status, GameStatus::GameOver);
    assert_eq!(session.death_reason, Some(CrashReason::Wall));
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut session = classic_session(3);
    session.snake = Snake::new(Position { x: 1, y: 1 });
    session.food = Food::new(Position { x: 2, y: 1 });

    session.apply_direction(Direction::Right);
    session.tick().expect("tick");
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.score(), 2);
    assert_eq!(session.snake.head(), Position { x: 2, y: 1 });

    // Keep the next food out of the way.
    session.food = Food::new(Position { x: 20, y: 10 });
    session.apply_direction(Direction::Up);
    session.tick().expect("tick");
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.snake.head(), Position { x: 2, y: 0 });
    assert_eq!(session.snake.len(), 2);

    session.tick().expect("tick");
    assert_eq!(session.status, GameStatus::GameOver);
}

#[test]
fn snake_loops_over_itself_through_a_bridge() {
    let mut session = classic_session(9);
    session.bridges = BridgeSet::new(vec![Bridge::new(Position { x: 10, y: 4 })]);
    session.food = Food::new(Position { x: 0, y: 10 });
    session.snake = Snake::from_positions(
        Position { x: 10, y: 5 },
        vec![
            Position { x: 10, y: 6 },
            Position { x: 10, y: 7 },
            Position { x: 10, y: 8 },
            Position { x: 10, y: 9 },
            Position { x: 10, y: 10 },
        ],
    )
    .with_last_direction(Direction::Up);

    // Under the bridge, up and around, then back across the deck.
    let route = [
        Direction::Up,
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Right,
    ];
    for direction in route {
        session.apply_direction(direction);
        session.tick().expect("tick");
        assert!(session.is_running(), "crashed moving {direction:?}");
    }

    assert_eq!(session.snake.head(), Position { x: 11, y: 4 });
    let layers: Vec<SegmentLayer> = session
        .snake
        .segments()
        .filter(|segment| segment.position == Position { x: 10, y: 4 })
        .map(|segment| segment.layer)
        .collect();
    assert_eq!(layers, vec![SegmentLayer::OnBridge, SegmentLayer::UnderBridge]);
}

#[test]
fn same_seed_replays_the_same_game() {
    let config = SessionConfig::default();
    let mut first = GameSession::new_with_seed(config, 1234).expect("session");
    let mut second = GameSession::new_with_seed(config, 1234).expect("session");

    assert_eq!(first.food, second.food);
    assert_eq!(first.bridges, second.bridges);

    for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        first.apply_direction(direction);
        second.apply_direction(direction);
        first.tick().expect("tick");
        second.tick().expect("tick");
    }

    assert_eq!(body(&first), body(&second));
    assert_eq!(first.status, second.status);
}
