use log::debug;
use rand::Rng;

use crate::config::GridConfig;
use crate::food::{sample_free_cell, PlacementError};
use crate::input::Direction;
use crate::snake::{Position, SegmentLayer, Snake};

/// Side of a bridge cell carrying a rail.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RailSide {
    Top,
    Bottom,
}

/// A fixed crossing point: horizontal motion rides over the deck, vertical
/// motion passes beneath it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Bridge {
    pub position: Position,
}

impl Bridge {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Layer a segment entering this cell with `direction` ends up on.
    #[must_use]
    pub fn layer_for(self, direction: Direction) -> SegmentLayer {
        if direction.is_lateral() {
            SegmentLayer::OnBridge
        } else {
            SegmentLayer::UnderBridge
        }
    }

    /// Cell edges carrying a rail. Rails run parallel to the horizontal deck.
    #[must_use]
    pub fn rails(self) -> [RailSide; 2] {
        [RailSide::Top, RailSide::Bottom]
    }
}

/// Bridges placed once at session start. Empty means the basic game.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BridgeSet {
    bridges: Vec<Bridge>,
}

impl BridgeSet {
    /// Creates a set from explicit bridges.
    #[must_use]
    pub fn new(bridges: Vec<Bridge>) -> Self {
        Self { bridges }
    }

    /// Places `count` bridges on interior cells free of the snake and of each other.
    pub fn place<R: Rng + ?Sized>(
        rng: &mut R,
        grid: GridConfig,
        snake: &Snake,
        count: usize,
    ) -> Result<Self, PlacementError> {
        let xs = 1..=i32::from(grid.width) - 2;
        let ys = 1..=i32::from(grid.height) - 2;
        let mut set = Self::default();

        for _ in 0..count {
            let position = sample_free_cell(rng, grid, xs.clone(), ys.clone(), |position| {
                grid.interior_contains(position)
                    && !snake.contains(position)
                    && !set.contains(position)
            })?;
            debug!("bridge placed at ({}, {})", position.x, position.y);
            set.bridges.push(Bridge::new(position));
        }

        Ok(set)
    }

    /// Returns the bridge at `position`, if any.
    #[must_use]
    pub fn at(&self, position: Position) -> Option<Bridge> {
        self.bridges
            .iter()
            .copied()
            .find(|bridge| bridge.position == position)
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.at(position).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bridges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bridges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bridge> {
        self.bridges.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridConfig;
    use crate::input::Direction;
    use crate::snake::{Position, SegmentLayer, Snake};

    use super::{Bridge, BridgeSet, RailSide};

    #[test]
    fn bridges_land_inside_the_outer_ring_and_off_the_snake() {
        let grid = GridConfig {
            width: 7,
            height: 7,
        };
        let snake = Snake::new(grid.center());

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = BridgeSet::place(&mut rng, grid, &snake, 3).expect("interior has room");

            assert_eq!(set.len(), 3);
            for bridge in set.iter() {
                assert!(grid.interior_contains(bridge.position));
                assert!(!snake.contains(bridge.position));
            }
        }
    }

    #[test]
    fn bridges_never_share_a_cell() {
        let grid = GridConfig {
            width: 5,
            height: 5,
        };
        let snake = Snake::new(grid.center());
        let mut rng = StdRng::seed_from_u64(9);

        // 3x3 interior minus the snake's centre cell leaves exactly 8 cells.
        let set = BridgeSet::place(&mut rng, grid, &snake, 8).expect("eight free interior cells");
        let mut positions: Vec<_> = set.iter().map(|bridge| bridge.position).collect();
        positions.sort_by_key(|position| (position.x, position.y));
        positions.dedup();

        assert_eq!(positions.len(), 8);
        assert!(BridgeSet::place(&mut rng, grid, &snake, 9).is_err());
    }

    #[test]
    fn zero_count_gives_the_basic_game() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = GridConfig::default();
        let set = BridgeSet::place(&mut rng, grid, &Snake::new(grid.center()), 0)
            .expect("nothing to place");

        assert!(set.is_empty());
    }

    #[test]
    fn crossing_direction_picks_the_layer() {
        let bridge = Bridge::new(Position { x: 3, y: 3 });

        assert_eq!(bridge.layer_for(Direction::Left), SegmentLayer::OnBridge);
        assert_eq!(bridge.layer_for(Direction::Right), SegmentLayer::OnBridge);
        assert_eq!(bridge.layer_for(Direction::Up), SegmentLayer::UnderBridge);
        assert_eq!(bridge.layer_for(Direction::Down), SegmentLayer::UnderBridge);
    }

    #[test]
    fn rails_sit_on_top_and_bottom_edges() {
        let sides = Bridge::new(Position { x: 1, y: 1 }).rails();

        assert_eq!(sides, [RailSide::Top, RailSide::Bottom]);
    }
}
