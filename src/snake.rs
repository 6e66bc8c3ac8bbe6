use std::collections::{HashSet, VecDeque};

use log::debug;
use rand::Rng;

use crate::bridge::BridgeSet;
use crate::config::GridConfig;
use crate::food::{Food, PlacementError};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighbouring cell one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Plane a body segment occupies on its cell.
///
/// Two segments may share a cell only when one is on top of a bridge deck
/// and the other passes beneath it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum SegmentLayer {
    #[default]
    Flat,
    OnBridge,
    UnderBridge,
}

impl SegmentLayer {
    /// Returns true for either bridge plane.
    #[must_use]
    pub fn is_bridged(self) -> bool {
        self != Self::Flat
    }

    /// Returns true when `self` and `other` are the opposite planes of one bridge.
    #[must_use]
    pub fn complements(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::OnBridge, Self::UnderBridge) | (Self::UnderBridge, Self::OnBridge)
        )
    }
}

/// One body cell plus the plane it was laid down on.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub position: Position,
    pub layer: SegmentLayer,
}

impl Segment {
    #[must_use]
    pub fn flat(position: Position) -> Self {
        Self {
            position,
            layer: SegmentLayer::Flat,
        }
    }
}

/// Why a move ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CrashReason {
    Wall,
    /// Turned while crossing a bridge.
    BridgeTurn,
    SelfCollision,
}

/// Result of one [`Snake::advance`] call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    /// No direction yet; nothing changed.
    Idle,
    Moved,
    Ate,
    Crashed(CrashReason),
}

impl MoveOutcome {
    /// Returns true when the game goes on after this move.
    #[must_use]
    pub fn continues(self) -> bool {
        !matches!(self, Self::Crashed(_))
    }
}

/// Snake body and the movement/collision rules.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Segment>,
    length: usize,
    last_direction: Direction,
    traversal: SegmentLayer,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self::from_segments(Segment::flat(start), Vec::new())
    }

    /// Creates a snake from flat positions, `rest` ordered from neck to tail.
    #[must_use]
    pub fn from_positions(head: Position, rest: Vec<Position>) -> Self {
        Self::from_segments(Segment::flat(head), rest.into_iter().map(Segment::flat).collect())
    }

    /// Creates a snake from explicit segments, `rest` ordered from neck to tail.
    ///
    /// The head's layer becomes the current bridge traversal.
    #[must_use]
    pub fn from_segments(head: Segment, rest: Vec<Segment>) -> Self {
        let mut body = VecDeque::from(rest);
        body.push_front(head);
        Self {
            length: body.len(),
            body,
            last_direction: Direction::Idle,
            traversal: head.layer,
        }
    }

    /// Sets the direction the previous tick used.
    #[must_use]
    pub fn with_last_direction(mut self, direction: Direction) -> Self {
        self.last_direction = direction;
        self
    }

    /// Moves the snake one cell along `direction` and applies the game rules.
    ///
    /// Eating grows the snake by one and re-places `food` off the body. The
    /// checks run in order: wall, turning on a bridge, self-collision. An
    /// `Idle` direction leaves everything untouched.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        food: &mut Food,
        bridges: &BridgeSet,
        grid: GridConfig,
        rng: &mut R,
    ) -> Result<MoveOutcome, PlacementError> {
        if direction.is_idle() {
            return Ok(MoveOutcome::Idle);
        }

        let next_head = self.head().step(direction);
        self.body.push_front(Segment::flat(next_head));

        let ate = next_head == food.position;
        if ate {
            self.length += 1;
            // A full board has nowhere left for food.
            if self.occupied_cells() < grid.total_cells() {
                food.respawn(rng, grid, self)?;
            }
        } else {
            let _ = self.body.pop_back();
        }

        if let Some(reason) = self.crash_reason(direction, bridges, grid) {
            return Ok(MoveOutcome::Crashed(reason));
        }

        self.last_direction = direction;
        Ok(if ate {
            MoveOutcome::Ate
        } else {
            MoveOutcome::Moved
        })
    }

    fn crash_reason(
        &mut self,
        direction: Direction,
        bridges: &BridgeSet,
        grid: GridConfig,
    ) -> Option<CrashReason> {
        let head = self.head();
        if !grid.contains(head) {
            return Some(CrashReason::Wall);
        }

        if self.traversal.is_bridged() && direction != self.last_direction {
            return Some(CrashReason::BridgeTurn);
        }

        self.traversal = bridges
            .at(head)
            .map_or(SegmentLayer::Flat, |bridge| bridge.layer_for(direction));
        if let Some(front) = self.body.front_mut() {
            front.layer = self.traversal;
        }
        if self.traversal.is_bridged() {
            debug!(
                "head entered bridge at ({}, {}) as {:?}",
                head.x, head.y, self.traversal
            );
        }

        // Single-cell steps cannot fold a body of two or fewer onto itself.
        if self.length > 2 && self.head_overlaps_body() {
            return Some(CrashReason::SelfCollision);
        }

        None
    }

    /// Returns true if the head shares a cell with a non-head segment on the same plane.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head_segment();
        self.body.iter().skip(1).any(|segment| {
            segment.position == head.position && !head.layer.complements(segment.layer)
        })
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.head_segment().position
    }

    /// Returns the head segment with its layer.
    #[must_use]
    pub fn head_segment(&self) -> Segment {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.body.iter().any(|segment| segment.position == position)
    }

    /// Number of distinct cells under the body. Lower than [`Snake::len`]
    /// while the snake crosses over itself on a bridge.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.body
            .iter()
            .map(|segment| segment.position)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Target body length; doubles as the score.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Direction applied on the last successful move.
    #[must_use]
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Bridge plane the head is on after the last move.
    #[must_use]
    pub fn traversal(&self) -> SegmentLayer {
        self.traversal
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }
}
