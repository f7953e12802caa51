//! Directional focus navigation between the leaves of a layout tree.
//!
//! Moving focus happens in a few steps:
//! 1. Take the edge of the focused leaf that faces the direction of travel ([`get_edge`]).
//! 2. Keep every other leaf lying fully past that edge ([`get_nav_possible`]).
//! 3. Score the survivors by their offset from the edge ([`get_nav_offset`]) and keep the lowest.
//! 4. If several leaves tie, prefer the first one lined up with the cursor ([`get_nav_tiebreak`]).

use std::str::FromStr;

use itertools::Itertools;

use crate::{
    geometry::Rect,
    layout_manager::{enumerate_descendants, has_ancestor, NodeKind, TreeQuery},
    utils::error::{NavError, NavResult},
};

/// A direction to move focus in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Whether travel in this direction is along the x axis.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl FromStr for Direction {
    type Err = NavError;

    fn from_str(s: &str) -> NavResult<Self> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(NavError::invalid_argument(format!(
                "'{s}' is an unknown direction, expected one of 'left', 'right', 'up' or 'down'"
            ))),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the edge of `rect` that faces `direction`.
///
/// Edges and offsets are `i64` so sums of `i32` coordinates never overflow.
pub fn get_edge(rect: &Rect, direction: Direction) -> i64 {
    match direction {
        Direction::Left => i64::from(rect.x),
        Direction::Right => rect.right(),
        Direction::Up => i64::from(rect.y),
        Direction::Down => rect.bottom(),
    }
}

/// Returns whether `rect` lies past `edge` when travelling in `direction`.
/// Touching the edge counts.
pub fn get_nav_possible(edge: i64, rect: &Rect, direction: Direction) -> bool {
    match direction {
        Direction::Left => rect.right() <= edge,
        Direction::Right => i64::from(rect.x) >= edge,
        Direction::Up => rect.bottom() <= edge,
        Direction::Down => i64::from(rect.y) >= edge,
    }
}

/// Returns how far `rect` is from `edge` in `direction`. Lower is closer.
///
/// Note that `Up` measures against `y - height` rather than mirroring `Down`.
/// Existing layouts rely on this ranking, so it is kept as-is.
pub fn get_nav_offset(edge: i64, rect: &Rect, direction: Direction) -> i64 {
    let (x, y, height) = (
        i64::from(rect.x),
        i64::from(rect.y),
        i64::from(rect.height),
    );

    match direction {
        Direction::Left => edge - rect.right(),
        Direction::Right => edge + x,
        Direction::Up => edge - (y - height),
        Direction::Down => edge + y,
    }
}

/// Returns whether the cursor lines up with `rect` on the axis perpendicular
/// to `direction`. Bounds are inclusive.
pub fn get_nav_tiebreak(direction: Direction, cursor_x: i64, cursor_y: i64, rect: &Rect) -> bool {
    if direction.is_horizontal() {
        cursor_y >= i64::from(rect.y) && cursor_y <= rect.bottom()
    } else {
        cursor_x >= i64::from(rect.x) && cursor_x <= rect.right()
    }
}

/// The result of a navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationOutcome<I> {
    /// The leaf to move focus to, if any.
    pub target: Option<I>,
    /// Every leaf lying in the direction of travel, in discovery order.
    pub candidates: Vec<I>,
    /// The candidates sharing the lowest offset, in discovery order.
    pub winners: Vec<I>,
}

impl<I> NavigationOutcome<I> {
    fn none() -> Self {
        Self {
            target: None,
            candidates: Vec::new(),
            winners: Vec::new(),
        }
    }
}

/// Picks which leaf receives focus when moving in a direction.
#[derive(Clone, Copy, Debug)]
pub struct Navigator {
    /// Whether to use the cursor position to break ties. If false, the first
    /// tied leaf wins.
    pub cursor_tiebreak: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            cursor_tiebreak: true,
        }
    }
}

impl Navigator {
    pub fn new(cursor_tiebreak: bool) -> Self {
        Self { cursor_tiebreak }
    }

    /// Finds the leaf under `root` to move to from `current` in `direction`.
    ///
    /// `cursor` is the cursor position relative to the top-left corner of
    /// `current`; if it is unknown the centre of `current` is used.
    ///
    /// Returns an [`NavError::InvalidArgument`] if `root` does not exist or
    /// `current` is not a leaf beneath it. Having nowhere to go is not an error;
    /// the outcome's target is [`None`] instead.
    pub fn navigate<T: TreeQuery>(
        &self, tree: &T, root: T::Id, current: T::Id, direction: Direction,
        cursor: Option<(i32, i32)>,
    ) -> NavResult<NavigationOutcome<T::Id>> {
        let (_, leaves) = enumerate_descendants(tree, root)?;

        if tree.node_kind(current) != Some(NodeKind::Leaf)
            || !has_ancestor(tree, current, |ancestor| ancestor == root)
        {
            return Err(NavError::invalid_argument(format!(
                "{current:?} is not a leaf beneath {root:?}"
            )));
        }

        let current_rect = tree.rectangle_of(current).ok_or_else(|| {
            NavError::invalid_argument(format!("{current:?} does not have a rectangle"))
        })?;
        let edge = get_edge(&current_rect, direction);

        let candidates = leaves
            .into_iter()
            .filter(|&leaf| leaf != current)
            .filter_map(|leaf| match tree.rectangle_of(leaf) {
                Some(rect) => Some((leaf, rect)),
                None => {
                    debug!("Skipping {leaf:?} as it has no rectangle.");
                    None
                }
            })
            .filter(|(_, rect)| get_nav_possible(edge, rect, direction))
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            debug!("No candidates found moving {direction} from {current:?}.");
            return Ok(NavigationOutcome::none());
        }

        let winners = candidates
            .iter()
            .min_set_by_key(|(_, rect)| get_nav_offset(edge, rect, direction));

        let target = if winners.len() > 1 && self.cursor_tiebreak {
            let (cursor_x, cursor_y) = cursor.unwrap_or_else(|| current_rect.local_centre());
            let (cursor_x, cursor_y) = (
                i64::from(current_rect.x) + i64::from(cursor_x),
                i64::from(current_rect.y) + i64::from(cursor_y),
            );

            winners
                .iter()
                .find(|(_, rect)| get_nav_tiebreak(direction, cursor_x, cursor_y, rect))
                .or_else(|| winners.first())
                .map(|(leaf, _)| *leaf)
        } else {
            winners.first().map(|(leaf, _)| *leaf)
        };

        debug!(
            "Moving {direction} from {current:?}: {} candidate(s), {} tied, picked {target:?}.",
            candidates.len(),
            winners.len(),
        );

        Ok(NavigationOutcome {
            target,
            winners: winners.iter().map(|(leaf, _)| *leaf).collect(),
            candidates: candidates.iter().map(|(leaf, _)| *leaf).collect(),
        })
    }

    /// A shorthand for [`Navigator::navigate`] that only returns the target.
    pub fn find_neighbour<T: TreeQuery>(
        &self, tree: &T, current: T::Id, direction: Direction, cursor: Option<(i32, i32)>,
    ) -> NavResult<Option<T::Id>> {
        self.navigate(tree, tree.root(), current, direction, cursor)
            .map(|outcome| outcome.target)
    }
}
