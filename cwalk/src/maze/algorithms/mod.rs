mod breadth_first_search;
mod depth_first_search;

pub use breadth_first_search::BreadthFirstSearch;
pub use depth_first_search::DepthFirstSearch;

use std::fmt;

use crate::{
    collections::{ContainerError, LinkedList},
    grid::{cell, Grid},
    point::{Direction, Point},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    DepthFirst,
    BreadthFirst,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::DepthFirst => write!(f, "depth-first search"),
            Algorithm::BreadthFirst => write!(f, "breadth-first search"),
        }
    }
}

/// What a finished search leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The exit cell reached, if any.
    pub exit: Option<Point>,
    /// Start to exit, both included. Empty when no exit was reached.
    pub path: LinkedList<Point>,
}

impl SearchOutcome {
    pub fn not_found() -> Self {
        SearchOutcome {
            exit: None,
            path: LinkedList::new(),
        }
    }
}

/// A search over a character grid from a start cell to any `E` cell.
///
/// Implementations mark the grid in place and never read outside the cells
/// adjacent to open cells, so an enclosed grid keeps them in bounds.
pub trait SearchAlgorithm {
    const NAME: Algorithm;

    fn search(grid: &mut Grid, start: Point) -> Result<SearchOutcome, ContainerError>;
}

/// Neighbours of `pos` in the fixed South, East, West, North order.
pub(crate) fn neighbors(pos: Point) -> impl Iterator<Item = Point> {
    Direction::IN_ORDER.into_iter().map(move |dir| pos.step(dir))
}

/// First neighbour a search may step onto.
pub(crate) fn first_walkable(grid: &Grid, pos: Point) -> Option<Point> {
    neighbors(pos).find(|&n| cell::is_walkable(grid[n]))
}
