use log::trace;

use super::{first_walkable, Algorithm, SearchAlgorithm, SearchOutcome};

use crate::{
    collections::{ContainerError, LinkedList, Stack},
    grid::{cell, Grid},
    point::Point,
};

/// Backtracking search with an explicit stack.
///
/// The stack always holds the path from the start to the point being
/// expanded: stepping to a neighbour pushes it, a dead end pops it. When the
/// top of the stack is an exit the stack, read bottom to top, is the path.
///
/// Marks cells on the path with `.` and abandoned cells with `V`. The path
/// found is whatever the South, East, West, North preference leads to, not
/// necessarily the shortest one.
pub struct DepthFirstSearch {}

impl SearchAlgorithm for DepthFirstSearch {
    const NAME: Algorithm = Algorithm::DepthFirst;

    fn search(grid: &mut Grid, start: Point) -> Result<SearchOutcome, ContainerError> {
        let mut stack = Stack::new();
        stack.push(start);

        let mut exit = None;
        while let Ok(&current) = stack.top() {
            if grid[current] == cell::EXIT {
                exit = Some(current);
                break;
            }

            grid[current] = cell::PATH;

            match first_walkable(grid, current) {
                Some(next) => stack.push(next),
                None => {
                    grid[current] = cell::VISITED;
                    stack.pop()?;
                    trace!("dead end at {}, backtracking", current);
                }
            }
        }

        if exit.is_none() {
            return Ok(SearchOutcome::not_found());
        }

        // popping yields exit first, so prepend to get start first
        let mut path = LinkedList::new();
        while let Ok(point) = stack.pop() {
            path.add_first(point)?;
        }

        Ok(SearchOutcome { exit, path })
    }
}
