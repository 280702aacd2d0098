use log::trace;

use super::{neighbors, Algorithm, SearchAlgorithm, SearchOutcome};

use crate::{
    collections::{ContainerError, LinkedList, Queue},
    grid::{cell, Grid},
    point::{Point, Trail},
};

/// Frontier search with a queue, remembering where each point came from.
///
/// Points leave the queue in order of their distance from the start, so the
/// first exit discovered is a nearest one and the parent chain behind it is a
/// shortest path.
///
/// Discovered cells are marked `V`; once the exit is found the cells on the
/// path back to the start are re-marked `.`.
pub struct BreadthFirstSearch {}

impl SearchAlgorithm for BreadthFirstSearch {
    const NAME: Algorithm = Algorithm::BreadthFirst;

    fn search(grid: &mut Grid, start: Point) -> Result<SearchOutcome, ContainerError> {
        let mut trail = Trail::new();
        let mut queue = Queue::new();

        grid[start] = cell::VISITED;
        queue.enqueue(trail.record(start, None));

        let mut end = None;
        while end.is_none() {
            let Ok(id) = queue.dequeue() else {
                break;
            };
            let current = trail[id].point;

            for next in neighbors(current) {
                match grid[next] {
                    cell::OPEN => {
                        grid[next] = cell::VISITED;
                        queue.enqueue(trail.record(next, Some(id)));
                    }
                    cell::EXIT => {
                        end = Some(trail.record(next, Some(id)));
                        break;
                    }
                    _ => {}
                }
            }
        }
        trace!(
            "discovered {} points, {} left unexpanded",
            trail.len(),
            queue.len()
        );

        let Some(end) = end else {
            return Ok(SearchOutcome::not_found());
        };

        // the chain runs exit to start, so prepend
        let mut path = LinkedList::new();
        for point in trail.ancestry(end) {
            if grid[point] != cell::EXIT {
                grid[point] = cell::PATH;
            }
            path.add_first(point)?;
        }

        Ok(SearchOutcome {
            exit: Some(trail[end].point),
            path,
        })
    }
}
