use std::fmt;

use super::SearchOutcome;
use crate::{collections::LinkedList, grid::Grid, point::Point};

/// Printable summary of one search: the path found and the marked grid.
#[derive(Debug, Clone)]
pub struct Report {
    start: Point,
    exit: Option<Point>,
    path: LinkedList<Point>,
    maze: String,
    show_maze: bool,
}

impl Report {
    pub(crate) fn new(start: Point, outcome: &SearchOutcome, grid: &Grid) -> Self {
        Report {
            start,
            exit: outcome.exit,
            path: outcome.path.clone(),
            maze: grid.to_string(),
            show_maze: true,
        }
    }

    /// Leaves the marked grid out of the printed report.
    pub fn hide_maze(mut self) -> Self {
        self.show_maze = false;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn exit(&self) -> Option<Point> {
        self.exit
    }

    pub fn path(&self) -> &LinkedList<Point> {
        &self.path
    }

    /// The grid as it looked right after the search.
    pub fn maze(&self) -> &str {
        &self.maze
    }
}

impl fmt::Display for Report {
    /// One item per line, ending at the last grid row without a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exit {
            Some(exit) => write!(
                f,
                "Path to follow from Start {} to Exit {} - {} steps:",
                self.start,
                exit,
                self.path.len()
            )?,
            None => writeln!(f, "No exit found in maze!")?,
        }

        for point in &self.path {
            write!(f, "\n{}", point)?;
        }

        if self.show_maze {
            write!(f, "\n{}", self.maze)?;
        }

        Ok(())
    }
}
