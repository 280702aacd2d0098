pub mod algorithms;
mod load;
mod report;

pub use algorithms::{
    Algorithm, BreadthFirstSearch, DepthFirstSearch, SearchAlgorithm, SearchOutcome,
};
pub use load::LoadError;
pub use report::Report;

use log::debug;
use thiserror::Error;

use crate::{
    collections::{ContainerError, LinkedList},
    grid::{cell, Grid, GridShapeError},
    point::Point,
};

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("start {0} is not an open cell")]
    InvalidStart(Point),
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridShapeError),
    #[error("failed to load maze: {0}")]
    Load(#[from] LoadError),
    #[error("no search has been run yet")]
    SearchNotComplete,
    #[error("the search found no path to an exit")]
    NoPath,
    #[error("maze was already searched, reset it first")]
    AlreadySearched,
    #[error(transparent)]
    Container(#[from] ContainerError),
}

/// A character maze together with the state of the search run over it.
///
/// The grid is loaded once and then marked in place by a search: `.` for
/// cells on the current path and `V` for visited or abandoned cells.
/// A search can run only once; [`Maze::reset`] restores the loaded grid.
///
/// The grid must be enclosed: no open cell may sit on its border. Searches
/// do not bounds-check neighbours and panic if this does not hold.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    pristine: Grid,
    start: Point,
    outcome: Option<SearchOutcome>,
}

impl Maze {
    /// # Errors
    /// [`MazeError::InvalidGrid`] for an empty or ragged grid,
    /// [`MazeError::InvalidStart`] when the start is not an open cell.
    pub fn new(
        start_row: i32,
        start_column: i32,
        rows: Vec<Vec<char>>,
    ) -> Result<Self, MazeError> {
        let grid = Grid::from_rows(rows)?;
        Self::from_grid(grid, Point::new(start_row, start_column))
    }

    pub fn from_grid(grid: Grid, start: Point) -> Result<Self, MazeError> {
        if grid.get(start) != Some(&cell::OPEN) {
            return Err(MazeError::InvalidStart(start));
        }

        Ok(Maze {
            pristine: grid.clone(),
            grid,
            start,
            outcome: None,
        })
    }

    pub fn get_maze(&self) -> &Grid {
        &self.grid
    }

    pub fn print_maze(&self) -> String {
        self.grid.to_string()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    pub fn search_complete(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn exit_found(&self) -> bool {
        self.exit().is_some()
    }

    pub fn exit(&self) -> Option<Point> {
        self.outcome.as_ref().and_then(|o| o.exit)
    }

    pub fn depth_first_search(&mut self) -> Result<Report, MazeError> {
        self.run::<DepthFirstSearch>()
    }

    pub fn breadth_first_search(&mut self) -> Result<Report, MazeError> {
        self.run::<BreadthFirstSearch>()
    }

    pub fn search(&mut self, algorithm: Algorithm) -> Result<Report, MazeError> {
        match algorithm {
            Algorithm::DepthFirst => self.depth_first_search(),
            Algorithm::BreadthFirst => self.breadth_first_search(),
        }
    }

    /// Copy of the path found by the last search, start first.
    pub fn get_path_to_follow(&self) -> Result<LinkedList<Point>, MazeError> {
        match &self.outcome {
            None => Err(MazeError::SearchNotComplete),
            Some(SearchOutcome { exit: None, .. }) => Err(MazeError::NoPath),
            Some(outcome) => Ok(outcome.path.clone()),
        }
    }

    /// Puts back the grid as it was loaded and forgets the last search.
    pub fn reset(&mut self) {
        self.grid.clone_from(&self.pristine);
        self.outcome = None;
    }

    fn run<A: SearchAlgorithm>(&mut self) -> Result<Report, MazeError> {
        if self.outcome.is_some() {
            return Err(MazeError::AlreadySearched);
        }
        debug_assert!(
            self.grid.is_enclosed(),
            "maze grid must not have open cells on its border"
        );

        debug!("running {} from {}", A::NAME, self.start);
        let outcome = A::search(&mut self.grid, self.start)?;
        match outcome.exit {
            Some(exit) => debug!(
                "{} reached {} in {} steps",
                A::NAME,
                exit,
                outcome.path.len()
            ),
            None => debug!("{} found no exit", A::NAME),
        }

        let report = Report::new(self.start, &outcome, &self.grid);
        self.outcome = Some(outcome);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Vec<char>> {
        text.lines().map(|l| l.chars().collect()).collect()
    }

    fn path_of(maze: &Maze) -> Vec<Point> {
        maze.get_path_to_follow().unwrap().into_iter().collect()
    }

    // From [1, 1] the exit is eight moves away along the top, twelve around
    // the bottom.
    const TWO_ROUTES: &str = "\
#######
#     #
# ### #
# #E  #
# ### #
#     #
#######";

    #[test]
    fn construction_validates_start() {
        let grid = rows("###\n# #\n###");
        assert!(Maze::new(1, 1, grid.clone()).is_ok());
        assert!(matches!(
            Maze::new(0, 0, grid.clone()),
            Err(MazeError::InvalidStart(p)) if p == Point::new(0, 0)
        ));
        assert!(matches!(
            Maze::new(5, 1, grid),
            Err(MazeError::InvalidStart(_))
        ));
        assert!(matches!(
            Maze::new(0, 0, rows("# \n#")),
            Err(MazeError::InvalidGrid(GridShapeError::Ragged { .. }))
        ));
        assert!(matches!(
            Maze::new(0, 0, vec![]),
            Err(MazeError::InvalidGrid(GridShapeError::Empty))
        ));
    }

    #[test]
    fn start_on_exit_is_invalid() {
        assert!(matches!(
            Maze::new(1, 1, rows("###\n#E#\n###")),
            Err(MazeError::InvalidStart(_))
        ));
    }

    #[test]
    fn path_requires_a_finished_search() {
        let mut maze = Maze::new(1, 1, rows("####\n#  #\n####")).unwrap();
        assert!(matches!(
            maze.get_path_to_follow(),
            Err(MazeError::SearchNotComplete)
        ));
        assert!(!maze.search_complete());

        maze.depth_first_search().unwrap();
        assert!(maze.search_complete());
        assert!(!maze.exit_found());
        assert!(matches!(maze.get_path_to_follow(), Err(MazeError::NoPath)));

        maze.reset();
        maze.breadth_first_search().unwrap();
        assert!(maze.search_complete());
        assert!(!maze.exit_found());
        assert!(matches!(maze.get_path_to_follow(), Err(MazeError::NoPath)));
    }

    #[test]
    fn dfs_finds_adjacent_exit() {
        let mut maze = Maze::parse("3 5\n1 1\n#####\n# E #\n#####").unwrap();
        maze.depth_first_search().unwrap();

        assert!(maze.exit_found());
        assert_eq!(maze.exit(), Some(Point::new(1, 2)));
        assert_eq!(path_of(&maze), [Point::new(1, 1), Point::new(1, 2)]);
        assert_eq!(maze.print_maze(), "#####\n#.E #\n#####");
    }

    #[test]
    fn bfs_prefers_the_shorter_route() {
        let mut bfs = Maze::new(1, 1, rows(TWO_ROUTES)).unwrap();
        bfs.breadth_first_search().unwrap();

        let path = path_of(&bfs);
        assert_eq!(path.len(), 9);
        assert_eq!(path[1], Point::new(1, 2));
        assert_eq!(path[8], Point::new(3, 3));
    }

    #[test]
    fn dfs_follows_south_first_priority() {
        let mut dfs = Maze::new(1, 1, rows(TWO_ROUTES)).unwrap();
        dfs.depth_first_search().unwrap();

        let path = path_of(&dfs);
        assert_eq!(path.len(), 13);
        assert_eq!(path[1], Point::new(2, 1));
        assert_eq!(path[4], Point::new(5, 1));
        assert_eq!(path[12], Point::new(3, 3));
    }

    #[test]
    fn bfs_path_is_never_longer_than_dfs() {
        let grid = "\
#########
#       #
# ##### #
#       #
#### ####
#E      #
#########";
        let mut dfs = Maze::new(1, 1, rows(grid)).unwrap();
        let mut bfs = dfs.clone();
        dfs.depth_first_search().unwrap();
        bfs.breadth_first_search().unwrap();

        let dfs_path = path_of(&dfs);
        let bfs_path = path_of(&bfs);
        assert!(bfs_path.len() <= dfs_path.len());
        assert_eq!(bfs_path.first(), Some(&Point::new(1, 1)));
        assert_eq!(bfs_path.last(), Some(&Point::new(5, 1)));
        assert_eq!(bfs_path.len(), 11);
    }

    #[test]
    fn search_is_one_shot_until_reset() {
        let mut maze = Maze::new(1, 1, rows(TWO_ROUTES)).unwrap();
        let loaded = maze.print_maze();

        maze.depth_first_search().unwrap();
        assert!(matches!(
            maze.breadth_first_search(),
            Err(MazeError::AlreadySearched)
        ));
        assert_ne!(maze.print_maze(), loaded);

        maze.reset();
        assert_eq!(maze.print_maze(), loaded);
        assert!(!maze.search_complete());
        assert!(maze.search(Algorithm::BreadthFirst).unwrap().exit().is_some());
    }

    #[test]
    fn path_copy_is_independent() {
        let mut maze = Maze::new(1, 1, rows(TWO_ROUTES)).unwrap();
        maze.breadth_first_search().unwrap();

        let mut copy = maze.get_path_to_follow().unwrap();
        copy.clear();
        assert_eq!(maze.get_path_to_follow().unwrap().len(), 9);
    }
}
