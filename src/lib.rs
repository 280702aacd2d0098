pub mod logging;
pub mod settings;

use std::path::Path;

use cwalk::{Algorithm, Maze, MazeError, Report};
use log::info;
use thiserror::Error;

use settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Loads the maze at `path` and runs `algorithm` over it.
pub fn solve(path: impl AsRef<Path>, algorithm: Algorithm) -> Result<Report, AppError> {
    let path = path.as_ref();
    let mut maze = Maze::from_file(path)?;
    info!(
        "solving {:?} ({}x{}) with {}",
        path,
        maze.row_count(),
        maze.column_count(),
        algorithm
    );

    Ok(maze.search(algorithm)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use cwalk::Point;

    use super::*;

    fn maze_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn solves_with_either_algorithm() {
        let file = maze_file("5 5\n1 1\n#####\n#   #\n# # #\n#  E#\n#####\n");

        let dfs = solve(file.path(), Algorithm::DepthFirst).unwrap();
        let bfs = solve(file.path(), Algorithm::BreadthFirst).unwrap();

        assert_eq!(dfs.exit(), Some(Point::new(3, 3)));
        assert_eq!(bfs.exit(), Some(Point::new(3, 3)));
        assert_eq!(bfs.path().len(), 5);
        assert!(dfs.to_string().starts_with(
            "Path to follow from Start [1, 1] to Exit [3, 3] - 5 steps:\n"
        ));
    }

    #[test]
    fn load_errors_surface_as_maze_errors() {
        let file = maze_file("5 x\n1 1\n");
        assert!(matches!(
            solve(file.path(), Algorithm::DepthFirst),
            Err(AppError::Maze(MazeError::Load(_)))
        ));
    }
}
