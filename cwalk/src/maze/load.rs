//! Reading mazes from their text form:
//!
//! ```text
//! 3 5        <- rows columns
//! 1 1        <- start row, start column
//! #####
//! # E #
//! #####
//! ```

use std::{fs, io, num::ParseIntError, path::Path, str::FromStr};

use log::debug;
use thiserror::Error;

use super::{Maze, MazeError};
use crate::{grid::Grid, point::Point};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read maze file: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected {what}, found end of input")]
    MissingLine { line: usize, what: &'static str },
    #[error("line {line}: missing {what}")]
    MissingField { line: usize, what: &'static str },
    #[error("line {line}: invalid {what}: {source}")]
    ParseInt {
        line: usize,
        what: &'static str,
        source: ParseIntError,
    },
    #[error("line {line}: maze must have at least one row and one column")]
    InvalidDimensions { line: usize },
    #[error("line {line}: row has {found} cells, expected {expected}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: more rows than the {expected} declared")]
    TooManyRows { line: usize, expected: usize },
}

struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Lines {
            inner: text.lines().enumerate(),
        }
    }

    /// Next line and its 1-based number.
    fn next_line(&mut self, what: &'static str, line: usize) -> Result<(usize, &'a str), LoadError> {
        self.inner
            .next()
            .map(|(i, text)| (i + 1, text))
            .ok_or(LoadError::MissingLine { line, what })
    }

    fn pair<T: FromStr<Err = ParseIntError>>(
        &mut self,
        line: usize,
        names: [&'static str; 2],
    ) -> Result<(T, T), LoadError> {
        let (line, text) = self.next_line(names[0], line)?;
        let mut fields = text.split_whitespace();
        let mut field = |what: &'static str| -> Result<T, LoadError> {
            fields
                .next()
                .ok_or(LoadError::MissingField { line, what })?
                .parse::<T>()
                .map_err(|source| LoadError::ParseInt { line, what, source })
        };

        Ok((field(names[0])?, field(names[1])?))
    }
}

fn parse_rows(text: &str) -> Result<(Vec<Vec<char>>, Point), LoadError> {
    let mut lines = Lines::new(text);

    let (rows, columns) = lines.pair::<usize>(1, ["row count", "column count"])?;
    if rows == 0 || columns == 0 {
        return Err(LoadError::InvalidDimensions { line: 1 });
    }
    let (start_row, start_column) = lines.pair::<i32>(2, ["start row", "start column"])?;

    let mut cells = Vec::new();
    for n in 0..rows {
        let (line, text) = lines.next_line("maze row", n + 3)?;
        let row: Vec<char> = text.chars().collect();
        if row.len() != columns {
            return Err(LoadError::RowLength {
                line,
                expected: columns,
                found: row.len(),
            });
        }
        cells.push(row);
    }

    if let Some((i, _)) = lines.inner.find(|(_, text)| !text.trim().is_empty()) {
        return Err(LoadError::TooManyRows {
            line: i + 1,
            expected: rows,
        });
    }

    Ok((cells, Point::new(start_row, start_column)))
}

impl Maze {
    /// Reads a maze from its text form.
    ///
    /// # Errors
    /// [`MazeError::Load`] when the text is malformed, [`MazeError::InvalidStart`]
    /// when the declared start is not an open cell.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let (rows, start) = parse_rows(text)?;
        let grid = Grid::from_rows(rows)?;
        debug!(
            "loaded {}x{} maze starting at {}",
            grid.row_count(),
            grid.column_count(),
            start
        );
        Maze::from_grid(grid, start)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let text = fs::read_to_string(path.as_ref()).map_err(LoadError::from)?;
        Self::parse(&text)
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let maze = Maze::parse("3 5\n1 1\n#####\n# E #\n#####\n").unwrap();
        assert_eq!(maze.row_count(), 3);
        assert_eq!(maze.column_count(), 5);
        assert_eq!(maze.start(), Point::new(1, 1));
        assert_eq!(maze.print_maze(), "#####\n# E #\n#####");
    }

    #[test]
    fn accepts_crlf_and_trailing_blank_lines() {
        let maze: Maze = "2 3\r\n1 1\r\n###\r\n# #\r\n\r\n\n".parse().unwrap_or_else(|e| {
            panic!("{}", e);
        });
        assert_eq!(maze.print_maze(), "###\n# #");
    }

    fn load_error(text: &str) -> LoadError {
        match Maze::parse(text) {
            Err(MazeError::Load(e)) => e,
            other => panic!("expected a load error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_headers() {
        assert!(matches!(
            load_error("3 x\n1 1\n"),
            LoadError::ParseInt {
                line: 1,
                what: "column count",
                ..
            }
        ));
        assert!(matches!(
            load_error("3\n1 1\n"),
            LoadError::MissingField { line: 1, .. }
        ));
        assert!(matches!(
            load_error("3 5\n"),
            LoadError::MissingLine { line: 2, .. }
        ));
        assert!(matches!(load_error(""), LoadError::MissingLine { line: 1, .. }));
        assert!(matches!(
            load_error("0 5\n1 1\n"),
            LoadError::InvalidDimensions { line: 1 }
        ));
        assert!(matches!(
            load_error("-3 5\n1 1\n"),
            LoadError::ParseInt { line: 1, .. }
        ));
    }

    #[test]
    fn rejects_malformed_rows() {
        assert!(matches!(
            load_error("3 5\n1 1\n#####\n# E\n#####"),
            LoadError::RowLength {
                line: 4,
                expected: 5,
                found: 3
            }
        ));
        assert!(matches!(
            load_error("3 5\n1 1\n#####\n# E #"),
            LoadError::MissingLine { line: 5, .. }
        ));
        assert!(matches!(
            load_error("2 3\n1 1\n###\n# #\n\n###"),
            LoadError::TooManyRows {
                line: 6,
                expected: 2
            }
        ));
    }

    #[test]
    fn huge_row_count_fails_on_missing_rows() {
        assert!(matches!(
            Maze::parse("9223372036854775807 5\n1 1\n#####\n"),
            Err(MazeError::Load(LoadError::MissingLine { line: 4, .. }))
        ));
    }

    #[test]
    fn start_is_validated_after_loading() {
        assert!(matches!(
            Maze::parse("3 5\n0 0\n#####\n# E #\n#####"),
            Err(MazeError::InvalidStart(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3 4\n1 2\n####\n#E #\n####").unwrap();

        let mut maze = Maze::from_file(file.path()).unwrap();
        maze.breadth_first_search().unwrap();
        assert_eq!(maze.exit(), Some(Point::new(1, 1)));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Maze::from_file(dir.path().join("nope.txt"));
        assert!(matches!(result, Err(MazeError::Load(LoadError::Io(_)))));
    }
}
