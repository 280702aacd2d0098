use std::{fmt, ops};

use thiserror::Error;

use crate::point::Point;

pub mod cell {
    pub const OPEN: char = ' ';
    pub const EXIT: char = 'E';
    pub const PATH: char = '.';
    pub const VISITED: char = 'V';

    /// Whether a search may step onto this cell.
    pub fn is_walkable(cell: char) -> bool {
        cell == OPEN || cell == EXIT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridShapeError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular character grid stored row after row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    buf: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, GridShapeError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridShapeError::Empty);
        }

        let height = rows.len();
        let mut buf = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(GridShapeError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            buf.extend(cells);
        }

        Ok(Grid { buf, width, height })
    }

    pub fn row_count(&self) -> usize {
        self.height
    }

    pub fn column_count(&self) -> usize {
        self.width
    }

    pub fn pos_to_idx(&self, pos: Point) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let column = usize::try_from(pos.column).ok()?;

        if row >= self.height || column >= self.width {
            return None;
        }

        Some(row * self.width + column)
    }

    pub fn get(&self, pos: Point) -> Option<&char> {
        self.pos_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Point) -> Option<&mut char> {
        self.pos_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.buf.chunks(self.width)
    }

    /// No open cell touches the border, so every neighbour a search looks at
    /// exists.
    pub fn is_enclosed(&self) -> bool {
        let last_row = self.height - 1;
        let last_column = self.width - 1;

        self.rows().enumerate().all(|(row, cells)| {
            if row == 0 || row == last_row {
                cells.iter().all(|&c| c != cell::OPEN)
            } else {
                cells[0] != cell::OPEN && cells[last_column] != cell::OPEN
            }
        })
    }

    #[cfg(test)]
    pub(crate) fn count(&self, cell: char) -> usize {
        self.buf.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl ops::Index<Point> for Grid {
    type Output = char;

    fn index(&self, index: Point) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl ops::IndexMut<Point> for Grid {
    fn index_mut(&mut self, index: Point) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        Grid::from_rows(text.lines().map(|l| l.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn indexes_row_major() {
        let g = grid("abc\ndef");
        assert_eq!(g.row_count(), 2);
        assert_eq!(g.column_count(), 3);
        assert_eq!(g[Point::new(0, 2)], 'c');
        assert_eq!(g[Point::new(1, 0)], 'd');
        assert_eq!(g.get(Point::new(0, 3)), None);
        assert_eq!(g.get(Point::new(2, 0)), None);
        assert_eq!(g.get(Point::new(-1, 0)), None);
    }

    #[test]
    #[should_panic(expected = "Index out of bounds")]
    fn out_of_range_index_panics_instead_of_wrapping() {
        let g = grid("ab\ncd");
        let _ = g[Point::new(0, 2)];
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(Grid::from_rows(vec![]), Err(GridShapeError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridShapeError::Empty));
        assert_eq!(
            Grid::from_rows(vec![vec!['#', '#'], vec!['#']]),
            Err(GridShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn prints_rows_without_trailing_newline() {
        let text = "###\n# E\n###";
        let g = grid(text);
        assert_eq!(g.to_string(), text);
        assert_eq!(g.rows().nth(1), Some(&['#', ' ', 'E'][..]));
    }

    #[test]
    fn enclosure() {
        assert!(grid("###\n# E\n###").is_enclosed());
        assert!(!grid("# #\n# #\n###").is_enclosed());
        assert!(!grid("###\n  #\n###").is_enclosed());
        assert!(grid("#").is_enclosed());
    }

    #[test]
    fn mutation_and_counting() {
        let mut g = grid("#  #");
        g[Point::new(0, 1)] = cell::VISITED;
        assert_eq!(g.count(cell::OPEN), 1);
        assert_eq!(g.count(cell::VISITED), 1);
        assert!(cell::is_walkable(g[Point::new(0, 2)]));
        assert!(!cell::is_walkable(g[Point::new(0, 1)]));
    }
}
