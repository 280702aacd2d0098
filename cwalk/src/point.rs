use std::{
    fmt, iter,
    ops::{self, Add},
};

/// A cell coordinate in a grid, `row` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub column: i32,
}

impl Point {
    pub const fn new(row: i32, column: i32) -> Self {
        Point { row, column }
    }

    pub fn step(self, direction: Direction) -> Point {
        self + direction.offset()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.row + other.row, self.column + other.column)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, column): (i32, i32)) -> Self {
        Point::new(row, column)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.column)
    }
}

/// The four moves a search may take from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    South,
    East,
    West,
    North,
}

impl Direction {
    /// Order in which both searches try neighbours. Changing it changes which
    /// path DFS finds.
    pub const IN_ORDER: [Direction; 4] = [
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::North,
    ];

    pub const fn offset(self) -> Point {
        match self {
            Direction::South => Point::new(1, 0),
            Direction::East => Point::new(0, 1),
            Direction::West => Point::new(0, -1),
            Direction::North => Point::new(-1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointId(usize);

/// A discovered point and the point it was reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracedPoint {
    pub point: Point,
    pub parent: Option<PointId>,
}

/// Arena owning every point a breadth-first search discovers.
///
/// Parents are referenced by [`PointId`], so a point never owns the chain
/// behind it and the whole chain is freed together with the trail.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: Vec<TracedPoint>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, point: Point, parent: Option<PointId>) -> PointId {
        self.points.push(TracedPoint { point, parent });
        PointId(self.points.len() - 1)
    }

    pub fn get(&self, id: PointId) -> Option<&TracedPoint> {
        self.points.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Follows parents from `id` back to the root, starting with `id` itself.
    pub fn ancestry(&self, id: PointId) -> impl Iterator<Item = Point> + '_ {
        iter::successors(self.get(id), move |traced| {
            traced.parent.and_then(|parent| self.get(parent))
        })
        .map(|traced| traced.point)
    }
}

impl ops::Index<PointId> for Trail {
    type Output = TracedPoint;

    fn index(&self, id: PointId) -> &Self::Output {
        self.get(id).expect("point id from another trail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_follow_row_major_axes() {
        let origin = Point::new(5, 5);
        assert_eq!(origin.step(Direction::South), Point::new(6, 5));
        assert_eq!(origin.step(Direction::East), Point::new(5, 6));
        assert_eq!(origin.step(Direction::West), Point::new(5, 4));
        assert_eq!(origin.step(Direction::North), Point::new(4, 5));

        let around: Vec<_> = Direction::IN_ORDER
            .into_iter()
            .map(|direction| origin.step(direction))
            .collect();
        assert_eq!(
            around,
            [
                Point::new(6, 5),
                Point::new(5, 6),
                Point::new(5, 4),
                Point::new(4, 5)
            ]
        );
    }

    #[test]
    fn displays_as_bracketed_pair() {
        assert_eq!(Point::new(3, 12).to_string(), "[3, 12]");
        assert_eq!(Point::from((-1, 0)).to_string(), "[-1, 0]");
    }

    #[test]
    fn ancestry_walks_back_to_root() {
        let mut trail = Trail::new();
        let root = trail.record(Point::new(1, 1), None);
        let a = trail.record(Point::new(2, 1), Some(root));
        let _sibling = trail.record(Point::new(1, 2), Some(root));
        let b = trail.record(Point::new(3, 1), Some(a));

        let chain: Vec<_> = trail.ancestry(b).collect();
        assert_eq!(
            chain,
            [Point::new(3, 1), Point::new(2, 1), Point::new(1, 1)]
        );
        assert_eq!(trail.ancestry(root).count(), 1);
        assert_eq!(trail[a].parent, Some(root));
        assert_eq!(trail.len(), 4);
    }
}
