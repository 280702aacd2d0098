pub mod collections;
pub mod grid;
pub mod maze;
pub mod point;

pub use collections::{ContainerError, LinkedList, Queue, Stack};
pub use maze::{Algorithm, Maze, MazeError, Report};
pub use point::Point;
