//! Shared building blocks for the daily solvers: signed grid coordinates,
//! a dense generic [`Grid`], a hash [`Set`] and a binary-heap priority queue.

pub mod coord;
pub mod grid;
pub mod parse;
pub mod priority_queue;
pub mod set;

pub use coord::{Coordinate, Vector};
pub use grid::{Grid, GridError};
pub use priority_queue::{
    HeapOrder, Max, MaxPriorityQueue, Min, MinPriorityQueue, PriorityElement, PriorityQueue,
};
pub use set::Set;
