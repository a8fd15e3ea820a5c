//! **wavemaze** generates perfect mazes with the binary tree algorithm and solves them with a
//! wavefront (breadth first, one layer per tick) search between the two maze exits.

pub mod cells;
pub mod errors;
pub mod exits;
pub mod generators;
pub mod grid;
pub mod grid_iterators;
pub mod grid_text;
pub mod pathing;
pub mod units;
mod utils;
