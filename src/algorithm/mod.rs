/// Ordered pool-index stacks for the available and used partitions
pub mod bitset;
/// Seeded generation of solvable puzzles
pub mod generator;
/// Fixed placement schedule and constraint kinds
pub mod schedule;
/// Backtracking solver
pub mod solver;
