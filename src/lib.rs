#![warn(missing_docs)]

//! # `hucha`
//!
//! A savings-challenge board: split a monetary goal into one note per day,
//! drawn from a fixed denomination catalog, then mark days as saved and read
//! progress off the board.
//! Begin by configuring a [`BoardBuilder`], build a [`Board`], and mutate it
//! through [`toggle_saved`](Board::toggle_saved),
//! [`reset_progress`](Board::reset_progress), and
//! [`regenerate`](Board::regenerate).
//! Boards serialize to and from JSON snapshots for storage collaborators;
//! restored snapshots are accepted as-is.
//!
//! # Internals
//! Splitting a goal into exactly `n` catalog notes is an exact-partition
//! problem, solved by a reachability table over `(cells used, unit sum)`
//! states after the goal is reduced to multiples of the catalog [`UNIT`].
//! Each reachable state records the note that first reached it, so a witness
//! falls out by walking the table backward from `(days, goal units)`; an
//! unreached final state means the instance has no exact combination.
//! First-writer-wins filling, with the catalog iterated smallest to largest,
//! makes the solver deterministic: randomness only enters afterward, when
//! the board shuffles its display order, and can be seeded for
//! reproducibility.
//! The table has `(days + 1) × (goal units + 1)` states, both small for
//! realistic boards, so the dense representation is fine.

pub use board::{Board, PositionNotFound, SnapshotFailure};
pub use builder::BoardBuilder;
pub use cell::Cell;
pub use denomination::{Denomination, UNIT};
pub use solver::{PartitionSolver, SolverFailure};

pub(crate) mod board;
pub(crate) mod builder;
pub(crate) mod cell;
pub(crate) mod denomination;
pub(crate) mod solver;
