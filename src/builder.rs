use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::cell::Cell;
use crate::solver::{PartitionSolver, SolverFailure};

/// Configures and produces [`Board`]s.
///
/// Setters chain on `&mut self`; a builder can be [`Clone`]d to keep its
/// state around and [`build`](Self::build) may be called repeatedly.
/// Building solves the partition, wraps the witness into unsaved cells, and
/// shuffles their display order.
#[derive(Clone)]
pub struct BoardBuilder {
    goal: u32,
    days: u32,
    columns: u32,
    seed: Option<u64>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_target(5000, 30)
    }
}

impl BoardBuilder {
    /// Construct a builder splitting `goal` across `days` cells.
    pub fn with_target(goal: u32, days: u32) -> Self {
        Self {
            goal,
            days,
            columns: 10,
            seed: None,
        }
    }

    /// Set the display column count, clamped to at least one.
    pub fn columns(&mut self, columns: u32) -> &mut Self {
        self.columns = columns.max(1);
        self
    }

    /// Fix the shuffle seed, making the display order reproducible.
    /// Without a seed every build draws fresh entropy.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Solve the partition and produce a populated [`Board`].
    ///
    /// Returns the [`SolverFailure`] kind when the target admits no
    /// partition; nothing is constructed in that case.
    pub fn build(&self) -> Result<Board, SolverFailure> {
        let witness = PartitionSolver::new(self.goal, self.days)?.solve()?;

        let cells = witness
            .into_iter()
            .enumerate()
            .map(|(position, note)| Cell::new(position, note.amount()))
            .collect_vec();

        let mut board = Board {
            goal: self.goal,
            day_count: self.days,
            columns: self.columns,
            cells,
        };
        match self.seed {
            Some(seed) => board.shuffle(&mut SmallRng::seed_from_u64(seed)),
            None => board.shuffle(&mut rand::thread_rng()),
        }

        Ok(board)
    }
}
