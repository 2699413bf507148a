use ndarray::Array2;
use strum::VariantArray;
use thiserror::Error;

use crate::denomination::{Denomination, UNIT};

/// Reasons a [`PartitionSolver`] may fail.
///
/// Checks are applied in declaration order; the first matching condition is
/// the one reported.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum SolverFailure {
    /// The goal is zero.
    /// Negative and fractional goals are unrepresentable in the input type.
    #[error("goal must be a positive amount")]
    InvalidGoal,
    /// The goal is not a multiple of [`UNIT`], so no combination of notes of
    /// any length can express it.
    #[error("goal is not a multiple of the smallest note")]
    UnalignedGoal,
    /// No sequence of the requested length can bracket the goal; it is below
    /// an all-smallest-notes sum or above an all-largest-notes sum.
    #[error("goal cannot be bracketed by the requested number of days")]
    RangeInfeasible,
    /// The goal lies inside the bracket, but the catalog's granularity
    /// admits no exact combination (e.g. 150 in one day).
    #[error("no exact combination of notes reaches the goal")]
    Unsatisfiable,
}

/// How a `(cells used, unit sum)` state was first reached, if at all.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
enum Reach {
    #[default]
    Unreached,
    /// The origin: zero cells used, zero sum.
    Start,
    /// First reached by adding this note to the state one cell earlier.
    Via(Denomination),
}

/// An exact-partition instance: split a goal amount into a fixed number of
/// daily notes drawn from the [`Denomination`] catalog.
///
/// Construct with [`new`](Self::new), which validates the instance, then
/// call [`solve`](Self::solve) for a witness. The solver is pure and
/// deterministic: the same instance always yields the same witness. Among
/// the possibly many valid witnesses, first-writer-wins table filling with
/// the catalog iterated smallest to largest fixes one reproducible choice;
/// callers may rely on the determinism but not on the particular witness.
#[derive(Copy, Clone, Debug)]
pub struct PartitionSolver {
    days: usize,
    target_units: usize,
}

impl PartitionSolver {
    /// Validate `(goal, days)` into a solvable instance.
    ///
    /// Reports [`InvalidGoal`](SolverFailure::InvalidGoal),
    /// [`UnalignedGoal`](SolverFailure::UnalignedGoal), or
    /// [`RangeInfeasible`](SolverFailure::RangeInfeasible), in that order.
    pub fn new(goal: u32, days: u32) -> Result<Self, SolverFailure> {
        if goal == 0 {
            return Err(SolverFailure::InvalidGoal);
        }
        if goal % UNIT != 0 {
            return Err(SolverFailure::UnalignedGoal);
        }

        let days = days as usize;
        let target_units = (goal / UNIT) as usize;
        if target_units < days * Denomination::min_units()
            || target_units > days * Denomination::max_units()
        {
            return Err(SolverFailure::RangeInfeasible);
        }

        Ok(Self { days, target_units })
    }

    /// Find a sequence of exactly `days` notes summing exactly to the goal,
    /// or report [`Unsatisfiable`](SolverFailure::Unsatisfiable).
    ///
    /// # Method
    /// Reachability over `(cells used, unit sum)` states. From every reached
    /// state `(i, u)`, adding a note `k` reaches `(i + 1, u + k)`; a state
    /// keeps the first note that reached it. After filling, a witness exists
    /// iff `(days, target)` was reached, and is reconstructed by walking the
    /// recorded notes backward to the origin.
    pub fn solve(&self) -> Result<Vec<Denomination>, SolverFailure> {
        let mut table = Array2::from_elem((self.days + 1, self.target_units + 1), Reach::Unreached);
        table[(0, 0)] = Reach::Start;

        for spent in 0..self.days {
            for sum in 0..=self.target_units {
                if table[(spent, sum)] == Reach::Unreached {
                    continue;
                }

                for note in Denomination::VARIANTS {
                    let next = sum + note.units();
                    if next <= self.target_units && table[(spent + 1, next)] == Reach::Unreached {
                        table[(spent + 1, next)] = Reach::Via(*note);
                    }
                }
            }
        }

        if table[(self.days, self.target_units)] == Reach::Unreached {
            return Err(SolverFailure::Unsatisfiable);
        }

        let mut witness = Vec::with_capacity(self.days);
        let (mut spent, mut sum) = (self.days, self.target_units);
        while spent > 0 {
            match table[(spent, sum)] {
                Reach::Via(note) => {
                    witness.push(note);
                    sum -= note.units();
                    spent -= 1;
                }
                // every predecessor of a reached non-origin state is reached
                _ => unreachable!(),
            }
        }

        witness.reverse();
        Ok(witness)
    }
}
