use std::fmt::{Display, Formatter};

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builder::BoardBuilder;
use crate::cell::Cell;
use crate::solver::SolverFailure;

/// A toggle referenced a display position the board does not have.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("no cell at position {position} (board has {len})")]
pub struct PositionNotFound {
    /// The position that was asked for.
    pub position: usize,
    /// How many cells the board holds.
    pub len: usize,
}

/// A board snapshot could not be read or written.
#[derive(Debug, Error)]
#[error("malformed board snapshot: {0}")]
pub struct SnapshotFailure(#[from] serde_json::Error);

fn default_columns() -> u32 {
    10
}

/// A savings board: a goal amount split across per-day cells, each holding a
/// note value and a `saved` flag.
///
/// [`Board`]s are produced by a [`BoardBuilder`] or restored from a snapshot
/// with [`from_json`](Self::from_json). Generation replaces the cell list
/// wholesale; the `saved` flags are the only state mutated in place.
///
/// For generated boards, `cells.len()` equals the day count and the cell
/// values sum to the goal. Snapshots restored from outside are trusted as-is
/// and are not re-validated; every operation stays well-defined on them.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Board {
    #[serde(default)]
    pub(crate) goal: u32,
    #[serde(rename = "days", default)]
    pub(crate) day_count: u32,
    /// Display-only layout hint carried for UI collaborators.
    #[serde(default = "default_columns")]
    pub(crate) columns: u32,
    #[serde(default)]
    pub(crate) cells: Vec<Cell>,
}

impl Board {
    /// A board with a target but no cells yet; populate it with
    /// [`regenerate`](Self::regenerate).
    pub fn empty(goal: u32, days: u32) -> Self {
        Self {
            goal,
            day_count: days,
            columns: default_columns(),
            cells: Vec::new(),
        }
    }

    /// The goal amount.
    pub fn goal(&self) -> u32 {
        self.goal
    }

    /// The number of days the goal is split across.
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// The display column count.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Set the display column count, clamped to at least one.
    pub fn set_columns(&mut self, columns: u32) {
        self.columns = columns.max(1);
    }

    /// The cells in display order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// How many cells the board holds.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Replace this board with a freshly generated one for `(goal, days)`,
    /// keeping the display column count.
    ///
    /// On failure the board is left untouched and the failure kind is
    /// surfaced for the caller to present; there is nothing to roll back.
    pub fn regenerate(&mut self, goal: u32, days: u32) -> Result<(), SolverFailure> {
        *self = BoardBuilder::with_target(goal, days).columns(self.columns).build()?;
        Ok(())
    }

    /// Flip the `saved` flag of the cell at `position`.
    ///
    /// Out-of-range positions report [`PositionNotFound`] and mutate
    /// nothing. No other cell is affected.
    pub fn toggle_saved(&mut self, position: usize) -> Result<(), PositionNotFound> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(PositionNotFound { position, len })?;
        cell.saved = !cell.saved;
        Ok(())
    }

    /// Clear every `saved` flag. Values, positions, and the goal are
    /// unaffected.
    pub fn reset_progress(&mut self) {
        for cell in &mut self.cells {
            cell.saved = false;
        }
    }

    /// The sum of values over saved cells.
    ///
    /// Widened to `u64`: restored snapshots may hold arbitrary values.
    pub fn saved_total(&self) -> u64 {
        self.cells
            .iter()
            .filter(|cell| cell.saved)
            .map(|cell| u64::from(cell.value))
            .sum()
    }

    /// The saved share of the goal, rounded to whole percent and clamped to
    /// `0..=100`. A zero goal reports zero.
    pub fn progress_percent(&self) -> u8 {
        if self.goal == 0 {
            return 0;
        }

        let ratio = 100.0 * self.saved_total() as f64 / f64::from(self.goal);
        ratio.round().clamp(0.0, 100.0) as u8
    }

    /// Re-permute the cells with `rng` and reassign dense positions.
    ///
    /// Purely cosmetic: the value multiset and every `saved` flag are
    /// preserved. Pass a seeded RNG for a reproducible order.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cells.shuffle(rng);
        self.reindex();
    }

    pub(crate) fn reindex(&mut self) {
        for (position, cell) in self.cells.iter_mut().enumerate() {
            cell.position = position;
        }
    }

    /// Serialize this board as a pretty-printed JSON snapshot.
    pub fn to_json(&self) -> Result<String, SnapshotFailure> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a board from a JSON snapshot.
    ///
    /// Imports are trusted as-is: cell values are not checked against the
    /// catalog and the sum invariant is not re-derived. Missing `columns`
    /// and `saved` fields fall back to their defaults.
    pub fn from_json(snapshot: &str) -> Result<Self, SnapshotFailure> {
        Ok(serde_json::from_str(snapshot)?)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let columns = self.columns.max(1) as usize;
        for row in &self.cells.iter().chunks(columns) {
            let line = row
                .map(|cell| format!("{:>4}{}", cell.value, if cell.saved { '*' } else { '.' }))
                .join(" ");
            writeln!(f, "{line}")?;
        }

        writeln!(
            f,
            "saved {}/{} ({}%)",
            self.saved_total(),
            self.goal,
            self.progress_percent()
        )
    }
}
