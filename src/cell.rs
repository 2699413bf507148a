use serde::{Deserialize, Serialize};

/// One day's slot on a board.
///
/// Cells produced by generation always hold a catalog amount; cells restored
/// from a snapshot are taken as-is and may hold any value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Cell {
    /// Dense display index, reassigned whenever the board is reshuffled.
    #[serde(rename = "index")]
    pub(crate) position: usize,
    pub(crate) value: u32,
    #[serde(default)]
    pub(crate) saved: bool,
}

impl Cell {
    pub(crate) fn new(position: usize, value: u32) -> Self {
        Self { position, value, saved: false }
    }

    /// The display index of this cell.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The amount to put aside on this day. Immutable once assigned.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether this day's amount has been put aside.
    pub fn saved(&self) -> bool {
        self.saved
    }
}
