use strum::VariantArray;

/// The smallest amount the catalog can express.
/// Every denomination is a whole multiple of this unit.
pub const UNIT: u32 = 50;

/// A note denomination a single day's cell may hold.
///
/// [`VARIANTS`](VariantArray::VARIANTS) is ordered smallest to largest.
/// The solver iterates the catalog in this order when filling its
/// reachability table, which biases witness reconstruction toward smaller
/// notes; reordering the variants changes which of several valid witnesses
/// is found, but never whether one is found.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Denomination {
    /// A 50 note, the unit itself.
    Fifty,
    /// A 100 note.
    Hundred,
    /// A 200 note.
    TwoHundred,
    /// A 500 note.
    FiveHundred,
}

impl Denomination {
    /// The currency amount of this note.
    pub fn amount(&self) -> u32 {
        match self {
            Self::Fifty => 50,
            Self::Hundred => 100,
            Self::TwoHundred => 200,
            Self::FiveHundred => 500,
        }
    }

    /// This note expressed in multiples of [`UNIT`].
    pub(crate) fn units(&self) -> usize {
        (self.amount() / UNIT) as usize
    }

    /// Look up the note worth exactly `amount`, if the catalog has one.
    pub fn from_amount(amount: u32) -> Option<Self> {
        Self::VARIANTS.iter().find(|note| note.amount() == amount).copied()
    }

    /// The smallest note, in units.
    pub(crate) fn min_units() -> usize {
        Self::VARIANTS.first().unwrap().units()
    }

    /// The largest note, in units.
    pub(crate) fn max_units() -> usize {
        Self::VARIANTS.last().unwrap().units()
    }
}
