// Derived totals - pure projection of ledger rows

use crate::ledger::DenominationRow;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Totals {
    /// denomination * quantity, in row order
    pub row_totals: Vec<u64>,
    pub grand_total: u64,
    piece_count: u64,
}

impl Totals {
    /// Notes and coins counted across all rows
    pub fn piece_count(&self) -> u64 {
        self.piece_count
    }
}

/// Recompute row totals and the grand total. Saturates instead of overflowing.
pub fn compute_totals(rows: &[DenominationRow]) -> Totals {
    let row_totals: Vec<u64> = rows.iter().map(DenominationRow::total).collect();
    let grand_total = row_totals.iter().fold(0u64, |sum, total| sum.saturating_add(*total));
    let piece_count = rows
        .iter()
        .fold(0u64, |sum, row| sum.saturating_add(row.quantity()));

    Totals {
        row_totals,
        grand_total,
        piece_count,
    }
}
