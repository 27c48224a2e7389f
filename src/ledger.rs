// 🧮 Denomination Ledger - State store + bounded mutations
//
// Row identity is the denomination and never changes after creation.
// Only quantities move, and only through the operations below.

use crate::calculator::{compute_totals, Totals};
use tracing::{debug, warn};

// ============================================================================
// DENOMINATIONS
// ============================================================================

/// Rupiah face values, one ledger row each, in display order (descending)
pub const DENOMINATIONS: [u64; 9] = [100000, 50000, 20000, 10000, 5000, 2000, 1000, 500, 200];

// ============================================================================
// ROW
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenominationRow {
    denomination: u64,
    quantity: u64,
}

impl DenominationRow {
    fn new(denomination: u64) -> Self {
        DenominationRow {
            denomination,
            quantity: 0,
        }
    }

    pub fn denomination(&self) -> u64 {
        self.denomination
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// denomination * quantity
    pub fn total(&self) -> u64 {
        self.denomination.saturating_mul(self.quantity)
    }
}

// ============================================================================
// LEDGER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    rows: Vec<DenominationRow>,
}

impl Ledger {
    /// One row per denomination, all quantities at zero
    pub fn new() -> Self {
        Ledger {
            rows: DENOMINATIONS.iter().copied().map(DenominationRow::new).collect(),
        }
    }

    pub fn rows(&self) -> &[DenominationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn quantity(&self, index: usize) -> Option<u64> {
        self.rows.get(index).map(|row| row.quantity)
    }

    /// Row position for a face value, if it is one of the fixed denominations
    pub fn index_of(&self, denomination: u64) -> Option<usize> {
        self.rows.iter().position(|row| row.denomination == denomination)
    }

    /// Store `max(0, value)` at `index`. Unknown indexes are ignored.
    pub fn set_quantity(&mut self, index: usize, value: i64) {
        let Some(row) = self.rows.get_mut(index) else {
            warn!(index, "set_quantity on unknown row ignored");
            return;
        };

        row.quantity = value.max(0) as u64;
        debug!(denomination = row.denomination, quantity = row.quantity, "quantity set");
    }

    pub fn increment(&mut self, index: usize) {
        if let Some(current) = self.quantity(index) {
            self.store(index, current.saturating_add(1));
        } else {
            warn!(index, "increment on unknown row ignored");
        }
    }

    /// Floors at zero
    pub fn decrement(&mut self, index: usize) {
        if let Some(current) = self.quantity(index) {
            self.store(index, current.saturating_sub(1));
        } else {
            warn!(index, "decrement on unknown row ignored");
        }
    }

    /// Direct entry: unparseable text counts as 0, negatives clamp to 0
    pub fn enter_text(&mut self, index: usize, text: &str) {
        self.set_quantity(index, parse_quantity(text));
    }

    /// Zero every quantity, keeping rows and their order
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            row.quantity = 0;
        }
        debug!("ledger reset");
    }

    /// Recomputed on every call
    pub fn totals(&self) -> Totals {
        compute_totals(&self.rows)
    }

    // u64 quantities above i64::MAX can't go through set_quantity
    fn store(&mut self, index: usize, quantity: u64) {
        match i64::try_from(quantity) {
            Ok(value) => self.set_quantity(index, value),
            Err(_) => {
                if let Some(row) = self.rows.get_mut(index) {
                    row.quantity = quantity;
                }
            }
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// INPUT PARSING
// ============================================================================

/// Integer prefix parse with 0 as the fallback.
///
/// Leading whitespace is skipped, an optional sign is accepted, then the
/// longest run of ASCII digits is read. "12abc" -> 12, "3.9" -> 3,
/// "-4" -> -4, "" and "abc" -> 0. Saturates at the i64 bounds.
pub fn parse_quantity(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    value
}

// ============================================================================
// TESTS
// ============================================================================
