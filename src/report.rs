// 📋 Count Report - snapshot + plain-text rendering for the `count` command

use crate::config::DisplayConfig;
use crate::format::{format_currency, format_row_total};
use crate::ledger::Ledger;
use anyhow::{anyhow, Result};
use serde::Serialize;

// ============================================================================
// SNAPSHOT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowSnapshot {
    pub denomination: u64,
    pub quantity: u64,
    pub total: u64,
}

/// Point-in-time view of a ledger with its derived totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSnapshot {
    pub rows: Vec<RowSnapshot>,
    pub grand_total: u64,
    pub piece_count: u64,
}

impl LedgerSnapshot {
    pub fn capture(ledger: &Ledger) -> Self {
        let totals = ledger.totals();
        let rows = ledger
            .rows()
            .iter()
            .zip(&totals.row_totals)
            .map(|(row, total)| RowSnapshot {
                denomination: row.denomination(),
                quantity: row.quantity(),
                total: *total,
            })
            .collect();

        LedgerSnapshot {
            rows,
            grand_total: totals.grand_total,
            piece_count: totals.piece_count(),
        }
    }
}

// ============================================================================
// COMMAND-LINE ENTRIES
// ============================================================================

/// Apply `DENOM=QTY` pairs to the ledger as direct entries, in order
pub fn apply_pairs<S: AsRef<str>>(ledger: &mut Ledger, pairs: &[S]) -> Result<()> {
    for pair in pairs {
        let pair = pair.as_ref();
        let (denomination, quantity) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected DENOM=QTY, got '{}'", pair))?;

        let denomination: u64 = denomination
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid denomination '{}' in '{}'", denomination, pair))?;

        let index = ledger
            .index_of(denomination)
            .ok_or_else(|| anyhow!("Unknown denomination: {}", denomination))?;

        ledger.enter_text(index, quantity);
    }

    Ok(())
}

// ============================================================================
// TEXT REPORT
// ============================================================================

pub fn render_report(ledger: &Ledger, config: &DisplayConfig) -> String {
    let totals = ledger.totals();
    let mut lines = Vec::with_capacity(ledger.len() + 5);

    lines.push(config.title.clone());
    lines.push(format!(
        "{:<16} {:>8} {:>22}",
        config.denomination_header, config.quantity_header, config.total_header
    ));
    lines.push("─".repeat(48));

    for (row, total) in ledger.rows().iter().zip(&totals.row_totals) {
        lines.push(format!(
            "{:<16} {:>8} {:>22}",
            format_currency(row.denomination()),
            row.quantity(),
            format_row_total(*total)
        ));
    }

    lines.push("─".repeat(48));
    lines.push(format!(
        "{:<16} {:>8} {:>22}",
        config.grand_total_label,
        totals.piece_count(),
        format_currency(totals.grand_total)
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_capture() {
        let mut ledger = Ledger::new();
        apply_pairs(&mut ledger, &["100000=2", "50000=1", "500=4"]).unwrap();
        let snapshot = LedgerSnapshot::capture(&ledger);

        assert_eq!(snapshot.grand_total, 252000);
        assert_eq!(snapshot.piece_count, 7);
        assert_eq!(snapshot.rows.len(), 9);
        assert_eq!(
            snapshot.rows[0],
            RowSnapshot { denomination: 100000, quantity: 2, total: 200000 }
        );
        assert_eq!(snapshot.rows[7].total, 2000);
    }

    #[test]
    fn test_snapshot_json() {
        let mut ledger = Ledger::new();
        ledger.set_quantity(8, 5);
        let json = serde_json::to_value(LedgerSnapshot::capture(&ledger)).unwrap();

        assert_eq!(json["grand_total"], 1000);
        assert_eq!(json["rows"][8]["denomination"], 200);
        assert_eq!(json["rows"][8]["quantity"], 5);
    }

    #[test]
    fn test_apply_pairs_uses_direct_entry_rules() {
        let mut ledger = Ledger::new();
        apply_pairs(&mut ledger, &["1000=abc", "2000=-3", "5000=12x", "200= 4"]).unwrap();

        assert_eq!(ledger.quantity(ledger.index_of(1000).unwrap()), Some(0));
        assert_eq!(ledger.quantity(ledger.index_of(2000).unwrap()), Some(0));
        assert_eq!(ledger.quantity(ledger.index_of(5000).unwrap()), Some(12));
        assert_eq!(ledger.quantity(ledger.index_of(200).unwrap()), Some(4));
    }

    #[test]
    fn test_apply_pairs_rejects_bad_input() {
        let mut ledger = Ledger::new();

        assert!(apply_pairs(&mut ledger, &["750=1"]).is_err());
        assert!(apply_pairs(&mut ledger, &["1000"]).is_err());
        assert!(apply_pairs(&mut ledger, &["lots=1"]).is_err());
    }

    #[test]
    fn test_report_initial_state() {
        let report = render_report(&Ledger::new(), &DisplayConfig::default());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Kalkulator Kas");
        // 9 rows between the two rules, each ending in the placeholder
        for line in &lines[3..12] {
            assert!(line.ends_with(" -"), "row not a placeholder: {:?}", line);
        }
        assert!(lines[13].starts_with("Total Kas"));
        assert!(lines[13].ends_with("Rp\u{a0}0"));
    }

    #[test]
    fn test_report_single_denomination() {
        let mut ledger = Ledger::new();
        apply_pairs(&mut ledger, &["100000=3"]).unwrap();
        let report = render_report(&ledger, &DisplayConfig::default());
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines[3].starts_with("Rp\u{a0}100.000"));
        assert!(lines[3].ends_with("Rp\u{a0}300.000"));
        assert!(lines[13].ends_with("Rp\u{a0}300.000"));
    }
}
