// Kalkulator Kas - Core Library
// Cash drawer counting: ledger state, totals, and Rupiah formatting

pub mod calculator;
pub mod config;
pub mod format;
pub mod ledger;
pub mod report;

pub use calculator::{compute_totals, Totals};
pub use config::DisplayConfig;
pub use format::{format_currency, format_row_total, ZERO_PLACEHOLDER};
pub use ledger::{parse_quantity, DenominationRow, Ledger, DENOMINATIONS};
pub use report::{apply_pairs, render_report, LedgerSnapshot, RowSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
