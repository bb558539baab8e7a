// Comprehensive Chart of Accounts - Core Library
// Builds the standard chart from its embedded catalog, checks it, writes it as JSON

pub mod account;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod integrity;

// Re-export commonly used types
pub use account::{Account, AccountType};
pub use catalog::{parse_catalog, standard_accounts, STANDARD_CATALOG};
pub use chart::{
    build, build_with, count_of, emit, fingerprint, load, summarize, to_pretty_json,
    ChartDocument, ChartOfAccounts,
};
pub use config::{ChartConfig, DEFAULT_BASE_CURRENCY, DEFAULT_OUTPUT_FILE};
pub use error::{CoaError, Result};
pub use hierarchy::AccountTree;
pub use integrity::{IntegrityChecker, IntegrityIssue, IntegrityReport, Severity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
