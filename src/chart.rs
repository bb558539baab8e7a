// 🗂️ Chart of Accounts - assemble, tally, write
//
// build()     → catalog rows wrapped in the metadata envelope
// summarize() → count per account type
// emit()      → pretty JSON (2-space indent) to a single file
//
// Output is deterministic: no timestamps, no ids, insertion order only.
// Running the generator twice yields byte-identical files.

use crate::account::{Account, AccountType};
use crate::catalog;
use crate::config::ChartConfig;
use crate::error::{CoaError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// DOCUMENT
// ============================================================================

/// Top-level document: a single "chart_of_accounts" key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub chart_of_accounts: ChartOfAccounts,
}

/// Metadata envelope around the ordered account list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOfAccounts {
    pub name: String,
    pub description: String,
    pub version: String,
    pub base_currency: String,
    pub regulation_frameworks: Vec<String>,
    pub account_count: usize,
    pub accounts: Vec<Account>,
}

impl ChartDocument {
    /// Wrap accounts in an envelope; account_count always follows the list
    pub fn new(config: &ChartConfig, accounts: Vec<Account>) -> Self {
        ChartDocument {
            chart_of_accounts: ChartOfAccounts {
                name: config.name.clone(),
                description: config.description.clone(),
                version: config.version.clone(),
                base_currency: config.base_currency.clone(),
                regulation_frameworks: config.regulation_frameworks.clone(),
                account_count: accounts.len(),
                accounts,
            },
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.chart_of_accounts.accounts
    }

    pub fn account_count(&self) -> usize {
        self.chart_of_accounts.account_count
    }

    /// Find an account by code
    pub fn find(&self, code: &str) -> Option<&Account> {
        self.accounts().iter().find(|a| a.code == code)
    }
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// Build the standard chart with the default envelope
pub fn build() -> Result<ChartDocument> {
    build_with(&ChartConfig::default())
}

/// Build the standard chart with explicit envelope metadata
pub fn build_with(config: &ChartConfig) -> Result<ChartDocument> {
    let accounts = catalog::standard_accounts(&config.base_currency)?;
    let document = ChartDocument::new(config, accounts);

    debug!(
        accounts = document.account_count(),
        base_currency = %config.base_currency,
        "built chart of accounts"
    );

    Ok(document)
}

/// Count accounts per type, keyed by wire name (alphabetical)
///
/// Only types that appear are present; counts sum to accounts.len().
pub fn summarize(accounts: &[Account]) -> BTreeMap<&'static str, usize> {
    let mut by_type = BTreeMap::new();
    for account in accounts {
        *by_type.entry(account.account_type.as_str()).or_insert(0) += 1;
    }
    by_type
}

/// Count for one type, zero when absent
pub fn count_of(summary: &BTreeMap<&'static str, usize>, account_type: AccountType) -> usize {
    summary.get(account_type.as_str()).copied().unwrap_or(0)
}

/// Render the exact bytes emit() writes (2-space indent, no trailing newline)
pub fn to_pretty_json(document: &ChartDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// SHA-256 of the rendered document, hex encoded
pub fn fingerprint(document: &ChartDocument) -> Result<String> {
    let rendered = to_pretty_json(document)?;
    let mut hasher = Sha256::new();
    hasher.update(rendered.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// Write the document to `path`
///
/// The file is created (or truncated), written and flushed inside this call;
/// it is closed on every return path. Errors are not retried.
pub fn emit(document: &ChartDocument, path: &Path) -> Result<()> {
    let rendered = to_pretty_json(document)?;

    let file = File::create(path).map_err(|e| CoaError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(rendered.as_bytes())
        .map_err(|e| CoaError::io(path, e))?;
    writer.flush().map_err(|e| CoaError::io(path, e))?;

    info!(
        path = %path.display(),
        accounts = document.account_count(),
        bytes = rendered.len(),
        "wrote chart of accounts"
    );

    Ok(())
}

/// Read a previously emitted document back
pub fn load(path: &Path) -> Result<ChartDocument> {
    let text = std::fs::read_to_string(path).map_err(|e| CoaError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const GOLDEN: &str = include_str!("../tests/fixtures/comprehensive-coa.json");

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("coa-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_build_account_count_matches_list() {
        let document = build().unwrap();

        assert_eq!(document.account_count(), document.accounts().len());
        assert_eq!(document.account_count(), 233);
    }

    #[test]
    fn test_build_envelope_defaults() {
        let chart = build().unwrap().chart_of_accounts;

        assert_eq!(chart.name, "Comprehensive Standard Chart of Accounts");
        assert_eq!(chart.version, "1.0");
        assert_eq!(chart.base_currency, "USD");
        assert_eq!(chart.regulation_frameworks, vec!["SOX", "Basel III", "MiFID II", "GDPR"]);
    }

    #[test]
    fn test_build_block_order() {
        let document = build().unwrap();

        // Type sequence must never go backwards: Assets → ... → Expenses
        let types: Vec<AccountType> = document.accounts().iter().map(|a| a.account_type).collect();
        assert!(types.windows(2).all(|w| w[0] <= w[1]));

        let roots: Vec<&str> = document
            .accounts()
            .iter()
            .filter(|a| a.is_root())
            .map(|a| a.code.as_str())
            .collect();
        assert_eq!(roots, vec!["1000", "2000", "3000", "4000", "5000"]);
    }

    #[test]
    fn test_build_codes_unique_and_parents_resolve() {
        let document = build().unwrap();
        let codes: std::collections::HashSet<&str> =
            document.accounts().iter().map(|a| a.code.as_str()).collect();

        assert_eq!(codes.len(), document.account_count());
        for account in document.accounts() {
            if let Some(parent) = &account.parent {
                assert!(codes.contains(parent.as_str()), "{} has dangling parent {}", account.code, parent);
                assert_ne!(parent, &account.code);
            }
        }
    }

    #[test]
    fn test_build_with_custom_base_currency() {
        let config = ChartConfig {
            base_currency: "EUR".to_string(),
            ..ChartConfig::default()
        };
        let document = build_with(&config).unwrap();

        assert_eq!(document.chart_of_accounts.base_currency, "EUR");
        assert_eq!(document.find("1102").unwrap().currency, "EUR");
        assert_eq!(document.find("1107").unwrap().currency, "GBP");
    }

    #[test]
    fn test_summarize_counts() {
        let document = build().unwrap();
        let summary = summarize(document.accounts());

        assert_eq!(summary.values().sum::<usize>(), document.account_count());
        assert_eq!(count_of(&summary, AccountType::Asset), 71);
        assert_eq!(count_of(&summary, AccountType::Liability), 34);
        assert_eq!(count_of(&summary, AccountType::Equity), 9);
        assert_eq!(count_of(&summary, AccountType::Revenue), 28);
        assert_eq!(count_of(&summary, AccountType::Expense), 91);

        let keys: Vec<&str> = summary.keys().copied().collect();
        assert_eq!(keys, vec!["ASSET", "EQUITY", "EXPENSE", "LIABILITY", "REVENUE"]);
    }

    #[test]
    fn test_summarize_only_present_types() {
        let accounts = vec![
            Account::new("4000", "Revenue", AccountType::Revenue, None, "USD"),
            Account::new("4100", "Sales", AccountType::Revenue, Some("4000".to_string()), "USD"),
        ];
        let summary = summarize(&accounts);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary.get("REVENUE"), Some(&2));
        assert_eq!(count_of(&summary, AccountType::Asset), 0);
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_rendered_output_matches_golden_file() {
        let document = build().unwrap();
        let rendered = to_pretty_json(&document).unwrap();

        assert_eq!(rendered, GOLDEN);
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = fingerprint(&build().unwrap()).unwrap();
        let second = fingerprint(&build().unwrap()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_emit_then_load_lookup() {
        let path = temp_path();
        let document = build().unwrap();

        emit(&document, &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, document);

        let cash = loaded.find("1102").unwrap();
        assert_eq!(cash.name, "Cash - Operating Account");
        assert_eq!(cash.account_type, AccountType::Asset);
        assert_eq!(cash.parent.as_deref(), Some("1100"));
        assert_eq!(cash.currency, "USD");
    }

    #[test]
    fn test_emit_twice_is_byte_identical() {
        let first_path = temp_path();
        let second_path = temp_path();

        emit(&build().unwrap(), &first_path).unwrap();
        emit(&build().unwrap(), &second_path).unwrap();

        let first = std::fs::read(&first_path).unwrap();
        let second = std::fs::read(&second_path).unwrap();
        std::fs::remove_file(&first_path).ok();
        std::fs::remove_file(&second_path).ok();

        assert_eq!(first, second);
        assert_eq!(first, GOLDEN.as_bytes());
    }

    #[test]
    fn test_other_revenue_parents_are_explicit() {
        let document = build().unwrap();

        for code in ["4300", "4400", "4410", "4420", "4500", "4600", "4700", "4800"] {
            let account = document.find(code).unwrap();
            assert_eq!(account.parent.as_deref(), Some("4000"), "parent of {}", code);
        }
        assert_eq!(document.find("4700").unwrap().name, "Foreign Exchange Gain");
    }

    #[test]
    fn test_emit_to_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join(format!("coa-missing-{}", uuid::Uuid::new_v4()))
            .join("out.json");
        let err = emit(&build().unwrap(), &path).unwrap_err();

        match err {
            CoaError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load(&temp_path()).unwrap_err();
        assert!(matches!(err, CoaError::Io { .. }));
    }
}
