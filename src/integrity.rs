// ✅ Integrity Checks - report-only validation of a built chart
//
// The generator never corrects data: every finding is reported, the chart is
// written exactly as the catalog states it.
//
// Rules:
//   duplicate_code        Critical  same code on two records
//   empty_name            Critical  blank label
//   non_numeric_code      Critical  code empty or not all ASCII digits
//   dangling_parent       Critical  parent code not in the chart
//   parent_cycle          Critical  walking parents returns to the start
//   type_prefix_mismatch  Warning   leading digit implies another type
//   parent_type_mismatch  Warning   child and parent types differ
//   currency_format       Warning   currency is not three upper-case letters
//   missing_root          Warning   a type has records but no root

use crate::account::{Account, AccountType};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

// ============================================================================
// ISSUES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Critical, // The chart breaks a structural invariant
    Warning,  // The chart breaks a convention
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrityIssue {
    pub severity: Severity,
    pub rule: String,
    /// Code of the offending record (type name for missing_root)
    pub code: String,
    pub message: String,
}

impl IntegrityIssue {
    fn new(severity: Severity, rule: &str, code: &str, message: String) -> Self {
        IntegrityIssue {
            severity,
            rule: rule.to_string(),
            code: code.to_string(),
            message,
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntegrityReport {
    /// Number of records checked
    pub checked: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_critical_issues(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Critical)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Issues raised by one rule
    pub fn by_rule(&self, rule: &str) -> Vec<&IntegrityIssue> {
        self.issues.iter().filter(|i| i.rule == rule).collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} accounts checked: {} issues ({} critical, {} warnings)",
            self.checked,
            self.issues.len(),
            self.count(Severity::Critical),
            self.count(Severity::Warning)
        )
    }

    /// Emit one warn! event per issue
    pub fn log(&self) {
        for issue in &self.issues {
            warn!(
                severity = issue.severity.as_str(),
                rule = %issue.rule,
                code = %issue.code,
                "{}",
                issue.message
            );
        }
    }
}

// ============================================================================
// CHECKER
// ============================================================================

pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn new() -> Self {
        IntegrityChecker
    }

    pub fn check(&self, accounts: &[Account]) -> IntegrityReport {
        let mut issues = Vec::new();

        let mut by_code: HashMap<&str, &Account> = HashMap::new();
        let mut reported_duplicates: HashSet<&str> = HashSet::new();

        for account in accounts {
            if by_code.contains_key(account.code.as_str()) {
                if reported_duplicates.insert(account.code.as_str()) {
                    issues.push(IntegrityIssue::new(
                        Severity::Critical,
                        "duplicate_code",
                        &account.code,
                        format!("code {} appears more than once", account.code),
                    ));
                }
            } else {
                by_code.insert(account.code.as_str(), account);
            }
        }

        for account in accounts {
            self.check_record(account, &mut issues);
            self.check_parent(account, &by_code, &mut issues);
        }

        self.check_roots(accounts, &mut issues);

        IntegrityReport {
            checked: accounts.len(),
            issues,
        }
    }

    fn check_record(&self, account: &Account, issues: &mut Vec<IntegrityIssue>) {
        if account.name.trim().is_empty() {
            issues.push(IntegrityIssue::new(
                Severity::Critical,
                "empty_name",
                &account.code,
                format!("account {} has no name", account.code),
            ));
        }

        if account.code.is_empty() || !account.code.chars().all(|c| c.is_ascii_digit()) {
            issues.push(IntegrityIssue::new(
                Severity::Critical,
                "non_numeric_code",
                &account.code,
                format!("code {:?} is not numeric", account.code),
            ));
        }

        if let Some(expected) = AccountType::from_code_prefix(&account.code) {
            if expected != account.account_type {
                issues.push(IntegrityIssue::new(
                    Severity::Warning,
                    "type_prefix_mismatch",
                    &account.code,
                    format!(
                        "{} is {} but its prefix implies {}",
                        account.code, account.account_type, expected
                    ),
                ));
            }
        }

        let currency_ok =
            account.currency.len() == 3 && account.currency.chars().all(|c| c.is_ascii_uppercase());
        if !currency_ok {
            issues.push(IntegrityIssue::new(
                Severity::Warning,
                "currency_format",
                &account.code,
                format!("{} has currency {:?}", account.code, account.currency),
            ));
        }
    }

    fn check_parent(
        &self,
        account: &Account,
        by_code: &HashMap<&str, &Account>,
        issues: &mut Vec<IntegrityIssue>,
    ) {
        let Some(parent_code) = account.parent.as_deref() else {
            return;
        };

        let Some(parent) = by_code.get(parent_code) else {
            issues.push(IntegrityIssue::new(
                Severity::Critical,
                "dangling_parent",
                &account.code,
                format!("{} points to missing parent {}", account.code, parent_code),
            ));
            return;
        };

        if parent.account_type != account.account_type {
            issues.push(IntegrityIssue::new(
                Severity::Warning,
                "parent_type_mismatch",
                &account.code,
                format!(
                    "{} is {} under {} parent {}",
                    account.code, account.account_type, parent.account_type, parent_code
                ),
            ));
        }

        if Self::on_cycle(account, by_code) {
            issues.push(IntegrityIssue::new(
                Severity::Critical,
                "parent_cycle",
                &account.code,
                format!("walking parents from {} returns to itself", account.code),
            ));
        }
    }

    /// True if following parents from `account` comes back to its code
    fn on_cycle(account: &Account, by_code: &HashMap<&str, &Account>) -> bool {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = account.parent.as_deref();

        while let Some(code) = current {
            if code == account.code {
                return true;
            }
            if !seen.insert(code) {
                // Loop above us that does not include this account
                return false;
            }
            current = by_code.get(code).and_then(|a| a.parent.as_deref());
        }

        false
    }

    fn check_roots(&self, accounts: &[Account], issues: &mut Vec<IntegrityIssue>) {
        for account_type in AccountType::all() {
            let mut of_type = accounts.iter().filter(|a| a.account_type == account_type);
            let Some(first) = of_type.next() else {
                continue;
            };

            let has_root = first.is_root() || of_type.any(|a| a.is_root());
            if !has_root {
                issues.push(IntegrityIssue::new(
                    Severity::Warning,
                    "missing_root",
                    account_type.as_str(),
                    format!("no root account of type {}", account_type),
                ));
            }
        }
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
