// 📒 Account Record - one line of the chart of accounts
//
// An account is pure reference data: a code, a label, a type and an optional
// parent code. Records are built once from the catalog and never mutated.
//
// Hierarchy: parent holds another record's code, roots have parent = None.
// One root per account type gives a forest of five trees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Resources owned (1xxx)
    Asset,

    /// Obligations owed (2xxx)
    Liability,

    /// Owners' residual interest (3xxx)
    Equity,

    /// Income earned (4xxx)
    Revenue,

    /// Costs incurred (5xxx)
    Expense,
}

impl AccountType {
    /// Wire name, as written to the JSON document and the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Asset => "ASSET",
            AccountType::Liability => "LIABILITY",
            AccountType::Equity => "EQUITY",
            AccountType::Revenue => "REVENUE",
            AccountType::Expense => "EXPENSE",
        }
    }

    /// All types in chart block order
    pub fn all() -> [AccountType; 5] {
        [
            AccountType::Asset,
            AccountType::Liability,
            AccountType::Equity,
            AccountType::Revenue,
            AccountType::Expense,
        ]
    }

    /// Type conventionally implied by the leading digit of a code
    ///
    /// Example: "1102" → Asset, "4700" → Revenue, "9000" → None
    pub fn from_code_prefix(code: &str) -> Option<AccountType> {
        match code.chars().next()? {
            '1' => Some(AccountType::Asset),
            '2' => Some(AccountType::Liability),
            '3' => Some(AccountType::Equity),
            '4' => Some(AccountType::Revenue),
            '5' => Some(AccountType::Expense),
            _ => None,
        }
    }

    /// Normal balance side: debits increase assets and expenses
    pub fn is_debit_normal(&self) -> bool {
        matches!(self, AccountType::Asset | AccountType::Expense)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountType::all()
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown account type: {:?}", s))
    }
}

// ============================================================================
// ACCOUNT
// ============================================================================

/// A single chart-of-accounts record
///
/// Field order matches the serialized document:
/// code, name, type, parent, currency, regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Numeric identifier, unique across the chart (e.g., "1102")
    pub code: String,

    /// Human readable label (e.g., "Cash - Operating Account")
    pub name: String,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Code of the parent record, None for roots (serialized as null)
    pub parent: Option<String>,

    /// Three-letter currency code
    pub currency: String,

    /// Free-text regulatory annotation, omitted from output when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulation: Option<String>,
}

impl Account {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        parent: Option<String>,
        currency: impl Into<String>,
    ) -> Self {
        Account {
            code: code.into(),
            name: name.into(),
            account_type,
            parent,
            currency: currency.into(),
            regulation: None,
        }
    }

    /// Attach a regulatory annotation
    pub fn with_regulation(mut self, regulation: impl Into<String>) -> Self {
        self.regulation = Some(regulation.into());
        self
    }

    /// Check if this is a root account (no parent)
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if the annotation carries any text
    pub fn has_regulation(&self) -> bool {
        self.regulation.as_deref().is_some_and(|r| !r.is_empty())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_round_trips_wire_name() {
        for t in AccountType::all() {
            assert_eq!(t.as_str().parse::<AccountType>().unwrap(), t);
        }
        assert!("Asset".parse::<AccountType>().is_err());
        assert!("".parse::<AccountType>().is_err());
    }

    #[test]
    fn test_account_type_from_code_prefix() {
        assert_eq!(AccountType::from_code_prefix("1102"), Some(AccountType::Asset));
        assert_eq!(AccountType::from_code_prefix("2000"), Some(AccountType::Liability));
        assert_eq!(AccountType::from_code_prefix("3310"), Some(AccountType::Equity));
        assert_eq!(AccountType::from_code_prefix("4700"), Some(AccountType::Revenue));
        assert_eq!(AccountType::from_code_prefix("5680"), Some(AccountType::Expense));
        assert_eq!(AccountType::from_code_prefix("9000"), None);
        assert_eq!(AccountType::from_code_prefix(""), None);
    }

    #[test]
    fn test_debit_normal_types() {
        assert!(AccountType::Asset.is_debit_normal());
        assert!(AccountType::Expense.is_debit_normal());
        assert!(!AccountType::Liability.is_debit_normal());
        assert!(!AccountType::Equity.is_debit_normal());
        assert!(!AccountType::Revenue.is_debit_normal());
    }

    #[test]
    fn test_account_serializes_in_document_order() {
        let account = Account::new("1102", "Cash - Operating Account", AccountType::Asset, Some("1100".to_string()), "USD");
        let json = serde_json::to_string(&account).unwrap();

        assert_eq!(
            json,
            r#"{"code":"1102","name":"Cash - Operating Account","type":"ASSET","parent":"1100","currency":"USD"}"#
        );
    }

    #[test]
    fn test_root_serializes_null_parent_and_empty_regulation() {
        let root = Account::new("1000", "Assets", AccountType::Asset, None, "USD").with_regulation("");
        let json = serde_json::to_string(&root).unwrap();

        assert!(root.is_root());
        assert!(!root.has_regulation());
        assert_eq!(
            json,
            r#"{"code":"1000","name":"Assets","type":"ASSET","parent":null,"currency":"USD","regulation":""}"#
        );
    }

    #[test]
    fn test_account_deserializes_without_regulation() {
        let json = r#"{"code":"4700","name":"Foreign Exchange Gain","type":"REVENUE","parent":"4000","currency":"USD"}"#;
        let account: Account = serde_json::from_str(json).unwrap();

        assert_eq!(account.account_type, AccountType::Revenue);
        assert_eq!(account.parent.as_deref(), Some("4000"));
        assert_eq!(account.regulation, None);
        assert!(!account.is_root());
    }
}
