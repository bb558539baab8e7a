// 🌳 Account Hierarchy - read-only navigation over a built chart
//
// The chart is a forest: parent codes point from child to parent, one root per
// account type. AccountTree borrows the account list and indexes it by code so
// lookups do not rescan the list.
//
// Walks stop at a missing parent or a repeated code, so a broken chart
// (dangling parent, cycle) never loops. integrity.rs reports those problems.

use crate::account::Account;
use std::collections::{HashMap, HashSet};

pub struct AccountTree<'a> {
    accounts: &'a [Account],
    by_code: HashMap<&'a str, &'a Account>,
    children: HashMap<&'a str, Vec<&'a Account>>,
}

impl<'a> AccountTree<'a> {
    /// Index accounts by code; on duplicate codes the first record wins
    pub fn new(accounts: &'a [Account]) -> Self {
        let mut by_code = HashMap::new();
        let mut children: HashMap<&str, Vec<&Account>> = HashMap::new();

        for account in accounts {
            by_code.entry(account.code.as_str()).or_insert(account);
            if let Some(parent) = account.parent.as_deref() {
                children.entry(parent).or_default().push(account);
            }
        }

        AccountTree {
            accounts,
            by_code,
            children,
        }
    }

    pub fn find_by_code(&self, code: &str) -> Option<&'a Account> {
        self.by_code.get(code).copied()
    }

    /// Root accounts in chart order
    pub fn roots(&self) -> Vec<&'a Account> {
        self.accounts.iter().filter(|a| a.is_root()).collect()
    }

    /// Direct children in chart order
    pub fn get_children(&self, code: &str) -> Vec<&'a Account> {
        self.children.get(code).cloned().unwrap_or_default()
    }

    pub fn get_parent(&self, account: &Account) -> Option<&'a Account> {
        account
            .parent
            .as_deref()
            .and_then(|parent| self.find_by_code(parent))
    }

    /// Chain of accounts from the root down to `account`
    fn ancestry(&self, account: &'a Account) -> Vec<&'a Account> {
        let mut chain = vec![account];
        let mut seen: HashSet<&str> = HashSet::from([account.code.as_str()]);
        let mut current = account;

        while let Some(parent) = self.get_parent(current) {
            if !seen.insert(parent.code.as_str()) {
                break;
            }
            chain.push(parent);
            current = parent;
        }

        chain.reverse();
        chain
    }

    /// Codes from root to account
    ///
    /// Example: "1102" → ["1000", "1100", "1102"]
    pub fn get_path(&self, account: &'a Account) -> Vec<String> {
        self.ancestry(account)
            .into_iter()
            .map(|a| a.code.clone())
            .collect()
    }

    /// Names from root to account joined with arrows
    ///
    /// Example: "1102" → "Assets → Current Assets → Cash - Operating Account"
    pub fn get_path_string(&self, account: &'a Account) -> String {
        self.ancestry(account)
            .into_iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Distance from the root (roots are 0)
    pub fn get_depth(&self, account: &'a Account) -> usize {
        self.ancestry(account).len() - 1
    }

    pub fn max_depth(&self) -> usize {
        self.accounts
            .iter()
            .map(|a| self.get_depth(a))
            .max()
            .unwrap_or(0)
    }

    pub fn accounts_at_depth(&self, depth: usize) -> Vec<&'a Account> {
        self.accounts
            .iter()
            .filter(|a| self.get_depth(*a) == depth)
            .collect()
    }

    /// Accounts nothing points to as parent
    pub fn leaf_accounts(&self) -> Vec<&'a Account> {
        self.accounts
            .iter()
            .filter(|a| !self.children.contains_key(a.code.as_str()))
            .collect()
    }

    /// True if `ancestor` lies on the path to `descendant` (a code is its own ancestor)
    pub fn is_ancestor(&self, ancestor: &str, descendant: &str) -> bool {
        let Some(account) = self.find_by_code(descendant) else {
            return false;
        };

        self.ancestry(account).iter().any(|a| a.code == ancestor)
    }

    /// All accounts below `code`, depth first in chart order
    pub fn get_descendants(&self, code: &str) -> Vec<&'a Account> {
        let mut descendants = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        if let Some(root) = self.find_by_code(code) {
            seen.insert(root.code.as_str());
        }
        self.collect_descendants(code, &mut seen, &mut descendants);
        descendants
    }

    fn collect_descendants(
        &self,
        code: &str,
        seen: &mut HashSet<&'a str>,
        out: &mut Vec<&'a Account>,
    ) {
        for child in self.get_children(code) {
            if !seen.insert(child.code.as_str()) {
                continue;
            }
            out.push(child);
            self.collect_descendants(&child.code, seen, out);
        }
    }

    /// Indented outline of the subtree under `root_code`
    ///
    /// ```text
    /// 3000 Equity
    ///   3100 Owner's Equity
    ///   3200 Retained Earnings
    /// ```
    pub fn render_tree(&self, root_code: &str) -> String {
        let Some(root) = self.find_by_code(root_code) else {
            return String::new();
        };

        let mut out = String::new();
        let mut seen: HashSet<&str> = HashSet::new();
        self.render_node(root, 0, &mut seen, &mut out);
        out
    }

    fn render_node(
        &self,
        account: &'a Account,
        indent: usize,
        seen: &mut HashSet<&'a str>,
        out: &mut String,
    ) {
        if !seen.insert(account.code.as_str()) {
            return;
        }

        out.push_str(&"  ".repeat(indent));
        out.push_str(&account.code);
        out.push(' ');
        out.push_str(&account.name);
        if let Some(regulation) = account.regulation.as_deref().filter(|r| !r.is_empty()) {
            out.push_str(&format!(" [{}]", regulation));
        }
        out.push('\n');

        for child in self.get_children(&account.code) {
            self.render_node(child, indent + 1, seen, out);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
