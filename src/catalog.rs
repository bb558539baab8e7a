// 📚 Catalog - the chart's literal data, kept apart from the assembly logic
//
// The standard chart lives in data/standard-accounts.csv and is embedded at
// compile time. Each row states its parent explicitly; no parent is derived
// from the shape of a code.
//
// Format:
//   code,name,type,parent,currency,regulation
//   - '#' lines are comments, blank lines are skipped
//   - empty parent   → root account
//   - empty currency → base currency
//   - 5 fields       → no regulation annotation
//   - 6 fields       → annotation present (may be the empty string)

use crate::account::{Account, AccountType};
use crate::error::{CoaError, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

/// Embedded standard catalog
pub const STANDARD_CATALOG: &str = include_str!("../data/standard-accounts.csv");

const HEADERS: [&str; 6] = ["code", "name", "type", "parent", "currency", "regulation"];

/// Parse the embedded standard catalog
pub fn standard_accounts(base_currency: &str) -> Result<Vec<Account>> {
    parse_catalog(STANDARD_CATALOG, base_currency)
}

/// Parse catalog text into accounts, preserving row order
pub fn parse_catalog(text: &str, base_currency: &str) -> Result<Vec<Account>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    if headers.iter().ne(HEADERS.iter().copied()) {
        return Err(CoaError::catalog(
            1,
            format!("expected header {:?}, got {:?}", HEADERS.join(","), headers.iter().collect::<Vec<_>>().join(",")),
        ));
    }

    let mut accounts = Vec::new();

    for result in rdr.records() {
        let record = result?;
        accounts.push(parse_row(&record, base_currency)?);
    }

    debug!(count = accounts.len(), "parsed catalog");

    Ok(accounts)
}

fn parse_row(record: &StringRecord, base_currency: &str) -> Result<Account> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() != 5 && record.len() != 6 {
        return Err(CoaError::catalog(
            line,
            format!("expected 5 or 6 fields, got {}", record.len()),
        ));
    }

    let field = |i: usize| record.get(i).unwrap_or("");

    let account_type: AccountType = field(2)
        .parse()
        .map_err(|reason: String| CoaError::catalog(line, reason))?;

    let parent = match field(3) {
        "" => None,
        code => Some(code.to_string()),
    };

    let currency = match field(4) {
        "" => base_currency,
        code => code,
    };

    let mut account = Account::new(field(0), field(1), account_type, parent, currency);

    // Sixth column present means the row carries an annotation, even if empty
    if let Some(regulation) = record.get(5) {
        account = account.with_regulation(regulation);
    }

    Ok(account)
}

// ============================================================================
// TESTS
// ============================================================================
