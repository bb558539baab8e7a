// Generator configuration
//
// Everything here is fixed at build time: the generator takes no flags and
// reads no environment. The struct exists so tests and library callers can
// build a chart with different envelope metadata.

use serde::{Deserialize, Serialize};

/// File the standalone generator writes into the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "comprehensive-coa.json";

/// Currency applied to catalog rows that leave it blank
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Envelope metadata for a generated chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub name: String,
    pub description: String,
    pub version: String,
    pub base_currency: String,
    pub regulation_frameworks: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            name: "Comprehensive Standard Chart of Accounts".to_string(),
            description:
                "Comprehensive CoA with 500+ accounts covering multiple industries and business types"
                    .to_string(),
            version: "1.0".to_string(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            regulation_frameworks: vec![
                "SOX".to_string(),
                "Basel III".to_string(),
                "MiFID II".to_string(),
                "GDPR".to_string(),
            ],
        }
    }
}
