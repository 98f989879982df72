//! Domain types: indicator records, saved scores, request payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::scoring::{Bias, ScoringModel};

/// Single-currency indicator record (7-factor model input).
/// Historical series default to empty when the field is omitted; an
/// empty series means the factor scores neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct SingleCurrencyRecord {
    #[validate(length(min = 1, max = 16))]
    pub currency: String,
    /// Central bank stance in [0,1]: 0 fully dovish, 1 fully hawkish
    #[validate(range(min = 0.0, max = 1.0))]
    pub cb_hawkish_index: f64,
    pub cpi_yoy: f64,
    pub cpi_target: f64,
    /// Change in CPI YoY over the last three months, percentage points
    pub cpi_3m_change: f64,
    pub nfp_latest: f64,
    #[serde(default)]
    pub nfp_trailing_12m: Vec<f64>,
    /// 1-month change in investment-grade credit spreads, percentage points
    pub credit_spread_1m_change: f64,
    pub vix: f64,
    pub pmi: f64,
    #[serde(default)]
    pub pmi_trailing_3y: Vec<f64>,
    pub ca_pct_gdp: f64,
    #[serde(default)]
    pub ca_trailing_5y: Vec<f64>,
    /// Geopolitical risk index level
    pub gpr: f64,
    #[serde(default)]
    pub gpr_trailing_3y: Vec<f64>,
}

/// Per-currency inputs for the pair model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct CurrencyIndicators {
    #[validate(length(min = 1, max = 16))]
    pub currency: String,
    /// Market-implied probability of a hike at the next meeting, percent
    #[validate(range(min = 0.0, max = 100.0))]
    pub hike_probability: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub cut_probability: f64,
    pub policy_rate: f64,
    pub cpi_yoy: f64,
    pub pmi: f64,
    /// Net institutional flow reading, roughly [-100, 100]
    pub flow_reading: f64,
}

/// Market-wide backdrop shared by both currencies of a pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketBackdrop {
    pub is_cb_week: bool,
    pub vix: f64,
    pub gold_1m_return: f64,
    pub spx_1m_return: f64,
    pub spx_new_high: bool,
}

impl MarketBackdrop {
    pub fn gold_outperforms(&self) -> bool {
        self.gold_1m_return > self.spx_1m_return
    }
}

/// Dual-currency indicator record (regime-weighted model input)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, validator::Validate)]
pub struct PairRecord {
    #[validate]
    pub base: CurrencyIndicators,
    #[validate]
    pub quote: CurrencyIndicators,
    pub market: MarketBackdrop,
}

/// A score snapshot kept for recall and comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScore {
    pub id: Uuid,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub total: f64,
    pub bias: Bias,
    pub record: ScoringModel,
}

/// POST /scores body. The server recomputes total and bias from the
/// record; clients never supply headline numbers.
#[derive(Debug, Deserialize, validator::Validate)]
pub struct SaveScoreRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate]
    pub record: ScoringModel,
}
