//! Scoring engine - two strategies behind one tagged interface
//!
//! Both models are pure functions from an indicator record to a
//! `ScoreResult`: no I/O, no clock, no randomness. Empty historical
//! series degrade to neutral (zero) contributions rather than failing.

pub mod bias;
pub mod dual;
pub mod regime;
pub mod single;

pub use bias::{Bias, FactorScore, ModelKind, ScoreResult};
pub use regime::Regime;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{PairRecord, SingleCurrencyRecord};

/// Strategy selector. The tag keeps both input schemas behind one body:
/// `{"model": "single_currency", ...}` or
/// `{"model": "dual_currency_regime", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ScoringModel {
    SingleCurrency(SingleCurrencyRecord),
    DualCurrencyRegime(PairRecord),
}

/// Evaluate a record with whichever strategy its tag names
pub fn evaluate(model: &ScoringModel) -> ScoreResult {
    match model {
        ScoringModel::SingleCurrency(record) => single::score(record),
        ScoringModel::DualCurrencyRegime(record) => dual::score(record),
    }
}

impl Validate for ScoringModel {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            ScoringModel::SingleCurrency(record) => record.validate(),
            ScoringModel::DualCurrencyRegime(record) => record.validate(),
        }
    }
}
