//! Market regime detection for the dual-currency model

use serde::{Deserialize, Serialize};

use crate::models::MarketBackdrop;

/// Categorical market condition that selects the factor weight vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    CbWeek,
    RiskOff,
    RiskOn,
    Neutral,
}

impl Regime {
    pub fn label(&self) -> &'static str {
        match self {
            Regime::CbWeek => "CB Week",
            Regime::RiskOff => "Risk-Off",
            Regime::RiskOn => "Risk-On",
            Regime::Neutral => "Neutral",
        }
    }

    /// Weights over [rate_policy, growth_momentum, real_rate_edge,
    /// risk_appetite, money_flow]. Each vector sums to 1.0.
    pub fn weights(&self) -> [f64; 5] {
        match self {
            Regime::CbWeek => [0.40, 0.15, 0.20, 0.10, 0.15],
            Regime::RiskOff => [0.20, 0.10, 0.15, 0.40, 0.15],
            Regime::RiskOn => [0.20, 0.30, 0.10, 0.15, 0.25],
            Regime::Neutral => [0.30, 0.20, 0.20, 0.15, 0.15],
        }
    }
}

/// Decision tree with strict priority: a central-bank week overrides
/// everything, then risk-off conditions, then risk-on, else neutral.
pub fn detect(market: &MarketBackdrop) -> Regime {
    if market.is_cb_week {
        return Regime::CbWeek;
    }
    if market.vix > 25.0 || market.gold_outperforms() {
        return Regime::RiskOff;
    }
    if market.vix < 18.0 && market.spx_new_high {
        return Regime::RiskOn;
    }
    Regime::Neutral
}
