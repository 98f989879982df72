//! Bias classification - weighted total to labeled band with display color

use serde::{Deserialize, Serialize};

use super::regime::Regime;

/// Trading bias label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bias {
    StrongBullish,
    Bullish,
    MildBullish,
    Neutral,
    MildBearish,
    Bearish,
    StrongBearish,
}

impl Bias {
    pub fn label(&self) -> &'static str {
        match self {
            Bias::StrongBullish => "Strong Bullish",
            Bias::Bullish => "Bullish",
            Bias::MildBullish => "Mild Bullish",
            Bias::Neutral => "Neutral",
            Bias::MildBearish => "Mild Bearish",
            Bias::Bearish => "Bearish",
            Bias::StrongBearish => "Strong Bearish",
        }
    }

    /// Hex color used by score cards and comparison views
    pub fn color(&self) -> &'static str {
        match self {
            Bias::StrongBullish => "#16a34a",
            Bias::Bullish => "#22c55e",
            Bias::MildBullish => "#86efac",
            Bias::Neutral => "#9ca3af",
            Bias::MildBearish => "#fca5a5",
            Bias::Bearish => "#ef4444",
            Bias::StrongBearish => "#b91c1c",
        }
    }
}

/// Band table for the single-currency model, sorted descending.
/// The first row whose threshold is <= total wins.
pub const SINGLE_BIAS_BANDS: &[(f64, Bias)] = &[
    (1.0, Bias::StrongBullish),
    (0.5, Bias::Bullish),
    (0.3, Bias::MildBullish),
    (-0.3, Bias::Neutral),
    (-0.5, Bias::MildBearish),
    (-1.0, Bias::Bearish),
];

/// Band table for the dual-currency model. Wider extremes: regime
/// weighting lets totals reach ±2, so "strong" starts at ±1.8.
pub const DUAL_BIAS_BANDS: &[(f64, Bias)] = &[
    (1.8, Bias::StrongBullish),
    (0.5, Bias::Bullish),
    (-0.5, Bias::Neutral),
    (-1.8, Bias::Bearish),
];

/// Walk a band table top-down; totals below every threshold fall to
/// Strong Bearish.
pub fn classify(total: f64, bands: &[(f64, Bias)]) -> Bias {
    for (threshold, bias) in bands {
        if total >= *threshold {
            return *bias;
        }
    }
    Bias::StrongBearish
}

/// Which scoring strategy produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    SingleCurrency,
    DualCurrencyRegime,
}

/// One factor's contribution to the weighted total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: String,
    pub score: f64,
    pub weight: f64,
    pub contribution: f64,
}

impl FactorScore {
    pub fn new(factor: &str, score: f64, weight: f64) -> Self {
        Self {
            factor: factor.to_string(),
            score,
            weight,
            contribution: score * weight,
        }
    }
}

/// Output of a scoring run. Built fresh on every call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub model: ModelKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regime: Option<Regime>,
    pub factors: Vec<FactorScore>,
    /// Weighted sum, rounded to 2 decimals
    pub total: f64,
    pub bias: Bias,
    pub bias_label: String,
    pub bias_color: String,
}

impl ScoreResult {
    pub fn new(
        model: ModelKind,
        regime: Option<Regime>,
        factors: Vec<FactorScore>,
        total: f64,
        bias: Bias,
    ) -> Self {
        Self {
            model,
            regime,
            factors,
            total,
            bias,
            bias_label: bias.label().to_string(),
            bias_color: bias.color().to_string(),
        }
    }
}
