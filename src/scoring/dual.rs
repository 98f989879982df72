//! Dual-currency 5-factor model with regime-selected weights
//!
//! Every factor is a base-minus-quote differential clamped to its own
//! bound; positive totals favor the base currency of the pair.

use crate::models::{CurrencyIndicators, PairRecord};
use crate::stats::{round2, sign};

use super::bias::{classify, FactorScore, ModelKind, ScoreResult, DUAL_BIAS_BANDS};
use super::regime;
use super::single::vix_bucket;

/// Factor names in weight-vector order
const FACTORS: [&str; 5] = [
    "rate_policy",
    "growth_momentum",
    "real_rate_edge",
    "risk_appetite",
    "money_flow",
];

/// Score a currency pair under the detected market regime
pub fn score(record: &PairRecord) -> ScoreResult {
    let regime = regime::detect(&record.market);
    let weights = regime.weights();

    let scores = [
        rate_policy_score(&record.base, &record.quote),
        growth_momentum_score(record.base.pmi, record.quote.pmi),
        real_rate_edge_score(&record.base, &record.quote),
        risk_appetite_score(record),
        money_flow_score(record.base.flow_reading, record.quote.flow_reading),
    ];

    let factors: Vec<FactorScore> = FACTORS
        .iter()
        .zip(weights.iter().zip(scores.iter()))
        .map(|(name, (weight, score))| FactorScore::new(name, *score, *weight))
        .collect();

    let total = round2(factors.iter().map(|f| f.contribution).sum());
    let bias = classify(total, DUAL_BIAS_BANDS);

    ScoreResult::new(ModelKind::DualCurrencyRegime, Some(regime), factors, total, bias)
}

/// Policy lean differential, clamped to ±2
pub fn rate_policy_score(base: &CurrencyIndicators, quote: &CurrencyIndicators) -> f64 {
    (policy_lean(base) - policy_lean(quote)).clamp(-2.0, 2.0)
}

/// Net hike-minus-cut probability mapped to five leans
fn policy_lean(currency: &CurrencyIndicators) -> f64 {
    let net = currency.hike_probability - currency.cut_probability;
    if net >= 70.0 {
        2.0
    } else if net >= 30.0 {
        1.0
    } else if net > -30.0 {
        0.0
    } else if net > -70.0 {
        -1.0
    } else {
        -2.0
    }
}

/// PMI level differential, clamped to ±1.5
pub fn growth_momentum_score(base_pmi: f64, quote_pmi: f64) -> f64 {
    (pmi_level_score(base_pmi) - pmi_level_score(quote_pmi)).clamp(-1.5, 1.5)
}

/// Absolute PMI bands at 53/50/47/45; 50 is the expansion pivot
fn pmi_level_score(pmi: f64) -> f64 {
    if pmi > 53.0 {
        1.5
    } else if pmi > 50.0 {
        0.75
    } else if pmi > 47.0 {
        0.0
    } else if pmi > 45.0 {
        -0.75
    } else {
        -1.5
    }
}

/// Real policy-rate differential squashed into ±1.5
pub fn real_rate_edge_score(base: &CurrencyIndicators, quote: &CurrencyIndicators) -> f64 {
    let base_real = base.policy_rate - base.cpi_yoy;
    let quote_real = quote.policy_rate - quote.cpi_yoy;
    1.5 * ((base_real - quote_real) / 2.0).tanh()
}

/// Risk appetite signed by which side of the pair owns the carry:
/// appetite helps the higher-yield currency, aversion helps the
/// lower-yield one. Equal policy rates leave the factor at zero.
pub fn risk_appetite_score(record: &PairRecord) -> f64 {
    let market = &record.market;
    let appetite = vix_bucket(market.vix) / 2.0
        + if market.spx_new_high { 0.25 } else { 0.0 }
        - if market.gold_outperforms() { 0.25 } else { 0.0 };
    let carry_sign = sign(record.base.policy_rate - record.quote.policy_rate);
    (appetite * carry_sign).clamp(-1.0, 1.0)
}

/// Flow differential: 50 points of net institutional flow per score
/// point, clamped to ±1
pub fn money_flow_score(base_flow: f64, quote_flow: f64) -> f64 {
    ((base_flow - quote_flow) / 50.0).clamp(-1.0, 1.0)
}
