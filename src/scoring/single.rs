//! Single-currency 7-factor model with fixed weights

use crate::models::SingleCurrencyRecord;
use crate::stats::{mean_std, round2, sign, z_score};

use super::bias::{classify, FactorScore, ModelKind, ScoreResult, SINGLE_BIAS_BANDS};

/// Factor weights in output order. Sum to 1.0.
const WEIGHTS: [(&str, f64); 7] = [
    ("central_bank", 0.24),
    ("inflation", 0.19),
    ("labor", 0.17),
    ("risk", 0.14),
    ("pmi", 0.11),
    ("current_account", 0.09),
    ("geopolitical", 0.06),
];

/// Score a single-currency record. Pure: no I/O, no clock, no randomness.
pub fn score(record: &SingleCurrencyRecord) -> ScoreResult {
    let scores = [
        central_bank_score(record.cb_hawkish_index),
        inflation_score(record.cpi_yoy, record.cpi_target, record.cpi_3m_change),
        labor_score(record.nfp_latest, &record.nfp_trailing_12m),
        risk_score(record.credit_spread_1m_change, record.vix),
        pmi_score(record.pmi, &record.pmi_trailing_3y),
        current_account_score(record.ca_pct_gdp, &record.ca_trailing_5y),
        geopolitical_score(record.gpr, &record.gpr_trailing_3y),
    ];

    let factors: Vec<FactorScore> = WEIGHTS
        .iter()
        .zip(scores.iter())
        .map(|((name, weight), score)| FactorScore::new(name, *score, *weight))
        .collect();

    let total = round2(factors.iter().map(|f| f.contribution).sum());
    let bias = classify(total, SINGLE_BIAS_BANDS);

    ScoreResult::new(ModelKind::SingleCurrency, None, factors, total, bias)
}

/// 2 x (hawkish - 0.5): fully dovish -1, balanced 0, fully hawkish +1
pub fn central_bank_score(hawkish_index: f64) -> f64 {
    2.0 * (hawkish_index - 0.5)
}

/// Four-quadrant rule: above target, rising CPI scores negative and
/// falling positive; below target the signs flip. Magnitude is
/// |3m change| x 10, capped at 2. At-target counts as below.
pub fn inflation_score(cpi_yoy: f64, cpi_target: f64, cpi_3m_change: f64) -> f64 {
    let target_side = if cpi_yoy > cpi_target { -1.0 } else { 1.0 };
    target_side * sign(cpi_3m_change) * (cpi_3m_change.abs() * 10.0).min(2.0)
}

/// Payrolls z-scored against the trailing year, squashed by tanh into
/// (-2, 2). Zero when there is no history.
pub fn labor_score(nfp_latest: f64, trailing_12m: &[f64]) -> f64 {
    match z_score(nfp_latest, trailing_12m, 0.1) {
        Some(z) => 2.0 * z.tanh(),
        None => 0.0,
    }
}

/// Credit spreads carry 70% of the risk read, the VIX bucket the rest.
/// Tightening spreads (negative change) score positive.
pub fn risk_score(credit_spread_1m_change: f64, vix: f64) -> f64 {
    let spread_component =
        sign(-credit_spread_1m_change) * (credit_spread_1m_change.abs() / 0.2).min(1.0);
    0.7 * spread_component + 0.3 * vix_bucket(vix)
}

/// Five VIX tiers: panic, stressed, normal, calm, complacent.
/// Also feeds the dual model's risk-appetite factor.
pub fn vix_bucket(vix: f64) -> f64 {
    if vix > 35.0 {
        -2.0
    } else if vix > 25.0 {
        -1.0
    } else if vix > 15.0 {
        0.0
    } else if vix > 10.0 {
        1.0
    } else {
        1.5
    }
}

/// Band classification against the trailing-3y mean. Upper band
/// boundaries belong to the band below, lower boundaries to the band
/// above. Zero when there is no history.
pub fn pmi_score(pmi: f64, trailing_3y: &[f64]) -> f64 {
    let stats = match mean_std(trailing_3y) {
        Some(stats) => stats,
        None => return 0.0,
    };
    let (m, s) = (stats.mean, stats.std);
    if pmi > m + 1.5 * s {
        1.5
    } else if pmi > m + 0.5 * s {
        0.75
    } else if pmi >= m - 0.5 * s {
        0.0
    } else if pmi >= m - 1.5 * s {
        -1.0
    } else {
        -2.0
    }
}

/// External balance z-scored against five years, softened by tanh(z/2)
pub fn current_account_score(ca_pct_gdp: f64, trailing_5y: &[f64]) -> f64 {
    match z_score(ca_pct_gdp, trailing_5y, 0.1) {
        Some(z) => 2.0 * (z / 2.0).tanh(),
        None => 0.0,
    }
}

/// Sign-inverted: geopolitical risk above its norm is bearish for the
/// currency. The tiny std floor lets flat indices still register spikes.
pub fn geopolitical_score(gpr: f64, trailing_3y: &[f64]) -> f64 {
    match z_score(gpr, trailing_3y, 1e-5) {
        Some(z) => -2.0 * (z / 2.0).tanh(),
        None => 0.0,
    }
}
