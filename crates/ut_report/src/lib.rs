//! ut_report — Report model + renderers (text/JSON).
//!
//! Rules:
//! - No I/O here. Callers pass exact statistics already computed.
//! - Every value is rendered by `DecimalRenderer` (truncated, never rounded at
//!   the last kept digit).
//! - Fixed line order: chi-squared V, K+, K−, poker V.

#![deny(unsafe_code)]

pub mod decimal;

pub use decimal::{render_truncated, DecimalRenderer, DEFAULT_DIGITS};

use ut_algo::{ChiSquaredOutcome, KsStatistics};
use ut_core::ExactRational;

// ===== Model =====

/// One rendered statistic. `counts` is present for bucketed tests.
#[cfg_attr(feature = "render_json", derive(serde::Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatisticLine {
    pub name: &'static str,
    pub value: String,
    #[cfg_attr(feature = "render_json", serde(skip_serializing_if = "Option::is_none"))]
    pub counts: Option<Vec<u64>>,
}

/// Rendered report, in emission order.
#[cfg_attr(feature = "render_json", derive(serde::Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportModel {
    pub sample_size: usize,
    pub digits: u32,
    pub statistics: Vec<StatisticLine>,
}

/// Build the model from the exact results of the three tests.
pub fn build_model(
    sample_size: usize,
    renderer: &DecimalRenderer,
    chi_squared: &ChiSquaredOutcome,
    ks: &KsStatistics,
    poker: &ChiSquaredOutcome,
) -> ReportModel {
    let bucketed = |name: &'static str, o: &ChiSquaredOutcome| StatisticLine {
        name,
        value: renderer.render(&o.v),
        counts: Some(o.counts.as_slice().to_vec()),
    };
    let plain = |name: &'static str, v: &ExactRational| StatisticLine {
        name,
        value: renderer.render(v),
        counts: None,
    };

    ReportModel {
        sample_size,
        digits: renderer.digits(),
        statistics: vec![
            bucketed("chi_squared", chi_squared),
            plain("ks_plus", &ks.k_plus),
            plain("ks_minus", &ks.k_minus),
            bucketed("poker", poker),
        ],
    }
}

// ===== Renderers =====

/// One value per line, each terminated by `\n`.
pub fn render_text(model: &ReportModel) -> String {
    let mut out = String::new();
    for line in &model.statistics {
        out.push_str(&line.value);
        out.push('\n');
    }
    out
}

/// Pretty JSON object (key order follows the model).
#[cfg(feature = "render_json")]
pub fn render_json(model: &ReportModel) -> Result<String, serde_json::Error> {
    let mut s = serde_json::to_string_pretty(model)?;
    s.push('\n');
    Ok(s)
}

// ===== Tests =====
