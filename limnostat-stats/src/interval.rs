use limnostat_core::{Alternative, ConfidenceInterval, Result, StatsError};

use crate::descriptive::summarize;
use crate::distribution::inv_student_t;
use crate::hypothesis::{welch_df, welch_std_error};

fn ensure_level(level: f64) -> Result<()> {
    if !(level > 0.0 && level < 1.0) {
        return Err(StatsError::InvalidParameter(format!(
            "confidence level must lie in (0, 1), got {}",
            level
        )));
    }
    Ok(())
}

/// t-based interval around `estimate` with the given standard error.
///
/// `greater` yields `[lower, +inf)`, `less` yields `(-inf, upper]`.
///
/// The critical value comes from `inv_student_t` and so never exceeds 15.
/// With one degree of freedom (a sample of two) that caps two-sided levels
/// at about 0.958; higher levels still return an interval, but one narrower
/// than the exact t interval, and it no longer agrees with the p-value.
pub fn confidence_interval(
    estimate: f64,
    std_error: f64,
    df: f64,
    level: f64,
    alternative: Alternative,
) -> Result<ConfidenceInterval> {
    ensure_level(level)?;

    let ci = match alternative {
        Alternative::TwoSided => {
            let critical = inv_student_t(1.0 - (1.0 - level) / 2.0, df)?;
            let margin = critical * std_error;
            ConfidenceInterval::new(level, estimate - margin, estimate + margin)
        }
        Alternative::Greater => {
            let critical = inv_student_t(level, df)?;
            ConfidenceInterval::new(level, estimate - critical * std_error, f64::INFINITY)
        }
        Alternative::Less => {
            let critical = inv_student_t(level, df)?;
            ConfidenceInterval::new(level, f64::NEG_INFINITY, estimate + critical * std_error)
        }
    };

    Ok(ci)
}

/// Interval for the mean of one sample.
pub fn mean_interval(
    sample: &[f64],
    level: f64,
    alternative: Alternative,
) -> Result<ConfidenceInterval> {
    let summary = summarize("sample", sample)?;
    confidence_interval(
        summary.mean,
        summary.std_error(),
        (summary.n - 1) as f64,
        level,
        alternative,
    )
}

/// Interval for `mean(sample1) - mean(sample2)` with Welch degrees of freedom.
pub fn welch_difference_interval(
    sample1: &[f64],
    sample2: &[f64],
    level: f64,
    alternative: Alternative,
) -> Result<ConfidenceInterval> {
    let a = summarize("sample", sample1)?;
    let b = summarize("sample2", sample2)?;
    confidence_interval(
        a.mean - b.mean,
        welch_std_error(&a, &b),
        welch_df(&a, &b),
        level,
        alternative,
    )
}
