use limnostat_core::{
    Alternative, OneSampleResult, Result, StatsError, TostResult, WelchResult,
};

use crate::descriptive::{standardized_difference, summarize, welch_effect_size, SampleSummary};
use crate::distribution::student_t_cdf;
use crate::interval::confidence_interval;

/// p-value of a t statistic under the given alternative.
pub fn p_value(t: f64, df: f64, alternative: Alternative) -> Result<f64> {
    let cdf = student_t_cdf(t, df)?;

    let p = match alternative {
        Alternative::Greater => 1.0 - cdf,
        Alternative::Less => cdf,
        Alternative::TwoSided => {
            if t > 0.0 {
                2.0 * (1.0 - cdf)
            } else {
                2.0 * cdf
            }
        }
    };

    Ok(p)
}

pub(crate) fn ensure_alpha(alpha: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(StatsError::InvalidParameter(format!(
            "alpha must lie in (0, 1), got {}",
            alpha
        )));
    }
    Ok(())
}

fn ensure_finite_param(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(StatsError::InvalidParameter(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// `difference / std_error`, with a zero standard error giving 0 or ±inf.
fn t_statistic(difference: f64, std_error: f64) -> f64 {
    if std_error == 0.0 {
        if difference == 0.0 {
            return 0.0;
        }
        return difference.signum() * f64::INFINITY;
    }
    difference / std_error
}

pub(crate) fn welch_std_error(a: &SampleSummary, b: &SampleSummary) -> f64 {
    (a.variance / a.n as f64 + b.variance / b.n as f64).sqrt()
}

/// Welch–Satterthwaite degrees of freedom.
///
/// Falls back to `n1 + n2 - 2` when both groups have zero variance.
pub(crate) fn welch_df(a: &SampleSummary, b: &SampleSummary) -> f64 {
    let n1 = a.n as f64;
    let n2 = b.n as f64;
    let va = a.variance / n1;
    let vb = b.variance / n2;

    if va + vb == 0.0 {
        return n1 + n2 - 2.0;
    }

    (va + vb).powi(2) / (va.powi(2) / (n1 - 1.0) + vb.powi(2) / (n2 - 1.0))
}

fn relation(alternative: Alternative) -> &'static str {
    match alternative {
        Alternative::TwoSided => "differs from",
        Alternative::Greater => "is greater than",
        Alternative::Less => "is less than",
    }
}

/// One-sample t-test of the sample mean against `mu0`.
///
/// The attached interval is always the two-sided `1 - alpha` interval for the mean.
pub fn one_sample(
    sample: &[f64],
    mu0: f64,
    alpha: f64,
    alternative: Alternative,
) -> Result<OneSampleResult> {
    ensure_alpha(alpha)?;
    ensure_finite_param("mu0", mu0)?;

    let summary = summarize("sample", sample)?;
    let std_error = summary.std_error();
    let df = (summary.n - 1) as f64;

    let t = t_statistic(summary.mean - mu0, std_error);
    let p_value = p_value(t, df, alternative)?;
    let significant = p_value < alpha;
    let ci = confidence_interval(summary.mean, std_error, df, 1.0 - alpha, Alternative::TwoSided)?;

    let interpretation = if significant {
        format!(
            "Mean {:.4} {} {} at alpha = {} (p = {:.4})",
            summary.mean,
            relation(alternative),
            mu0,
            alpha,
            p_value
        )
    } else {
        format!(
            "No evidence that mean {:.4} {} {} at alpha = {} (p = {:.4})",
            summary.mean,
            relation(alternative),
            mu0,
            alpha,
            p_value
        )
    };

    Ok(OneSampleResult {
        mean: summary.mean,
        sd: summary.sd,
        n: summary.n,
        mu0,
        t,
        df,
        p_value,
        alpha,
        significant,
        alternative,
        ci,
        effect_size: standardized_difference(summary.mean - mu0, summary.sd),
        interpretation,
    })
}

/// Welch's two-sample t-test of `mean(sample1) - mean(sample2)` against zero.
pub fn two_sample_welch(
    sample1: &[f64],
    sample2: &[f64],
    alpha: f64,
    alternative: Alternative,
) -> Result<WelchResult> {
    ensure_alpha(alpha)?;

    let a = summarize("sample", sample1)?;
    let b = summarize("sample2", sample2)?;

    let diff_mean = a.mean - b.mean;
    let std_error = welch_std_error(&a, &b);
    let df = welch_df(&a, &b);

    let t = t_statistic(diff_mean, std_error);
    let p_value = p_value(t, df, alternative)?;
    let significant = p_value < alpha;
    let ci = confidence_interval(diff_mean, std_error, df, 1.0 - alpha, Alternative::TwoSided)?;

    let interpretation = if significant {
        format!(
            "Mean of the first group ({:.4}) {} the second ({:.4}) at alpha = {} (p = {:.4})",
            a.mean,
            relation(alternative),
            b.mean,
            alpha,
            p_value
        )
    } else {
        format!(
            "No evidence that the first group ({:.4}) {} the second ({:.4}) at alpha = {} (p = {:.4})",
            a.mean,
            relation(alternative),
            b.mean,
            alpha,
            p_value
        )
    };

    Ok(WelchResult {
        mean1: a.mean,
        mean2: b.mean,
        sd1: a.sd,
        sd2: b.sd,
        n1: a.n,
        n2: b.n,
        diff_mean,
        t,
        df,
        p_value,
        alpha,
        significant,
        alternative,
        ci,
        effect_size: welch_effect_size(&a, &b),
        interpretation,
    })
}

/// Two one-sided tests for equivalence of the mean to `[lower, upper]`.
///
/// Equivalence needs both "mean <= lower" and "mean >= upper" rejected at
/// `alpha`. The interval is the two-sided `1 - 2 * alpha` interval, so `alpha`
/// must be below 0.5.
pub fn tost(sample: &[f64], lower: f64, upper: f64, alpha: f64) -> Result<TostResult> {
    ensure_alpha(alpha)?;
    if alpha >= 0.5 {
        return Err(StatsError::InvalidParameter(format!(
            "tost needs alpha < 0.5 for a 1 - 2 * alpha interval, got {}",
            alpha
        )));
    }
    if lower.is_nan() || upper.is_nan() || lower >= upper {
        return Err(StatsError::InvalidParameter(format!(
            "equivalence bounds must satisfy lower < upper, got [{}, {}]",
            lower, upper
        )));
    }

    let summary = summarize("sample", sample)?;
    let std_error = summary.std_error();
    let df = (summary.n - 1) as f64;

    let t_lower = t_statistic(summary.mean - lower, std_error);
    let t_upper = t_statistic(summary.mean - upper, std_error);
    let p_lower = p_value(t_lower, df, Alternative::Greater)?;
    let p_upper = p_value(t_upper, df, Alternative::Less)?;

    let equivalent = p_lower < alpha && p_upper < alpha;
    let (t, p_value) = if p_lower >= p_upper {
        (t_lower, p_lower)
    } else {
        (t_upper, p_upper)
    };

    let ci = confidence_interval(
        summary.mean,
        std_error,
        df,
        1.0 - 2.0 * alpha,
        Alternative::TwoSided,
    )?;

    let interpretation = if equivalent {
        format!(
            "Mean {:.4} is equivalent to [{}, {}] at alpha = {} (p_lower = {:.4}, p_upper = {:.4})",
            summary.mean, lower, upper, alpha, p_lower, p_upper
        )
    } else {
        format!(
            "Equivalence of mean {:.4} to [{}, {}] not established at alpha = {} (p_lower = {:.4}, p_upper = {:.4})",
            summary.mean, lower, upper, alpha, p_lower, p_upper
        )
    };

    Ok(TostResult {
        mean: summary.mean,
        sd: summary.sd,
        n: summary.n,
        lower,
        upper,
        t,
        t_lower,
        t_upper,
        df,
        p_value,
        p_lower,
        p_upper,
        alpha,
        equivalent,
        significant: equivalent,
        alternative: Alternative::TwoSided,
        ci,
        interpretation,
    })
}
