use limnostat_core::{Result, StatsError};

/// Summary statistics of one group, computed once per test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub n: usize,
    pub mean: f64,
    pub variance: f64,
    pub sd: f64,
}

impl SampleSummary {
    /// Standard error of the mean.
    pub fn std_error(&self) -> f64 {
        self.sd / (self.n as f64).sqrt()
    }
}

fn ensure_finite(group: &'static str, data: &[f64]) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(StatsError::NonFiniteObservation {
            group,
            index,
            value: data[index],
        }),
        None => Ok(()),
    }
}

fn ensure_len(group: &'static str, data: &[f64], required: usize) -> Result<()> {
    if data.len() < required {
        return Err(StatsError::InsufficientSample {
            group,
            required,
            actual: data.len(),
        });
    }
    Ok(())
}

fn raw_mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

fn raw_variance(data: &[f64], mean: f64) -> f64 {
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (data.len() - 1) as f64
}

/// Arithmetic mean. Requires at least one observation.
pub fn mean(data: &[f64]) -> Result<f64> {
    ensure_len("sample", data, 1)?;
    Ok(raw_mean(data))
}

/// Unbiased sample variance (Bessel's correction). Requires at least two observations.
pub fn variance(data: &[f64]) -> Result<f64> {
    ensure_len("sample", data, 2)?;
    Ok(raw_variance(data, raw_mean(data)))
}

pub fn std_dev(data: &[f64]) -> Result<f64> {
    variance(data).map(f64::sqrt)
}

/// Validate a group and compute everything a t-test needs from it.
pub fn summarize(group: &'static str, data: &[f64]) -> Result<SampleSummary> {
    ensure_finite(group, data)?;
    ensure_len(group, data, 2)?;

    let mean = raw_mean(data);
    let variance = raw_variance(data, mean);

    Ok(SampleSummary {
        n: data.len(),
        mean,
        variance,
        sd: variance.sqrt(),
    })
}

/// Cohen's d of a sample against a reference mean.
pub fn cohens_d_one_sample(data: &[f64], mu0: f64) -> Result<f64> {
    let summary = summarize("sample", data)?;
    Ok(standardized_difference(summary.mean - mu0, summary.sd))
}

/// Cohen's d for two groups with unequal variances, scaled by the root mean variance.
pub fn cohens_d_welch(sample1: &[f64], sample2: &[f64]) -> Result<f64> {
    let a = summarize("sample", sample1)?;
    let b = summarize("sample2", sample2)?;
    Ok(welch_effect_size(&a, &b))
}

pub(crate) fn welch_effect_size(a: &SampleSummary, b: &SampleSummary) -> f64 {
    let scale = ((a.variance + b.variance) / 2.0).sqrt();
    standardized_difference(a.mean - b.mean, scale)
}

/// `difference / scale`. A zero scale gives 0 for no difference and ±inf
/// otherwise, matching the t statistic of the same data.
pub(crate) fn standardized_difference(difference: f64, scale: f64) -> f64 {
    if scale == 0.0 {
        if difference == 0.0 {
            return 0.0;
        }
        return difference.signum() * f64::INFINITY;
    }
    difference / scale
}
