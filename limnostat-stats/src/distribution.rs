use limnostat_core::{Result, StatsError};

use crate::special::beta_inc;

/// Search bracket for the inverse CDF. Quantiles beyond it clamp to the edge.
pub const INVERSE_BRACKET: (f64, f64) = (-15.0, 15.0);

/// Fixed number of bisection halvings; there is no tolerance-based exit.
pub const BISECTION_ITERATIONS: usize = 80;

fn ensure_df(df: f64) -> Result<()> {
    if !(df > 0.0 && df.is_finite()) {
        return Err(StatsError::domain(
            "student_t",
            format!("degrees of freedom must be positive and finite, got {}", df),
        ));
    }
    Ok(())
}

/// P(T <= t) for Student's t with `df` degrees of freedom.
///
/// Uses I_x(df/2, 1/2) with x = df / (df + t²), which is the two-tailed mass
/// beyond |t|. Infinite `t` is accepted.
pub fn student_t_cdf(t: f64, df: f64) -> Result<f64> {
    ensure_df(df)?;
    if t.is_nan() {
        return Err(StatsError::domain("student_t_cdf", "t is NaN"));
    }

    let x = df / (df + t * t);
    let tail = beta_inc(x, df / 2.0, 0.5)?;

    if t > 0.0 {
        Ok(1.0 - tail / 2.0)
    } else {
        Ok(tail / 2.0)
    }
}

/// Quantile function of Student's t by bisection over `INVERSE_BRACKET`.
pub fn inv_student_t(prob: f64, df: f64) -> Result<f64> {
    ensure_df(df)?;
    if !(prob > 0.0 && prob < 1.0) {
        return Err(StatsError::domain(
            "inv_student_t",
            format!("probability must lie in (0, 1), got {}", prob),
        ));
    }

    let (mut lo, mut hi) = INVERSE_BRACKET;
    for _ in 0..BISECTION_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if student_t_cdf(mid, df)? < prob {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(0.5 * (lo + hi))
}

/// Student's t distribution with a validated, possibly non-integer, `df`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT {
    df: f64,
}

impl StudentT {
    pub fn new(df: f64) -> Result<Self> {
        ensure_df(df)?;
        Ok(Self { df })
    }

    pub fn df(&self) -> f64 {
        self.df
    }

    pub fn cdf(&self, t: f64) -> Result<f64> {
        student_t_cdf(t, self.df)
    }

    /// Upper-tail probability P(T > t).
    pub fn sf(&self, t: f64) -> Result<f64> {
        self.cdf(t).map(|p| 1.0 - p)
    }

    pub fn inverse_cdf(&self, prob: f64) -> Result<f64> {
        inv_student_t(prob, self.df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_center() {
        for df in [0.5, 1.0, 3.7, 30.0, 1e6] {
            assert_eq!(student_t_cdf(0.0, df).unwrap(), 0.5);
        }
    }

    #[test]
    fn test_cdf_infinite_t() {
        assert_eq!(student_t_cdf(f64::INFINITY, 4.0).unwrap(), 1.0);
        assert_eq!(student_t_cdf(f64::NEG_INFINITY, 4.0).unwrap(), 0.0);
    }

    #[test]
    fn test_cauchy_case() {
        // df = 1 is the standard Cauchy: F(1) = 0.75
        assert!((student_t_cdf(1.0, 1.0).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_df() {
        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::new(-2.0).is_err());
        assert!(StudentT::new(f64::NAN).is_err());
    }

    #[test]
    fn test_inverse_rejects_boundary_probabilities() {
        assert!(inv_student_t(0.0, 5.0).is_err());
        assert!(inv_student_t(1.0, 5.0).is_err());
    }

    #[test]
    fn test_inverse_median() {
        assert!(inv_student_t(0.5, 7.0).unwrap().abs() < 1e-12);
    }
}
