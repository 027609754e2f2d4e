use serde::{Deserialize, Serialize};

use super::alternative::{Alternative, TestKind};
use super::extended_float;
use super::interval::ConfidenceInterval;

// ===== One-Sample t-Test =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OneSampleResult {
    pub mean: f64,
    pub sd: f64,
    pub n: usize,
    pub mu0: f64,
    #[serde(with = "extended_float")]
    pub t: f64,
    pub df: f64,
    pub p_value: f64,
    pub alpha: f64,
    pub significant: bool,
    pub alternative: Alternative,
    /// Always two-sided at `1 - alpha`, whatever the alternative.
    #[serde(flatten)]
    pub ci: ConfidenceInterval,
    #[serde(with = "extended_float")]
    pub effect_size: f64,
    pub interpretation: String,
}

// ===== Two-Sample Welch t-Test =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WelchResult {
    pub mean1: f64,
    pub mean2: f64,
    pub sd1: f64,
    pub sd2: f64,
    pub n1: usize,
    pub n2: usize,
    pub diff_mean: f64,
    #[serde(with = "extended_float")]
    pub t: f64,
    /// Welch–Satterthwaite degrees of freedom, generally non-integer.
    pub df: f64,
    pub p_value: f64,
    pub alpha: f64,
    pub significant: bool,
    pub alternative: Alternative,
    #[serde(flatten)]
    pub ci: ConfidenceInterval,
    #[serde(with = "extended_float")]
    pub effect_size: f64,
    pub interpretation: String,
}

// ===== TOST Equivalence Test =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TostResult {
    pub mean: f64,
    pub sd: f64,
    pub n: usize,
    #[serde(with = "extended_float")]
    pub lower: f64,
    #[serde(with = "extended_float")]
    pub upper: f64,
    /// Statistic of whichever one-sided test has the larger p-value.
    #[serde(with = "extended_float")]
    pub t: f64,
    #[serde(with = "extended_float")]
    pub t_lower: f64,
    #[serde(with = "extended_float")]
    pub t_upper: f64,
    pub df: f64,
    /// `max(p_lower, p_upper)`
    pub p_value: f64,
    pub p_lower: f64,
    pub p_upper: f64,
    pub alpha: f64,
    pub equivalent: bool,
    /// Mirrors `equivalent`.
    pub significant: bool,
    pub alternative: Alternative,
    /// Two-sided at `1 - 2 * alpha`.
    #[serde(flatten)]
    pub ci: ConfidenceInterval,
    pub interpretation: String,
}

// ===== Tagged Result =====

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TestResult {
    OneSample(OneSampleResult),
    TwoSampleWelch(WelchResult),
    Tost(TostResult),
}

impl TestResult {
    pub fn kind(&self) -> TestKind {
        match self {
            TestResult::OneSample(_) => TestKind::OneSample,
            TestResult::TwoSampleWelch(_) => TestKind::TwoSampleWelch,
            TestResult::Tost(_) => TestKind::Tost,
        }
    }

    pub fn p_value(&self) -> f64 {
        match self {
            TestResult::OneSample(r) => r.p_value,
            TestResult::TwoSampleWelch(r) => r.p_value,
            TestResult::Tost(r) => r.p_value,
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            TestResult::OneSample(r) => r.alpha,
            TestResult::TwoSampleWelch(r) => r.alpha,
            TestResult::Tost(r) => r.alpha,
        }
    }

    pub fn significant(&self) -> bool {
        match self {
            TestResult::OneSample(r) => r.significant,
            TestResult::TwoSampleWelch(r) => r.significant,
            TestResult::Tost(r) => r.significant,
        }
    }

    pub fn t(&self) -> f64 {
        match self {
            TestResult::OneSample(r) => r.t,
            TestResult::TwoSampleWelch(r) => r.t,
            TestResult::Tost(r) => r.t,
        }
    }

    pub fn df(&self) -> f64 {
        match self {
            TestResult::OneSample(r) => r.df,
            TestResult::TwoSampleWelch(r) => r.df,
            TestResult::Tost(r) => r.df,
        }
    }

    pub fn confidence_interval(&self) -> ConfidenceInterval {
        match self {
            TestResult::OneSample(r) => r.ci,
            TestResult::TwoSampleWelch(r) => r.ci,
            TestResult::Tost(r) => r.ci,
        }
    }

    pub fn interpretation(&self) -> &str {
        match self {
            TestResult::OneSample(r) => &r.interpretation,
            TestResult::TwoSampleWelch(r) => &r.interpretation,
            TestResult::Tost(r) => &r.interpretation,
        }
    }
}

impl From<OneSampleResult> for TestResult {
    fn from(result: OneSampleResult) -> Self {
        TestResult::OneSample(result)
    }
}

impl From<WelchResult> for TestResult {
    fn from(result: WelchResult) -> Self {
        TestResult::TwoSampleWelch(result)
    }
}

impl From<TostResult> for TestResult {
    fn from(result: TostResult) -> Self {
        TestResult::Tost(result)
    }
}
