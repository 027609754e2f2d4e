use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use super::alternative::{Alternative, TestKind};

/// A single hypothesis-test invocation as supplied by the calling application.
///
/// Options a test does not use are ignored (`sample2` for one-sample, `mu0` for TOST).
/// `alpha`, `alternative` and `mu0` fall back to the engine configuration when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[validate(schema(function = "validate_request_shape"))]
pub struct TestRequest {
    #[serde(rename = "type")]
    pub kind: TestKind,

    pub sample: Vec<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mu0: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample2: Option<Vec<f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,

    #[validate(range(exclusive_min = 0.0, exclusive_max = 1.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative: Option<Alternative>,
}

impl TestRequest {
    fn bare(kind: TestKind, sample: Vec<f64>) -> Self {
        Self {
            kind,
            sample,
            mu0: None,
            sample2: None,
            lower: None,
            upper: None,
            alpha: None,
            alternative: None,
        }
    }

    pub fn one_sample(sample: Vec<f64>, mu0: f64) -> Self {
        Self {
            mu0: Some(mu0),
            ..Self::bare(TestKind::OneSample, sample)
        }
    }

    pub fn two_sample_welch(sample: Vec<f64>, sample2: Vec<f64>) -> Self {
        Self {
            sample2: Some(sample2),
            ..Self::bare(TestKind::TwoSampleWelch, sample)
        }
    }

    pub fn tost(sample: Vec<f64>, lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
            ..Self::bare(TestKind::Tost, sample)
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = Some(alternative);
        self
    }
}

fn shape_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_request_shape(request: &TestRequest) -> Result<(), ValidationError> {
    match request.kind {
        TestKind::OneSample => Ok(()),
        TestKind::TwoSampleWelch => match request.sample2 {
            Some(_) => Ok(()),
            None => Err(shape_error(
                "sample2_required",
                "two-sample-welch requires sample2",
            )),
        },
        TestKind::Tost => match (request.lower, request.upper) {
            (Some(lower), Some(upper)) if lower < upper => Ok(()),
            (Some(_), Some(_)) => Err(shape_error(
                "bounds_order",
                "tost requires lower < upper",
            )),
            _ => Err(shape_error(
                "bounds_required",
                "tost requires both lower and upper bounds",
            )),
        },
    }
}
