use limnostat_core::{EngineConfig, Result, StatsError, TestKind, TestRequest, TestResult};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::hypothesis::{one_sample, tost, two_sample_welch};

/// Dispatches test requests from the host application to the hypothesis tests.
///
/// Holds nothing but its configuration; a single engine can serve concurrent
/// callers.
#[derive(Debug, Clone, Default)]
pub struct HypothesisEngine {
    config: EngineConfig,
}

impl HypothesisEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[instrument(skip(self, request), fields(
        kind = %request.kind,
        n = request.sample.len(),
        n2 = ?request.sample2.as_ref().map(Vec::len)
    ))]
    pub fn run(&self, request: &TestRequest) -> Result<TestResult> {
        if let Err(err) = request.validate() {
            warn!(error = %err, "Rejected invalid test request");
            return Err(err.into());
        }

        let alpha = request.alpha.unwrap_or(self.config.default_alpha);
        let alternative = request.alternative.unwrap_or(self.config.default_alternative);

        let result = match request.kind {
            TestKind::OneSample => {
                let mu0 = request.mu0.unwrap_or(self.config.default_mu0);
                one_sample(&request.sample, mu0, alpha, alternative).map(TestResult::from)
            }
            TestKind::TwoSampleWelch => {
                let sample2 = request.sample2.as_deref().ok_or_else(|| {
                    StatsError::Validation("two-sample-welch requires sample2".to_string())
                })?;
                two_sample_welch(&request.sample, sample2, alpha, alternative)
                    .map(TestResult::from)
            }
            TestKind::Tost => {
                let (Some(lower), Some(upper)) = (request.lower, request.upper) else {
                    return Err(StatsError::Validation(
                        "tost requires both lower and upper bounds".to_string(),
                    ));
                };
                tost(&request.sample, lower, upper, alpha).map(TestResult::from)
            }
        };

        match &result {
            Ok(outcome) => {
                debug!(
                    t = outcome.t(),
                    df = outcome.df(),
                    p_value = outcome.p_value(),
                    "Test statistic computed"
                );
                info!(
                    significant = outcome.significant(),
                    alpha = alpha,
                    "Hypothesis test complete"
                );
            }
            Err(err) => warn!(error = %err, "Hypothesis test failed"),
        }

        result
    }

    /// Parse a JSON request, run it, and serialize the result.
    pub fn run_json(&self, request: &str) -> Result<String> {
        let request: TestRequest = serde_json::from_str(request)?;
        let result = self.run(&request)?;
        Ok(serde_json::to_string(&result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limnostat_core::Alternative;

    #[test]
    fn test_defaults_fill_missing_options() {
        let config = EngineConfig::default()
            .with_default_alpha(0.1)
            .with_default_alternative(Alternative::Greater)
            .with_default_mu0(1.0);
        let engine = HypothesisEngine::with_config(config).unwrap();

        let mut request = TestRequest::one_sample(vec![1.2, 1.4, 0.9, 1.1], 0.0);
        request.mu0 = None;

        match engine.run(&request).unwrap() {
            TestResult::OneSample(result) => {
                assert_eq!(result.alpha, 0.1);
                assert_eq!(result.alternative, Alternative::Greater);
                assert_eq!(result.mu0, 1.0);
            }
            other => panic!("Expected one-sample result, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig::default().with_default_alpha(0.0);
        assert!(HypothesisEngine::with_config(config).is_err());
    }
}
