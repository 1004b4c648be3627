//! Evaluation parameters shared by the enrichment metrics.

use enrichvs_core::{EnrichError, Result};

/// Parameters for a full metric evaluation.
///
/// `alpha` drives the exponential weighting of [`rie`] and [`bedroc`];
/// `top` is the fraction of the list examined by [`enrichment_factor`],
/// [`auc`] and [`auac`].
///
/// [`rie`]: crate::enrichment::Evaluator::rie
/// [`bedroc`]: crate::enrichment::Evaluator::bedroc
/// [`enrichment_factor`]: crate::enrichment::Evaluator::enrichment_factor
/// [`auc`]: crate::enrichment::Evaluator::auc
/// [`auac`]: crate::enrichment::Evaluator::auac
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScreeningParams {
    /// Early-recognition weight for RIE and BEDROC.
    pub alpha: f64,
    /// Fraction of the ranked list (EF, AUAC) or of the decoys (AUC)
    /// considered as the top list.
    pub top: f64,
    /// Rank higher scores first.
    pub decreasing: bool,
}

impl Default for ScreeningParams {
    fn default() -> Self {
        Self {
            alpha: 0.20,
            top: 0.05,
            decreasing: false,
        }
    }
}

impl ScreeningParams {
    /// Validated constructor.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` is not finite and positive, or `top` is
    /// not finite and positive.
    pub fn new(alpha: f64, top: f64, decreasing: bool) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(EnrichError::InvalidInput(format!(
                "alpha must be finite and > 0, got {}",
                alpha
            )));
        }
        if !top.is_finite() || top <= 0.0 {
            return Err(EnrichError::InvalidInput(format!(
                "top must be finite and > 0, got {}",
                top
            )));
        }
        Ok(Self {
            alpha,
            top,
            decreasing,
        })
    }

    /// Set the early-recognition weight.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the top-list fraction.
    pub fn with_top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    /// Set the ranking direction.
    pub fn with_decreasing(mut self, decreasing: bool) -> Self {
        self.decreasing = decreasing;
        self
    }
}
