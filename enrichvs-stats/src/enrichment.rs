//! Early-recognition metrics for ranked virtual screening results.
//!
//! Given a score per compound and a hit/decoy label, [`Evaluator`] measures
//! how strongly the known hits concentrate at the top of the ranking:
//!
//! - **RIE** ([`Evaluator::rie`]) and **BEDROC** ([`Evaluator::bedroc`]) —
//!   exponentially weighted rank sums (Truchon & Bayly 2007).
//! - **Enrichment factor** ([`Evaluator::enrichment_factor`]) — hit rate in
//!   the top fraction of the list relative to the overall hit rate.
//! - **AUC** ([`Evaluator::auc`]) and **AUAC** ([`Evaluator::auac`]) —
//!   trapezoidal areas under the ROC and accumulation curves, optionally
//!   restricted to a top list (Fawcett 2006).
//!
//! Every call ranks the scores afresh; the evaluator holds no cache and is
//! never mutated after construction.

use std::fmt;

use enrichvs_core::{EnrichError, Result};

use crate::params::ScreeningParams;
use crate::rank::{rank_order, Direction};
use crate::scan::{checkpoints, walk, Counts, WalkEnd};

/// Item and hit counts of a validated dataset.
#[derive(Debug, Clone, Copy)]
struct Tally {
    n_items: usize,
    n_hits: usize,
}

impl Tally {
    fn n_decoys(&self) -> usize {
        self.n_items - self.n_hits
    }
}

/// Ranking evaluator over an immutable (scores, labels) pair.
///
/// # Example
///
/// ```
/// use enrichvs_stats::enrichment::Evaluator;
///
/// let scores = vec![0.9, 0.8, 0.7, 0.6, 0.5];
/// let labels = vec![true, false, true, false, false];
/// let eval = Evaluator::new(scores, labels);
///
/// let auc = eval.auc(1.0, true).unwrap();
/// assert!((auc - 5.0 / 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    scores: Vec<f64>,
    labels: Vec<bool>,
}

impl Evaluator {
    /// Wrap a score sequence and a parallel hit-label sequence.
    ///
    /// Lengths are not checked here; every metric rejects mismatched input
    /// with [`EnrichError::InputMismatch`].
    pub fn new(scores: impl Into<Vec<f64>>, labels: impl Into<Vec<bool>>) -> Self {
        Self {
            scores: scores.into(),
            labels: labels.into(),
        }
    }

    /// Number of labelled items.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no labelled items.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of items labelled as hits.
    pub fn n_hits(&self) -> usize {
        self.labels.iter().filter(|&&l| l).count()
    }

    /// Scores in input order.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Hit labels in input order.
    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    /// Robust Initial Enhancement, in the range `[0, +inf)`.
    ///
    /// `RIE = Σ exp(-α·rᵢ/N) / ((n/N)·(1 - e^-α) / (e^(α/N) - 1))` where `rᵢ`
    /// are the 1-based positions of the hits in the ranking. A random
    /// ranking scores about 1.
    ///
    /// # Errors
    ///
    /// [`EnrichError::InputMismatch`] for mismatched lengths,
    /// [`EnrichError::DegenerateInput`] when there are no items or no hits.
    pub fn rie(&self, alpha: f64, decreasing: bool) -> Result<f64> {
        let tally = self.validate("rie")?;
        let big_n = tally.n_items as f64;
        let n = tally.n_hits as f64;

        let s = self.rank_sum(alpha, decreasing);
        tracing::debug!(
            n_items = tally.n_items,
            n_hits = tally.n_hits,
            decreasing,
            rank_sum = s,
            "rie"
        );

        let random_sum = (n / big_n) * (1.0 - (-alpha).exp()) / ((alpha / big_n).exp() - 1.0);
        Ok(s / random_sum)
    }

    /// Boltzmann-Enhanced Discrimination of ROC, in the range `[0, 1]`.
    ///
    /// RIE rescaled so that a perfect ranking scores 1 and a fully inverted
    /// ranking scores 0.
    ///
    /// # Errors
    ///
    /// [`EnrichError::InputMismatch`] for mismatched lengths,
    /// [`EnrichError::DegenerateInput`] when there are no items, no hits or
    /// no decoys.
    pub fn bedroc(&self, alpha: f64, decreasing: bool) -> Result<f64> {
        let tally = self.validate("bedroc")?;
        require_decoys(&tally, "bedroc")?;
        let big_n = tally.n_items as f64;
        let n = tally.n_hits as f64;

        let s = self.rank_sum(alpha, decreasing);
        tracing::debug!(
            n_items = tally.n_items,
            n_hits = tally.n_hits,
            decreasing,
            rank_sum = s,
            "bedroc"
        );

        let ra = n / big_n;
        let ri = (big_n - n) / big_n;
        let random_sum =
            ra * (-alpha / big_n).exp() * (1.0 - (-alpha).exp()) / (1.0 - (-alpha / big_n).exp());
        let fac = ra * (alpha / 2.0).sinh()
            / ((alpha / 2.0).cosh() - (alpha / 2.0 - alpha * ra).cosh());
        let cte = 1.0 / (1.0 - (alpha * ri).exp());
        Ok(s / random_sum * fac + cte)
    }

    /// Enrichment factor of the top `top` fraction of the list, in the
    /// range `[0, +inf)`.
    ///
    /// The hit count at exactly `N·top` items is interpolated between the
    /// surrounding score changes. If the threshold is never reached before
    /// the last batch of tied scores (e.g. `top >= 1`), returns exactly 1.0.
    ///
    /// # Errors
    ///
    /// [`EnrichError::InputMismatch`] for mismatched lengths,
    /// [`EnrichError::DegenerateInput`] when there are no items or no hits.
    pub fn enrichment_factor(&self, top: f64, decreasing: bool) -> Result<f64> {
        let tally = self.validate("enrichment_factor")?;
        let big_n = tally.n_items as f64;
        let n = tally.n_hits as f64;
        let points = self.checkpoints(decreasing);
        tracing::debug!(
            n_items = tally.n_items,
            n_hits = tally.n_hits,
            decreasing,
            checkpoints = points.len(),
            "enrichment_factor"
        );

        let cutoff = big_n * top;
        match walk(&points, |cur| cur.total() as f64 >= cutoff, |_| {}) {
            WalkEnd::Crossed(seg) => {
                let rat = (cutoff - seg.prev.total() as f64) / seg.width();
                let tp_r = seg.prev.tp as f64 + rat * (seg.cur.tp - seg.prev.tp) as f64;
                tracing::trace!(prev = ?seg.prev, cur = ?seg.cur, rat, "enrichment_factor threshold reached");
                Ok((tp_r / cutoff) / (n / big_n))
            }
            WalkEnd::Exhausted(_) => Ok(1.0),
        }
    }

    /// Area under the ROC curve up to a false positive rate of `top`, in
    /// the range `[0, 1]`.
    ///
    /// The partial area is normalized by `top`, so a perfect ranking scores
    /// 1 for any `top`. With `top >= 1` this is the full-range AUC.
    ///
    /// # Errors
    ///
    /// [`EnrichError::InputMismatch`] for mismatched lengths,
    /// [`EnrichError::DegenerateInput`] when there are no items, no hits or
    /// no decoys.
    pub fn auc(&self, top: f64, decreasing: bool) -> Result<f64> {
        let tally = self.validate("auc")?;
        require_decoys(&tally, "auc")?;
        let n = tally.n_hits as f64;
        let n_decoys = tally.n_decoys() as f64;
        let points = self.checkpoints(decreasing);
        tracing::debug!(
            n_items = tally.n_items,
            n_hits = tally.n_hits,
            decreasing,
            checkpoints = points.len(),
            "auc"
        );

        let cutoff = n_decoys * top;
        let mut area = 0.0;
        let end = walk(
            &points,
            |cur| cur.fp as f64 >= cutoff,
            |seg| area += seg.fp_width() * seg.tp_sides() / 2.0,
        );
        match end {
            WalkEnd::Crossed(seg) => {
                let rat = (cutoff - seg.prev.fp as f64) / seg.fp_width();
                area += rat * seg.fp_width() * seg.tp_sides() / 2.0;
                tracing::trace!(prev = ?seg.prev, cur = ?seg.cur, rat, "auc threshold reached");
                Ok(area / (n * n_decoys * top))
            }
            WalkEnd::Exhausted(seg) => {
                area += seg.fp_width() * seg.tp_sides() / 2.0;
                Ok(area / (n * n_decoys))
            }
        }
    }

    /// Area under the accumulation curve (hits found vs. items screened) up
    /// to the top `top` fraction of the list, in the range `[0, 1]`.
    ///
    /// Unlike [`auc`](Self::auc), the top list is measured in items rather
    /// than decoys.
    ///
    /// # Errors
    ///
    /// [`EnrichError::InputMismatch`] for mismatched lengths,
    /// [`EnrichError::DegenerateInput`] when there are no items or no hits.
    pub fn auac(&self, top: f64, decreasing: bool) -> Result<f64> {
        let tally = self.validate("auac")?;
        let big_n = tally.n_items as f64;
        let n = tally.n_hits as f64;
        let points = self.checkpoints(decreasing);
        tracing::debug!(
            n_items = tally.n_items,
            n_hits = tally.n_hits,
            decreasing,
            checkpoints = points.len(),
            "auac"
        );

        let cutoff = big_n * top;
        let mut area = 0.0;
        let end = walk(
            &points,
            |cur| cur.total() as f64 >= cutoff,
            |seg| area += seg.width() * seg.tp_sides() / 2.0,
        );
        match end {
            WalkEnd::Crossed(seg) => {
                let n_right = seg.width();
                let rat = (cutoff - seg.prev.total() as f64) / n_right;
                area += rat * n_right * seg.tp_sides() / 2.0;
                tracing::trace!(prev = ?seg.prev, cur = ?seg.cur, rat, "auac threshold reached");
                Ok(area / (n * big_n * top))
            }
            WalkEnd::Exhausted(seg) => {
                area += seg.width() * seg.tp_sides() / 2.0;
                Ok(area / (n * big_n))
            }
        }
    }

    /// Compute all five metrics with one set of parameters.
    ///
    /// # Errors
    ///
    /// The first error any metric reports.
    pub fn summary(&self, params: &ScreeningParams) -> Result<MetricSummary> {
        let tally = self.validate("summary")?;
        Ok(MetricSummary {
            n_items: tally.n_items,
            n_hits: tally.n_hits,
            rie: self.rie(params.alpha, params.decreasing)?,
            bedroc: self.bedroc(params.alpha, params.decreasing)?,
            enrichment_factor: self.enrichment_factor(params.top, params.decreasing)?,
            auc: self.auc(params.top, params.decreasing)?,
            auac: self.auac(params.top, params.decreasing)?,
        })
    }

    fn validate(&self, metric: &str) -> Result<Tally> {
        if self.scores.len() != self.labels.len() {
            return Err(EnrichError::InputMismatch {
                scores: self.scores.len(),
                labels: self.labels.len(),
            });
        }
        if self.labels.is_empty() {
            return Err(EnrichError::DegenerateInput(format!("{}: empty dataset", metric)));
        }
        let n_hits = self.n_hits();
        if n_hits == 0 {
            return Err(EnrichError::DegenerateInput(format!("{}: no hits", metric)));
        }
        Ok(Tally {
            n_items: self.labels.len(),
            n_hits,
        })
    }

    fn order(&self, decreasing: bool) -> Vec<usize> {
        rank_order(&self.scores, Direction::from_decreasing(decreasing))
    }

    fn checkpoints(&self, decreasing: bool) -> Vec<Counts> {
        checkpoints(&self.scores, &self.labels, &self.order(decreasing))
    }

    /// `Σ exp(-α·r/N)` over the 1-based ranking positions `r` of the hits.
    fn rank_sum(&self, alpha: f64, decreasing: bool) -> f64 {
        let big_n = self.labels.len() as f64;
        self.order(decreasing)
            .iter()
            .enumerate()
            .filter(|&(_, &idx)| self.labels[idx])
            .map(|(pos, _)| (-alpha * (pos + 1) as f64 / big_n).exp())
            .sum()
    }
}

fn require_decoys(tally: &Tally, metric: &str) -> Result<()> {
    if tally.n_decoys() == 0 {
        return Err(EnrichError::DegenerateInput(format!("{}: no decoys", metric)));
    }
    Ok(())
}

/// All five metrics for one dataset and parameter set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricSummary {
    pub n_items: usize,
    pub n_hits: usize,
    pub rie: f64,
    pub bedroc: f64,
    pub enrichment_factor: f64,
    pub auc: f64,
    pub auac: f64,
}

impl fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of data points: {}", self.n_items)?;
        writeln!(f, "Number of hits: {}", self.n_hits)?;
        writeln!(f, "BEDROC: {:.3}", self.bedroc)?;
        writeln!(f, "EF: {:.3}", self.enrichment_factor)?;
        writeln!(f, "RIE: {:.3}", self.rie)?;
        writeln!(f, "AUAC: {:.3}", self.auac)?;
        write!(f, "AUC: {:.3}", self.auc)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
