//! Tie-batched walk over a ranked list.
//!
//! The threshold metrics ([`enrichment_factor`], [`auc`], [`auac`]) all walk
//! the ranking while accumulating true/false positive counts, but only look
//! at the counts where the score changes. Items sharing a score form one
//! batch, so the order within a tie never biases the result.
//!
//! [`enrichment_factor`]: crate::enrichment::Evaluator::enrichment_factor
//! [`auc`]: crate::enrichment::Evaluator::auc
//! [`auac`]: crate::enrichment::Evaluator::auac

/// Cumulative true/false positive counts at a point of the walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Hits seen so far.
    pub tp: usize,
    /// Decoys seen so far.
    pub fp: usize,
}

impl Counts {
    /// Items seen so far.
    #[inline]
    pub fn total(&self) -> usize {
        self.tp + self.fp
    }
}

/// One step of the walk: the counts at the previous checkpoint and at the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub prev: Counts,
    pub cur: Counts,
}

impl Segment {
    /// Decoys added across the segment.
    #[inline]
    pub fn fp_width(&self) -> f64 {
        (self.cur.fp - self.prev.fp) as f64
    }

    /// Items (hits and decoys) added across the segment.
    #[inline]
    pub fn width(&self) -> f64 {
        (self.cur.total() - self.prev.total()) as f64
    }

    /// Sum of the hit counts at both ends, the trapezoid's parallel sides.
    #[inline]
    pub fn tp_sides(&self) -> f64 {
        (self.cur.tp + self.prev.tp) as f64
    }
}

/// How a thresholded walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    /// The threshold was reached at a checkpoint; the segment leading up to
    /// it has not been visited.
    Crossed(Segment),
    /// The walk ran out of checkpoints; the final segment, which is never
    /// tested against the threshold, has not been visited.
    Exhausted(Segment),
}

/// Cumulative counts at every score change of the ranked list.
///
/// The first entry is the origin, followed by the counts after each batch
/// of equal scores. NaN never equals the previous score, so every NaN is a
/// batch of its own.
pub fn checkpoints(scores: &[f64], labels: &[bool], order: &[usize]) -> Vec<Counts> {
    let mut points = vec![Counts::default()];
    let mut counts = Counts::default();
    let mut prev_score = f64::NEG_INFINITY;
    let mut started = false;

    for &j in order {
        if started && scores[j] != prev_score {
            points.push(counts);
        }
        started = true;
        prev_score = scores[j];
        if labels[j] {
            counts.tp += 1;
        } else {
            counts.fp += 1;
        }
    }
    if started {
        points.push(counts);
    }

    points
}

/// Walk the checkpoints until `reached` holds.
///
/// The threshold is tested at every checkpoint except the last, starting
/// with the origin (whose segment runs from the origin to itself). Each
/// segment that ends before the threshold is handed to `visit`.
///
/// `points` must hold at least the origin.
pub fn walk(
    points: &[Counts],
    mut reached: impl FnMut(Counts) -> bool,
    mut visit: impl FnMut(Segment),
) -> WalkEnd {
    let last = points.len().saturating_sub(1);
    let mut prev = points.first().copied().unwrap_or_default();

    for &cur in &points[..last] {
        let seg = Segment { prev, cur };
        if reached(cur) {
            return WalkEnd::Crossed(seg);
        }
        visit(seg);
        prev = cur;
    }

    WalkEnd::Exhausted(Segment {
        prev,
        cur: points.get(last).copied().unwrap_or_default(),
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────
