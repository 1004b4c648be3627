//! Core trait definitions shared across enrichvs crates.

/// A type that carries a numeric score (docking energy, similarity, etc.).
pub trait Scored {
    /// The score value.
    fn score(&self) -> f64;
}

/// A type that carries a binary ground-truth label.
pub trait Labeled {
    /// `true` if the item is a known hit (active), `false` for a decoy.
    fn is_hit(&self) -> bool;
}

/// Split a slice of scored, labelled items into parallel score and label
/// vectors, preserving order.
pub fn split_scored<T: Scored + Labeled>(items: &[T]) -> (Vec<f64>, Vec<bool>) {
    items.iter().map(|item| (item.score(), item.is_hit())).unzip()
}
