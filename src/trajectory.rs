// ---------------------------------------------------------------------------
// Integration output
// ---------------------------------------------------------------------------

/// Sampled solution of a whole-interval integration run.
///
/// `xs[i]` is the independent-variable value matching `ys[i]`; index 0 holds
/// the initial condition. The final x entry denotes "one `dx` past the last
/// interior sample" and may land beyond the requested upper bound when `dx`
/// does not divide the interval evenly.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<Y> {
    pub xs: Vec<f64>,
    pub ys: Vec<Y>,
}

impl<Y> Trajectory<Y> {
    /// Number of (x, y) samples, initial condition included.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Final (x, y) pair.
    pub fn last(&self) -> Option<(f64, &Y)> {
        match (self.xs.last(), self.ys.last()) {
            (Some(&x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    /// Iterate over aligned (x, y) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &Y)> {
        self.xs.iter().copied().zip(self.ys.iter())
    }
}
