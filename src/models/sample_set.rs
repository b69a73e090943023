/// One run's worth of sampled points.
///
/// `xs`, `ys` and `inside` are parallel: entry `i` of each describes the same
/// point. The constructor is crate-private so every `SampleSet` in circulation
/// came out of the estimator with matching lengths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
    inside: Vec<bool>,
}

impl SampleSet {
    pub(crate) fn new(xs: Vec<f64>, ys: Vec<f64>, inside: Vec<bool>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        debug_assert_eq!(xs.len(), inside.len());
        Self { xs, ys, inside }
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn inside_flags(&self) -> &[bool] {
        &self.inside
    }

    /// N, the number of points in the run.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate `(x, y, inside)` triples in sampling order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, bool)> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .zip(&self.inside)
            .map(|((&x, &y), &inside)| (x, y, inside))
    }

    /// Split the points into (inside, outside) coordinate lists, keeping order.
    pub fn partition_points(&self) -> (Vec<[f64; 2]>, Vec<[f64; 2]>) {
        let mut inside = Vec::new();
        let mut outside = Vec::new();
        for (x, y, is_inside) in self.iter() {
            if is_inside {
                inside.push([x, y]);
            } else {
                outside.push([x, y]);
            }
        }
        (inside, outside)
    }
}
