use crate::{ClusterConfig, Point};
use rand::prelude::*;

/// Recompute each centroid as the coordinate-wise mean of the points
/// assigned to its label.
///
/// A cluster that received no points is re-seeded with a point drawn
/// uniformly from the full dataset instead of being left undefined, so the
/// result always contains exactly `k` centroids, in label order.
///
/// `dataset` must be non-empty and `assignments` positionally aligned with it
/// (the session guarantees both).
pub fn update(
    dataset: &[Point],
    assignments: &[usize],
    k: usize,
    config: &ClusterConfig<'_>,
) -> Vec<Point> {
    (0..k)
        .map(|label| {
            let mut sum = Point::new(0.0, 0.0);
            let mut count = 0usize;
            for (point, assignment) in dataset.iter().zip(assignments.iter().cloned()) {
                if assignment == label {
                    sum.x += point.x;
                    sum.y += point.y;
                    count += 1;
                }
            }
            if count > 0 {
                Point::new(sum.x / count as f64, sum.y / count as f64)
            } else {
                // lost cluster: re-seed with a random dataset point
                let idx = config.rnd.borrow_mut().gen_range(0..dataset.len());
                dataset[idx]
            }
        })
        .collect()
}
