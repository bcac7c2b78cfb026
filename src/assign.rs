use crate::Point;

/// Map every dataset point to the index of its nearest centroid.
///
/// Ties are broken towards the lowest centroid index, which keeps the result
/// deterministic. Cost is O(N·K); nothing is mutated.
///
/// `centroids` must be non-empty (the session guarantees `k >= 1`).
pub fn assign(dataset: &[Point], centroids: &[Point]) -> Vec<usize> {
    dataset
        .iter()
        .map(|point| {
            centroids
                .iter()
                .enumerate()
                .map(|(label, c)| (label, point.distance(*c)))
                // strict `<` keeps the first (lowest) label on equal distance
                .fold((0usize, f64::INFINITY), |best, cur| if cur.1 < best.1 { cur } else { best })
                .0
        })
        .collect()
}

/// Sum of each point's distance to its assigned centroid.
pub fn distance_sum(dataset: &[Point], centroids: &[Point], assignments: &[usize]) -> f64 {
    dataset
        .iter()
        .zip(assignments.iter().cloned())
        .map(|(point, label)| point.distance(centroids[label]))
        .sum()
}
