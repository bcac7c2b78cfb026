use crate::{ClusterConfig, Point};
use rand::prelude::*;

/// Furthest-first traversal: pick one point at random, then repeatedly take
/// the dataset point maximizing its minimum distance to the already-chosen
/// centroids. Deterministic given the first pick; ties go to the point
/// encountered first in dataset order.
pub(super) fn calculate(dataset: &[Point], k: usize, config: &ClusterConfig<'_>) -> Vec<Point> {
    let first_idx = config.rnd.borrow_mut().gen_range(0..dataset.len());
    let mut centroids = vec![dataset[first_idx]];
    extend(dataset, k, &mut centroids);
    centroids
}

/// Greedy max-min growth of `centroids` up to length `k`.
pub(super) fn extend(dataset: &[Point], k: usize, centroids: &mut Vec<Point>) {
    while centroids.len() < k {
        let mut best = (0usize, f64::NEG_INFINITY);
        for (idx, point) in dataset.iter().enumerate() {
            let nearest = centroids
                .iter()
                .map(|c| point.distance(*c))
                .fold(f64::INFINITY, f64::min);
            // strict `>` keeps the first-encountered point on a tie
            if nearest > best.1 {
                best = (idx, nearest);
            }
        }
        centroids.push(dataset[best.0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_picks_are_maximally_spread() {
        let dataset = vec![
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ];
        let mut centroids = vec![Point::new(0.0, 0.0)];
        extend(&dataset, 3, &mut centroids);
        assert_eq!(
            centroids,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 0.0)]
        );
    }

    #[test]
    fn duplicates_appear_once_spread_is_exhausted() {
        // with k above the dataset size the max-min distance collapses to
        // zero and already-chosen points get re-picked instead of panicking
        let dataset = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let mut centroids = vec![Point::new(0.0, 0.0)];
        extend(&dataset, 3, &mut centroids);
        assert_eq!(centroids.len(), 3);
        assert_eq!(centroids[1], Point::new(1.0, 0.0));
        assert_eq!(centroids[2], Point::new(0.0, 0.0));
    }
}
