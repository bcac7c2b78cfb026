use crate::error::{ClusterError, Result};
use crate::{ClusterConfig, Point};
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use std::ops::DerefMut;

/// K-Means++ initialization.
///
/// The first centroid is a uniform pick. Every following centroid is sampled
/// across all dataset points, weighted by the squared distance to the nearest
/// already-chosen centroid. Sampling is with replacement, so centroids may
/// coincide.
pub(super) fn calculate(
    dataset: &[Point],
    k: usize,
    config: &ClusterConfig<'_>,
) -> Result<Vec<Point>> {
    let mut rnd = config.rnd.borrow_mut();
    let first_idx = rnd.gen_range(0..dataset.len());
    let mut centroids = vec![dataset[first_idx]];

    for _ in 1..k {
        // squared distance from each point to its nearest chosen centroid
        let weights: Vec<f64> = dataset
            .iter()
            .map(|point| {
                centroids
                    .iter()
                    .map(|c| point.distance(*c))
                    .fold(f64::INFINITY, f64::min)
                    .powi(2)
            })
            .collect();

        let idx = if weights.iter().sum::<f64>() > 0.0 {
            WeightedIndex::new(&weights)
                .map_err(|e| {
                    ClusterError::InitializationFailure(format!(
                        "k-means++ weighting failed: {e}"
                    ))
                })?
                .sample(rnd.deref_mut())
        } else {
            // every point coincides with a chosen centroid; the weighted
            // draw degenerates, fall back to a uniform pick
            rnd.gen_range(0..dataset.len())
        };
        centroids.push(dataset[idx]);
    }
    Ok(centroids)
}
