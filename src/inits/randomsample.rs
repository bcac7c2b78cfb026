use crate::error::{ClusterError, Result};
use crate::{ClusterConfig, Point};
use rand::prelude::*;
use std::ops::DerefMut;

/// Draw `k` distinct points uniformly, without replacement (a.k.a. Forgy).
pub(super) fn calculate(
    dataset: &[Point],
    k: usize,
    config: &ClusterConfig<'_>,
) -> Result<Vec<Point>> {
    if k > dataset.len() {
        return Err(ClusterError::InvalidInput(format!(
            "cannot sample {k} distinct centroids from a dataset of {} points",
            dataset.len()
        )));
    }
    Ok(dataset
        .choose_multiple(config.rnd.borrow_mut().deref_mut(), k)
        .cloned()
        .collect())
}
