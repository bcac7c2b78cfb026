mod furthestfirst;
mod kmeanplusplus;
mod manual;
mod randomsample;

use crate::error::{ClusterError, Result};
use crate::{ClusterConfig, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Centroid initialization strategy.
///
/// The string forms accepted by [`FromStr`] (and produced by serde) are the
/// names interactive front-ends send over the wire: `"Random"`,
/// `"Furthest First"`, `"KMeans++"` and `"Manual"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitMethod {
    /// Draw k distinct dataset points uniformly, without replacement.
    Random,
    /// Greedy max-min diversification: each next centroid is the dataset
    /// point furthest from all already-chosen ones.
    #[serde(rename = "Furthest First")]
    FurthestFirst,
    /// Weighted sampling proportional to squared distance from the nearest
    /// chosen centroid.
    #[serde(rename = "KMeans++")]
    KMeansPlusPlus,
    /// Pass the caller-supplied centroids through verbatim.
    Manual,
}

impl InitMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            InitMethod::Random => "Random",
            InitMethod::FurthestFirst => "Furthest First",
            InitMethod::KMeansPlusPlus => "KMeans++",
            InitMethod::Manual => "Manual",
        }
    }
}

impl fmt::Display for InitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InitMethod {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Random" => Ok(InitMethod::Random),
            "Furthest First" => Ok(InitMethod::FurthestFirst),
            "KMeans++" => Ok(InitMethod::KMeansPlusPlus),
            "Manual" => Ok(InitMethod::Manual),
            other => Err(ClusterError::InvalidInput(format!(
                "invalid initialization method: {other}"
            ))),
        }
    }
}

/// Produce an initial centroid set of length `k` from `dataset` using the
/// given strategy.
///
/// ## Arguments
/// - **dataset**: points to initialize from; never mutated
/// - **k**: requested amount of centroids, `k >= 1`
/// - **method**: initialization strategy
/// - **manual**: caller-supplied centroids, required iff `method` is
///   [`InitMethod::Manual`]
/// - **config**: supplies the random number generator
///
/// ## Errors
/// [`ClusterError::InvalidInput`] for `k == 0`, an empty dataset, `k` larger
/// than the dataset for [`InitMethod::Random`], or a missing/mis-sized manual
/// centroid list.
pub fn initialize(
    dataset: &[Point],
    k: usize,
    method: InitMethod,
    manual: Option<&[Point]>,
    config: &ClusterConfig<'_>,
) -> Result<Vec<Point>> {
    if k == 0 {
        return Err(ClusterError::InvalidInput(
            "number of clusters must be at least 1".into(),
        ));
    }
    if dataset.is_empty() {
        return Err(ClusterError::InvalidInput("dataset is empty".into()));
    }
    let centroids = match method {
        InitMethod::Random => randomsample::calculate(dataset, k, config)?,
        InitMethod::FurthestFirst => furthestfirst::calculate(dataset, k, config),
        InitMethod::KMeansPlusPlus => kmeanplusplus::calculate(dataset, k, config)?,
        InitMethod::Manual => manual::calculate(k, manual)?,
    };
    if centroids.len() != k {
        // unreachable with validated input, surfaced as a fatal internal error
        return Err(ClusterError::InitializationFailure(format!(
            "initializer produced {} centroids, expected {k}",
            centroids.len()
        )));
    }
    Ok(centroids)
}
