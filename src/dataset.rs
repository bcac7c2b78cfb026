use crate::{ClusterConfig, Point};
use rand::distributions::Uniform;
use rand::prelude::*;
use std::ops::DerefMut;

/// Generate a dataset of `num_points` points with coordinates drawn
/// uniformly from the given inclusive ranges.
///
/// This is the default dataset source of the sandbox; a hosting layer is free
/// to install its own point sets through [`crate::Session::set_dataset`]
/// instead.
///
/// ## Arguments
/// - **num_points**: amount of points to generate
/// - **x_range** / **y_range**: inclusive coordinate ranges, `low <= high`
pub fn generate_uniform(
    num_points: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
    config: &ClusterConfig<'_>,
) -> Vec<Point> {
    let xs = Uniform::new_inclusive(x_range.0, x_range.1);
    let ys = Uniform::new_inclusive(y_range.0, y_range.1);
    let mut rnd = config.rnd.borrow_mut();
    (0..num_points)
        .map(|_| Point::new(xs.sample(rnd.deref_mut()), ys.sample(rnd.deref_mut())))
        .collect()
}
