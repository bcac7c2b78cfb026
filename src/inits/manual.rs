use crate::error::{ClusterError, Result};
use crate::Point;

/// Pass the caller-supplied centroids through verbatim.
///
/// The supplied list must exist and contain exactly `k` points; nothing is
/// validated against the dataset, manual centroids may lie anywhere.
pub(super) fn calculate(k: usize, manual: Option<&[Point]>) -> Result<Vec<Point>> {
    let points = manual.ok_or_else(|| {
        ClusterError::InvalidInput("manual initialization requires a centroid list".into())
    })?;
    if points.len() != k {
        return Err(ClusterError::InvalidInput(format!(
            "expected {k} centroids, but got {}",
            points.len()
        )));
    }
    Ok(points.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_supplied_points_unmodified() {
        let supplied = vec![Point::new(-1.0, 2.5), Point::new(101.0, 0.0)];
        assert_eq!(calculate(2, Some(&supplied)).unwrap(), supplied);
    }

    #[test]
    fn mismatched_length_fails() {
        let supplied = vec![Point::new(0.0, 0.0)];
        assert!(matches!(
            calculate(3, Some(&supplied)),
            Err(ClusterError::InvalidInput(_))
        ));
    }

    #[test]
    fn missing_list_fails() {
        assert!(matches!(calculate(1, None), Err(ClusterError::InvalidInput(_))));
    }
}
