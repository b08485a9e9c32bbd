use nalgebra::Point3;

// Distances below this are treated as a point compared against itself and
// excluded from minima.
const COINCIDENCE_TOLERANCE: f64 = 2.0 * f64::EPSILON;

/// Minimum Euclidean distance between any point of `a` and any point of `b`,
/// coincident pairs excluded.
///
/// Returns `None` when either set is empty or every cross pair is coincident.
pub fn min_cross_distance(a: &[Point3<f64>], b: &[Point3<f64>]) -> Option<f64> {
    let mut min: Option<f64> = None;
    for p in a {
        for q in b {
            let distance = (p - q).norm();
            if distance < COINCIDENCE_TOLERANCE {
                continue;
            }
            if min.is_none_or(|current| distance < current) {
                min = Some(distance);
            }
        }
    }
    min
}

/// Minimum Euclidean distance between any two distinct points of `points`,
/// coincident pairs excluded.
pub fn min_pairwise_distance(points: &[Point3<f64>]) -> Option<f64> {
    let mut min: Option<f64> = None;
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            let distance = (p - q).norm();
            if distance < COINCIDENCE_TOLERANCE {
                continue;
            }
            if min.is_none_or(|current| distance < current) {
                min = Some(distance);
            }
        }
    }
    min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_cross_distance_finds_the_closest_pair() {
        let a = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)];
        let b = vec![Point3::new(0.0, 3.0, 0.0), Point3::new(10.0, 0.0, 4.0)];

        let min = min_cross_distance(&a, &b).unwrap();
        assert!((min - 3.0).abs() < 1e-12);
    }

    #[test]
    fn min_cross_distance_excludes_coincident_points() {
        let a = vec![Point3::new(1.0, 1.0, 1.0), Point3::new(5.0, 0.0, 0.0)];
        let b = vec![Point3::new(1.0, 1.0, 1.0)];

        // The coincident pair is skipped; the answer comes from the far point.
        let min = min_cross_distance(&a, &b).unwrap();
        assert!((min - (4.0f64.powi(2) + 2.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn min_cross_distance_of_identical_singletons_is_none() {
        let a = vec![Point3::new(2.0, 2.0, 2.0)];
        assert_eq!(min_cross_distance(&a, &a), None);
    }

    #[test]
    fn min_cross_distance_of_empty_set_is_none() {
        let a: Vec<Point3<f64>> = Vec::new();
        let b = vec![Point3::origin()];
        assert_eq!(min_cross_distance(&a, &b), None);
        assert_eq!(min_cross_distance(&b, &a), None);
    }

    #[test]
    fn min_pairwise_distance_ignores_duplicates() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.5),
        ];

        let min = min_pairwise_distance(&points).unwrap();
        assert!((min - 1.5).abs() < 1e-12);
    }

    #[test]
    fn min_pairwise_distance_needs_two_distinct_points() {
        assert_eq!(min_pairwise_distance(&[Point3::origin()]), None);
        assert_eq!(min_pairwise_distance(&[]), None);
    }
}
