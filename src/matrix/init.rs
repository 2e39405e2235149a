use super::Matrix2;
use crate::prelude::*;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Kaiming (He) initialization: every entry is an independent draw from
/// N(0, sqrt(2 / (rows * cols))).
///
/// The whole matrix is treated as the fan, which for a single `n x 1` weight
/// column is the number of inputs.
pub fn kaiming<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix2<f64>> {
    let length = rows * cols;
    if length == 0 {
        return Ok(Matrix2::new(rows, cols));
    }

    let sigma = (2.0 / length as f64).sqrt();
    let normal = Normal::new(0.0, sigma)?;

    let data = (0..length).map(|_| normal.sample(rng)).collect();
    Matrix2::from_raw(rows, cols, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn kaiming_shape() {
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(kaiming(3, 1, &mut rng).unwrap().dim(), (3, 1));
        assert_eq!(kaiming(4, 5, &mut rng).unwrap().dim(), (4, 5));
        assert_eq!(kaiming(0, 5, &mut rng).unwrap().dim(), (0, 5));
    }

    #[test]
    fn kaiming_spread_matches_fan() {
        let mut rng = StdRng::seed_from_u64(42);
        let (rows, cols) = (200, 100);
        let weights = kaiming(rows, cols, &mut rng).unwrap();

        let values = weights.as_slice();
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        let expected = (2.0 / (rows * cols) as f64).sqrt();
        assert!(mean.abs() < 0.5 * expected, "mean {mean}");
        assert!((var.sqrt() - expected).abs() < 0.05 * expected, "std {}", var.sqrt());
    }

    #[test]
    fn kaiming_is_reproducible_from_seed() {
        let a = kaiming(3, 1, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = kaiming(3, 1, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }
}
