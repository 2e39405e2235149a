use rand::Rng;

use crate::matrix::{shuffle::shuffle, Matrix2};
use crate::prelude::*;

/// Inputs and targets where row `i` of both is the same sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Matrix2<f64>,
    targets: Matrix2<f64>,
}

impl Dataset {
    pub fn new(inputs: Matrix2<f64>, targets: Matrix2<f64>) -> Result<Self> {
        if inputs.rows() != targets.rows() {
            return Err(Error::DimensionMismatch {
                op: "dataset",
                lhs: inputs.dim(),
                rhs: targets.dim(),
            });
        }
        Ok(Self { inputs, targets })
    }

    /// Seven 3-bit samples labelled by their first bit.
    pub fn first_feature() -> Self {
        Self {
            inputs: Matrix2::from_array([
                [0, 0, 0],
                [0, 1, 0],
                [0, 0, 1],
                [0, 1, 1],
                [1, 0, 0],
                [1, 1, 0],
                [1, 1, 1],
            ])
            .into(),
            targets: Matrix2::from_col(vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]),
        }
    }

    /// Returns a copy with rows permuted, pairs kept together.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self> {
        let (inputs, targets) = shuffle(&self.inputs, &self.targets, rng)?;
        Ok(Self { inputs, targets })
    }

    pub fn inputs(&self) -> &Matrix2<f64> {
        &self.inputs
    }

    pub fn targets(&self) -> &Matrix2<f64> {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.inputs.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn first_feature_shape() {
        let data = Dataset::first_feature();
        assert_eq!(data.inputs().dim(), (7, 3));
        assert_eq!(data.targets().dim(), (7, 1));
        assert_eq!(data.len(), 7);

        for (x, t) in data.inputs().iter_rows().zip(data.targets().iter_rows()) {
            assert_eq!(x[0], t[0]);
        }
    }

    #[test]
    fn shuffled_keeps_labels_with_rows() {
        let data = Dataset::first_feature();
        let shuffled = data.shuffled(&mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(shuffled.len(), data.len());
        for (x, t) in shuffled.inputs().iter_rows().zip(shuffled.targets().iter_rows()) {
            assert_eq!(x[0], t[0]);
        }
    }

    #[test]
    fn new_rejects_row_mismatch() {
        let inputs = Matrix2::ones(3, 2);
        let targets = Matrix2::ones(2, 1);
        assert!(matches!(
            Dataset::new(inputs, targets),
            Err(Error::DimensionMismatch { op: "dataset", .. })
        ));
    }
}
