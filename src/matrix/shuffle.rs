use super::{Matrix2, MatrixView};
use crate::prelude::*;
use rand::{seq::SliceRandom, Rng};

/// Shuffles the rows of `inputs` and `targets` with one shared permutation.
///
/// Both are copied first; row `i` of the returned inputs and row `i` of the
/// returned targets come from the same original row. The permutation is a
/// uniform Fisher-Yates shuffle of the row indices.
pub fn shuffle<T, A, B, R>(
    inputs: &A,
    targets: &B,
    rng: &mut R,
) -> Result<(Matrix2<T>, Matrix2<T>)>
where
    T: Clone,
    A: MatrixView<T> + ?Sized,
    B: MatrixView<T> + ?Sized,
    R: Rng + ?Sized,
{
    if inputs.rows() != targets.rows() {
        return Err(Error::DimensionMismatch {
            op: "shuffle",
            lhs: inputs.dim(),
            rhs: targets.dim(),
        });
    }

    let inputs = inputs.to_dense();
    let targets = targets.to_dense();

    let mut order: Vec<usize> = (0..inputs.rows()).collect();
    order.shuffle(rng);

    Ok((inputs.select_rows(&order), targets.select_rows(&order)))
}
