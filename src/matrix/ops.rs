use super::{Matrix2, MatrixView, Transposed};
use crate::prelude::*;
use std::ops::{Add, AddAssign, Mul, Sub};

pub trait Dot<I> {
    type Output;
    fn dot(self, rhs: I) -> Result<Self::Output>;
}

/// Element-wise product of two same-shaped matrices.
pub trait Hadamard<I> {
    type Output;
    fn hadamard(self, rhs: I) -> Result<Self::Output>;
}

pub trait Transpose<T> {
    fn t(&self) -> Transposed<'_, T>;
}

impl<T> Transpose<T> for Matrix2<T> {
    fn t(&self) -> Transposed<'_, T> {
        Transposed { inner: self }
    }
}

fn dot_views<T, L, R>(lhs: &L, rhs: &R) -> Result<Matrix2<T>>
where
    T: Mul<Output = T> + Default + AddAssign + Copy,
    L: MatrixView<T> + ?Sized,
    R: MatrixView<T> + ?Sized,
{
    if lhs.cols() != rhs.rows() {
        return Err(Error::DimensionMismatch {
            op: "dot",
            lhs: lhs.dim(),
            rhs: rhs.dim(),
        });
    }

    let mut data = Vec::with_capacity(lhs.rows() * rhs.cols());

    for lhs_row in 0..lhs.rows() {
        for rhs_col in 0..rhs.cols() {
            let mut sum = T::default();
            for n in 0..lhs.cols() {
                sum += *lhs.get(lhs_row, n) * *rhs.get(n, rhs_col)
            }
            data.push(sum);
        }
    }

    Ok(Matrix2 {
        data,
        dim: (lhs.rows(), rhs.cols()),
    })
}

impl<'a, T, R> Dot<&R> for &'a Matrix2<T>
where
    T: Mul<Output = T> + Default + AddAssign + Copy,
    R: MatrixView<T> + ?Sized,
{
    type Output = Matrix2<T>;
    fn dot(self, rhs: &R) -> Result<Self::Output> {
        dot_views(self, rhs)
    }
}

impl<'a, 'b, T, R> Dot<&R> for &'a Transposed<'b, T>
where
    T: Mul<Output = T> + Default + AddAssign + Copy,
    R: MatrixView<T> + ?Sized,
{
    type Output = Matrix2<T>;
    fn dot(self, rhs: &R) -> Result<Self::Output> {
        dot_views(self, rhs)
    }
}

fn zip_with<T, F>(op: &'static str, lhs: &Matrix2<T>, rhs: &Matrix2<T>, f: F) -> Result<Matrix2<T>>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    if lhs.dim != rhs.dim {
        return Err(Error::DimensionMismatch {
            op,
            lhs: lhs.dim,
            rhs: rhs.dim,
        });
    }

    let data = lhs
        .data
        .iter()
        .zip(rhs.data.iter())
        .map(|(&a, &b)| f(a, b))
        .collect();

    Ok(Matrix2 { data, dim: lhs.dim })
}

/// Adds two Matrix2s element-wise.
impl<'a, T> Add for &'a Matrix2<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = Result<Matrix2<T>>;
    fn add(self, rhs: Self) -> Self::Output {
        zip_with("add", self, rhs, |a, b| a + b)
    }
}

/// Subs two Matrix2s element-wise.
impl<'a, T> Sub for &'a Matrix2<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Result<Matrix2<T>>;
    fn sub(self, rhs: Self) -> Self::Output {
        zip_with("sub", self, rhs, |a, b| a - b)
    }
}

impl<'a, T> Hadamard<&Matrix2<T>> for &'a Matrix2<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Matrix2<T>;
    fn hadamard(self, rhs: &Matrix2<T>) -> Result<Self::Output> {
        zip_with("hadamard", self, rhs, |a, b| a * b)
    }
}
