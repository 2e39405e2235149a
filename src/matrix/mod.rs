use crate::prelude::*;
use std::fmt;
use std::ops::{Index, IndexMut};

pub mod init;
pub mod ops;
pub mod shuffle;

#[derive(Debug, PartialEq, Clone)]
pub struct Matrix2<T> {
    data: Vec<T>,
    dim: (usize, usize),
}

/// Read-only access to anything shaped like a matrix.
///
/// Operations that only read their operands (products, copies) take a view,
/// so a transposed matrix can be fed in without materializing it first.
pub trait MatrixView<T> {
    fn dim(&self) -> (usize, usize);

    /// Element at `(row, col)`. Panics when out of bounds.
    fn get(&self, row: usize, col: usize) -> &T;

    fn rows(&self) -> usize {
        self.dim().0
    }

    fn cols(&self) -> usize {
        self.dim().1
    }

    /// Copies the view into a concrete, independently owned matrix.
    fn to_dense(&self) -> Matrix2<T>
    where
        T: Clone,
    {
        let (rows, cols) = self.dim();
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(self.get(row, col).clone());
            }
        }
        Matrix2 {
            data,
            dim: (rows, cols),
        }
    }
}

/// Zero-copy transpose of a [`Matrix2`], see [`ops::Transpose`].
#[derive(Debug, Clone, Copy)]
pub struct Transposed<'a, T> {
    inner: &'a Matrix2<T>,
}

impl<T> MatrixView<T> for Matrix2<T> {
    fn dim(&self) -> (usize, usize) {
        self.dim
    }

    fn get(&self, row: usize, col: usize) -> &T {
        &self[(row, col)]
    }
}

impl<'a, T> MatrixView<T> for Transposed<'a, T> {
    fn dim(&self) -> (usize, usize) {
        (self.inner.cols(), self.inner.rows())
    }

    fn get(&self, row: usize, col: usize) -> &T {
        &self.inner[(col, row)]
    }
}

impl<T: Clone> Matrix2<T> {
    pub fn clone_row_to_vec(&self, row: usize) -> Vec<T> {
        self.row(row).to_vec()
    }

    /// Builds a matrix by picking rows of `self` in the order given by `order`.
    /// Panics if an index is out of bounds.
    pub fn select_rows(&self, order: &[usize]) -> Matrix2<T> {
        let mut data = Vec::with_capacity(order.len() * self.cols());
        for &row in order {
            data.extend_from_slice(self.row(row));
        }
        Matrix2 {
            data,
            dim: (order.len(), self.cols()),
        }
    }

    /// Joins two same-shaped matrices side by side, giving `rows x 2*cols`.
    pub fn concat(&self, rhs: &Matrix2<T>) -> Result<Matrix2<T>> {
        if self.dim != rhs.dim {
            return Err(Error::DimensionMismatch {
                op: "concat",
                lhs: self.dim,
                rhs: rhs.dim,
            });
        }

        let mut data = Vec::with_capacity(self.data.len() * 2);
        for row in 0..self.rows() {
            data.extend_from_slice(self.row(row));
            data.extend_from_slice(rhs.row(row));
        }

        Ok(Matrix2 {
            data,
            dim: (self.rows(), self.cols() * 2),
        })
    }
}

impl<T: Default + Clone> Matrix2<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            dim: (rows, cols),
        }
    }
}

impl Matrix2<f64> {
    pub fn identity(n: usize) -> Self {
        let mut res = Matrix2::new(n, n);
        for i in 0..n {
            res[(i, i)] = 1.0;
        }
        res
    }

    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![1.0; rows * cols],
            dim: (rows, cols),
        }
    }
}

impl<T> Matrix2<T> {
    pub fn from_array<const R: usize, const C: usize>(arr: [[T; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);

        for row in arr {
            for x in row {
                data.push(x);
            }
        }

        Self { data, dim: (R, C) }
    }

    pub fn from_col(col_vec: Vec<T>) -> Self {
        Self {
            dim: (col_vec.len(), 1),
            data: col_vec,
        }
    }

    pub fn from_vec(vec: Vec<Vec<T>>) -> Result<Self> {
        let rows = vec.len();
        let cols = vec.first().map(|row| row.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(rows * cols);
        for row in vec {
            if cols != row.len() {
                return Err(Error::Ragged);
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    /// Builds a `rows x cols` matrix from row-major data.
    pub fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::DimensionMismatch {
                op: "from_raw",
                lhs: (rows, cols),
                rhs: (data.len(), 1),
            });
        }
        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.dim.0
    }

    pub fn cols(&self) -> usize {
        self.dim.1
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols();
        &self.data[start..start + self.cols()]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows()).map(move |row| self.row(row))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols();
        for col in 0..cols {
            self.data.swap(a * cols + col, b * cols + col);
        }
    }

    pub fn to_vec(self) -> Vec<Vec<T>> {
        let cols = self.cols();
        let mut res = Vec::with_capacity(self.rows());
        let mut it = self.data.into_iter();
        for _ in 0..self.dim.0 {
            res.push(it.by_ref().take(cols).collect());
        }
        res
    }

    /// Returns a new matrix with `f(row, col, value)` applied to every element.
    pub fn map<U, F>(&self, f: F) -> Matrix2<U>
    where
        T: Copy,
        F: Fn(usize, usize, T) -> U,
    {
        let cols = self.cols();
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &x)| f(i / cols, i % cols, x))
            .collect();

        Matrix2 {
            data,
            dim: self.dim,
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix2<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.cols() + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix2<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        let idx = i * self.cols() + j;
        &mut self.data[idx]
    }
}

/// One row per line, values separated by a space. A precision given to the
/// formatter (`{:.6}`) is applied to every value.
impl<T: fmt::Display> fmt::Display for Matrix2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{x:.p$}")?,
                    None => write!(f, "{x}")?,
                }
            }
        }
        Ok(())
    }
}

impl From<Matrix2<u32>> for Matrix2<f64> {
    fn from(value: Matrix2<u32>) -> Self {
        Self {
            dim: value.dim(),
            data: value.data.into_iter().map(|x| x as f64).collect(),
        }
    }
}

impl From<Matrix2<i32>> for Matrix2<f64> {
    fn from(value: Matrix2<i32>) -> Self {
        Self {
            dim: value.dim(),
            data: value.data.into_iter().map(|x| x as f64).collect(),
        }
    }
}
