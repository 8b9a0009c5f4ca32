use crate::{
    errors::ShapeError,
    iterator::Iter,
    numeric::Numeric,
    shape::{Shape, ShapeKind, Shaped},
    storage::Storage,
    vector::{ColVector, RowVector},
};
use num::Zero;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::ops::{Add, Index, IndexMut, Mul};

#[derive(Debug, Clone)]
pub struct Matrix<T> {
    storage: Storage<T>,
    shape: Shape,
}

impl<T> Matrix<T> {
    /// Creates an empty 0x0 matrix.
    pub fn new() -> Self {
        Self::from_parts(Shape::default(), Vec::new())
    }

    pub(crate) fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(
            shape.num_elems(),
            data.len(),
            "storage length must match matrix shape"
        );
        Self {
            storage: Storage::new(data),
            shape,
        }
    }

    /// Builds a matrix from row-major `data`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        if data.len() != rows * cols {
            return Err(ShapeError::ElementCount {
                rows,
                cols,
                found: data.len(),
            });
        }

        Ok(Self::from_parts(Shape::new(rows, cols), data))
    }

    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(&[usize; 2]) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(&[i, j]));
            }
        }

        Self::from_parts(Shape::new(rows, cols), data)
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    pub fn get(&self, idx: &[usize; 2]) -> Option<&T> {
        self.storage.index(idx, self.shape).ok()
    }

    pub fn get_mut(&mut self, idx: &[usize; 2]) -> Option<&mut T> {
        self.storage.index_mut(idx, self.shape).ok()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn transpose(self) -> Self {
        Self {
            storage: self.storage.transpose(),
            shape: self.shape.transpose(),
        }
    }
}

impl<T: Copy> Matrix<T> {
    /// Elements in logical row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().values().copied().collect()
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.storage.into_normal(self.shape).data
    }

    pub fn row(&self, i: usize) -> Option<RowVector<T>> {
        if i >= self.rows() {
            return None;
        }
        Some((0..self.cols()).map(|j| self[&[i, j]]).collect())
    }

    pub fn col(&self, j: usize) -> Option<ColVector<T>> {
        if j >= self.cols() {
            return None;
        }
        Some((0..self.rows()).map(|i| self[&[i, j]]).collect())
    }

    /// Appends `row` below the last row. A matrix without rows takes the
    /// width of the first row pushed.
    pub fn push_row(&mut self, row: &RowVector<T>) -> Result<(), ShapeError> {
        if self.rows() > 0 && row.len() != self.cols() {
            return Err(ShapeError::Mismatch {
                op: "push_row",
                expected: self.cols(),
                found: row.len(),
            });
        }

        let storage = std::mem::replace(&mut self.storage, Storage::new(Vec::new()));
        let mut data = storage.into_normal(self.shape).data;
        data.extend_from_slice(row.as_slice());

        self.shape = Shape::new(self.rows() + 1, row.len());
        self.storage = Storage::new(data);
        Ok(())
    }

    /// Tiles the matrix `row_copies` times vertically and `col_copies` times
    /// horizontally.
    pub fn repmat(&self, row_copies: usize, col_copies: usize) -> Self {
        let (r, c) = (self.rows(), self.cols());
        Self::from_fn(r * row_copies, c * col_copies, |&[i, j]| self[&[i % r, j % c]])
    }

    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix::from_fn(self.rows(), self.cols(), |idx| f(self[idx]))
    }

    /// Combines every column of `self` with `col`, element by element.
    ///
    /// Panics if `col` is not exactly as long as a column of `self`.
    pub fn each_col<U, V>(&self, col: &ColVector<U>, f: impl Fn(T, U) -> V) -> Matrix<V>
    where
        U: Copy,
    {
        assert_eq!(
            col.len(),
            self.rows(),
            "each_col: column of length {} does not fit a {} matrix",
            col.len(),
            self.shape
        );

        Matrix::from_fn(self.rows(), self.cols(), |&[i, j]| f(self[&[i, j]], col[&[i]]))
    }

    /// Ordinary matrix product.
    ///
    /// Panics if the inner dimensions disagree.
    pub fn matmul<U, V>(&self, rhs: &Matrix<U>) -> Matrix<V>
    where
        T: Mul<U, Output = V>,
        U: Copy,
        V: Add<Output = V> + Zero,
    {
        assert_eq!(
            self.cols(),
            rhs.rows(),
            "matmul: cannot multiply {} by {}",
            self.shape,
            rhs.shape
        );

        Matrix::from_fn(self.rows(), rhs.cols(), |&[i, j]| {
            (0..self.cols()).fold(V::zero(), |acc, k| acc + self[&[i, k]] * rhs[&[k, j]])
        })
    }
}

impl<T: Numeric> Matrix<T> {
    pub fn repeat(rows: usize, cols: usize, n: T) -> Self {
        Self::from_fn(rows, cols, |_| n)
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::repeat(rows, cols, T::zero())
    }

    pub fn rand(rows: usize, cols: usize, d: impl Distribution<T>, rng: &mut impl Rng) -> Self {
        let data = d.sample_iter(rng).take(rows * cols).collect();
        Self::from_parts(Shape::new(rows, cols), data)
    }

    pub fn randn(rows: usize, cols: usize, rng: &mut impl Rng) -> Self
    where
        StandardNormal: Distribution<T>,
    {
        Self::rand(rows, cols, StandardNormal, rng)
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(vals: [[T; C]; R]) -> Self {
        let data = vals.into_iter().flatten().collect();
        Self::from_parts(Shape::new(R, C), data)
    }
}

impl<T> Index<&[usize; 2]> for Matrix<T> {
    type Output = T;

    fn index(&self, idx: &[usize; 2]) -> &Self::Output {
        let shape = self.shape;
        self.storage
            .index(idx, shape)
            .unwrap_or_else(|e| panic!("index {:?} into {} matrix: {}", idx, shape, e))
    }
}

impl<T> IndexMut<&[usize; 2]> for Matrix<T> {
    fn index_mut(&mut self, idx: &[usize; 2]) -> &mut Self::Output {
        let shape = self.shape;
        self.storage
            .index_mut(idx, shape)
            .unwrap_or_else(|e| panic!("index {:?} into {} matrix: {}", idx, shape, e))
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.iter().values().eq(other.iter().values())
    }
}

impl<T> Shaped for Matrix<T> {
    fn kind() -> ShapeKind {
        ShapeKind::Matrix
    }

    fn shape(&self) -> Shape {
        self.shape
    }
}
