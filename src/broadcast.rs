use crate::{
    matrix::Matrix,
    op::{Add, BinaryOp, Div, Mul, Sub},
    vector::{ColVector, RowVector},
};
use num::Zero;
use std::ops;

/// How an operator tag combines a column with a row. The result always has
/// one row per column element and one column per row element.
///
/// The provided methods replicate the row into an `n × m` scratch matrix and
/// combine it column-wise with the column operand.
pub trait BroadcastOp<L: Copy, R: Copy>: BinaryOp<L, R> + Sized {
    /// `result[i][j] = col[i] <op> row[j]`
    fn col_row(col: &ColVector<L>, row: &RowVector<R>) -> Matrix<Self::Output> {
        let scratch = row_scratch(row, col.len());
        scratch.each_col(col, |r, c| <Self as BinaryOp<L, R>>::apply(c, r))
    }

    /// `result[i][j] = row[j] <op> col[i]`
    fn row_col(row: &RowVector<L>, col: &ColVector<R>) -> Matrix<Self::Output> {
        let scratch = row_scratch(row, col.len());
        scratch.each_col(col, |r, c| <Self as BinaryOp<L, R>>::apply(r, c))
    }
}

fn row_scratch<T: Copy>(row: &RowVector<T>, n: usize) -> Matrix<T> {
    row.clone().into_matrix().repmat(n, 1)
}

impl<L: Copy, R: Copy> BroadcastOp<L, R> for Add where Add: BinaryOp<L, R> {}
impl<L: Copy, R: Copy> BroadcastOp<L, R> for Sub where Sub: BinaryOp<L, R> {}
impl<L: Copy, R: Copy> BroadcastOp<L, R> for Div where Div: BinaryOp<L, R> {}

// Multiplication is the matrix product of the (n × 1) column and the (1 × m)
// row, which is the outer product.
impl<L, R> BroadcastOp<L, R> for Mul
where
    L: Copy + ops::Mul<R>,
    R: Copy,
    <L as ops::Mul<R>>::Output: ops::Add<Output = <L as ops::Mul<R>>::Output> + Zero,
{
    fn col_row(col: &ColVector<L>, row: &RowVector<R>) -> Matrix<Self::Output> {
        col.clone()
            .into_matrix()
            .matmul(&row.clone().into_matrix())
    }

    fn row_col(row: &RowVector<L>, col: &ColVector<R>) -> Matrix<Self::Output> {
        // (rowᵀ · colᵀ)ᵀ keeps the row elements on the left of each product
        row.clone()
            .into_col()
            .into_matrix()
            .matmul(&col.clone().into_row().into_matrix())
            .transpose()
    }
}

/// A pair of operands that broadcast against each other under the operator
/// tag `O`.
pub trait Broadcast<O, Rhs> {
    type Output;

    fn broadcast(&self, rhs: &Rhs) -> Self::Output;
}

impl<O, L, R> Broadcast<O, RowVector<R>> for ColVector<L>
where
    L: Copy,
    R: Copy,
    O: BroadcastOp<L, R>,
{
    type Output = Matrix<<O as BinaryOp<L, R>>::Output>;

    fn broadcast(&self, rhs: &RowVector<R>) -> Self::Output {
        O::col_row(self, rhs)
    }
}

impl<O, L, R> Broadcast<O, ColVector<R>> for RowVector<L>
where
    L: Copy,
    R: Copy,
    O: BroadcastOp<L, R>,
{
    type Output = Matrix<<O as BinaryOp<L, R>>::Output>;

    fn broadcast(&self, rhs: &ColVector<R>) -> Self::Output {
        O::row_col(self, rhs)
    }
}

/// Broadcasts a column against a row (in either order) under the operator
/// tag `O`:
///
/// ```
/// use numkit::{broadcast, op::Add, vector::{ColVector, RowVector}};
///
/// let c: ColVector<f64> = ColVector::from([1.0, 2.0]);
/// let r: RowVector<f64> = RowVector::from([10.0, 20.0, 30.0]);
/// let m = broadcast::<Add, _, _>(&c, &r);
///
/// assert_eq!(m[&[1, 2]], 32.0);
/// ```
pub fn broadcast<O, A, B>(a: &A, b: &B) -> A::Output
where
    A: Broadcast<O, B>,
{
    a.broadcast(b)
}
