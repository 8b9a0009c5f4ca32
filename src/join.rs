//! Matrix concatenation. An empty 0x0 matrix joins with anything and leaves
//! the other operand unchanged, so folds can start from `Matrix::new()`.

use crate::{errors::ShapeError, matrix::Matrix, numeric::Numeric};

fn is_null<T>(m: &Matrix<T>) -> bool {
    m.rows() == 0 && m.cols() == 0
}

/// Places `b` to the right of `a`.
pub fn join_rows<T: Copy>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
    if is_null(a) {
        return Ok(b.clone());
    }
    if is_null(b) {
        return Ok(a.clone());
    }
    if a.rows() != b.rows() {
        return Err(ShapeError::Mismatch {
            op: "join_rows",
            expected: a.rows(),
            found: b.rows(),
        });
    }

    let split = a.cols();
    Ok(Matrix::from_fn(a.rows(), split + b.cols(), |&[i, j]| {
        if j < split {
            a[&[i, j]]
        } else {
            b[&[i, j - split]]
        }
    }))
}

/// Places `b` below `a`.
pub fn join_cols<T: Copy>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, ShapeError> {
    if is_null(a) {
        return Ok(b.clone());
    }
    if is_null(b) {
        return Ok(a.clone());
    }
    if a.cols() != b.cols() {
        return Err(ShapeError::Mismatch {
            op: "join_cols",
            expected: a.cols(),
            found: b.cols(),
        });
    }

    let split = a.rows();
    Ok(Matrix::from_fn(split + b.rows(), a.cols(), |&[i, j]| {
        if i < split {
            a[&[i, j]]
        } else {
            b[&[i - split, j]]
        }
    }))
}

/// Block-diagonal join; the off-diagonal blocks are zero.
pub fn join_diag<T: Numeric>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let (r, c) = (a.rows(), a.cols());
    Matrix::from_fn(r + b.rows(), c + b.cols(), |&[i, j]| match (i < r, j < c) {
        (true, true) => a[&[i, j]],
        (false, false) => b[&[i - r, j - c]],
        _ => T::zero(),
    })
}

pub fn join_r<T: Copy>(ms: &[Matrix<T>]) -> Result<Matrix<T>, ShapeError> {
    ms.iter().try_fold(Matrix::new(), |acc, m| join_rows(&acc, m))
}

pub fn join_c<T: Copy>(ms: &[Matrix<T>]) -> Result<Matrix<T>, ShapeError> {
    ms.iter().try_fold(Matrix::new(), |acc, m| join_cols(&acc, m))
}

pub fn join_d<T: Numeric>(ms: &[Matrix<T>]) -> Matrix<T> {
    ms.iter().fold(Matrix::new(), |acc, m| join_diag(&acc, m))
}

/// Joins a grid of blocks: each inner slice is joined horizontally, then the
/// resulting block rows are stacked.
pub fn join<T, R>(blocks: &[R]) -> Result<Matrix<T>, ShapeError>
where
    T: Copy,
    R: AsRef<[Matrix<T>]>,
{
    blocks
        .iter()
        .try_fold(Matrix::new(), |acc, row| join_cols(&acc, &join_r(row.as_ref())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_rows() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        let b = Matrix::from([[5], [6]]);

        assert_eq!(join_rows(&a, &b), Ok(Matrix::from([[1, 2, 5], [3, 4, 6]])));
        assert_eq!(join_rows(&Matrix::new(), &b), Ok(b.clone()));
        assert_eq!(
            join_rows(&a, &Matrix::from([[1]])),
            Err(ShapeError::Mismatch {
                op: "join_rows",
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_join_cols() {
        let a = Matrix::from([[1, 2]]);
        let b = Matrix::from([[3, 4], [5, 6]]);

        assert_eq!(join_cols(&a, &b), Ok(Matrix::from([[1, 2], [3, 4], [5, 6]])));
        assert!(join_cols(&a, &Matrix::from([[1]])).is_err());
    }

    #[test]
    #[rustfmt::skip]
    fn test_join_diag() {
        let a = Matrix::from([[1.0, 2.0]]);
        let b = Matrix::from([[3.0], [4.0]]);

        assert_eq!(join_diag(&a, &b), Matrix::from([
            [1.0, 2.0, 0.0],
            [0.0, 0.0, 3.0],
            [0.0, 0.0, 4.0],
        ]));
        assert_eq!(join_d(&[a.clone(), b.clone()]), join_diag(&a, &b));
    }

    #[test]
    fn test_folds() {
        let a = Matrix::from([[1]]);
        let b = Matrix::from([[2]]);
        let c = Matrix::from([[3]]);

        assert_eq!(join_r(&[a.clone(), b.clone(), c.clone()]), Ok(Matrix::from([[1, 2, 3]])));
        assert_eq!(join_c(&[a.clone(), b.clone(), c.clone()]), Ok(Matrix::from([[1], [2], [3]])));
        assert_eq!(join_r::<i32>(&[]), Ok(Matrix::new()));
    }

    #[test]
    fn test_join_grid() {
        let a = Matrix::from([[1, 2]]);
        let b = Matrix::from([[3]]);
        let c = Matrix::from([[4, 5, 6]]);

        assert_eq!(
            join(&[vec![a, b], vec![c]]),
            Ok(Matrix::from([[1, 2, 3], [4, 5, 6]]))
        );
    }
}
