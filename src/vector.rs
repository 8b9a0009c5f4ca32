use crate::{
    errors::ShapeError,
    matrix::Matrix,
    numeric::Numeric,
    shape::{Shape, ShapeKind, Shaped},
};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::ops::{Index, IndexMut};

/// An `(n, 1)` container.
#[derive(Debug, Clone, PartialEq)]
pub struct ColVector<T> {
    data: Vec<T>,
}

/// A `(1, m)` container.
#[derive(Debug, Clone, PartialEq)]
pub struct RowVector<T> {
    data: Vec<T>,
}

macro_rules! vector_impls {
    ( $( $name:ident { kind: $kind:expr, shape: $shape:expr, fits: $fits:expr } )* ) => { $(
        impl<T> $name<T> {
            pub fn new() -> Self {
                Self { data: Vec::new() }
            }

            pub fn from_fn(n: usize, f: impl Fn(usize) -> T) -> Self {
                Self {
                    data: (0..n).map(f).collect(),
                }
            }

            pub fn len(&self) -> usize {
                self.data.len()
            }

            pub fn is_empty(&self) -> bool {
                self.data.is_empty()
            }

            pub fn get(&self, i: usize) -> Option<&T> {
                self.data.get(i)
            }

            pub fn push(&mut self, val: T) {
                self.data.push(val);
            }

            pub fn iter(&self) -> std::slice::Iter<'_, T> {
                self.data.iter()
            }

            pub fn as_slice(&self) -> &[T] {
                &self.data
            }

            pub fn into_vec(self) -> Vec<T> {
                self.data
            }

            pub fn into_matrix(self) -> Matrix<T> {
                let shape = self.shape();
                Matrix::from_parts(shape, self.data)
            }
        }

        impl<T: Numeric> $name<T> {
            pub fn repeat(n: usize, val: T) -> Self {
                Self::from_fn(n, |_| val)
            }

            pub fn zeros(n: usize) -> Self {
                Self::repeat(n, T::zero())
            }

            pub fn rand(n: usize, d: impl Distribution<T>, rng: &mut impl Rng) -> Self {
                d.sample_iter(rng).take(n).collect()
            }

            pub fn randn(n: usize, rng: &mut impl Rng) -> Self
            where
                StandardNormal: Distribution<T>,
            {
                Self::rand(n, StandardNormal, rng)
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T, const N: usize> From<[T; N]> for $name<T> {
            fn from(vals: [T; N]) -> Self {
                Self { data: vals.into() }
            }
        }

        impl<T> From<Vec<T>> for $name<T> {
            fn from(data: Vec<T>) -> Self {
                Self { data }
            }
        }

        impl<T> FromIterator<T> for $name<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                Self {
                    data: iter.into_iter().collect(),
                }
            }
        }

        impl<T> IntoIterator for $name<T> {
            type Item = T;
            type IntoIter = std::vec::IntoIter<T>;

            fn into_iter(self) -> Self::IntoIter {
                self.data.into_iter()
            }
        }

        impl<'a, T> IntoIterator for &'a $name<T> {
            type Item = &'a T;
            type IntoIter = std::slice::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.data.iter()
            }
        }

        impl<T> Index<&[usize; 1]> for $name<T> {
            type Output = T;

            fn index(&self, idx: &[usize; 1]) -> &Self::Output {
                &self.data[idx[0]]
            }
        }

        impl<T> IndexMut<&[usize; 1]> for $name<T> {
            fn index_mut(&mut self, idx: &[usize; 1]) -> &mut Self::Output {
                &mut self.data[idx[0]]
            }
        }

        impl<T> Shaped for $name<T> {
            fn kind() -> ShapeKind {
                $kind
            }

            fn shape(&self) -> Shape {
                ($shape)(self.len())
            }
        }

        /// Accepts matrices with a single column (for column vectors) or a
        /// single row (for row vectors), and the empty 0x0 matrix.
        impl<T: Copy> TryFrom<Matrix<T>> for $name<T> {
            type Error = ShapeError;

            fn try_from(m: Matrix<T>) -> Result<Self, Self::Error> {
                let s = m.shape();
                if !($fits)(s) && s != Shape::default() {
                    return Err(ShapeError::NotAVector {
                        kind: $kind,
                        rows: s.rows,
                        cols: s.cols,
                    });
                }

                Ok(Self { data: m.into_vec() })
            }
        }
    )* };
}

vector_impls! {
    ColVector {
        kind: ShapeKind::ColVector,
        shape: |n| Shape::new(n, 1),
        fits: |s: Shape| s.cols == 1
    }
    RowVector {
        kind: ShapeKind::RowVector,
        shape: |n| Shape::new(1, n),
        fits: |s: Shape| s.rows == 1
    }
}

impl<T> ColVector<T> {
    pub fn into_row(self) -> RowVector<T> {
        RowVector { data: self.data }
    }
}

impl<T> RowVector<T> {
    pub fn into_col(self) -> ColVector<T> {
        ColVector { data: self.data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::complex::Complex;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_basics() {
        let a = ColVector::from([1, 2, 3, 4, 5]);

        assert_eq!(a[&[3]], 4);
        assert_eq!(a.len(), 5);
        assert_eq!(a.get(5), None);
    }

    #[test]
    fn test_from_fn() {
        let a = RowVector::from_fn(4, |i| i * 2);

        assert_eq!(a, RowVector::from([0, 2, 4, 6]));
    }

    #[test]
    fn test_transpose() {
        let c = ColVector::from([1.0, 2.0]);
        let r = c.clone().into_row();

        assert_eq!(r.shape(), Shape::new(1, 2));
        assert_eq!(r.as_slice(), c.as_slice());
        assert_eq!(r.into_col(), c);
    }

    #[test]
    fn test_into_matrix() {
        let c = ColVector::from([1, 2, 3]);
        assert_eq!(c.into_matrix(), Matrix::from([[1], [2], [3]]));

        let r = RowVector::from([1, 2, 3]);
        assert_eq!(r.into_matrix(), Matrix::from([[1, 2, 3]]));
    }

    #[test]
    fn test_try_from_matrix() {
        let m = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(
            ColVector::try_from(m.clone()),
            Err(ShapeError::NotAVector {
                kind: ShapeKind::ColVector,
                rows: 2,
                cols: 2
            })
        );

        let col = Matrix::from([[1], [2]]);
        assert_eq!(ColVector::try_from(col.clone()), Ok(ColVector::from([1, 2])));
        assert_eq!(
            RowVector::try_from(col.transpose()),
            Ok(RowVector::from([1, 2]))
        );

        assert_eq!(RowVector::<f64>::try_from(Matrix::new()), Ok(RowVector::new()));
    }

    #[test]
    fn test_zeros_complex() {
        let z: ColVector<Complex<f64>> = ColVector::zeros(2);
        assert_eq!(z, ColVector::from([Complex::new(0.0, 0.0); 2]));
    }

    #[test]
    fn test_randn() {
        let mut rng = StdRng::seed_from_u64(42);
        let v: RowVector<f64> = RowVector::randn(8, &mut rng);

        assert_eq!(v.len(), 8);
        assert!(v.iter().all(|x| x.is_finite()));
    }
}
