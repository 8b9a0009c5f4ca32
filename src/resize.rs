use crate::{
    errors::ShapeError,
    matrix::Matrix,
    numeric::Numeric,
    shape::{ShapeKind, Shaped},
    vector::{ColVector, RowVector},
};

/// Containers that can be reshaped in place from a dimension list. Resizing
/// discards the previous contents; new elements are zero.
pub trait Resizable {
    fn set_size(&mut self, dims: &[usize]) -> Result<(), ShapeError>;
}

fn check_rank(kind: ShapeKind, dims: &[usize], expected: usize) -> Result<(), ShapeError> {
    if dims.len() != expected {
        return Err(ShapeError::Rank {
            kind,
            expected,
            found: dims.len(),
        });
    }
    Ok(())
}

impl<T: Numeric> Resizable for ColVector<T> {
    fn set_size(&mut self, dims: &[usize]) -> Result<(), ShapeError> {
        check_rank(Self::kind(), dims, 1)?;
        *self = Self::zeros(dims[0]);
        Ok(())
    }
}

impl<T: Numeric> Resizable for RowVector<T> {
    fn set_size(&mut self, dims: &[usize]) -> Result<(), ShapeError> {
        check_rank(Self::kind(), dims, 1)?;
        *self = Self::zeros(dims[0]);
        Ok(())
    }
}

impl<T: Numeric> Resizable for Matrix<T> {
    fn set_size(&mut self, dims: &[usize]) -> Result<(), ShapeError> {
        check_rank(Self::kind(), dims, 2)?;
        *self = Self::zeros(dims[0], dims[1]);
        Ok(())
    }
}

/// Resizes every target in order, stopping at the first one whose rank does
/// not match `dims`. Targets before it keep their new size.
pub fn set_size_all(dims: &[usize], targets: &mut [&mut dyn Resizable]) -> Result<(), ShapeError> {
    for t in targets.iter_mut() {
        t.set_size(dims)?;
    }
    Ok(())
}

/// `set_size!(dims; a, b, ...)` resizes each container with
/// [`set_size_all`].
#[macro_export]
macro_rules! set_size {
    ( $dims:expr ; $( $target:expr ),+ $(,)? ) => {
        $crate::resize::set_size_all($dims, &mut [ $( $target as &mut dyn $crate::resize::Resizable ),+ ])
    };
}
