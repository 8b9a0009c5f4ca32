use crate::{
    errors::IndexError,
    shape::{stride, Shape},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Normal,
    Transposed,
}

impl Layout {
    pub fn is_transposed(&self) -> bool {
        matches!(self, Self::Transposed)
    }

    pub fn transpose(self) -> Self {
        match self {
            Self::Normal => Self::Transposed,
            Self::Transposed => Self::Normal,
        }
    }
}

/// Row-major element buffer. When the layout is `Transposed` the buffer is
/// row-major for the transposed shape.
#[derive(Debug, Default, Clone)]
pub struct Storage<T> {
    pub(crate) data: Vec<T>,
    pub(crate) layout: Layout,
}

impl<T> Storage<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            layout: Layout::Normal,
        }
    }

    pub fn transpose(self) -> Self {
        Self {
            data: self.data,
            layout: self.layout.transpose(),
        }
    }

    /// `shape` is the logical shape, i.e. the one callers index with.
    pub fn index(&self, idx: &[usize; 2], shape: Shape) -> Result<&T, IndexError> {
        let i = storage_idx(idx, shape, self.layout)?;
        Ok(&self.data[i])
    }

    pub fn index_mut(&mut self, idx: &[usize; 2], shape: Shape) -> Result<&mut T, IndexError> {
        let i = storage_idx(idx, shape, self.layout)?;
        Ok(&mut self.data[i])
    }

    /// Rewrites the buffer in normal layout for the logical `shape`.
    pub fn into_normal(self, shape: Shape) -> Self
    where
        T: Copy,
    {
        if !self.layout.is_transposed() {
            return self;
        }

        let mut data = Vec::with_capacity(self.data.len());
        for i in 0..shape.rows {
            for j in 0..shape.cols {
                data.push(self.data[calc_storage_idx(&[j, i], shape.transpose())]);
            }
        }

        Self::new(data)
    }
}

pub(crate) fn storage_idx(idx: &[usize; 2], shape: Shape, layout: Layout) -> Result<usize, IndexError> {
    if idx[0] >= shape.rows || idx[1] >= shape.cols {
        return Err(IndexError::OutOfBounds);
    }

    match layout {
        Layout::Normal => Ok(calc_storage_idx(idx, shape)),
        Layout::Transposed => {
            let mut orig_idx = *idx;
            orig_idx.reverse();

            Ok(calc_storage_idx(&orig_idx, shape.transpose()))
        }
    }
}

fn calc_storage_idx(idx: &[usize; 2], shape: Shape) -> usize {
    let stride = stride(shape);
    let mut i = 0;
    for (dim, &cur) in idx.iter().enumerate() {
        i += stride[dim] * cur;
    }

    i
}
