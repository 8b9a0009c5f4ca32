#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    ColVector,
    RowVector,
    Matrix,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn num_elems(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.num_elems() == 0
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// Row-major strides for a 2D shape
pub const fn stride(s: Shape) -> [usize; 2] {
    [s.cols, 1]
}

pub trait Shaped {
    fn kind() -> ShapeKind;
    fn shape(&self) -> Shape;

    fn num_elems(&self) -> usize {
        self.shape().num_elems()
    }

    /// Dimensions as a list: `[len]` for vectors, `[rows, cols]` for
    /// matrices.
    fn dim(&self) -> Vec<usize> {
        let s = self.shape();
        match Self::kind() {
            ShapeKind::ColVector => vec![s.rows],
            ShapeKind::RowVector => vec![s.cols],
            ShapeKind::Matrix => vec![s.rows, s.cols],
        }
    }
}
