use crate::matrix::Matrix;
use std::iter::Map;

/// Walks a matrix in logical row-major order regardless of its storage
/// layout.
pub struct Iter<'a, T> {
    m: &'a Matrix<T>,
    cur: Option<[usize; 2]>,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(m: &'a Matrix<T>) -> Self {
        let cur = if m.is_empty() { None } else { Some([0, 0]) };
        Self { m, cur }
    }

    pub fn values(self) -> Map<Iter<'a, T>, impl FnMut(([usize; 2], &'a T)) -> &'a T> {
        self.map(|(_, v)| v)
    }
}

fn next_idx(idx: &[usize; 2], rows: usize, cols: usize) -> Option<[usize; 2]> {
    let [i, j] = *idx;
    if j + 1 < cols {
        Some([i, j + 1])
    } else if i + 1 < rows {
        Some([i + 1, 0])
    } else {
        None
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = ([usize; 2], &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match &self.cur {
            None => None,
            Some(idx) => {
                let cur_idx = *idx;
                let m = self.m;
                let item = (cur_idx, &m[&cur_idx]);
                self.cur = next_idx(&cur_idx, m.rows(), m.cols());

                Some(item)
            }
        }
    }
}
