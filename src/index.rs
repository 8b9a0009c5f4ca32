use crate::vector::ColVector;

pub type IndexVector = ColVector<usize>;

/// `i..=j` as an index vector. Empty when `j < i`.
pub fn range(i: usize, j: usize) -> IndexVector {
    (i..=j).collect()
}

/// Something that can be appended to an index vector by [`cat!`].
pub trait IndexPiece {
    fn append_to(self, out: &mut IndexVector);
}

impl IndexPiece for usize {
    fn append_to(self, out: &mut IndexVector) {
        out.push(self);
    }
}

impl IndexPiece for IndexVector {
    fn append_to(self, out: &mut IndexVector) {
        for i in self {
            out.push(i);
        }
    }
}

impl IndexPiece for &IndexVector {
    fn append_to(self, out: &mut IndexVector) {
        for &i in self {
            out.push(i);
        }
    }
}

/// Concatenates indices and index vectors into a single index vector:
///
/// ```
/// use numkit::{cat, index::range};
///
/// let idx = cat![0usize, range(3, 5), 9usize];
/// assert_eq!(idx.as_slice(), &[0, 3, 4, 5, 9]);
/// ```
#[macro_export]
macro_rules! cat {
    ( $( $piece:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut out = $crate::index::IndexVector::new();
        $( $crate::index::IndexPiece::append_to($piece, &mut out); )*
        out
    }};
}
