use crate::{literal::Grammar, shape::ShapeKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("out of bounds")]
    OutOfBounds,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("cannot view a {rows}x{cols} matrix as a {kind:?}")]
    NotAVector {
        kind: ShapeKind,
        rows: usize,
        cols: usize,
    },

    #[error("a {rows}x{cols} container needs {} elements, got {found}", .rows * .cols)]
    ElementCount {
        rows: usize,
        cols: usize,
        found: usize,
    },

    #[error("a {kind:?} takes {expected} dimension(s), got {found}")]
    Rank {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },

    #[error("{op}: expected {expected} along the joined dimension, got {found}")]
    Mismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input string is not a valid {grammar}: {input:?}")]
    GrammarViolation { grammar: Grammar, input: String },

    #[error("inconsistent number of elements: row {row} has {found}, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot read {token:?} as {elem}")]
    InvalidNumber { token: String, elem: &'static str },
}
