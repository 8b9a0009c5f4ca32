//! Brace-enclosed numeric literals: `{1, -2.5, 3e2}` for vectors,
//! `{{1, 2}, {3, 4}}` for matrices and `{(1,2), (3,-4)}` for complex
//! elements.
//!
//! Parsing runs in two passes. The structural pass matches the whole text,
//! with every whitespace character removed, against the literal grammar. The
//! extraction pass then walks the validated text token by token; for matrices
//! it also checks that every row is as long as the first, which the grammar
//! cannot express. Since whitespace is removed first, numbers must be
//! separated by commas: `{1 2}` reads as `{12}`. Numbers too large for the
//! element type (`1e400` as `f64`) are rejected rather than read as infinity.

use crate::{
    errors::ParseError,
    matrix::Matrix,
    numeric::Numeric,
    shape::Shape,
    vector::{ColVector, RowVector},
};
use lazy_static::lazy_static;
use num::{complex::Complex, Float};
use regex::Regex;
use std::{fmt, str::FromStr};
use tracing::{error, trace};

const REAL: &str = r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?";

fn number_pattern() -> String {
    format!(r"(?:\({REAL},{REAL}\)|{REAL})")
}

fn brace_list(item: &str) -> String {
    format!(r"\{{(?:{item}(?:,{item})*)?\}}")
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal grammar patterns are valid regexes")
}

lazy_static! {
    static ref NUMBER: Regex = compile(&number_pattern());
    static ref LIST: Regex = compile(&brace_list(&number_pattern()));
    static ref LIST_EXACT: Regex = compile(&format!("^{}$", brace_list(&number_pattern())));
    static ref MATRIX_EXACT: Regex =
        compile(&format!("^{}$", brace_list(&brace_list(&number_pattern()))));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    List,
    MatrixLiteral,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "brace-enclosed list of floating-point numbers"),
            Self::MatrixLiteral => write!(
                f,
                "brace-enclosed list of brace-enclosed lists of floating-point numbers"
            ),
        }
    }
}

/// Element types a literal token can be read into.
pub trait LiteralElement: Numeric {
    fn from_token(token: &str) -> Option<Self>;
}

// The grammar only admits finite spellings, so a non-finite result means the
// value overflowed the element type.
fn parse_real<F: Float + FromStr>(token: &str) -> Option<F> {
    token.parse().ok().filter(|x: &F| x.is_finite())
}

macro_rules! literal_elements {
    ( $( $t:ty ),* ) => {
        $(
            impl LiteralElement for $t {
                fn from_token(token: &str) -> Option<Self> {
                    parse_real(token)
                }
            }

            // Accepts `(re,im)` as well as a bare real.
            impl LiteralElement for Complex<$t> {
                fn from_token(token: &str) -> Option<Self> {
                    match token.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
                        Some(pair) => {
                            let (re, im) = pair.split_once(',')?;
                            Some(Complex::new(parse_real(re)?, parse_real(im)?))
                        }
                        None => parse_real(token).map(|re| Complex::new(re, 0.0)),
                    }
                }
            }
        )*
    };
}

literal_elements!(f32, f64);

pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Structural pass: strips whitespace and matches the full text against
/// `grammar`. Returns the stripped text.
pub fn validate(text: &str, grammar: Grammar) -> Result<String, ParseError> {
    let stripped = strip_whitespace(text);
    let re: &Regex = match grammar {
        Grammar::List => &LIST_EXACT,
        Grammar::MatrixLiteral => &MATRIX_EXACT,
    };

    if !re.is_match(&stripped) {
        let err = ParseError::GrammarViolation {
            grammar,
            input: text.to_string(),
        };
        error!(error = %err, "rejected numeric literal");
        return Err(err);
    }

    Ok(stripped)
}

/// Semantic pass over the row lengths of a matrix literal. Returns the common
/// row length (0 when there are no rows).
pub fn check_row_lengths(lengths: impl IntoIterator<Item = usize>) -> Result<usize, ParseError> {
    let mut lengths = lengths.into_iter();
    let Some(expected) = lengths.next() else {
        return Ok(0);
    };

    for (i, found) in lengths.enumerate() {
        if found != expected {
            let err = ParseError::RowLengthMismatch {
                row: i + 1,
                expected,
                found,
            };
            error!(error = %err, "rejected matrix literal");
            return Err(err);
        }
    }

    Ok(expected)
}

// `list` must already match the List grammar, braces included.
fn extract_list<T: LiteralElement>(list: &str) -> Result<Vec<T>, ParseError> {
    let inner = &list[1..list.len() - 1];

    NUMBER
        .find_iter(inner)
        .map(|m| {
            let token = m.as_str();
            T::from_token(token).ok_or_else(|| {
                let err = ParseError::InvalidNumber {
                    token: token.to_string(),
                    elem: T::NAME,
                };
                error!(error = %err, "rejected numeric literal");
                err
            })
        })
        .collect()
}

pub fn parse_vector<T: LiteralElement>(text: &str) -> Result<ColVector<T>, ParseError> {
    let stripped = validate(text, Grammar::List)?;
    let col = ColVector::from(extract_list(&stripped)?);

    trace!(len = col.len(), "parsed vector literal");
    Ok(col)
}

pub fn parse_row<T: LiteralElement>(text: &str) -> Result<RowVector<T>, ParseError> {
    parse_vector(text).map(ColVector::into_row)
}

pub fn parse_matrix<T: LiteralElement>(text: &str) -> Result<Matrix<T>, ParseError> {
    let stripped = validate(text, Grammar::MatrixLiteral)?;
    // Search inside the outer braces only; `{}` would otherwise read as a row.
    let rows = LIST
        .find_iter(&stripped[1..stripped.len() - 1])
        .map(|m| extract_list(m.as_str()))
        .collect::<Result<Vec<Vec<T>>, _>>()?;

    let cols = check_row_lengths(rows.iter().map(Vec::len))?;
    let shape = Shape::new(rows.len(), cols);

    trace!(%shape, "parsed matrix literal");
    Ok(Matrix::from_parts(shape, rows.into_iter().flatten().collect()))
}

impl<T: LiteralElement> FromStr for ColVector<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vector(s)
    }
}

impl<T: LiteralElement> FromStr for RowVector<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_row(s)
    }
}

impl<T: LiteralElement> FromStr for Matrix<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_matrix(s)
    }
}

/// Overwrites `to` with the container parsed from `from`, picking the parser
/// from the container type. On failure `to` is left empty.
pub fn assign_literal<C>(from: &str, to: &mut C) -> Result<(), ParseError>
where
    C: FromStr<Err = ParseError> + Default,
{
    match from.parse() {
        Ok(parsed) => {
            *to = parsed;
            Ok(())
        }
        Err(err) => {
            *to = C::default();
            Err(err)
        }
    }
}
