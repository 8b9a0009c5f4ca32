use num::complex::Complex;
use numkit::{
    errors::ParseError,
    literal::Grammar,
    matrix::Matrix,
    parse_matrix, parse_row, parse_vector,
    shape::{Shape, Shaped},
    vector::{ColVector, RowVector},
};
use proptest::prelude::*;
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::fmt::MakeWriter;

extern crate numkit;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    (out, logs.contents())
}

#[test]
fn test_vector_literal() {
    let c: ColVector<f64> = parse_vector("{1,2,3}").unwrap();
    assert_eq!(c, ColVector::from([1.0, 2.0, 3.0]));
    assert_eq!(c.shape(), Shape::new(3, 1));

    let r: RowVector<f64> = parse_row("{1,2,3}").unwrap();
    assert_eq!(r.shape(), Shape::new(1, 3));
    assert_eq!(r.as_slice(), c.as_slice());
}

#[test]
fn test_grammar_violation_is_reported() {
    let (res, logs) = with_logs(|| parse_vector::<f64>("not a list"));

    assert_eq!(
        res,
        Err(ParseError::GrammarViolation {
            grammar: Grammar::List,
            input: "not a list".to_string()
        })
    );
    assert!(logs.contains("ERROR"), "logs: {}", logs);
    assert!(logs.contains("not a valid brace-enclosed list"), "logs: {}", logs);
}

#[test]
fn test_matrix_literal() {
    let m: Matrix<f64> = parse_matrix("{{1,2},{3,4}}").unwrap();
    assert_eq!(m, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
}

#[test]
fn test_row_length_mismatch_is_reported() {
    let (res, logs) = with_logs(|| parse_matrix::<f64>("{{1,2},{3}}"));

    assert_eq!(
        res,
        Err(ParseError::RowLengthMismatch {
            row: 1,
            expected: 2,
            found: 1
        })
    );
    assert!(logs.contains("inconsistent number of elements"), "logs: {}", logs);
}

#[test]
fn test_success_is_traced() {
    let (res, logs) = with_logs(|| parse_matrix::<f64>("{{1,2,3}}"));

    assert!(res.is_ok());
    assert!(logs.contains("parsed matrix literal"), "logs: {}", logs);
    assert!(!logs.contains("ERROR"), "logs: {}", logs);
}

#[test]
fn test_complex_literal() {
    let c: ColVector<Complex<f64>> = parse_vector("{(1,2),(3,4)}").unwrap();
    assert_eq!(
        c,
        ColVector::from([Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)])
    );

    let m: Matrix<Complex<f32>> = parse_matrix("{ {(1, -1), 2}, {(0,.5), -3e0} }").unwrap();
    assert_eq!(m[&[0, 0]], Complex::new(1.0, -1.0));
    assert_eq!(m[&[0, 1]], Complex::new(2.0, 0.0));
    assert_eq!(m[&[1, 0]], Complex::new(0.0, 0.5));
    assert_eq!(m[&[1, 1]], Complex::new(-3.0, 0.0));
}

#[test]
fn test_empty_list_is_not_an_error() {
    let c: ColVector<f64> = parse_vector("{ }").unwrap();
    assert!(c.is_empty());

    let m: Matrix<f64> = parse_matrix("{}").unwrap();
    assert_eq!(m.shape(), Shape::new(0, 0));

    let m: Matrix<f64> = parse_matrix("{ {} }").unwrap();
    assert_eq!(m.shape(), Shape::new(1, 0));
}

#[test]
fn test_overflowing_number_is_rejected() {
    let (res, logs) = with_logs(|| parse_vector::<f64>("{1e400, -0, .5}"));

    assert_eq!(
        res,
        Err(ParseError::InvalidNumber {
            token: "1e400".to_string(),
            elem: "f64"
        })
    );
    assert!(logs.contains("ERROR"), "logs: {}", logs);
}

#[test]
fn test_space_separated_numbers_merge() {
    let c: ColVector<f64> = parse_vector("{1 2, 3}").unwrap();
    assert_eq!(c, ColVector::from([12.0, 3.0]));
}

#[test]
fn test_trailing_garbage_is_rejected() {
    assert!(parse_vector::<f64>("{1,2}3").is_err());
    assert!(parse_matrix::<f64>("{{1,2}}{{3,4}}").is_err());
}

fn literal(vals: &[f64]) -> String {
    let items: Vec<String> = vals.iter().map(|v| format!("{:e}", v)).collect();
    format!("{{{}}}", items.join(", "))
}

proptest! {
    #[test]
    fn test_parse_is_idempotent(vals in prop::collection::vec(-1e9..1e9f64, 0..10)) {
        let text = literal(&vals);

        let first: ColVector<f64> = parse_vector(&text).unwrap();
        let second: ColVector<f64> = parse_vector(&text).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.into_vec(), vals);
    }

    #[test]
    fn test_matrix_round_trip_shape(rows in 0..5usize, cols in 0..5usize, seed in 0.0..1.0f64) {
        let vals: Vec<f64> = (0..rows * cols).map(|k| k as f64 + seed).collect();
        let row_literals: Vec<String> = vals
            .chunks(cols.max(1))
            .take(rows)
            .map(literal)
            .collect();
        let text = if cols == 0 {
            format!("{{{}}}", vec!["{}"; rows].join(","))
        } else {
            format!("{{{}}}", row_literals.join(","))
        };

        let m: Matrix<f64> = parse_matrix(&text).unwrap();
        // `{}` carries no rows to take a width from
        let want_cols = if rows == 0 { 0 } else { cols };
        prop_assert_eq!(m.shape(), Shape::new(rows, want_cols));
        prop_assert_eq!(m.to_vec(), vals);
    }
}
