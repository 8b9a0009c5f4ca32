//! Operator tags for broadcasting. Each tag is a zero-sized type picked at
//! the call site, so the operator is resolved at compile time.

use std::ops;

pub trait BinaryOp<L, R> {
    type Output;

    fn apply(lhs: L, rhs: R) -> Self::Output;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Add;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sub;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Mul;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Div;

macro_rules! binary_ops {
    ( $( $tag:ident => $tr:ident :: $method:ident , )* ) => {
        $( impl<L, R> BinaryOp<L, R> for $tag
        where
            L: ops::$tr<R>,
        {
            type Output = <L as ops::$tr<R>>::Output;

            fn apply(lhs: L, rhs: R) -> Self::Output {
                ops::$tr::$method(lhs, rhs)
            }
        } )*
    };
}

binary_ops! {
    Add => Add::add,
    Sub => Sub::sub,
    Mul => Mul::mul,
    Div => Div::div,
}
