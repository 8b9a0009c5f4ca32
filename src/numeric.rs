use num::complex::Complex;

/// Element domain of the containers: real or complex floating point.
pub trait Numeric:
    num::Num + Copy + std::fmt::Display + std::fmt::Debug + Send + Sync + 'static
{
    /// Human-readable element type name, used in diagnostics.
    const NAME: &'static str;
}

macro_rules! numeric_impls {
    ( $( $t:ty => $name:literal , )* ) => {
        $( impl Numeric for $t {
            const NAME: &'static str = $name;
        } )*
    };
}

numeric_impls! {
    f32 => "f32",
    f64 => "f64",
    Complex<f32> => "complex f32",
    Complex<f64> => "complex f64",
}
