pub mod broadcast;
pub mod errors;
pub mod index;
pub mod iterator;
pub mod join;
pub mod literal;
pub mod matrix;
pub mod numeric;
pub mod op;
pub mod resize;
pub mod shape;
pub mod storage;
pub mod vector;

pub use broadcast::broadcast;
pub use literal::{parse_matrix, parse_row, parse_vector};
