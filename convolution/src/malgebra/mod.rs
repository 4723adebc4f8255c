pub mod matrix;
pub mod signal;
