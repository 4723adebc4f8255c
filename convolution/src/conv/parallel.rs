//! Rayon variants of the convolution operations.
//!
//! Output elements (1-D) or output rows (2-D) are evaluated on the rayon pool.
//! Each element goes through the same accumulation routine as the sequential
//! path, so results match bit for bit.

use rayon::prelude::*;

use crate::{
    conv::impliment::{check_1d, check_2d, window_1d, window_2d},
    error::Result,
    malgebra::{matrix::Matrix, signal::Signal},
};

/// Parallel [`conv1d`](super::conv1d). Same validation and result.
pub fn par_conv1d(input: &Signal, kernel: &Signal, stride: usize, padding: usize) -> Result<Signal> {
    let out_len = check_1d(input, kernel, stride, padding)?;
    let output = (0..out_len)
        .into_par_iter()
        .map(|i| window_1d(&input.0, &kernel.0, i * stride, padding))
        .collect();
    Ok(Signal(output))
}

/// Parallel [`conv2d`](super::conv2d). Same validation and result.
pub fn par_conv2d(input: &Matrix, kernel: &Matrix, stride: usize, padding: usize) -> Result<Matrix> {
    let (out_rows, out_cols) = check_2d(input, kernel, stride, padding)?;
    let output = (0..out_rows)
        .into_par_iter()
        .map(|i| {
            (0..out_cols)
                .map(|j| window_2d(input, kernel, i * stride, j * stride, padding))
                .collect::<Vec<f64>>()
        })
        .collect();
    Ok(Matrix(output))
}
