use tracing::debug;

use crate::{conv::output_len, error::{ConvError, Result}, malgebra::{matrix::Matrix, signal::Signal}};

/// Rejects `len` elements of `T` whose byte size exceeds `isize::MAX`, the
/// largest allocation a `Vec` accepts.
fn ensure_allocatable<T>(len: usize) -> Result<()> {
    len.checked_mul(size_of::<T>())
        .filter(|bytes| *bytes <= isize::MAX as usize)
        .map(|_| ())
        .ok_or_else(|| ConvError::InvalidConfiguration(format!("output too large: {len} elements")))
}

/// Validates a 1-D call and returns the output length.
pub(crate) fn check_1d(input: &Signal, kernel: &Signal, stride: usize, padding: usize) -> Result<usize> {
    if input.is_empty() {
        return Err(ConvError::InvalidInput("input signal is empty".to_string()));
    }
    let out_len = output_len(input.len(), kernel.len(), stride, padding)?;
    ensure_allocatable::<f64>(out_len)?;
    debug!(input = input.len(), kernel = kernel.len(), stride, padding, out_len, "conv1d shape");
    Ok(out_len)
}

/// Validates a 2-D call and returns the output shape `(rows, cols)`.
pub(crate) fn check_2d(input: &Matrix, kernel: &Matrix, stride: usize, padding: usize) -> Result<(usize, usize)> {
    if input.is_empty() {
        return Err(ConvError::InvalidInput("input matrix is empty".to_string()));
    }
    if !input.is_rectangular() {
        return Err(ConvError::InvalidInput(format!(
            "input rows differ in length, expected {} columns in every row",
            input.cols()
        )));
    }
    if kernel.is_empty() {
        return Err(ConvError::InvalidConfiguration("kernel must not be empty".to_string()));
    }
    if !kernel.is_square() {
        return Err(ConvError::InvalidConfiguration(format!(
            "kernel must be square, got {} rows with lengths {:?}",
            kernel.rows(),
            kernel.0.iter().map(|row| row.len()).collect::<Vec<usize>>()
        )));
    }
    let side = kernel.rows();
    let out_rows = output_len(input.rows(), side, stride, padding)?;
    let out_cols = output_len(input.cols(), side, stride, padding)?;
    ensure_allocatable::<Vec<f64>>(out_rows)?;
    ensure_allocatable::<f64>(out_cols)?;
    let cells = out_rows
        .checked_mul(out_cols)
        .ok_or_else(|| ConvError::InvalidConfiguration(format!("output too large: {out_rows} x {out_cols}")))?;
    ensure_allocatable::<f64>(cells)?;
    debug!(
        rows = input.rows(),
        cols = input.cols(),
        kernel = side,
        stride,
        padding,
        out_rows,
        out_cols,
        "conv2d shape"
    );
    Ok((out_rows, out_cols))
}

/// Multiply-accumulate of one output element.
///
/// `start` is the output index times the stride, i.e. the window origin in
/// padded coordinates. Positions that fall into the padding contribute zero.
pub(crate) fn window_1d(input: &[f64], kernel: &[f64], start: usize, padding: usize) -> f64 {
    kernel.iter()
        .enumerate()
        .fold(0.0, |acc, (k, weight)| {
            match (start + k).checked_sub(padding).and_then(|src| input.get(src)) {
                Some(value) => acc + value * weight,
                None => acc,
            }
        })
}

/// Multiply-accumulate of one output cell, kernel rows outer, columns inner.
pub(crate) fn window_2d(input: &Matrix, kernel: &Matrix, row_start: usize, col_start: usize, padding: usize) -> f64 {
    kernel.0.iter()
        .enumerate()
        .fold(0.0, |acc, (m, kernel_row)| {
            let Some(input_row) = (row_start + m).checked_sub(padding).and_then(|row| input.0.get(row)) else {
                return acc;
            };
            kernel_row.iter()
                .enumerate()
                .fold(acc, |acc, (n, weight)| {
                    match (col_start + n).checked_sub(padding).and_then(|col| input_row.get(col)) {
                        Some(value) => acc + value * weight,
                        None => acc,
                    }
                })
        })
}

/// 1-D convolution (cross-correlation, the kernel is not flipped) with
/// implicit zero-padding.
///
/// Output index `i` sums `input[i * stride - padding + k] * kernel[k]` over
/// every `k` whose source index lands inside the input.
///
/// # Errors
/// * [`ConvError::InvalidInput`] for an empty input.
/// * [`ConvError::InvalidConfiguration`] for an empty kernel, zero stride, or a
///   kernel longer than `input.len() + 2 * padding`.
pub fn conv1d(input: &Signal, kernel: &Signal, stride: usize, padding: usize) -> Result<Signal> {
    let out_len = check_1d(input, kernel, stride, padding)?;
    let output = (0..out_len)
        .map(|i| window_1d(&input.0, &kernel.0, i * stride, padding))
        .collect();
    Ok(Signal(output))
}

/// 2-D convolution of a rectangular matrix with a square kernel.
///
/// Cell `(i, j)` sums `input[i * stride - padding + m][j * stride - padding + n] * kernel[m][n]`
/// in row-major kernel order, skipping positions outside the input.
///
/// # Errors
/// * [`ConvError::InvalidInput`] for an empty or ragged input.
/// * [`ConvError::InvalidConfiguration`] for an empty or non-square kernel,
///   zero stride, or a kernel larger than either padded input extent.
pub fn conv2d(input: &Matrix, kernel: &Matrix, stride: usize, padding: usize) -> Result<Matrix> {
    let (out_rows, out_cols) = check_2d(input, kernel, stride, padding)?;
    let output = (0..out_rows)
        .map(|i| {
            (0..out_cols)
                .map(|j| window_2d(input, kernel, i * stride, j * stride, padding))
                .collect::<Vec<f64>>()
        })
        .collect();
    Ok(Matrix(output))
}
