use std::str::FromStr;

use crate::{error::{ConvError, Result}, malgebra::{matrix::Matrix, signal::Signal}};

pub mod impliment;
pub mod parallel;

pub use impliment::{conv1d, conv2d};
pub use parallel::{par_conv1d, par_conv2d};

/// How output elements are scheduled. Both methods produce identical results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvMethod {
    #[default]
    Sequential,
    Parallel,
}

impl ConvMethod {
    /// Runs [`conv1d`] or [`par_conv1d`].
    pub fn conv1d(&self, input: &Signal, kernel: &Signal, stride: usize, padding: usize) -> Result<Signal> {
        match self {
            ConvMethod::Sequential => conv1d(input, kernel, stride, padding),
            ConvMethod::Parallel => par_conv1d(input, kernel, stride, padding),
        }
    }

    /// Runs [`conv2d`] or [`par_conv2d`].
    pub fn conv2d(&self, input: &Matrix, kernel: &Matrix, stride: usize, padding: usize) -> Result<Matrix> {
        match self {
            ConvMethod::Sequential => conv2d(input, kernel, stride, padding),
            ConvMethod::Parallel => par_conv2d(input, kernel, stride, padding),
        }
    }
}

impl FromStr for ConvMethod {
    type Err = ConvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(ConvMethod::Sequential),
            "parallel" => Ok(ConvMethod::Parallel),
            other => Err(ConvError::InvalidConfiguration(format!(
                "unknown convolution method `{other}`, expected `sequential` or `parallel`"
            ))),
        }
    }
}

/// Validated stride and padding pair.
///
/// The convolution functions take both values as plain scalars; this type is
/// for outer layers (command line, config files) that hold signed numbers and
/// need them checked before a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ConvParams {
    pub stride: usize,
    pub padding: usize,
}

impl Default for ConvParams {
    fn default() -> Self {
        Self { stride: 1, padding: 0 }
    }
}

impl ConvParams {
    pub fn new(stride: usize, padding: usize) -> Result<Self> {
        if stride == 0 {
            return Err(ConvError::InvalidConfiguration("stride must be at least 1".to_string()));
        }
        Ok(Self { stride, padding })
    }

    /// Checks signed values: stride must be >= 1 and padding >= 0.
    pub fn try_new(stride: i64, padding: i64) -> Result<Self> {
        let stride = usize::try_from(stride)
            .ok()
            .filter(|s| *s >= 1)
            .ok_or_else(|| ConvError::InvalidConfiguration(format!("stride must be at least 1, got {stride}")))?;
        let padding = usize::try_from(padding)
            .map_err(|_| ConvError::InvalidConfiguration(format!("padding must not be negative, got {padding}")))?;
        Self::new(stride, padding)
    }
}

/// Number of output positions along one axis:
/// `(input_len + 2 * padding - kernel_len) / stride + 1`.
///
/// The kernel is compared against the padded extent before anything is
/// subtracted, so an oversized kernel is reported instead of wrapping around.
pub fn output_len(input_len: usize, kernel_len: usize, stride: usize, padding: usize) -> Result<usize> {
    if stride == 0 {
        return Err(ConvError::InvalidConfiguration("stride must be at least 1".to_string()));
    }
    if kernel_len == 0 {
        return Err(ConvError::InvalidConfiguration("kernel must not be empty".to_string()));
    }
    let padded = padding
        .checked_mul(2)
        .and_then(|pad| pad.checked_add(input_len))
        .ok_or_else(|| ConvError::InvalidConfiguration(format!(
            "padded extent {input_len} + 2 * {padding} overflows"
        )))?;
    if padded < kernel_len {
        return Err(ConvError::InvalidConfiguration(format!(
            "kernel size {kernel_len} exceeds padded input extent {padded}"
        )));
    }
    Ok((padded - kernel_len) / stride + 1)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn output_len_examples() {
        assert_eq!(output_len(4, 3, 1, 1), Ok(4));
        assert_eq!(output_len(8, 5, 2, 2), Ok(4));
        assert_eq!(output_len(10, 3, 2, 0), Ok(4));
        assert_eq!(output_len(3, 3, 1, 0), Ok(1));
        // kernel exactly covers the padded extent
        assert_eq!(output_len(1, 5, 7, 2), Ok(1));
    }

    #[test]
    fn output_len_rejects_oversized_kernel() {
        assert!(matches!(output_len(2, 5, 1, 1), Err(ConvError::InvalidConfiguration(_))));
        assert!(matches!(output_len(0, 1, 1, 0), Err(ConvError::InvalidConfiguration(_))));
    }

    #[test]
    fn output_len_rejects_zero_stride_and_empty_kernel() {
        assert!(matches!(output_len(4, 2, 0, 0), Err(ConvError::InvalidConfiguration(_))));
        assert!(matches!(output_len(4, 0, 1, 0), Err(ConvError::InvalidConfiguration(_))));
    }

    #[test]
    fn output_len_rejects_overflow() {
        assert!(matches!(output_len(1, 1, 1, usize::MAX), Err(ConvError::InvalidConfiguration(_))));
        assert!(matches!(output_len(usize::MAX, 1, 1, 1), Err(ConvError::InvalidConfiguration(_))));
    }

    #[test]
    fn params_from_signed() {
        assert_eq!(ConvParams::try_new(2, 3), Ok(ConvParams { stride: 2, padding: 3 }));
        assert!(matches!(ConvParams::try_new(0, 0), Err(ConvError::InvalidConfiguration(_))));
        assert!(matches!(ConvParams::try_new(-1, 0), Err(ConvError::InvalidConfiguration(_))));
        assert!(matches!(ConvParams::try_new(1, -2), Err(ConvError::InvalidConfiguration(_))));
        assert_eq!(ConvParams::default(), ConvParams { stride: 1, padding: 0 });
    }

    #[test]
    fn method_parsing() {
        assert_eq!("parallel".parse::<ConvMethod>(), Ok(ConvMethod::Parallel));
        assert_eq!("Sequential".parse::<ConvMethod>(), Ok(ConvMethod::Sequential));
        assert!("fft".parse::<ConvMethod>().is_err());
        assert_eq!(serde_json::to_string(&ConvMethod::Parallel).unwrap(), "\"parallel\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn output_len_matches_formula(n in 1usize..200, k in 1usize..32, s in 1usize..8, p in 0usize..16) {
            let padded = n + 2 * p;
            match output_len(n, k, s, p) {
                Ok(m) => {
                    prop_assert!(padded >= k);
                    prop_assert_eq!(m, (padded - k) / s + 1);
                    prop_assert!(m >= 1);
                }
                Err(err) => {
                    prop_assert!(padded < k);
                    prop_assert!(matches!(err, ConvError::InvalidConfiguration(_)), "unexpected error kind");
                }
            }
        }
    }
}
