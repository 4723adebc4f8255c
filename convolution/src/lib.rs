//! Discrete 1-D and 2-D convolution with stride and implicit zero-padding.
//!
//! All operations are free functions over caller-owned data. Each call
//! validates its arguments up front and returns a freshly allocated output.
//!
//! ```
//! use convolution::{conv1d, Signal};
//!
//! let input = Signal(vec![1.0, 1.0, 1.0, 1.0]);
//! let kernel = Signal(vec![1.0, 1.0, 1.0]);
//! let output = conv1d(&input, &kernel, 1, 1).unwrap();
//! assert_eq!(output, Signal(vec![2.0, 3.0, 3.0, 2.0]));
//! ```

pub mod conv;
pub mod error;
pub mod malgebra;

pub use conv::{ConvMethod, ConvParams, conv1d, conv2d, output_len, par_conv1d, par_conv2d};
pub use error::{ConvError, Result};
pub use malgebra::matrix::Matrix;
pub use malgebra::signal::Signal;
