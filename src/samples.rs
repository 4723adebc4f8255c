use convolution::{Matrix, Signal};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::DemoConfig;

/// Inputs and kernels for both convolution sections of the demo.
#[derive(Clone, Debug, PartialEq)]
pub struct Samples {
    pub signal: Signal,
    pub signal_kernel: Signal,
    pub matrix: Matrix,
    pub matrix_kernel: Matrix,
}

impl Samples {
    /// Constant fills from the config, or seeded random integers in `[0, 10)`
    /// when a seed is set.
    pub fn build(config: &DemoConfig) -> Self {
        let n = config.input_size;
        let k = config.kernel_size;
        match config.seed {
            None => Self {
                signal: Signal::filled(n, config.input_value),
                signal_kernel: Signal::filled(k, config.kernel_value),
                matrix: Matrix::filled(n, n, config.input_value),
                matrix_kernel: Matrix::filled(k, k, config.kernel_value),
            },
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let signal = Signal::from(random_row(&mut rng, n));
                let signal_kernel = Signal::from(random_row(&mut rng, k));
                let matrix = Matrix::from(random_rows(&mut rng, n));
                let matrix_kernel = Matrix::from(random_rows(&mut rng, k));
                Self { signal, signal_kernel, matrix, matrix_kernel }
            }
        }
    }
}

fn random_row(rng: &mut ChaCha8Rng, len: usize) -> Vec<f64> {
    (0..len).map(|_| f64::from(rng.random_range(0u8..10))).collect()
}

fn random_rows(rng: &mut ChaCha8Rng, side: usize) -> Vec<Vec<f64>> {
    (0..side).map(|_| random_row(rng, side)).collect()
}
