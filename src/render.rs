use std::fmt::Write;

use convolution::{Matrix, Signal};

use crate::{config::DemoConfig, samples::Samples};

/// Single line, every value followed by `", "`.
pub fn render_signal(signal: &Signal) -> String {
    let mut line: String = signal.0.iter().map(|value| format!("{value}, ")).collect();
    line.push('\n');
    line
}

/// One line per row in the [`render_signal`] format.
pub fn render_matrix(matrix: &Matrix) -> String {
    matrix.0.iter()
        .map(|row| row.iter().map(|value| format!("{value}, ")).collect::<String>() + "\n")
        .collect()
}

fn section(out: &mut String, title: &str, blocks: [(&str, String); 3]) -> std::fmt::Result {
    writeln!(out, "\n--- {title} ---\n")?;
    for (label, body) in blocks {
        writeln!(out, "{label}: ")?;
        write!(out, "{body}")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Runs both convolutions for `config` and renders the whole console report.
pub fn report(config: &DemoConfig) -> anyhow::Result<String> {
    let params = config.params()?;
    let samples = Samples::build(config);
    let mut out = String::new();

    let output = config.method.conv1d(&samples.signal, &samples.signal_kernel, params.stride, params.padding)?;
    tracing::info!(len = output.len(), method = ?config.method, "1D convolution done");
    section(&mut out, "1D convolution", [
        ("input", render_signal(&samples.signal)),
        ("kernel", render_signal(&samples.signal_kernel)),
        ("output", render_signal(&output)),
    ])?;

    let output = config.method.conv2d(&samples.matrix, &samples.matrix_kernel, params.stride, params.padding)?;
    tracing::info!(shape = ?output.shape(), method = ?config.method, "2D convolution done");
    section(&mut out, "2D convolution", [
        ("input", render_matrix(&samples.matrix)),
        ("kernel", render_matrix(&samples.matrix_kernel)),
        ("output", render_matrix(&output)),
    ])?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use convolution::ConvError;

    use super::*;

    #[test]
    fn render_formats() {
        assert_eq!(render_signal(&Signal(vec![1.0, 2.5, -3.0])), "1, 2.5, -3, \n");
        assert_eq!(render_matrix(&Matrix(vec![vec![9.0], vec![0.0]])), "9, \n0, \n");
        assert_eq!(render_signal(&Signal(vec![])), "\n");
    }

    #[test]
    fn default_report() {
        let out = report(&DemoConfig::default()).unwrap();
        assert!(out.starts_with("\n--- 1D convolution ---\n\ninput: \n1, 1, 1, 1, 1, 1, 1, 1, \n\n"));
        assert!(out.contains("output: \n6, 10, 10, 8, \n\n"));
        assert!(out.contains("\n--- 2D convolution ---\n"));
        assert!(out.ends_with("output: \n18, 30, 30, 24, \n30, 50, 50, 40, \n30, 50, 50, 40, \n24, 40, 40, 32, \n\n"));
    }

    #[test]
    fn parallel_report_matches_sequential() {
        let config = DemoConfig { seed: Some(11), ..DemoConfig::default() };
        let parallel = DemoConfig { method: convolution::ConvMethod::Parallel, ..config.clone() };
        assert_eq!(report(&config).unwrap(), report(&parallel).unwrap());
    }

    #[test]
    fn report_surfaces_engine_errors() {
        let config = DemoConfig { input_size: 2, kernel_size: 9, padding: 1, ..DemoConfig::default() };
        let err = report(&config).unwrap_err();
        assert!(matches!(err.downcast_ref::<ConvError>(), Some(ConvError::InvalidConfiguration(_))));

        let config = DemoConfig { input_size: 0, ..DemoConfig::default() };
        let err = report(&config).unwrap_err();
        assert!(matches!(err.downcast_ref::<ConvError>(), Some(ConvError::InvalidInput(_))));
    }
}
