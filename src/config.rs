use std::path::Path;

use anyhow::Context;
use convolution::{ConvMethod, ConvParams};
use tokio::{fs::File, io::{AsyncReadExt, AsyncWriteExt, BufWriter}};

use crate::traits::ConfigFS;

/// Settings of the demonstration run.
///
/// Stride and padding stay signed here so that negative values from a file or
/// the command line reach [`ConvParams::try_new`] and get reported instead of
/// being rejected by the parser.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DemoConfig {
    pub input_size: usize,
    pub kernel_size: usize,
    pub stride: i64,
    pub padding: i64,
    pub input_value: f64,
    pub kernel_value: f64,
    pub method: ConvMethod,
    // random integer samples in [0, 10) instead of constant fills
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            input_size: 8,
            kernel_size: 5,
            stride: 2,
            padding: 2,
            input_value: 1.0,
            kernel_value: 2.0,
            method: ConvMethod::Sequential,
            seed: None,
        }
    }
}

impl DemoConfig {
    pub fn params(&self) -> convolution::Result<ConvParams> {
        ConvParams::try_new(self.stride, self.padding)
    }
}

impl ConfigFS for DemoConfig {
    type OutType = Self;

    async fn read(path: &Path) -> anyhow::Result<Option<Self::OutType>> {
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            return Ok(None);
        }
        let mut file = File::open(path)
            .await
            .with_context(|| format!("failed to open config {}", path.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).await?;
        let config: Self::OutType = serde_json::from_str(&contents)
            .with_context(|| format!("config {} is not well-formatted JSON", path.display()))?;
        Ok(Some(config))
    }

    async fn save(&self, path: &Path) -> anyhow::Result<()> {
        let pretty_json = serde_json::to_string_pretty(self)?;

        let data_file = File::create(path)
            .await
            .with_context(|| format!("failed to create config {}", path.display()))?;
        let mut data_file = BufWriter::new(data_file);
        data_file.write_all(pretty_json.as_bytes()).await?;
        data_file.flush().await?;
        Ok(())
    }
}
