/// Ordered sequence of samples; also used as a 1-D kernel.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Signal(pub Vec<f64>);

impl Signal {
    /// Builds a signal of `len` copies of `value`.
    pub fn filled(len: usize, value: f64) -> Self {
        Self(vec![value; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for Signal {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
