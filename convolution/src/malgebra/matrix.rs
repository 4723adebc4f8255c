/// Row-major matrix of `f64`. Rows are expected to share one length.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Matrix(pub Vec<Vec<f64>>);

impl Matrix {
    /// Builds a `rows x cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self(vec![vec![value; cols]; rows])
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Length of the first row, or 0 for a matrix without rows.
    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, |row| row.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// True when every row has the length of the first one.
    pub fn is_rectangular(&self) -> bool {
        let cols = self.cols();
        self.0.iter().all(|row| row.len() == cols)
    }

    pub fn is_square(&self) -> bool {
        self.is_rectangular() && self.rows() == self.cols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_shape() {
        let m = Matrix::filled(2, 3, 1.5);
        assert_eq!(m.shape(), (2, 3));
        assert!(m.0.iter().flatten().all(|v| *v == 1.5));
        assert!(m.is_rectangular());
        assert!(!m.is_square());
    }

    #[test]
    fn ragged_rows() {
        let m = Matrix(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(!m.is_rectangular());
        assert!(!m.is_square());
    }

    #[test]
    fn from_rows() {
        let m = Matrix::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.shape(), (2, 2));
        assert!(m.is_square());
        assert_eq!(crate::Signal::from(vec![1.0, 2.0]).len(), 2);
    }

    #[test]
    fn empty_matrix() {
        let m = Matrix::default();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
        assert!(Matrix(vec![vec![]]).is_empty());
    }
}
