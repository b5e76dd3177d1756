// src/grid.rs

//! Minimal dense 2-D arrays used for raster and mesh data.

use crate::errors::{GerrisError, Result};

/// Row-major `rows × cols` matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Array2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Array2 {
    /// Reshape a flat row-major buffer.
    ///
    /// Fails with `ShapeMismatch` when `data.len() != rows * cols`. A shape
    /// whose cell count overflows `usize` never matches and reports
    /// `usize::MAX` as the expected size.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        match rows.checked_mul(cols) {
            Some(expected) if expected == data.len() => Ok(Self { rows, cols, data }),
            expected => Err(GerrisError::ShapeMismatch {
                expected: expected.unwrap_or(usize::MAX),
                found: data.len(),
            }),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Values in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// `n` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Expand two axes into coordinate matrices of shape `(y.len(), x.len())`.
///
/// `xx` repeats `x` on every row, `yy` repeats `y` down every column.
pub fn meshgrid(x: &[f64], y: &[f64]) -> (Array2, Array2) {
    let (rows, cols) = (y.len(), x.len());

    let mut xx = Vec::with_capacity(rows * cols);
    let mut yy = Vec::with_capacity(rows * cols);
    for &yv in y {
        xx.extend_from_slice(x);
        yy.extend(std::iter::repeat_n(yv, cols));
    }

    (
        Array2 { rows, cols, data: xx },
        Array2 { rows, cols, data: yy },
    )
}
