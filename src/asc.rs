// src/asc.rs

//! Reader for ESRI-style ASCII raster grids (`.asc`).
//!
//! ```text
//! ncols        3
//! nrows        2
//! xllcorner    0.0
//! yllcorner    0.0
//! cellsize     10
//! NODATA_value -9999
//! 1 2 3
//! 4 5 6
//! ```
//!
//! Only `ncols`, `nrows` and `cellsize` are consulted, by position (lines 0,
//! 1 and 4, second token). The corner and nodata lines are skipped.

use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::errors::{GerrisError, Result};
use crate::fs::FileSystem;
use crate::grid::{linspace, meshgrid, Array2};

pub const HEADER_LINES: usize = 6;

const NCOLS_LINE: usize = 0;
const NROWS_LINE: usize = 1;
const CELLSIZE_LINE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscHeader {
    pub ncols: usize,
    pub nrows: usize,
    pub cellsize: f64,
}

/// A parsed raster: coordinate meshes plus elevations, all `(nrows, ncols)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AscGrid {
    pub header: AscHeader,
    pub xx: Array2,
    pub yy: Array2,
    pub z: Array2,
}

impl AscGrid {
    /// Column coordinates (first row of `xx`).
    pub fn x_axis(&self) -> Vec<f64> {
        axis(self.header.ncols, self.header.cellsize)
    }

    /// Row coordinates (first column of `yy`).
    pub fn y_axis(&self) -> Vec<f64> {
        axis(self.header.nrows, self.header.cellsize)
    }
}

fn axis(count: usize, cellsize: f64) -> Vec<f64> {
    linspace(0.0, cellsize * count as f64, count)
}

/// Read and parse an ASC grid through the given filesystem.
pub fn read_asc(fs: &dyn FileSystem, path: &Path) -> Result<AscGrid> {
    let contents = fs.read_to_string(path)?;
    let grid = parse_asc(&contents)?;
    debug!(
        path = ?path,
        ncols = grid.header.ncols,
        nrows = grid.header.nrows,
        cellsize = grid.header.cellsize,
        "read ASC grid"
    );
    Ok(grid)
}

/// Parse ASC text that is already in memory.
pub fn parse_asc(contents: &str) -> Result<AscGrid> {
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() < HEADER_LINES {
        return Err(GerrisError::AscHeader {
            line: lines.len(),
            reason: format!("expected {HEADER_LINES} header lines, found {}", lines.len()),
        });
    }

    let header = AscHeader {
        ncols: header_value(&lines, NCOLS_LINE)?,
        nrows: header_value(&lines, NROWS_LINE)?,
        cellsize: header_value(&lines, CELLSIZE_LINE)?,
    };

    // Axes are sized from the header alone.
    if header.ncols == 0 || header.nrows == 0 {
        return Err(GerrisError::AscHeader {
            line: if header.ncols == 0 { NCOLS_LINE } else { NROWS_LINE },
            reason: "grid has no cells".to_string(),
        });
    }

    let body = lines[HEADER_LINES..]
        .iter()
        .flat_map(|line| line.split_whitespace())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|e| GerrisError::AscBody(format!("invalid value '{token}': {e}")))
        })
        .collect::<Result<Vec<f64>>>()?;

    let z = Array2::from_shape_vec(header.nrows, header.ncols, body)?;

    let x = axis(header.ncols, header.cellsize);
    let y = axis(header.nrows, header.cellsize);
    let (xx, yy) = meshgrid(&x, &y);

    Ok(AscGrid { header, xx, yy, z })
}

fn header_value<T>(lines: &[&str], index: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let token = lines[index]
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| GerrisError::AscHeader {
            line: index,
            reason: "missing value".to_string(),
        })?;

    token.parse::<T>().map_err(|e| GerrisError::AscHeader {
        line: index,
        reason: format!("invalid value '{token}': {e}"),
    })
}
