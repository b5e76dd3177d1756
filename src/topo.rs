// src/topo.rs

//! Topography generation from in-memory arrays and ASC rasters.
//!
//! Both paths end in [`Invoker::generate_topo_from_file`]: the points are
//! written as `x y z` lines to a temporary file that is mounted into the
//! container and removed afterwards, whether or not the conversion
//! succeeded.

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use crate::asc::read_asc;
use crate::errors::{GerrisError, Result};
use crate::exec::check_working_dir;
use crate::grid::{meshgrid, Array2};
use crate::invoker::Invoker;

impl Invoker {
    /// Build a topography database from axis vectors and elevations.
    ///
    /// `z` holds `y.len() × x.len()` values in row-major order (one row per
    /// `y` coordinate).
    pub async fn generate_topo_from_array(
        &self,
        x: &[f64],
        y: &[f64],
        z: &[f64],
        topo_name: &str,
        working_dir: impl AsRef<Path>,
    ) -> Result<()> {
        let working_dir = working_dir.as_ref();
        check_working_dir(self.filesystem(), working_dir)?;

        let (xx, yy) = meshgrid(x, y);
        let expected = xx.len();
        if z.len() != expected {
            return Err(GerrisError::ShapeMismatch {
                expected,
                found: z.len(),
            });
        }

        info!("starting converting topo...");
        let xyz = tempfile::Builder::new()
            .prefix("gerris-topo-")
            .suffix(".xyz")
            .tempfile()
            .context("creating temporary xyz file")?;

        {
            let mut writer = BufWriter::new(xyz.as_file());
            write_xyz(&mut writer, &xx, &yy, z)?;
            writer.flush()?;
        }
        debug!(path = ?xyz.path(), points = expected, "wrote xyz points");

        let result = self
            .generate_topo_from_file(xyz.path(), topo_name, working_dir)
            .await;

        let removed = xyz.close();
        result?;
        removed.context("removing temporary xyz file")?;

        info!("done");
        Ok(())
    }

    /// Read an ASC raster and build a topography database from it.
    pub async fn generate_topo_from_asc(
        &self,
        asc_file: impl AsRef<Path>,
        topo_name: &str,
        working_dir: impl AsRef<Path>,
    ) -> Result<()> {
        let grid = read_asc(self.filesystem(), asc_file.as_ref())?;
        self.generate_topo_from_array(
            &grid.x_axis(),
            &grid.y_axis(),
            grid.z.as_slice(),
            topo_name,
            working_dir,
        )
        .await
    }
}

/// Write one `x y z` line per mesh point, row-major.
pub fn write_xyz<W: Write>(out: &mut W, xx: &Array2, yy: &Array2, z: &[f64]) -> Result<()> {
    for ((x, y), z) in xx.as_slice().iter().zip(yy.as_slice()).zip(z) {
        writeln!(out, "{} {} {}", x, y, z)?;
    }
    Ok(())
}
