use crate::core::data::complex::Complex;
use crate::core::data::grid::Grid;
use crate::core::data::region::Region;
use crate::core::data::resolution::Resolution;
use crate::core::util::linspace::linspace;
use std::error::Error;
use std::fmt;

/// Sample points `c`, one per cell, row 0 at the region's maximum imaginary value.
pub type CoordinateGrid = Grid<Complex>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidResolution { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution { width, height } => {
                write!(f, "resolution must be at least 1x1: {}x{}", width, height)
            }
        }
    }
}

impl Error for GridError {}

/// Samples `region` evenly: real axis ascending left to right, imaginary axis
/// descending top to bottom.
pub fn build_grid(region: Region, resolution: Resolution) -> Result<CoordinateGrid, GridError> {
    if !resolution.is_valid() {
        return Err(GridError::InvalidResolution {
            width: resolution.width,
            height: resolution.height,
        });
    }

    let reals = linspace(region.real_min(), region.real_max(), resolution.width);
    let imags = linspace(region.imag_max(), region.imag_min(), resolution.height);

    let values = imags
        .iter()
        .flat_map(|&imag| reals.iter().map(move |&real| Complex { real, imag }))
        .collect();

    Ok(Grid::from_data(resolution, values).expect("linspace yields one value per cell"))
}
