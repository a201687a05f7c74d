use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ResolutionError {
    InvalidDensity {
        physical_width: f64,
        physical_height: f64,
        density: f64,
    },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity {
                physical_width,
                physical_height,
                density,
            } => {
                write!(
                    f,
                    "physical size {}x{} at density {} does not give a positive resolution",
                    physical_width, physical_height, density
                )
            }
        }
    }
}

impl Error for ResolutionError {}

/// Number of grid points along the real (`width`) and imaginary (`height`) axes.
///
/// Not validated on construction; `build_grid` rejects zero dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Derives a resolution from a physical size and a points-per-unit density,
    /// rounding each axis to the nearest integer.
    pub fn from_density(
        physical_width: f64,
        physical_height: f64,
        density: f64,
    ) -> Result<Self, ResolutionError> {
        let width = (physical_width * density).round();
        let height = (physical_height * density).round();

        if !width.is_finite() || !height.is_finite() || width < 1.0 || height < 1.0 {
            return Err(ResolutionError::InvalidDensity {
                physical_width,
                physical_height,
                density,
            });
        }

        Ok(Self {
            width: width as usize,
            height: height as usize,
        })
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width >= 1 && self.height >= 1
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
