use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    InvalidBounds {
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                real_min,
                real_max,
                imag_min,
                imag_max,
            } => {
                write!(
                    f,
                    "region bounds must be finite and increasing: real [{}, {}], imag [{}, {}]",
                    real_min, real_max, imag_min, imag_max
                )
            }
        }
    }
}

impl Error for RegionError {}

/// Axis-aligned rectangle of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

impl Region {
    pub fn new(real_min: f64, real_max: f64, imag_min: f64, imag_max: f64) -> Result<Self, RegionError> {
        let finite = [real_min, real_max, imag_min, imag_max]
            .iter()
            .all(|bound| bound.is_finite());

        if !finite || real_min >= real_max || imag_min >= imag_max {
            return Err(RegionError::InvalidBounds {
                real_min,
                real_max,
                imag_min,
                imag_max,
            });
        }

        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    /// Builds a region from `[real_min, real_max, imag_min, imag_max]`.
    pub fn from_bounds(bounds: [f64; 4]) -> Result<Self, RegionError> {
        let [real_min, real_max, imag_min, imag_max] = bounds;
        Self::new(real_min, real_max, imag_min, imag_max)
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }
}
