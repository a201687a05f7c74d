use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridDataError {
    SizeMismatch { resolution: Resolution, data_len: usize },
}

impl fmt::Display for GridDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                resolution,
                data_len,
            } => {
                write!(
                    f,
                    "resolution {} needs {} values but {} were given",
                    resolution,
                    resolution.size(),
                    data_len
                )
            }
        }
    }
}

impl Error for GridDataError {}

/// Dense row-major 2D array. Row 0 is the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    resolution: Resolution,
    data: Vec<T>,
}

/// Display-ready values, one per grid point.
pub type ScalarField = Grid<f64>;

impl<T> Grid<T> {
    pub fn from_data(resolution: Resolution, data: Vec<T>) -> Result<Self, GridDataError> {
        if resolution.size() != data.len() {
            return Err(GridDataError::SizeMismatch {
                resolution,
                data_len: data.len(),
            });
        }

        Ok(Self { resolution, data })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.resolution.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.resolution.height
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.height() || col >= self.width() {
            return None;
        }

        self.data.get(row * self.width() + col)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Applies `f` elementwise, producing a new grid of the same shape.
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            resolution: self.resolution,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    #[must_use]
    pub fn filled(resolution: Resolution, value: T) -> Self {
        Self {
            resolution,
            data: vec![value; resolution.size()],
        }
    }
}
