use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::{debug, info};

use crate::core::actions::build_grid::{build_grid, GridError};
use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::iterate::{
    iterate_cancelable, IterateCancelableError, IterateError, DEFAULT_ESCAPE_THRESHOLD,
};
use crate::core::data::region::Region;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::fractal_field::{FieldError, FractalField};
use crate::core::fractals::update_rule::UpdateRule;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    Grid(GridError),
    Iterate(IterateError),
    Field(FieldError),
    /// Cancellation was requested; expected control flow rather than a failure.
    Cancelled(Cancelled),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "grid error: {}", err),
            Self::Iterate(err) => write!(f, "iteration error: {}", err),
            Self::Field(err) => write!(f, "field error: {}", err),
            Self::Cancelled(c) => write!(f, "{}", c),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::Iterate(err) => Some(err),
            Self::Field(err) => Some(err),
            Self::Cancelled(c) => Some(c),
        }
    }
}

impl From<GridError> for GenerateError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<IterateError> for GenerateError {
    fn from(err: IterateError) -> Self {
        Self::Iterate(err)
    }
}

impl From<FieldError> for GenerateError {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}

impl From<IterateCancelableError> for GenerateError {
    fn from(err: IterateCancelableError) -> Self {
        match err {
            IterateCancelableError::Cancelled(c) => Self::Cancelled(c),
            IterateCancelableError::Iterate(err) => Self::Iterate(err),
        }
    }
}

/// Produces [`FractalField`]s for one update rule.
#[derive(Debug, Clone)]
pub struct FractalGenerator {
    fractal_name: String,
    rule: UpdateRule,
    threshold: f64,
}

impl FractalGenerator {
    pub fn new(fractal_name: impl Into<String>, rule: UpdateRule) -> Self {
        Self {
            fractal_name: fractal_name.into(),
            rule,
            threshold: DEFAULT_ESCAPE_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn fractal_name(&self) -> &str {
        &self.fractal_name
    }

    #[must_use]
    pub fn rule(&self) -> &UpdateRule {
        &self.rule
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Default field description: fractal name and rule.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{}: {}", self.fractal_name, self.rule.description())
    }

    /// Builds the grid for `region` and iterates it. Without `desc` the field
    /// is described by [`FractalGenerator::description`].
    ///
    /// For cancel-aware generation, use [`FractalGenerator::generate_cancelable`].
    pub fn generate(
        &self,
        name: &str,
        region: Region,
        niters: u32,
        resolution: Resolution,
        desc: Option<&str>,
    ) -> Result<FractalField, GenerateError> {
        self.generate_cancelable(name, region, niters, resolution, desc, &NeverCancel)
    }

    pub fn generate_cancelable<C: CancelToken>(
        &self,
        name: &str,
        region: Region,
        niters: u32,
        resolution: Resolution,
        desc: Option<&str>,
        cancel: &C,
    ) -> Result<FractalField, GenerateError> {
        info!(
            "generating {} ({}) at {} with {} iterations",
            name, self.fractal_name, resolution, niters
        );

        let start = Instant::now();
        let grid = build_grid(region, resolution)?;
        let iteration = iterate_cancelable(&grid, &self.rule, niters, self.threshold, cancel)?;
        drop(grid);

        let desc = desc.map_or_else(|| self.description(), str::to_string);
        let field = FractalField::new(name, iteration, niters, desc)?;

        debug!(
            "generated {} in {:?}: {} of {} points escaped",
            name,
            start.elapsed(),
            field.escaped_count(),
            resolution.size()
        );

        Ok(field)
    }
}

/// One-shot generation with the default escape threshold.
pub fn generate(
    name: &str,
    region: Region,
    niters: u32,
    resolution: Resolution,
    desc: Option<&str>,
    rule: &UpdateRule,
) -> Result<FractalField, GenerateError> {
    FractalGenerator::new(name, rule.clone()).generate(name, region, niters, resolution, desc)
}
