use log::trace;
use rayon::prelude::*;

use crate::core::actions::build_grid::CoordinateGrid;
use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_POINTS,
};
use crate::core::data::complex::Complex;
use crate::core::data::grid::Grid;
use crate::core::fractals::update_rule::UpdateRule;
use std::error::Error;
use std::fmt;

/// Magnitude at which a trajectory counts as escaped. Generous so the update
/// rule doesn't overflow before the check fires.
pub const DEFAULT_ESCAPE_THRESHOLD: f64 = 100.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IterateError {
    InvalidResolution { width: usize, height: usize },
    InvalidIterationBudget { niters: u32 },
    InvalidThreshold { threshold: f64 },
    NonFiniteUpdateResult { row: usize, col: usize, iteration: u32 },
}

impl fmt::Display for IterateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution { width, height } => {
                write!(f, "cannot iterate a {}x{} grid", width, height)
            }
            Self::InvalidIterationBudget { niters } => {
                write!(f, "iteration budget must be at least 1, got {}", niters)
            }
            Self::InvalidThreshold { threshold } => {
                write!(f, "escape threshold must be finite and positive, got {}", threshold)
            }
            Self::NonFiniteUpdateResult {
                row,
                col,
                iteration,
            } => {
                write!(
                    f,
                    "update rule produced a non-finite value at row {}, col {} on iteration {}",
                    row, col, iteration
                )
            }
        }
    }
}

impl Error for IterateError {}

/// Error type for cancelable iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum IterateCancelableError {
    /// The token signalled before every row finished.
    Cancelled(Cancelled),
    Iterate(IterateError),
}

impl fmt::Display for IterateCancelableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Iterate(err) => write!(f, "{}", err),
        }
    }
}

impl Error for IterateCancelableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Iterate(err) => Some(err),
        }
    }
}

impl From<IterateError> for IterateCancelableError {
    fn from(err: IterateError) -> Self {
        Self::Iterate(err)
    }
}

/// Raw per-point results of one iteration run.
///
/// `escape` holds the iteration on which the point escaped, `remain` the
/// magnitude it escaped with. Points that never escaped hold 0 in both.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationResult {
    pub escape: Grid<u32>,
    pub remain: Grid<f64>,
}

/// Runs `z <- f(z) + c` from `z = 0` for every point of `grid`, for iterations
/// `1..niters`.
///
/// For cancel-aware iteration, use [`iterate_cancelable`].
pub fn iterate(
    grid: &CoordinateGrid,
    rule: &UpdateRule,
    niters: u32,
    threshold: f64,
) -> Result<IterationResult, IterateError> {
    iterate_cancelable(grid, rule, niters, threshold, &NeverCancel).map_err(|e| match e {
        IterateCancelableError::Iterate(err) => err,
        IterateCancelableError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`iterate`], but polls `cancel` at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_POINTS`] points within a row.
pub fn iterate_cancelable<C: CancelToken>(
    grid: &CoordinateGrid,
    rule: &UpdateRule,
    niters: u32,
    threshold: f64,
    cancel: &C,
) -> Result<IterationResult, IterateCancelableError> {
    let resolution = grid.resolution();
    if !resolution.is_valid() {
        return Err(IterateError::InvalidResolution {
            width: resolution.width,
            height: resolution.height,
        }
        .into());
    }
    if niters < 1 {
        return Err(IterateError::InvalidIterationBudget { niters }.into());
    }
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(IterateError::InvalidThreshold { threshold }.into());
    }

    trace!(
        "iterating {} points for {} iterations with {:?}",
        grid.as_slice().len(),
        niters,
        rule
    );

    // One match per call; each arm monomorphises its own kernel.
    match rule {
        UpdateRule::Square => iterate_rows(grid, |z| z * z, niters, threshold, cancel),
        UpdateRule::Cube => iterate_rows(grid, |z| z * z * z, niters, threshold, cancel),
        UpdateRule::Power(n) => {
            let n = *n;
            iterate_rows(grid, move |z: Complex| z.powu(n), niters, threshold, cancel)
        }
        UpdateRule::Custom { rule, .. } => {
            iterate_rows(grid, |z| rule(z), niters, threshold, cancel)
        }
    }
}

fn iterate_rows<F, C>(
    grid: &CoordinateGrid,
    f: F,
    niters: u32,
    threshold: f64,
    cancel: &C,
) -> Result<IterationResult, IterateCancelableError>
where
    F: Fn(Complex) -> Complex + Sync,
    C: CancelToken,
{
    let resolution = grid.resolution();
    let width = resolution.width;
    let mut escape = vec![0u32; resolution.size()];
    let mut remain = vec![0.0f64; resolution.size()];

    escape
        .par_chunks_mut(width)
        .zip(remain.par_chunks_mut(width))
        .zip(grid.as_slice().par_chunks(width))
        .enumerate()
        .try_for_each(|(row, ((escape_row, remain_row), c_row))| {
            for (col, &c) in c_row.iter().enumerate() {
                if col % CANCEL_CHECK_INTERVAL_POINTS == 0 && cancel.is_cancelled() {
                    return Err(IterateCancelableError::Cancelled(Cancelled));
                }

                let escaped = escape_point(&f, c, niters, threshold).map_err(|iteration| {
                    IterateError::NonFiniteUpdateResult {
                        row,
                        col,
                        iteration,
                    }
                })?;

                if let Some((iteration, magnitude)) = escaped {
                    escape_row[col] = iteration;
                    remain_row[col] = magnitude;
                }
            }

            Ok(())
        })?;

    Ok(IterationResult {
        escape: Grid::from_data(resolution, escape).expect("escape buffer sized from grid"),
        remain: Grid::from_data(resolution, remain).expect("remain buffer sized from grid"),
    })
}

/// Follows one trajectory. Returns the escape iteration and magnitude, `None`
/// if the point stays bounded, or the iteration on which `f` went non-finite.
///
/// Stopping at escape is what holds escaped points still; nothing past that
/// iteration is ever computed for them.
#[inline]
fn escape_point<F>(f: &F, c: Complex, niters: u32, threshold: f64) -> Result<Option<(u32, f64)>, u32>
where
    F: Fn(Complex) -> Complex,
{
    let mut z = Complex::ZERO;

    for iteration in 1..niters {
        z = f(z) + c;

        if !z.is_finite() {
            return Err(iteration);
        }

        let magnitude = z.magnitude();
        if magnitude >= threshold {
            return Ok(Some((iteration, magnitude)));
        }
    }

    Ok(None)
}
