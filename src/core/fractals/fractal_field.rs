use crate::core::actions::iterate::IterationResult;
use crate::core::data::grid::{Grid, ScalarField};
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field has no positive value to rescale against.
    EmptyOrDegenerateField,
    ShapeMismatch {
        escape: Resolution,
        remain: Resolution,
        resolution: Resolution,
    },
    /// The point at row-major `index` breaks the escape/remain pairing.
    InvariantViolation { index: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOrDegenerateField => {
                write!(f, "field has no positive values to scale")
            }
            Self::ShapeMismatch {
                escape,
                remain,
                resolution,
            } => {
                write!(
                    f,
                    "escape ({}) and remain ({}) must both match resolution {}",
                    escape, remain, resolution
                )
            }
            Self::InvariantViolation { index } => {
                write!(f, "escape and remain disagree at point {}", index)
            }
        }
    }
}

impl Error for FieldError {}

/// The concrete result of one generation run.
///
/// Escape counts use 0 for "never escaped"; escaped points count from 1 and
/// stay below `niters`. `remain` is 0 exactly where `escape` is 0 and positive
/// elsewhere. Immutable once built; display transforms return new arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalField {
    name: String,
    escape: Grid<u32>,
    remain: Grid<f64>,
    resolution: Resolution,
    niters: u32,
    desc: String,
}

impl FractalField {
    pub fn new(
        name: impl Into<String>,
        iteration: IterationResult,
        niters: u32,
        desc: impl Into<String>,
    ) -> Result<Self, FieldError> {
        let IterationResult { escape, remain } = iteration;
        let resolution = escape.resolution();

        if remain.resolution() != resolution {
            return Err(FieldError::ShapeMismatch {
                escape: escape.resolution(),
                remain: remain.resolution(),
                resolution,
            });
        }

        let last_iteration = niters.saturating_sub(1);
        let broken = escape.iter().zip(remain.iter()).position(|(&e, &r)| {
            e > last_iteration || !r.is_finite() || r < 0.0 || (e == 0) != (r == 0.0)
        });
        if let Some(index) = broken {
            return Err(FieldError::InvariantViolation { index });
        }

        Ok(Self {
            name: name.into(),
            escape,
            remain,
            resolution,
            niters,
            desc: desc.into(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn escape(&self) -> &Grid<u32> {
        &self.escape
    }

    #[must_use]
    pub fn remain(&self) -> &Grid<f64> {
        &self.remain
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn niters(&self) -> u32 {
        self.niters
    }

    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Number of points that escaped within the iteration budget.
    #[must_use]
    pub fn escaped_count(&self) -> usize {
        self.escape.iter().filter(|&&e| e > 0).count()
    }

    /// Converts the raw counts into a field ready for colour mapping.
    ///
    /// `smoothed` subtracts a normalised `log(remain)` offset in `[0, 1]` from
    /// each escaped point. `scaled` applies [`FractalField::scale_for_plot`].
    pub fn plottable(&self, smoothed: bool, scaled: bool) -> Result<ScalarField, FieldError> {
        let base = if smoothed {
            self.smoothed()
        } else {
            self.escape.map(|&e| f64::from(e))
        };

        if scaled {
            Self::scale_for_plot(&base)
        } else {
            Ok(base)
        }
    }

    fn smoothed(&self) -> ScalarField {
        let offsets = self.remain.map(|&r| if r > 0.0 { r.ln() } else { f64::NAN });

        let (min, max) = offsets
            .iter()
            .filter(|o| !o.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &o| (lo.min(o), hi.max(o)));
        let span = max - min;

        let data = self
            .escape
            .iter()
            .zip(offsets.iter())
            .map(|(&escape, &offset)| {
                if escape == 0 {
                    return 0.0;
                }
                // Every escaped point has the same magnitude: no band to interpolate.
                let normalised = if span > 0.0 {
                    ((offset - min) / span).max(0.0)
                } else {
                    0.0
                };

                f64::from(escape) - normalised
            })
            .collect();

        Grid::from_data(self.resolution, data).expect("smoothed field sized from escape")
    }

    /// `log(max(field)) - log(field)` elementwise, with non-positive entries
    /// (never escaped) mapped to 0.
    ///
    /// Strictly decreasing for positive inputs: quick escapers get the largest
    /// values. Fails when the field has no positive entry.
    pub fn scale_for_plot(field: &ScalarField) -> Result<ScalarField, FieldError> {
        let max = field
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);

        if max <= 0.0 || !max.is_finite() {
            return Err(FieldError::EmptyOrDegenerateField);
        }

        let log_max = max.ln();

        Ok(field.map(|&v| {
            let scaled = log_max - v.ln();
            if scaled.is_finite() { scaled } else { 0.0 }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_from(width: usize, height: usize, escape: Vec<u32>, remain: Vec<f64>) -> FractalField {
        let resolution = Resolution::new(width, height);
        let iteration = IterationResult {
            escape: Grid::from_data(resolution, escape).unwrap(),
            remain: Grid::from_data(resolution, remain).unwrap(),
        };

        FractalField::new("test", iteration, 10, "synthetic").unwrap()
    }

    fn scalar(values: Vec<f64>) -> ScalarField {
        let width = values.len();
        Grid::from_data(Resolution::new(width, 1), values).unwrap()
    }

    #[test]
    fn test_new_rejects_mismatched_shapes() {
        let iteration = IterationResult {
            escape: Grid::filled(Resolution::new(2, 2), 0u32),
            remain: Grid::filled(Resolution::new(4, 1), 0.0),
        };

        let result = FractalField::new("bad", iteration, 10, "");

        assert!(matches!(result, Err(FieldError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_new_rejects_escape_beyond_budget() {
        let iteration = IterationResult {
            escape: Grid::from_data(Resolution::new(2, 1), vec![0, 99]).unwrap(),
            remain: Grid::from_data(Resolution::new(2, 1), vec![5.0, 0.0]).unwrap(),
        };

        let result = FractalField::new("bad", iteration, 10, "");

        assert_eq!(result, Err(FieldError::InvariantViolation { index: 0 }));
    }

    #[test]
    fn test_new_rejects_unpaired_or_invalid_remain() {
        let resolution = Resolution::new(3, 1);
        let cases = [
            (vec![0, 4, 9], vec![0.0, 0.0, 120.0], 1),
            (vec![0, 4, 9], vec![0.0, 150.0, -1.0], 2),
            (vec![0, 4, 9], vec![0.0, f64::NAN, 120.0], 1),
            (vec![0, 4, 10], vec![0.0, 150.0, 120.0], 2),
        ];

        for (escape, remain, index) in cases {
            let iteration = IterationResult {
                escape: Grid::from_data(resolution, escape).unwrap(),
                remain: Grid::from_data(resolution, remain).unwrap(),
            };

            assert_eq!(
                FractalField::new("bad", iteration, 10, ""),
                Err(FieldError::InvariantViolation { index })
            );
        }
    }

    #[test]
    fn test_metadata_accessors() {
        let field = field_from(2, 1, vec![0, 3], vec![0.0, 120.0]);

        assert_eq!(field.name(), "test");
        assert_eq!(field.desc(), "synthetic");
        assert_eq!(field.niters(), 10);
        assert_eq!(field.resolution(), Resolution::new(2, 1));
        assert_eq!(field.escaped_count(), 1);
    }

    #[test]
    fn test_plottable_raw_is_escape_as_float() {
        let field = field_from(3, 1, vec![0, 2, 7], vec![0.0, 150.0, 110.0]);

        let raw = field.plottable(false, false).unwrap();

        assert_eq!(raw.as_slice(), &[0.0, 2.0, 7.0]);
    }

    #[test]
    fn test_plottable_is_idempotent() {
        let field = field_from(3, 1, vec![0, 2, 7], vec![0.0, 150.0, 110.0]);

        let first = field.plottable(false, false).unwrap();
        let second = field.plottable(false, false).unwrap();

        assert_eq!(first, second);
        assert_eq!(field.escape().as_slice(), &[0, 2, 7]);
    }

    #[test]
    fn test_smoothing_stays_within_one_band() {
        let escape = vec![0, 1, 4, 4, 9, 2];
        let remain = vec![0.0, 101.0, 250.0, 9000.0, 130.0, 4000.0];
        let field = field_from(3, 2, escape.clone(), remain);

        let smoothed = field.plottable(true, false).unwrap();

        for (&value, &e) in smoothed.iter().zip(escape.iter()) {
            if e == 0 {
                assert_eq!(value, 0.0);
            } else {
                let e = f64::from(e);
                assert!(value >= e - 1.0 && value <= e, "{} outside [{}, {}]", value, e - 1.0, e);
            }
        }
    }

    #[test]
    fn test_smoothing_extremes() {
        let field = field_from(2, 1, vec![3, 5], vec![100.0, 1000.0]);

        let smoothed = field.plottable(true, false).unwrap();

        // smallest magnitude -> offset 0, largest -> offset 1
        assert_eq!(smoothed.as_slice(), &[3.0, 4.0]);
    }

    #[test]
    fn test_smoothing_degenerate_magnitudes_falls_back_to_raw() {
        let field = field_from(3, 1, vec![0, 2, 6], vec![0.0, 120.0, 120.0]);

        let smoothed = field.plottable(true, false).unwrap();

        assert_eq!(smoothed.as_slice(), &[0.0, 2.0, 6.0]);
    }

    #[test]
    fn test_smoothing_with_nothing_escaped() {
        let field = field_from(2, 2, vec![0; 4], vec![0.0; 4]);

        let smoothed = field.plottable(true, false).unwrap();

        assert!(smoothed.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_scale_for_plot_is_strictly_decreasing() {
        let scaled = FractalField::scale_for_plot(&scalar(vec![1.0, 2.0, 4.0, 8.0])).unwrap();
        let values = scaled.as_slice();

        assert!(values.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(values[3], 0.0);
        assert!((values[0] - 8.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_scale_for_plot_zeroes_never_escaped() {
        let scaled = FractalField::scale_for_plot(&scalar(vec![0.0, 1.0, 10.0])).unwrap();

        assert_eq!(scaled.as_slice()[0], 0.0);
        assert!(scaled.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_scale_for_plot_rejects_all_zero_field() {
        let result = FractalField::scale_for_plot(&scalar(vec![0.0, 0.0, 0.0]));

        assert_eq!(result, Err(FieldError::EmptyOrDegenerateField));
    }

    #[test]
    fn test_plottable_scaled_all_zero_field_is_an_error() {
        let field = field_from(2, 1, vec![0, 0], vec![0.0, 0.0]);

        assert_eq!(field.plottable(false, true), Err(FieldError::EmptyOrDegenerateField));
    }

    #[test]
    fn test_plottable_smoothed_and_scaled_is_finite() {
        let field = field_from(4, 1, vec![0, 1, 3, 8], vec![0.0, 2000.0, 150.0, 400.0]);

        let plot = field.plottable(true, true).unwrap();

        assert!(plot.iter().all(|v| v.is_finite() && *v >= 0.0));
        assert_eq!(plot.as_slice()[0], 0.0);
    }
}
