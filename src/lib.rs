//! Escape-time fractal fields.
//!
//! [`FractalGenerator`] samples a [`Region`] of the complex plane on a
//! [`Resolution`]-sized grid, iterates `z <- f(z) + c` for every point and
//! returns a [`FractalField`] of escape counts and escape magnitudes.
//! [`FractalField::plottable`] turns that into a smoothed, log-scaled
//! [`ScalarField`] for colour mapping.

mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::CliController;
pub use crate::controllers::config::{OutputSize, RenderConfig};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::build_grid::{build_grid, CoordinateGrid, GridError};
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate::{generate, FractalGenerator, GenerateError};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::iterate::{
    iterate, iterate_cancelable, IterateCancelableError, IterateError, IterationResult,
    DEFAULT_ESCAPE_THRESHOLD,
};
pub use crate::core::colour_maps::factory::{colour_map_factory, styled_colour_map_factory};
pub use crate::core::colour_maps::kinds::{ColourMapKind, UnknownColourMap};
pub use crate::core::colour_maps::styled::{ColourMapStyle, StyledColourMap};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid::{Grid, GridDataError, ScalarField};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::fractals::fractal_field::{FieldError, FractalField};
pub use crate::core::fractals::update_rule::{UpdateRule, UpdateRuleError};
pub use crate::core::util::make_filename::make_filename;
pub use crate::presenters::file::ppm::PpmFilePresenter;
