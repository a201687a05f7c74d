use crate::core::actions::iterate::DEFAULT_ESCAPE_THRESHOLD;
use crate::core::colour_maps::styled::ColourMapStyle;
use crate::core::data::region::Region;
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::fractals::update_rule::UpdateRule;

const DEFAULT_NITERS: u32 = 256;
const DEFAULT_RESOLUTION: Resolution = Resolution::new(800, 800);
const DEFAULT_OUTPUT_TEMPLATE: &str = "ppm";

pub(crate) fn default_region() -> Region {
    Region::new(-2.0, 1.0, -1.5, 1.5).expect("default fractal region is valid")
}

/// Output size either in grid points or as physical size at a density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputSize {
    Points(Resolution),
    Physical { width: f64, height: f64, density: f64 },
}

impl OutputSize {
    pub fn resolution(&self) -> Result<Resolution, ResolutionError> {
        match *self {
            Self::Points(resolution) => Ok(resolution),
            Self::Physical {
                width,
                height,
                density,
            } => Resolution::from_density(width, height, density),
        }
    }

    #[must_use]
    pub fn density(&self) -> Option<f64> {
        match *self {
            Self::Points(_) => None,
            Self::Physical { density, .. } => Some(density),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub fractal_name: String,
    pub name: String,
    pub region: Region,
    pub niters: u32,
    pub size: OutputSize,
    pub rule: UpdateRule,
    pub threshold: f64,
    pub smoothed: bool,
    pub scaled: bool,
    pub colour_map: ColourMapStyle,
    /// Bare extension or full filename, expanded by `make_filename`.
    pub output_template: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fractal_name: "mandelbrot".to_string(),
            name: "mandelbrot_full".to_string(),
            region: default_region(),
            niters: DEFAULT_NITERS,
            size: OutputSize::Points(DEFAULT_RESOLUTION),
            rule: UpdateRule::Square,
            threshold: DEFAULT_ESCAPE_THRESHOLD,
            smoothed: true,
            scaled: true,
            colour_map: ColourMapStyle::default().with_black_zero(),
            output_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
        }
    }
}
