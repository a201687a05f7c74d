use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

/// Polynomial dark-blue to white palette, black at both ends.
#[derive(Debug, Default)]
pub struct BlueWhiteGradient {}

impl ColourMap for BlueWhiteGradient {
    fn map(&self, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;

        Colour {
            r: (9.0 * s * t * t * t * 255.0) as u8,
            g: (15.0 * s * s * t * t * 255.0) as u8,
            b: (8.5 * s * s * s * t * 255.0) as u8,
        }
    }

    fn display_name(&self) -> &str {
        ColourMapKind::BlueWhiteGradient.display_name()
    }
}
