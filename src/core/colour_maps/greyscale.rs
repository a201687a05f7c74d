use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

#[derive(Debug, Default)]
pub struct Greyscale {}

impl ColourMap for Greyscale {
    fn map(&self, t: f64) -> Colour {
        let v = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
        Colour { r: v, g: v, b: v }
    }

    fn display_name(&self) -> &str {
        ColourMapKind::Greyscale.display_name()
    }
}
