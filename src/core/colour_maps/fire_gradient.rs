use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

/// Black through red and orange to white.
#[derive(Debug, Default)]
pub struct FireGradient {}

impl ColourMap for FireGradient {
    fn map(&self, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);

        let (r, g, b) = if t < 0.25 {
            ((t / 0.25 * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            (255, ((t - 0.25) / 0.25 * 165.0) as u8, 0)
        } else if t < 0.75 {
            (255, (165.0 + (t - 0.5) / 0.25 * 90.0) as u8, 0)
        } else {
            (255, 255, ((t - 0.75) / 0.25 * 255.0) as u8)
        };

        Colour { r, g, b }
    }

    fn display_name(&self) -> &str {
        ColourMapKind::FireGradient.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends() {
        let map = FireGradient {};

        assert_eq!(map.map(0.0), Colour::BLACK);
        assert_eq!(map.map(1.0), Colour { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_midpoint_is_orange() {
        assert_eq!(FireGradient {}.map(0.5), Colour { r: 255, g: 165, b: 0 });
    }

    #[test]
    fn test_clamps_out_of_range() {
        let map = FireGradient {};

        assert_eq!(map.map(-3.0), map.map(0.0));
        assert_eq!(map.map(7.0), map.map(1.0));
    }
}
