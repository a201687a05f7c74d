use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::blue_white_gradient::BlueWhiteGradient;
use crate::core::colour_maps::fire_gradient::FireGradient;
use crate::core::colour_maps::greyscale::Greyscale;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::colour_maps::styled::{ColourMapStyle, StyledColourMap};

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::FireGradient => Box::new(FireGradient {}),
        ColourMapKind::BlueWhiteGradient => Box::new(BlueWhiteGradient {}),
        ColourMapKind::Greyscale => Box::new(Greyscale {}),
    }
}

#[must_use]
pub fn styled_colour_map_factory(style: ColourMapStyle) -> StyledColourMap {
    StyledColourMap::new(colour_map_factory(style.kind), style)
}
