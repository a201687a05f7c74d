use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::grid::ScalarField;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

/// Largest finite value in the field, or 0 if there is none above 0.
fn field_max(field: &ScalarField) -> f64 {
    field
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Colours a scalar field, normalising each value over `[0, max]`.
///
/// The floor stays at 0 rather than the field minimum so that 0 (never
/// escaped) always lands on the bottom of the map. Non-finite and negative
/// values are treated as 0.
pub fn generate_pixel_buffer<CMap: ColourMap + ?Sized>(
    field: &ScalarField,
    mapper: &CMap,
) -> Result<PixelBuffer, PixelBufferError> {
    let max = field_max(field);
    let mut buffer = vec![0u8; field.as_slice().len() * 3];

    buffer
        .par_chunks_mut(3)
        .zip(field.as_slice().par_iter())
        .for_each(|(pixel, &value)| {
            let t = if max > 0.0 && value.is_finite() {
                (value / max).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let Colour { r, g, b } = mapper.map(t);

            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        });

    PixelBuffer::from_data(field.resolution(), buffer)
}
