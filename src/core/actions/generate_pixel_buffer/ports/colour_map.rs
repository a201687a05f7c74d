use crate::core::data::colour::Colour;

/// Maps a normalised value in `[0, 1]` to a colour. Out-of-range input is clamped.
pub trait ColourMap: Send + Sync {
    fn map(&self, t: f64) -> Colour;

    fn display_name(&self) -> &str;
}

impl<M: ColourMap + ?Sized> ColourMap for Box<M> {
    fn map(&self, t: f64) -> Colour {
        (**self).map(t)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
