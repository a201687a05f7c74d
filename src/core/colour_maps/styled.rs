use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

/// Immutable colour map choice: base palette plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColourMapStyle {
    pub kind: ColourMapKind,
    /// Run the palette from its top end down.
    pub reversed: bool,
    /// Paint the lowest value (0) black, after any reversal.
    pub black_zero: bool,
}

impl ColourMapStyle {
    #[must_use]
    pub const fn new(kind: ColourMapKind) -> Self {
        Self {
            kind,
            reversed: false,
            black_zero: false,
        }
    }

    #[must_use]
    pub const fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    #[must_use]
    pub const fn with_black_zero(mut self) -> Self {
        self.black_zero = true;
        self
    }
}

pub struct StyledColourMap {
    base: Box<dyn ColourMap>,
    reversed: bool,
    black_zero: bool,
}

impl StyledColourMap {
    pub fn new(base: Box<dyn ColourMap>, style: ColourMapStyle) -> Self {
        Self {
            base,
            reversed: style.reversed,
            black_zero: style.black_zero,
        }
    }
}

impl ColourMap for StyledColourMap {
    fn map(&self, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);

        if self.black_zero && t == 0.0 {
            return Colour::BLACK;
        }

        if self.reversed {
            self.base.map(1.0 - t)
        } else {
            self.base.map(t)
        }
    }

    fn display_name(&self) -> &str {
        self.base.display_name()
    }
}
