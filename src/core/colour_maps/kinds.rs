use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMapKind {
    FireGradient,
    BlueWhiteGradient,
    Greyscale,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[Self::FireGradient, Self::BlueWhiteGradient, Self::Greyscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
            Self::Greyscale => "Greyscale",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FireGradient => "fire",
            Self::BlueWhiteGradient => "blue-white",
            Self::Greyscale => "grey",
        }
    }
}

impl Default for ColourMapKind {
    fn default() -> Self {
        Self::FireGradient
    }
}

impl fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMap(pub String);

impl fmt::Display for UnknownColourMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown colour map: {:?}", self.0)
    }
}

impl Error for UnknownColourMap {}

impl FromStr for ColourMapKind {
    type Err = UnknownColourMap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColourMap(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourMapKind::ALL.first(), Some(&ColourMapKind::default()));
    }

    #[test]
    fn display_names_are_unique() {
        for (i, a) in ColourMapKind::ALL.iter().enumerate() {
            for b in &ColourMapKind::ALL[i + 1..] {
                assert_ne!(a.display_name(), b.display_name());
            }
        }
    }

    #[test]
    fn parses_keys() {
        for &kind in ColourMapKind::ALL {
            assert_eq!(kind.key().parse::<ColourMapKind>(), Ok(kind));
        }
        assert_eq!(" FIRE ".parse::<ColourMapKind>(), Ok(ColourMapKind::FireGradient));
        assert!("viridis".parse::<ColourMapKind>().is_err());
    }
}
