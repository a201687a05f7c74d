use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub type RuleFn = dyn Fn(Complex) -> Complex + Send + Sync;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateRuleError {
    UnknownRule(String),
    ZeroExponent,
}

impl fmt::Display for UpdateRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRule(name) => write!(f, "unknown update rule: {:?}", name),
            Self::ZeroExponent => write!(f, "update rule exponent must be at least 1"),
        }
    }
}

impl Error for UpdateRuleError {}

/// Pointwise map `f` advanced each iteration as `z <- f(z) + c`.
///
/// The built-in variants get their own specialised kernels; `Custom` wraps
/// any thread-safe closure.
#[derive(Clone)]
pub enum UpdateRule {
    Square,
    Cube,
    Power(u32),
    Custom { name: String, rule: Arc<RuleFn> },
}

impl UpdateRule {
    pub fn power(exponent: u32) -> Result<Self, UpdateRuleError> {
        match exponent {
            0 => Err(UpdateRuleError::ZeroExponent),
            2 => Ok(Self::Square),
            3 => Ok(Self::Cube),
            n => Ok(Self::Power(n)),
        }
    }

    pub fn custom<F>(name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(Complex) -> Complex + Send + Sync + 'static,
    {
        Self::Custom {
            name: name.into(),
            rule: Arc::new(rule),
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Square => "z -> z^2 + c".to_string(),
            Self::Cube => "z -> z^3 + c".to_string(),
            Self::Power(n) => format!("z -> z^{} + c", n),
            Self::Custom { name, .. } => format!("z -> {}(z) + c", name),
        }
    }
}

impl fmt::Debug for UpdateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => f.write_str("Square"),
            Self::Cube => f.write_str("Cube"),
            Self::Power(n) => f.debug_tuple("Power").field(n).finish(),
            Self::Custom { name, .. } => f.debug_struct("Custom").field("name", name).finish_non_exhaustive(),
        }
    }
}

impl Default for UpdateRule {
    fn default() -> Self {
        Self::Square
    }
}

/// Accepts `square`, `cube`, `z^N` and `zN` (case-insensitive, spaces ignored).
impl FromStr for UpdateRule {
    type Err = UpdateRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalised.as_str() {
            "square" | "mandelbrot" => return Ok(Self::Square),
            "cube" => return Ok(Self::Cube),
            _ => {}
        }

        let exponent = normalised
            .strip_prefix("z^")
            .or_else(|| normalised.strip_prefix('z'))
            .and_then(|digits| digits.parse::<u32>().ok())
            .ok_or_else(|| UpdateRuleError::UnknownRule(s.to_string()))?;

        Self::power(exponent)
    }
}
