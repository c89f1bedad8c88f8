//! Call/put selector.

use std::fmt;
use std::str::FromStr;

use super::error::QuoteError;

/// Which side of a European option a price or sensitivity refers to.
///
/// Pricing routines take this enum instead of a formula name or a boolean,
/// so the choice of formula is fixed at the call site.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionSide;
///
/// let side: OptionSide = "C".parse().unwrap();
/// assert_eq!(side, OptionSide::Call);
/// assert_eq!(side.opposite(), OptionSide::Put);
/// assert_eq!(format!("{}", OptionSide::Put), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionSide {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionSide {
    /// Both sides, calls first.
    pub const ALL: [OptionSide; 2] = [OptionSide::Call, OptionSide::Put];

    /// True for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionSide::Call)
    }

    /// The other side.
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            OptionSide::Call => OptionSide::Put,
            OptionSide::Put => OptionSide::Call,
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionSide::Call => "call",
            OptionSide::Put => "put",
        }
    }
}

impl FromStr for OptionSide {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionSide::Call),
            "put" | "p" => Ok(OptionSide::Put),
            _ => Err(QuoteError::UnknownSide(s.to_string())),
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
