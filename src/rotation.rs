//! # Rotation vocabulary
//!
//! xrandr accepts exactly four rotation keywords. We split them into the
//! horizontal and vertical halves the widget toggles between, so that an
//! unvalidated keyword can never reach a command line.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Keywords that leave the screen in landscape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalRotation {
    Normal,
    Inverted,
}

/// Keywords that put the screen in portrait.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalRotation {
    Left,
    Right,
}

impl HorizontalRotation {
    /// The keyword as passed to `xrandr --rotate`.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Inverted => "inverted",
        }
    }
}

impl VerticalRotation {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl Default for HorizontalRotation {
    fn default() -> Self {
        Self::Normal
    }
}

impl Default for VerticalRotation {
    fn default() -> Self {
        Self::Left
    }
}

impl FromStr for HorizontalRotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "normal" => Ok(Self::Normal),
            "inverted" => Ok(Self::Inverted),
            other => Err(Error::InvalidRotation(other.to_owned())),
        }
    }
}

impl FromStr for VerticalRotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(Error::InvalidRotation(other.to_owned())),
        }
    }
}

/// Classify an xrandr rotation descriptor.
///
/// xrandr omits the keyword when an output sits at its default rotation, in
/// which case the field we extract is the opening `(` of the axis list.
/// Any descriptor we don't recognize counts as vertical.
pub fn is_horizontal(descriptor: &str) -> bool {
    descriptor.starts_with('(') || descriptor == "normal" || descriptor == "inverted"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trip() -> Result<(), Error> {
        assert_eq!(
            "normal".parse::<HorizontalRotation>()?,
            HorizontalRotation::Normal
        );
        assert_eq!(
            "inverted".parse::<HorizontalRotation>()?,
            HorizontalRotation::Inverted
        );
        assert_eq!("left".parse::<VerticalRotation>()?, VerticalRotation::Left);
        assert_eq!(
            "right".parse::<VerticalRotation>()?,
            VerticalRotation::Right
        );

        assert_eq!(HorizontalRotation::Inverted.keyword(), "inverted");
        assert_eq!(VerticalRotation::Right.keyword(), "right");
        Ok(())
    }

    #[test]
    fn keywords_stay_in_their_half() {
        // "left" is not a horizontal keyword, and vice versa.
        assert!("left".parse::<HorizontalRotation>().is_err());
        assert!("normal".parse::<VerticalRotation>().is_err());
        assert!("sideways".parse::<HorizontalRotation>().is_err());
    }

    #[test]
    fn descriptor_classification() {
        // Default rotation: xrandr prints the axis list where the keyword
        // would be.
        assert!(is_horizontal("(normal"));
        assert!(is_horizontal("normal"));
        assert!(is_horizontal("inverted"));

        assert!(!is_horizontal("left"));
        assert!(!is_horizontal("right"));
        // Unknown and empty descriptors fall through to vertical.
        assert!(!is_horizontal("banana"));
        assert!(!is_horizontal(""));
    }
}
