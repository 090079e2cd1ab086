// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Gesture labels as emitted by the recognizer process.

use std::fmt;

/// A recognized gesture label.
///
/// The catalogue mirrors the recognizer model's canned gesture set; labels
/// the model may grow in the future round-trip through `Other` untouched,
/// so behaviours configured against them keep matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    ThumbUp,
    ThumbDown,
    OpenPalm,
    ClosedFist,
    Victory,
    PointingUp,
    ILoveYou,
    /// No gesture recognized in the current frame
    NoGesture,
    /// A label outside the known catalogue
    Other(String),
}

impl GestureLabel {
    /// Parse a label from its queue wire form.
    ///
    /// The producer has emitted "no gesture" under several spellings across
    /// versions; all of them normalize to [`GestureLabel::NoGesture`].
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "Thumb_Up" => Self::ThumbUp,
            "Thumb_Down" => Self::ThumbDown,
            "Open_Palm" => Self::OpenPalm,
            "Closed_Fist" => Self::ClosedFist,
            "Victory" => Self::Victory,
            "Pointing_Up" => Self::PointingUp,
            "ILoveYou" => Self::ILoveYou,
            "No_gesture" | "No gesture" | "None" => Self::NoGesture,
            other => Self::Other(other.to_string()),
        }
    }

    /// Canonical wire form of the label
    pub fn as_wire(&self) -> &str {
        match self {
            Self::ThumbUp => "Thumb_Up",
            Self::ThumbDown => "Thumb_Down",
            Self::OpenPalm => "Open_Palm",
            Self::ClosedFist => "Closed_Fist",
            Self::Victory => "Victory",
            Self::PointingUp => "Pointing_Up",
            Self::ILoveYou => "ILoveYou",
            Self::NoGesture => "No_gesture",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl From<&str> for GestureLabel {
    fn from(raw: &str) -> Self {
        Self::from_wire(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip() {
        for raw in ["Thumb_Up", "Open_Palm", "Closed_Fist", "Victory"] {
            assert_eq!(GestureLabel::from_wire(raw).as_wire(), raw);
        }
    }

    #[test]
    fn test_no_gesture_spellings_normalize() {
        assert_eq!(GestureLabel::from_wire("No_gesture"), GestureLabel::NoGesture);
        assert_eq!(GestureLabel::from_wire("No gesture"), GestureLabel::NoGesture);
        assert_eq!(GestureLabel::from_wire("None"), GestureLabel::NoGesture);
    }

    #[test]
    fn test_unknown_label_preserved() {
        let label = GestureLabel::from_wire("Spock_Salute");
        assert_eq!(label, GestureLabel::Other("Spock_Salute".to_string()));
        assert_eq!(label.as_wire(), "Spock_Salute");
    }

    #[test]
    fn test_configured_label_matches_wire_label() {
        // Behaviour configs are plain strings; both sides must parse equal.
        let configured = GestureLabel::from("Thumb_Up");
        let sampled = GestureLabel::from_wire("Thumb_Up");
        assert_eq!(configured, sampled);
    }
}
