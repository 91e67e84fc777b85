// ============================================================
// Layer 3 — LabeledExample Domain Type
// ============================================================
// One annotated text span together with its binary target.
//
//   target = 1  → MajorClaim / Claim
//   target = 0  → Premise / non-claim
//
// The label is an enum rather than a bare integer, so a
// LabeledExample can never carry a target outside {0, 1}.
//
// Reference: Rust Book §6 (Enums), §5 (Structs)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary claim label. The discriminants are the numeric targets
/// consumers see in the `target` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum Label {
    /// Premise / non-claim, target 0
    NonClaim = 0,
    /// MajorClaim / Claim, target 1
    Claim = 1,
}

impl Label {
    /// Numeric target value (0 or 1)
    pub fn target(self) -> u8 {
        self as u8
    }

    /// Map a brat entity type onto a label.
    /// `MajorClaim` and `Claim` are claims, `Premise` is a non-claim,
    /// every other entity type is ignored.
    pub fn from_entity_type(kind: &str) -> Option<Label> {
        match kind {
            "MajorClaim" | "Claim" => Some(Label::Claim),
            "Premise" => Some(Label::NonClaim),
            _ => None,
        }
    }

    /// Parse a delimited-file label column.
    ///
    /// Integers and integral floats are accepted ("1", "0", "1.0"),
    /// anything that is not 0 or 1 yields None.
    pub fn parse_target(raw: &str) -> Option<Label> {
        let raw = raw.trim();

        if let Ok(n) = raw.parse::<i64>() {
            return Label::try_from(n).ok();
        }

        match raw.parse::<f64>() {
            Ok(f) if f == 0.0 => Some(Label::NonClaim),
            Ok(f) if f == 1.0 => Some(Label::Claim),
            _ => None,
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> u8 {
        label.target()
    }
}

impl TryFrom<i64> for Label {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::NonClaim),
            1 => Ok(Label::Claim),
            other => Err(format!("target must be 0 or 1, got {other}")),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target())
    }
}

/// A single row of a corpus table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledExample {
    /// Surface form of the annotated span or CSV text field
    pub text: String,

    /// Claim (1) or non-claim (0)
    pub target: Label,
}

impl LabeledExample {
    /// Create a new LabeledExample.
    ///
    /// Example:
    ///   let row = LabeledExample::new("X is true", Label::Claim);
    pub fn new(text: impl Into<String>, target: Label) -> Self {
        Self {
            text: text.into(),
            target,
        }
    }

    /// Number of whitespace-separated words in the text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_mapping() {
        assert_eq!(Label::from_entity_type("MajorClaim"), Some(Label::Claim));
        assert_eq!(Label::from_entity_type("Claim"), Some(Label::Claim));
        assert_eq!(Label::from_entity_type("Premise"), Some(Label::NonClaim));
        assert_eq!(Label::from_entity_type("Stance"), None);
        // Matching is case-sensitive
        assert_eq!(Label::from_entity_type("claim"), None);
    }

    #[test]
    fn test_parse_target_accepts_binary_values() {
        assert_eq!(Label::parse_target("1"), Some(Label::Claim));
        assert_eq!(Label::parse_target(" 0 "), Some(Label::NonClaim));
        assert_eq!(Label::parse_target("1.0"), Some(Label::Claim));
        assert_eq!(Label::parse_target("0.0"), Some(Label::NonClaim));
    }

    #[test]
    fn test_parse_target_rejects_other_values() {
        assert_eq!(Label::parse_target("2"), None);
        assert_eq!(Label::parse_target("-1"), None);
        assert_eq!(Label::parse_target("0.5"), None);
        assert_eq!(Label::parse_target("claim"), None);
        assert_eq!(Label::parse_target(""), None);
    }

    #[test]
    fn test_serialises_as_numeric_target() {
        let row = LabeledExample::new("X is true", Label::Claim);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"text":"X is true","target":1}"#);

        let back: LabeledExample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);

        let bad = serde_json::from_str::<LabeledExample>(r#"{"text":"x","target":3}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_word_count() {
        let row = LabeledExample::new("  Y supports   X ", Label::NonClaim);
        assert_eq!(row.word_count(), 3);
    }
}
