//! Staircase action definitions

use serde::{Deserialize, Serialize};

/// Direction the SNR moves after a block.
///
/// Named on the SNR axis, not the difficulty axis: `LowerSnr` makes the
/// exercise HARDER, `RaiseSnr` makes it EASIER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnrAction {
    /// SNR goes down by one step (harder)
    #[serde(rename = "decrease")]
    LowerSnr,
    /// SNR goes up by one step (easier)
    #[serde(rename = "increase")]
    RaiseSnr,
    /// SNR unchanged
    #[serde(rename = "keep", alias = "maintain")]
    HoldSnr,
}

impl SnrAction {
    /// Label used by the embedded evaluator
    pub fn label(&self) -> &'static str {
        match self {
            SnrAction::LowerSnr => "decrease",
            SnrAction::RaiseSnr => "increase",
            SnrAction::HoldSnr => "keep",
        }
    }

    /// Label used on the HTTP wire (`maintain` instead of `keep`)
    pub fn wire_label(&self) -> &'static str {
        match self {
            SnrAction::HoldSnr => "maintain",
            other => other.label(),
        }
    }

    /// Signed step multiplier: -1 lower, +1 raise, 0 hold
    pub fn direction(&self) -> f64 {
        match self {
            SnrAction::LowerSnr => -1.0,
            SnrAction::RaiseSnr => 1.0,
            SnrAction::HoldSnr => 0.0,
        }
    }

    /// Get ANSI color for terminal display
    pub fn color(&self) -> colored::Color {
        match self {
            SnrAction::LowerSnr => colored::Color::Green,
            SnrAction::RaiseSnr => colored::Color::Yellow,
            SnrAction::HoldSnr => colored::Color::BrightBlack,
        }
    }

    /// Get symbol for terminal display
    pub fn symbol(&self) -> &'static str {
        match self {
            SnrAction::LowerSnr => "▼",
            SnrAction::RaiseSnr => "▲",
            SnrAction::HoldSnr => "●",
        }
    }
}

impl std::fmt::Display for SnrAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
