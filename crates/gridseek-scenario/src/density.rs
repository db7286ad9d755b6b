//! Obstacle density presets.

/// Obstacle density presets, matching the demo's difficulty menu.
///
/// Arbitrary densities in (0, 1) are accepted by
/// [`place_obstacles`](crate::place_obstacles) directly; these presets are
/// the fixed enumeration the front end offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Density {
    /// One cell in ten becomes an obstacle.
    Easy,
    /// Three cells in ten.
    #[default]
    Medium,
    /// Half of all cells.
    Hard,
}

impl Density {
    /// The fraction of cells converted to obstacles.
    pub const fn value(self) -> f64 {
        match self {
            Self::Easy => 0.10,
            Self::Medium => 0.30,
            Self::Hard => 0.50,
        }
    }

    /// Map a difficulty menu choice (1, 2 or 3) to a density.
    pub const fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Menu label for this preset.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}
