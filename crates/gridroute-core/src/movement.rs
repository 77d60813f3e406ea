//! Movement policies: which diagonal steps are allowed around obstacles.

use std::fmt;

/// Which moves a search may take between neighbouring cells.
///
/// The discriminants are stable numeric codes that callers may persist or
/// send over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MovementType {
    /// Diagonal steps are always allowed, even between two walls.
    Diagonal = 1,
    /// Orthogonal steps only.
    Straight = 2,
    /// Diagonal steps need at least one walkable flanking cell.
    DiagonalOneObstacle = 4,
    /// Diagonal steps need both flanking cells walkable (no corner cutting).
    #[default]
    DiagonalNoObstacle = 8,
}

impl MovementType {
    /// All policies, in code order.
    pub const ALL: [MovementType; 4] = [
        Self::Diagonal,
        Self::Straight,
        Self::DiagonalOneObstacle,
        Self::DiagonalNoObstacle,
    ];

    /// The numeric code of this policy.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether a diagonal step is allowed given the walkability of the two
    /// orthogonal cells flanking it.
    #[inline]
    pub const fn allows_diagonal(self, flank_a: bool, flank_b: bool) -> bool {
        match self {
            Self::Diagonal => true,
            Self::Straight => false,
            Self::DiagonalOneObstacle => flank_a || flank_b,
            Self::DiagonalNoObstacle => flank_a && flank_b,
        }
    }
}

impl TryFrom<u8> for MovementType {
    type Error = UnknownMovement;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Diagonal),
            2 => Ok(Self::Straight),
            4 => Ok(Self::DiagonalOneObstacle),
            8 => Ok(Self::DiagonalNoObstacle),
            other => Err(UnknownMovement(other)),
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Diagonal => "diagonal",
            Self::Straight => "straight",
            Self::DiagonalOneObstacle => "diagonal-one-obstacle",
            Self::DiagonalNoObstacle => "diagonal-no-obstacle",
        };
        f.write_str(name)
    }
}

/// A numeric movement code that does not name any [`MovementType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMovement(pub u8);

impl fmt::Display for UnknownMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown movement code {}", self.0)
    }
}

impl std::error::Error for UnknownMovement {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for m in MovementType::ALL {
            assert_eq!(MovementType::try_from(m.code()), Ok(m));
        }
        assert_eq!(MovementType::Diagonal.code(), 1);
        assert_eq!(MovementType::Straight.code(), 2);
        assert_eq!(MovementType::DiagonalOneObstacle.code(), 4);
        assert_eq!(MovementType::DiagonalNoObstacle.code(), 8);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(MovementType::try_from(3), Err(UnknownMovement(3)));
        assert_eq!(
            UnknownMovement(16).to_string(),
            "unknown movement code 16"
        );
    }

    #[test]
    fn diagonal_rules() {
        use MovementType::*;
        assert!(Diagonal.allows_diagonal(false, false));
        assert!(!Straight.allows_diagonal(true, true));
        assert!(DiagonalOneObstacle.allows_diagonal(true, false));
        assert!(!DiagonalOneObstacle.allows_diagonal(false, false));
        assert!(DiagonalNoObstacle.allows_diagonal(true, true));
        assert!(!DiagonalNoObstacle.allows_diagonal(false, true));
    }
}
