use std::fmt;
use std::ops::Not;

/// A directed reference to a shared arc.
///
/// `forward == true` traverses the arc from its first vertex to its last;
/// `forward == false` traverses it from last to first. The *head* of a
/// reference is the coordinate where the traversal starts, the *tail* where
/// it ends.
///
/// Reversal is self-inverse: `!!r == r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArcRef {
    /// Index of the arc in the arc store.
    pub arc: usize,
    /// Traversal direction.
    pub forward: bool,
}

impl ArcRef {
    /// Creates a reference with an explicit direction.
    #[must_use]
    pub const fn new(arc: usize, forward: bool) -> Self {
        Self { arc, forward }
    }

    /// Forward traversal of `arc`.
    #[must_use]
    pub const fn fwd(arc: usize) -> Self {
        Self::new(arc, true)
    }

    /// Reverse traversal of `arc`.
    #[must_use]
    pub const fn rev(arc: usize) -> Self {
        Self::new(arc, false)
    }

    /// The same arc traversed in the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::new(self.arc, !self.forward)
    }

    /// Decodes the signed-integer convention: `n >= 0` is arc `n` forward,
    /// `n < 0` is arc `!n` reversed.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_signed(n: i64) -> Self {
        if n >= 0 {
            Self::fwd(n as usize)
        } else {
            Self::rev((!n) as usize)
        }
    }

    /// Encodes into the signed-integer convention (inverse of [`Self::from_signed`]).
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn to_signed(self) -> i64 {
        let n = self.arc as i64;
        if self.forward {
            n
        } else {
            !n
        }
    }

    /// Dense slot in `[0, 2 * arc_count)`.
    ///
    /// The slot identifies the arc vertex where this reference ends:
    /// `2 * arc` for a reversed reference (first vertex), `2 * arc + 1` for a
    /// forward one (last vertex).
    #[must_use]
    pub fn slot(self) -> usize {
        self.arc * 2 + usize::from(self.forward)
    }

    /// Inverse of [`Self::slot`].
    #[must_use]
    pub const fn from_slot(slot: usize) -> Self {
        Self::new(slot / 2, slot % 2 == 1)
    }
}

impl Not for ArcRef {
    type Output = Self;

    fn not(self) -> Self {
        self.reverse()
    }
}

impl fmt::Display for ArcRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.forward {
            write!(f, "{}", self.arc)
        } else {
            write!(f, "~{}", self.arc)
        }
    }
}
