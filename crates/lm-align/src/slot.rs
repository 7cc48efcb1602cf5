//! One step of an alignment.

/// A single alignment step between a left and a right sequence.
///
/// A `Pair` only says both sides advanced together. It does not imply the
/// two elements are equal: substitutions and the positional tail of an
/// extended alignment are pairs too. Use [`Slot::is_match`] to check.
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<'a, T> {
    /// Only the left sequence advanced (a gap on the right).
    Left(&'a T),
    /// Only the right sequence advanced (a gap on the left).
    Right(&'a T),
    /// Both sequences advanced.
    Pair(&'a T, &'a T),
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<'a, T> Slot<'a, T> {
    /// The left element, if the left sequence advanced.
    pub fn left(&self) -> Option<&'a T> {
        match *self {
            Slot::Left(l) | Slot::Pair(l, _) => Some(l),
            Slot::Right(_) => None,
        }
    }

    /// The right element, if the right sequence advanced.
    pub fn right(&self) -> Option<&'a T> {
        match *self {
            Slot::Right(r) | Slot::Pair(_, r) => Some(r),
            Slot::Left(_) => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        !matches!(self, Slot::Pair(..))
    }
}

impl<T: PartialEq> Slot<'_, T> {
    /// Returns `true` for a pair of equal elements.
    pub fn is_match(&self) -> bool {
        matches!(self, Slot::Pair(l, r) if l == r)
    }
}
