//! Integer pixel geometry for hover resolution.

/// Pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Vertical extent of one rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRect {
    /// Top edge in viewport pixels.
    pub top: i32,
    /// Height in pixels.
    pub height: i32,
}

impl SlotRect {
    /// Creates a slot rectangle.
    #[must_use]
    pub const fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    /// Returns `true` when the pointer lies strictly below the vertical
    /// midpoint. Compared in doubled coordinates to stay in integers.
    #[must_use]
    pub fn midpoint_above(&self, pointer_y: i32) -> bool {
        2 * i64::from(pointer_y) > 2 * i64::from(self.top) + i64::from(self.height)
    }
}

/// Returns the insertion index for a pointer over a list of cards.
///
/// The index is the number of cards, other than `skip`, whose midpoint lies
/// above the pointer: the gap closest to the pointer. The result is an
/// index into the list with `skip` removed.
#[must_use]
pub fn resolve_insertion_index(slots: &[SlotRect], pointer_y: i32, skip: Option<usize>) -> usize {
    slots
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != skip)
        .filter(|(_, slot)| slot.midpoint_above(pointer_y))
        .count()
}
