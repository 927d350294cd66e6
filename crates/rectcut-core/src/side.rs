#![forbid(unsafe_code)]

//! Edge selection for runtime-chosen cuts.
//!
//! [`Side`] lets callers pick which edge to act on from data (a config value,
//! a loop over [`Side::ALL`]) instead of hard-coding `cut_left`/`cut_top`.

use std::fmt;

use crate::geometry::Rect;

/// One of the four edges of a [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// The axis a side cuts along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right cuts consume width.
    Horizontal,
    /// Top/bottom cuts consume height.
    Vertical,
}

impl Side {
    /// All sides, clockwise from the top.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Cut `amount` off this side of `rect`, returning the removed slice.
    pub fn cut(self, rect: &mut Rect, amount: f64) -> Rect {
        match self {
            Self::Top => rect.cut_top(amount),
            Self::Right => rect.cut_right(amount),
            Self::Bottom => rect.cut_bottom(amount),
            Self::Left => rect.cut_left(amount),
        }
    }

    /// Peek at the slice [`cut`](Self::cut) would remove, leaving `rect` as is.
    #[must_use]
    pub fn get(self, rect: &Rect, amount: f64) -> Rect {
        match self {
            Self::Top => rect.get_top(amount),
            Self::Right => rect.get_right(amount),
            Self::Bottom => rect.get_bottom(amount),
            Self::Left => rect.get_left(amount),
        }
    }

    /// The strip adjacent to this side of `rect`, outside it for positive
    /// amounts and inside it for negative ones.
    #[must_use]
    pub fn add(self, rect: &Rect, amount: f64) -> Rect {
        match self {
            Self::Top => rect.add_top(amount),
            Self::Right => rect.add_right(amount),
            Self::Bottom => rect.add_bottom(amount),
            Self::Left => rect.add_left(amount),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        })
    }
}
