#![forbid(unsafe_code)]

//! Geometric primitives for cut-based layout.
//!
//! A [`Rect`] is a mutable area described by its minimum and maximum
//! corners. Layout happens by repeatedly cutting slices off one of its four
//! edges: every cut shrinks the receiver and hands back the removed slice.
//!
//! ```
//! use rectcut_core::geometry::Rect;
//!
//! let mut area = Rect::new(0.0, 0.0, 400.0, 400.0);
//! let header = area.cut_top(40.0);
//! let sidebar = area.cut_left(120.0);
//!
//! assert_eq!(header, Rect::new(0.0, 0.0, 400.0, 40.0));
//! assert_eq!(sidebar, Rect::new(0.0, 40.0, 120.0, 400.0));
//! assert_eq!(area, Rect::new(120.0, 40.0, 400.0, 400.0));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::side::{Axis, Side};

/// An axis-aligned area used as the mutable remainder of a layout pass.
///
/// Bounds are expected to satisfy `min_x <= max_x` and `min_y <= max_y`, but
/// this is not enforced: insets, [`extend`](Self::extend)/[`contract`](Self::contract)
/// and cut spacing can all leave a rect inverted. [`width`](Self::width) and
/// [`height`](Self::height) floor such rects at zero while the raw bounds are
/// kept as-is.
///
/// Operations come in two flavours:
///
/// - the `cut_*` family takes `&mut self`, shrinks the receiver and returns the
///   removed slice as a new value;
/// - everything else (`get_*`, `add_*`, [`extend`](Self::extend),
///   [`middle_h_cut`](Self::middle_h_cut), ...) leaves the receiver untouched
///   and returns fresh values.
///
/// Values produced by any of these operations are newly constructed and
/// carry zero spacing.
///
/// # Equality
///
/// Two rects compare equal when their four bounds are bitwise equal, with
/// all NaNs treated as one value (so `0.0 != -0.0` but `NaN == NaN`).
/// Spacing does **not** participate in equality or hashing, so rects that
/// only differ in spacing are equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rect {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    h_spacing: f64,
    v_spacing: f64,
}

impl Rect {
    /// Create a rect from its bounds, with zero spacing.
    #[inline]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            h_spacing: 0.0,
            v_spacing: 0.0,
        }
    }

    /// Alias for [`Rect::new`].
    #[inline]
    pub const fn of(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, max_x, max_y)
    }

    /// Create a rect anchored at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub const fn min_x(&self) -> f64 {
        self.min_x
    }

    #[inline]
    pub const fn min_y(&self) -> f64 {
        self.min_y
    }

    #[inline]
    pub const fn max_x(&self) -> f64 {
        self.max_x
    }

    #[inline]
    pub const fn max_y(&self) -> f64 {
        self.max_y
    }

    /// `max_x - min_x`, never negative.
    #[inline]
    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0)
    }

    /// `max_y - min_y`, never negative.
    #[inline]
    pub fn height(&self) -> f64 {
        (self.max_y - self.min_y).max(0.0)
    }

    /// Extent along the given axis.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width(),
            Axis::Vertical => self.height(),
        }
    }

    /// Check if the rect has zero width or zero height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Gap inserted after every horizontal (left/right) cut.
    #[inline]
    pub const fn h_spacing(&self) -> f64 {
        self.h_spacing
    }

    /// Gap inserted after every vertical (top/bottom) cut.
    #[inline]
    pub const fn v_spacing(&self) -> f64 {
        self.v_spacing
    }

    /// Set the horizontal cut spacing, builder style.
    #[inline]
    #[must_use]
    pub const fn with_h_spacing(mut self, h_spacing: f64) -> Self {
        self.h_spacing = h_spacing;
        self
    }

    /// Set the vertical cut spacing, builder style.
    #[inline]
    #[must_use]
    pub const fn with_v_spacing(mut self, v_spacing: f64) -> Self {
        self.v_spacing = v_spacing;
        self
    }

    /// Set the horizontal cut spacing in place.
    #[inline]
    pub fn set_h_spacing(&mut self, h_spacing: f64) -> &mut Self {
        self.h_spacing = h_spacing;
        self
    }

    /// Set the vertical cut spacing in place.
    #[inline]
    pub fn set_v_spacing(&mut self, v_spacing: f64) -> &mut Self {
        self.v_spacing = v_spacing;
        self
    }

    // --- Cut -------------------------------------------------------------

    /// Cut a slice off the given side. See [`Side::cut`].
    #[inline]
    pub fn cut(&mut self, side: Side, amount: f64) -> Rect {
        side.cut(self, amount)
    }

    /// Remove `amount` from the top and return the removed slice.
    ///
    /// The cut never crosses `max_y`. Afterwards `min_y` is pushed down by
    /// [`v_spacing`](Self::v_spacing); the returned slice is not affected.
    pub fn cut_top(&mut self, amount: f64) -> Rect {
        let start = self.min_y;
        let clamped = start + amount > self.max_y;
        self.min_y = (start + amount).min(self.max_y);
        let area = Rect::new(self.min_x, start, self.max_x, self.min_y);
        self.min_y += self.v_spacing;
        trace_cut(Side::Top, amount, clamped, &area);
        area
    }

    /// Remove `amount` from the right and return the removed slice.
    ///
    /// The cut never crosses `min_x`. Afterwards `max_x` is pulled left by
    /// [`h_spacing`](Self::h_spacing).
    pub fn cut_right(&mut self, amount: f64) -> Rect {
        let end = self.max_x;
        let clamped = end - amount < self.min_x;
        self.max_x = (end - amount).max(self.min_x);
        let area = Rect::new(self.max_x, self.min_y, end, self.max_y);
        self.max_x -= self.h_spacing;
        trace_cut(Side::Right, amount, clamped, &area);
        area
    }

    /// Remove `amount` from the bottom and return the removed slice.
    ///
    /// The cut never crosses `min_y`. Afterwards `max_y` is pulled up by
    /// [`v_spacing`](Self::v_spacing).
    pub fn cut_bottom(&mut self, amount: f64) -> Rect {
        let end = self.max_y;
        let clamped = end - amount < self.min_y;
        self.max_y = (end - amount).max(self.min_y);
        let area = Rect::new(self.min_x, self.max_y, self.max_x, end);
        self.max_y -= self.v_spacing;
        trace_cut(Side::Bottom, amount, clamped, &area);
        area
    }

    /// Remove `amount` from the left and return the removed slice.
    ///
    /// The cut never crosses `max_x`. Afterwards `min_x` is pushed right by
    /// [`h_spacing`](Self::h_spacing).
    pub fn cut_left(&mut self, amount: f64) -> Rect {
        let start = self.min_x;
        let clamped = start + amount > self.max_x;
        self.min_x = (start + amount).min(self.max_x);
        let area = Rect::new(start, self.min_y, self.min_x, self.max_y);
        self.min_x += self.h_spacing;
        trace_cut(Side::Left, amount, clamped, &area);
        area
    }

    // --- Get -------------------------------------------------------------

    /// Peek at a slice of the given side. See [`Side::get`].
    #[inline]
    #[must_use]
    pub fn get(&self, side: Side, amount: f64) -> Rect {
        side.get(self, amount)
    }

    /// The slice [`cut_top`](Self::cut_top) would return, without mutating
    /// and without spacing.
    #[must_use]
    pub fn get_top(&self, amount: f64) -> Rect {
        let max_y = (self.min_y + amount).min(self.max_y);
        Rect::new(self.min_x, self.min_y, self.max_x, max_y)
    }

    /// The slice [`cut_right`](Self::cut_right) would return, without mutating.
    #[must_use]
    pub fn get_right(&self, amount: f64) -> Rect {
        let min_x = (self.max_x - amount).max(self.min_x);
        Rect::new(min_x, self.min_y, self.max_x, self.max_y)
    }

    /// The slice [`cut_bottom`](Self::cut_bottom) would return, without mutating.
    #[must_use]
    pub fn get_bottom(&self, amount: f64) -> Rect {
        let min_y = (self.max_y - amount).max(self.min_y);
        Rect::new(self.min_x, min_y, self.max_x, self.max_y)
    }

    /// The slice [`cut_left`](Self::cut_left) would return, without mutating.
    #[must_use]
    pub fn get_left(&self, amount: f64) -> Rect {
        let max_x = (self.min_x + amount).min(self.max_x);
        Rect::new(self.min_x, self.min_y, max_x, self.max_y)
    }

    // --- Add -------------------------------------------------------------

    /// The area adjacent to the given side. See [`Side::add`].
    #[inline]
    #[must_use]
    pub fn add(&self, side: Side, amount: f64) -> Rect {
        side.add(self, amount)
    }

    /// The `amount`-tall strip directly above this rect.
    ///
    /// A negative amount yields a strip inside the rect instead.
    #[must_use]
    pub fn add_top(&self, amount: f64) -> Rect {
        Rect::new(self.min_x, self.min_y - amount, self.max_x, self.min_y)
    }

    /// The `amount`-wide strip directly right of this rect.
    #[must_use]
    pub fn add_right(&self, amount: f64) -> Rect {
        Rect::new(self.max_x, self.min_y, self.max_x + amount, self.max_y)
    }

    /// The `amount`-tall strip directly below this rect.
    #[must_use]
    pub fn add_bottom(&self, amount: f64) -> Rect {
        Rect::new(self.min_x, self.max_y, self.max_x, self.max_y + amount)
    }

    /// The `amount`-wide strip directly left of this rect.
    #[must_use]
    pub fn add_left(&self, amount: f64) -> Rect {
        Rect::new(self.min_x - amount, self.min_y, self.min_x, self.max_y)
    }

    /// Grow by `amount` on all four sides. No clamping.
    #[must_use]
    pub fn extend(&self, amount: f64) -> Rect {
        Rect::new(
            self.min_x - amount,
            self.min_y - amount,
            self.max_x + amount,
            self.max_y + amount,
        )
    }

    /// Shrink by `amount` on all four sides. No clamping, so a large amount
    /// produces an inverted rect.
    #[must_use]
    pub fn contract(&self, amount: f64) -> Rect {
        Rect::new(
            self.min_x + amount,
            self.min_y + amount,
            self.max_x - amount,
            self.max_y - amount,
        )
    }

    // --- Middle ----------------------------------------------------------

    /// Split into `[left, middle, right]` where `middle` is `amount` wide and
    /// horizontally centered.
    ///
    /// The three parts tile the receiver exactly. When `amount` is larger
    /// than the width, `left` and `right` come out inverted.
    #[must_use]
    pub fn middle_h_cut(&self, amount: f64) -> [Rect; 3] {
        let mid_min_x = (self.width() - amount) / 2.0 + self.min_x;
        let mid_max_x = mid_min_x + amount;
        [
            Rect::new(self.min_x, self.min_y, mid_min_x, self.max_y),
            Rect::new(mid_min_x, self.min_y, mid_max_x, self.max_y),
            Rect::new(mid_max_x, self.min_y, self.max_x, self.max_y),
        ]
    }

    /// Split into `[top, middle, bottom]` where `middle` is `amount` tall and
    /// vertically centered.
    #[must_use]
    pub fn middle_v_cut(&self, amount: f64) -> [Rect; 3] {
        let mid_min_y = (self.height() - amount) / 2.0 + self.min_y;
        let mid_max_y = mid_min_y + amount;
        [
            Rect::new(self.min_x, self.min_y, self.max_x, mid_min_y),
            Rect::new(self.min_x, mid_min_y, self.max_x, mid_max_y),
            Rect::new(self.min_x, mid_max_y, self.max_x, self.max_y),
        ]
    }

    // --- Insets ----------------------------------------------------------

    /// Shrink this rect in place by the given insets.
    pub fn apply_insets(&mut self, insets: Insets) -> &mut Self {
        self.min_x += insets.left;
        self.min_y += insets.top;
        self.max_x -= insets.right;
        self.max_y -= insets.bottom;
        self
    }

    /// Builder form of [`apply_insets`](Self::apply_insets).
    #[must_use]
    pub fn with_insets(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.apply_insets(Insets::new(top, right, bottom, left));
        self
    }

    /// Shrink by the same amount on every side.
    #[must_use]
    pub fn with_uniform_insets(self, value: f64) -> Self {
        self.with_insets(value, value, value, value)
    }

    /// Shrink by insets given as `[top, right, bottom, left]`.
    ///
    /// Fails with [`InsetsError::WrongLength`] unless exactly four values are
    /// supplied.
    pub fn try_with_insets(mut self, insets: &[f64]) -> Result<Self, InsetsError> {
        self.apply_insets(Insets::try_from(insets)?);
        Ok(self)
    }

    // --- Layout sinks ----------------------------------------------------

    /// Hand `(min_x, min_y)` to a positioning callback.
    pub fn position<F>(self, f: F) -> Self
    where
        F: FnOnce(f64, f64),
    {
        f(self.min_x, self.min_y);
        self
    }

    /// Hand `(width, height)` to a sizing callback.
    pub fn resize<F>(self, f: F) -> Self
    where
        F: FnOnce(f64, f64),
    {
        f(self.width(), self.height());
        self
    }

    /// Hand `(min_x, min_y, width, height)` to a layout callback, typically a
    /// toolkit's resize-and-relocate call.
    pub fn layout<F>(self, f: F) -> Self
    where
        F: FnOnce(f64, f64, f64, f64),
    {
        f(self.min_x, self.min_y, self.width(), self.height());
        self
    }

    /// The values [`layout`](Self::layout) would pass, as a record.
    #[inline]
    pub fn placement(&self) -> Placement {
        Placement {
            x: self.min_x,
            y: self.min_y,
            width: self.width(),
            height: self.height(),
        }
    }
}

#[inline]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn trace_cut(side: Side, amount: f64, clamped: bool, slice: &Rect) {
    if clamped {
        crate::debug!(
            %side,
            amount,
            extent = slice.extent(side.axis()),
            "cut clamped to remaining extent"
        );
    }
    crate::trace!(%side, amount, slice = %slice, "cut");
}

/// Bits used for equality and hashing. Every NaN collapses to one value;
/// everything else, signed zeros included, keeps its own bits.
#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

impl Rect {
    #[inline]
    fn bound_bits(&self) -> [u64; 4] {
        [
            canonical_bits(self.min_x),
            canonical_bits(self.min_y),
            canonical_bits(self.max_x),
            canonical_bits(self.max_y),
        ]
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.bound_bits() == other.bound_bits()
    }
}

impl Eq for Rect {}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bound_bits().hash(state);
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect[min_x={}, min_y={}, max_x={}, max_y={}]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Position and size handed to a layout sink.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Per-side shrink amounts for [`Rect::apply_insets`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    /// Insets with equal values.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Insets on the left and right only.
    pub const fn horizontal(val: f64) -> Self {
        Self {
            top: 0.0,
            right: val,
            bottom: 0.0,
            left: val,
        }
    }

    /// Insets on the top and bottom only.
    pub const fn vertical(val: f64) -> Self {
        Self {
            top: val,
            right: 0.0,
            bottom: val,
            left: 0.0,
        }
    }

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl From<f64> for Insets {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

impl From<[f64; 4]> for Insets {
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Self::new(top, right, bottom, left)
    }
}

impl TryFrom<&[f64]> for Insets {
    type Error = InsetsError;

    /// Read insets as `[top, right, bottom, left]`.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [top, right, bottom, left] => Ok(Self::new(top, right, bottom, left)),
            _ => Err(InsetsError::WrongLength { len: values.len() }),
        }
    }
}

/// Failure to build [`Insets`] from a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsetsError {
    /// The slice did not hold exactly four values.
    WrongLength { len: usize },
}

impl fmt::Display for InsetsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { len } => {
                write!(f, "insets must have exactly 4 values (got {len})")
            }
        }
    }
}

impl std::error::Error for InsetsError {}
