#![forbid(unsafe_code)]

//! Layout helpers around the rect-cut primitives.
//!
//! The core crate only moves numbers around; a host toolkit supplies the
//! sizes to cut and receives the resulting placements. This crate covers both
//! ends of that exchange:
//!
//! - [`SizeHint`] / [`Measure`] - min/preferred/max hints from a collaborator,
//!   resolved to the single size a cut should consume
//! - [`LayoutRecorder`] - a sink that collects placements keyed by caller ids
//! - [`stack_extent`] / [`max_extent`] - preferred-size aggregation for
//!   containers built out of cuts
//!
//! # Example
//!
//! ```
//! use rectcut_layout::{LayoutRecorder, Measure, Rect, SizeHint, SizeHints};
//!
//! let button = SizeHints::new(SizeHint::exact(40.0), SizeHint::exact(40.0));
//! let mut placed = LayoutRecorder::new();
//!
//! let mut bar = Rect::new(0.0, 0.0, 400.0, 40.0).with_h_spacing(8.0);
//! bar.cut_left(button.width()).layout(placed.sink("first"));
//! bar.cut_left(button.width()).layout(placed.sink("second"));
//!
//! assert_eq!(placed.get(&"second").map(|p| p.x), Some(48.0));
//! ```

pub mod recorder;

pub use recorder::LayoutRecorder;
pub use rectcut_core::{Axis, Insets, InsetsError, Placement, Rect, Side};

/// Size constraints reported by a laid-out element along one axis.
///
/// `max` is `f64::INFINITY` when the element can grow without bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// Minimum size.
    pub min: f64,
    /// Preferred size.
    pub preferred: f64,
    /// Maximum useful size.
    pub max: f64,
}

impl Default for SizeHint {
    fn default() -> Self {
        Self::ZERO
    }
}

impl SizeHint {
    /// No minimum, no preference, unbounded.
    pub const ZERO: Self = Self {
        min: 0.0,
        preferred: 0.0,
        max: f64::INFINITY,
    };

    pub const fn new(min: f64, preferred: f64, max: f64) -> Self {
        Self {
            min,
            preferred,
            max,
        }
    }

    /// min = preferred = max.
    #[inline]
    pub const fn exact(size: f64) -> Self {
        Self::new(size, size, size)
    }

    /// Minimum and preferred size, unbounded max.
    #[inline]
    pub const fn at_least(min: f64, preferred: f64) -> Self {
        Self::new(min, preferred, f64::INFINITY)
    }

    /// The size to allocate: the preferred size, raised to `min` and capped
    /// at `max`. When `max < min`, `min` wins.
    ///
    /// ```
    /// use rectcut_layout::SizeHint;
    ///
    /// assert_eq!(SizeHint::new(5.0, 15.0, 20.0).resolve(), 15.0);
    /// assert_eq!(SizeHint::new(5.0, 2.0, 20.0).resolve(), 5.0);
    /// assert_eq!(SizeHint::new(5.0, 30.0, 20.0).resolve(), 20.0);
    /// assert_eq!(SizeHint::new(10.0, 30.0, 4.0).resolve(), 10.0);
    /// ```
    #[inline]
    pub fn resolve(&self) -> f64 {
        self.preferred.max(self.min).min(self.min.max(self.max))
    }

    /// Clamp a proposed size into `[min, max]`.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.min.max(self.max))
    }
}

/// Something a layout pass can ask for its size hints.
///
/// Implemented by host adapters around toolkit nodes; the defaults resolve
/// the hints into the single value a cut consumes.
pub trait Measure {
    fn width_hint(&self) -> SizeHint;

    fn height_hint(&self) -> SizeHint;

    /// Resolved width. See [`SizeHint::resolve`].
    fn width(&self) -> f64 {
        self.width_hint().resolve()
    }

    /// Resolved height. See [`SizeHint::resolve`].
    fn height(&self) -> f64 {
        self.height_hint().resolve()
    }
}

/// A plain pair of hints, for elements whose sizes are known up front.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHints {
    pub width: SizeHint,
    pub height: SizeHint,
}

impl SizeHints {
    pub const fn new(width: SizeHint, height: SizeHint) -> Self {
        Self { width, height }
    }

    /// Exact width and height.
    pub const fn fixed(width: f64, height: f64) -> Self {
        Self::new(SizeHint::exact(width), SizeHint::exact(height))
    }
}

impl Measure for SizeHints {
    fn width_hint(&self) -> SizeHint {
        self.width
    }

    fn height_hint(&self) -> SizeHint {
        self.height
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn width_hint(&self) -> SizeHint {
        (**self).width_hint()
    }

    fn height_hint(&self) -> SizeHint {
        (**self).height_hint()
    }
}

/// Total extent of items stacked along one axis with `spacing` between
/// neighbours, matching what successive spaced cuts consume.
pub fn stack_extent<I>(sizes: I, spacing: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut total = 0.0;
    let mut count = 0usize;
    for size in sizes {
        total += size;
        count += 1;
    }
    if count > 1 {
        total += spacing * (count - 1) as f64;
    }
    total
}

/// Largest of the given sizes, or 0 when empty.
pub fn max_extent<I>(sizes: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    sizes.into_iter().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_preferred_within_bounds() {
        assert_eq!(SizeHint::new(0.0, 40.0, f64::INFINITY).resolve(), 40.0);
        assert_eq!(SizeHint::exact(12.5).resolve(), 12.5);
        assert_eq!(SizeHint::at_least(30.0, 10.0).resolve(), 30.0);
        assert_eq!(SizeHint::ZERO.resolve(), 0.0);
    }

    #[test]
    fn clamp_respects_bounds() {
        let hint = SizeHint::new(5.0, 15.0, 20.0);
        assert_eq!(hint.clamp(10.0), 10.0);
        assert_eq!(hint.clamp(3.0), 5.0);
        assert_eq!(hint.clamp(30.0), 20.0);
    }

    #[test]
    fn measure_defaults_resolve_hints() {
        let hints = SizeHints::new(SizeHint::new(10.0, 50.0, 30.0), SizeHint::at_least(8.0, 4.0));
        assert_eq!(hints.width(), 30.0);
        assert_eq!(hints.height(), 8.0);
        assert_eq!((&hints).width(), 30.0);
        assert_eq!(SizeHints::fixed(40.0, 20.0).height(), 20.0);
    }

    #[test]
    fn stack_extent_adds_spacing_between_items() {
        assert_eq!(stack_extent(Vec::new(), 12.0), 0.0);
        assert_eq!(stack_extent([40.0], 12.0), 40.0);
        assert_eq!(stack_extent([40.0, 40.0, 40.0], 12.0), 144.0);
    }

    #[test]
    fn stack_extent_matches_spaced_cuts() {
        let sizes = [40.0, 25.0, 60.0];
        let total = stack_extent(sizes, 6.0);
        let mut area = Rect::new(0.0, 0.0, total, 10.0).with_h_spacing(6.0);
        let mut last = None;
        for size in sizes {
            last = Some(area.cut_left(size));
        }
        assert_eq!(last.map(|r| r.max_x()), Some(total));
    }

    #[test]
    fn max_extent_picks_largest() {
        assert_eq!(max_extent(Vec::new()), 0.0);
        assert_eq!(max_extent([3.0, 42.0, 7.0]), 42.0);
    }
}
