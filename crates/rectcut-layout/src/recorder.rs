#![forbid(unsafe_code)]

//! Placement recording.
//!
//! [`LayoutRecorder`] stands in for a toolkit's positioning calls: each
//! [`sink`](LayoutRecorder::sink) is handed to [`Rect::layout`] and stores the
//! placement under a caller-chosen key. Hosts can then apply the placements in
//! one go, diff them between passes, or assert on them in tests.
//!
//! [`Rect::layout`]: rectcut_core::Rect::layout

use rectcut_core::Placement;

/// Ordered placements keyed by element id.
///
/// Keys keep the order of their first placement. Placing a key again
/// overwrites its entry in place, so a relayout pass over the same elements
/// keeps the recorder the same length.
#[derive(Debug, Clone)]
pub struct LayoutRecorder<K> {
    placements: Vec<(K, Placement)>,
}

impl<K> Default for LayoutRecorder<K> {
    fn default() -> Self {
        Self {
            placements: Vec::new(),
        }
    }
}

impl<K: PartialEq> LayoutRecorder<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a placement for `key`.
    pub fn record(&mut self, key: K, placement: Placement) {
        match self.placements.iter_mut().position(|(k, _)| *k == key) {
            Some(index) => {
                rectcut_core::trace!(index, "placement replaced");
                self.placements[index].1 = placement;
            }
            None => self.placements.push((key, placement)),
        }
    }

    /// A layout callback that records under `key`.
    ///
    /// ```
    /// use rectcut_layout::{LayoutRecorder, Placement, Rect};
    ///
    /// let mut placed = LayoutRecorder::new();
    /// Rect::new(1.0, 2.0, 11.0, 7.0).layout(placed.sink(7));
    /// assert_eq!(placed.get(&7), Some(Placement::new(1.0, 2.0, 10.0, 5.0)));
    /// ```
    pub fn sink(&mut self, key: K) -> impl FnOnce(f64, f64, f64, f64) + '_ {
        move |x, y, width, height| self.record(key, Placement::new(x, y, width, height))
    }

    pub fn get(&self, key: &K) -> Option<Placement> {
        self.placements
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, placement)| *placement)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.placements.iter().any(|(k, _)| k == key)
    }
}

impl<K> LayoutRecorder<K> {
    /// Placements in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Placement)> {
        self.placements.iter().map(|(k, p)| (k, p))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn clear(&mut self) {
        self.placements.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutRecorder;
    use rectcut_core::{Placement, Rect};

    #[test]
    fn sinks_record_in_cut_order() {
        let mut placed = LayoutRecorder::new();
        let mut area = Rect::new(0.0, 0.0, 100.0, 20.0);
        area.cut_left(30.0).layout(placed.sink('a'));
        area.cut_right(30.0).layout(placed.sink('b'));
        area.layout(placed.sink('c'));

        let order: Vec<_> = placed.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, ['a', 'b', 'c']);
        assert_eq!(placed.get(&'b'), Some(Placement::new(70.0, 0.0, 30.0, 20.0)));
        assert_eq!(placed.get(&'c'), Some(Placement::new(30.0, 0.0, 40.0, 20.0)));
        assert_eq!(placed.get(&'z'), None);
    }

    #[test]
    fn relayout_overwrites_in_place() {
        let mut placed = LayoutRecorder::new();
        placed.record("panel", Placement::new(0.0, 0.0, 10.0, 10.0));
        placed.record("bar", Placement::new(0.0, 10.0, 10.0, 2.0));
        placed.record("panel", Placement::new(0.0, 0.0, 20.0, 10.0));

        assert_eq!(placed.len(), 2);
        assert_eq!(placed.iter().next().map(|(k, _)| *k), Some("panel"));
        assert_eq!(placed.get(&"panel").map(|p| p.width), Some(20.0));
    }

    #[test]
    fn clear_empties() {
        let mut placed = LayoutRecorder::new();
        placed.record(1u32, Placement::default());
        assert!(placed.contains(&1));
        assert!(!placed.is_empty());
        placed.clear();
        assert!(placed.is_empty());
        assert!(!placed.contains(&1));
    }
}
