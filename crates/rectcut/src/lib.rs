#![forbid(unsafe_code)]

//! Rect-cut public facade crate.
//!
//! Re-exports the primitives and layout helpers and offers a prelude for
//! layout passes:
//!
//! ```
//! use rectcut::prelude::*;
//!
//! let mut area = Rect::from_size(400.0, 300.0).with_uniform_insets(8.0);
//! let title = area.cut_top(24.0);
//! let [_, dialog, _] = area.middle_h_cut(200.0);
//!
//! assert_eq!(title.placement(), Placement::new(8.0, 8.0, 384.0, 24.0));
//! assert_eq!(dialog.width(), 200.0);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use rectcut_core::geometry::{Insets, InsetsError, Placement, Rect};
pub use rectcut_core::side::{Axis, Side};

// --- Layout re-exports -----------------------------------------------------

pub use rectcut_layout::{
    LayoutRecorder, Measure, SizeHint, SizeHints, max_extent, stack_extent,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Axis, Insets, InsetsError, LayoutRecorder, Measure, Placement, Rect, Side, SizeHint,
        SizeHints,
    };

    pub use crate::{core, layout};
}

pub use rectcut_core as core;
pub use rectcut_layout as layout;
