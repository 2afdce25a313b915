//! Pseudo-3D tag cloud rendered on a 2D surface.
//!
//! Labels sit on a sphere, rotate a little every frame according to how far
//! the pointer is from the surface center, and are painted back to front with
//! depth-based size and opacity.
//!
//! ```text
//! initialize ──► step(pointer) ──► draw(surface) ──┐
//!                    ▲                             │
//!                    └──── FrameScheduler ◄────────┘
//! ```
//!
//! Whether to animate at all (reduced motion, no surface) is the caller's call;
//! see [`crate::app::Environment::cloud_policy`].
//!
//! # Example
//!
//! ```rust
//! use folio::cloud::{FixedFrames, Pointer, RecordingSurface, TagCloud};
//! use folio::domain::LabelSpec;
//!
//! let labels = vec![LabelSpec::new("Rust", "#dea584"), LabelSpec::new("SQL", "#e38c00")];
//! let mut cloud = TagCloud::with_seed(labels, 400.0, 300.0, 1);
//! let mut surface = RecordingSurface::new();
//! cloud.run(&mut surface, &mut FixedFrames::new(2), &Pointer::new(300.0, 150.0));
//! assert_eq!(surface.calls.len(), 2);
//! ```

pub mod frame_loop;
pub mod renderer;
pub mod sphere;
pub mod surface;

pub use frame_loop::{FixedFrames, FrameScheduler, PacedFrames, PointerSource};
pub use renderer::{Pointer, TagCloud};
pub use sphere::DepthStyle;
pub use surface::{DrawCall, RecordingSurface, Surface, TextStyle};
