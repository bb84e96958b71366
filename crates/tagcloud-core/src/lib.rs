//! Core library for laying out tag-cloud rectangles around a center point.
//!
//! - Layout: `CircularCloudLayouter` places caller-sized rectangles one at a
//!   time, keeping the cloud densely packed and roughly circular with no
//!   overlaps, and never repositioning a placed rectangle.
//! - Geometry: `bounding_region` computes the minimal enclosing rectangle of
//!   a placement.
//! - Consumers: `metrics` (density/roundness), `render` (RGBA raster) and
//!   `export` (JSON) operate on the layouter's output.
//!
//! Quick example:
//! ```
//! use tagcloud_core::{CircularCloudLayouter, Point, Size};
//! # fn main() -> tagcloud_core::Result<()> {
//! let mut layouter = CircularCloudLayouter::new(Point::new(0, 0));
//! let first = layouter.place(Size::new(10, 4))?;
//! assert_eq!((first.w, first.h), (10, 4));
//! let second = layouter.place(Size::new(6, 6))?;
//! assert!(!first.intersects(&second));
//! # Ok(()) }
//! ```

pub mod bounds;
pub mod error;
pub mod export;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod render;

pub use bounds::*;
pub use error::*;
pub use export::*;
pub use layout::*;
pub use metrics::*;
pub use model::*;
pub use render::*;

/// Convenience prelude for common types and functions.
/// Importing `tagcloud_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::bounds::{bounding_region, bounding_region_with};
    pub use crate::error::{Result, TagCloudError};
    pub use crate::export::{to_json, CloudLayout};
    pub use crate::layout::CircularCloudLayouter;
    pub use crate::metrics::{cloud_stats, CloudStats};
    pub use crate::model::{Direction, Point, Rect, Size};
    pub use crate::render::render_cloud;
}
