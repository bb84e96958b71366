//! Shape metrics over a placed cloud.
//!
//! These are validation consumers of the layouter's output; the placement
//! algorithm itself never reads them.

use crate::bounds::bounding_region_with;
use crate::error::Result;
use crate::model::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Aggregate shape statistics for a placed cloud.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CloudStats {
    /// Number of placed rectangles.
    pub num_rects: usize,
    /// Total area of all placed rectangles.
    pub rect_area: i64,
    /// Area of the bounding region anchored on the cloud center.
    pub bounding_area: i64,
    /// rect_area / bounding_area. At most 1.0 for a non-overlapping cloud;
    /// higher is tighter packing.
    pub density: f64,
    /// Nearest-to-farthest ratio of the center's distance to the bounding
    /// region's corners, in (0, 1]. 1.0 is a square box centered on the cloud.
    pub roundness: f64,
}

/// Computes stats over `rects` around `center`. The bounding region is
/// extended to cover the center so a lopsided cloud scores poorly even when
/// its own box happens to be square. Fails with `InvalidInput` when `rects`
/// is empty.
pub fn cloud_stats(rects: &[Rect], center: Point) -> Result<CloudStats> {
    let region = bounding_region_with(rects, center)?;

    let rect_area: i64 = rects.iter().map(|r| r.area()).sum();
    let bounding_area = region.area();
    let density = rect_area as f64 / bounding_area as f64;

    let mut nearest = f64::INFINITY;
    let mut farthest = 0.0f64;
    for corner in region.corners() {
        let d = center.distance_to(corner);
        nearest = nearest.min(d);
        farthest = farthest.max(d);
    }
    // farthest > 0: the region covers at least one positive-size rectangle.
    let roundness = nearest / farthest;

    Ok(CloudStats {
        num_rects: rects.len(),
        rect_area,
        bounding_area,
        density,
        roundness,
    })
}

impl CloudStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Rects: {}, Density: {:.2}%, Roundness: {:.2}, Rect Area: {} px², Bounding Area: {} px²",
            self.num_rects,
            self.density * 100.0,
            self.roundness,
            self.rect_area,
            self.bounding_area,
        )
    }
}
