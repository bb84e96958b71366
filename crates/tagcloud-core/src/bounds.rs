use crate::error::{Result, TagCloudError};
use crate::model::{Point, Rect};

/// Minimal axis-aligned rectangle enclosing every rectangle in `rects`.
///
/// Order-independent min/max reduction over the extreme coordinates. Fails
/// with `InvalidInput` on an empty slice: no minimal enclosing rectangle
/// exists, and a silent zero-size result would corrupt downstream metrics.
pub fn bounding_region(rects: &[Rect]) -> Result<Rect> {
    let first = rects.first().ok_or_else(|| {
        TagCloudError::InvalidInput("bounding region of an empty rectangle set".into())
    })?;

    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.right();
    let mut max_y = first.bottom();
    for r in &rects[1..] {
        min_x = min_x.min(r.x);
        min_y = min_y.min(r.y);
        max_x = max_x.max(r.right());
        max_y = max_y.max(r.bottom());
    }
    Ok(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

/// Bounding region extended to also cover `point`. Used by metric consumers
/// to anchor the region on the cloud center.
pub fn bounding_region_with(rects: &[Rect], point: Point) -> Result<Rect> {
    let b = bounding_region(rects)?;
    let min_x = b.x.min(point.x);
    let min_y = b.y.min(point.y);
    let max_x = b.right().max(point.x);
    let max_y = b.bottom().max(point.y);
    Ok(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
