use crate::error::{Result, TagCloudError};
use crate::model::{Direction, Point, Rect, Size};
use tracing::trace;

/// Online layouter that places caller-sized rectangles around a fixed center,
/// one at a time, without ever moving a rectangle once placed.
///
/// The cloud grows as a spiral: each new rectangle is attached beside the most
/// recently placed one along the current growth direction, slid aside until it
/// overlaps nothing, then pulled back toward the center to tighten packing.
/// When open space exists in the next clockwise direction the spiral rotates
/// early, which keeps the aggregate shape close to a disk.
pub struct CircularCloudLayouter {
    center: Point,
    rects: Vec<Rect>,
    direction: Direction,
}

impl CircularCloudLayouter {
    pub fn new(center: Point) -> Self {
        Self {
            center,
            rects: Vec::new(),
            direction: Direction::Up,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Placement history in call order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Places the next rectangle and returns its position.
    ///
    /// The returned rectangle has exactly the requested size and overlaps no
    /// previously returned rectangle. Sizes with a non-positive dimension are
    /// rejected with `InvalidInput` and leave the layouter untouched.
    ///
    /// A call walks the whole history per collision test and the compaction
    /// slide advances one unit at a time, so cost grows with both the history
    /// length and the rectangle dimensions: O(size), not O(1).
    pub fn place(&mut self, size: Size) -> Result<Rect> {
        if !size.is_valid() {
            return Err(TagCloudError::InvalidInput(format!(
                "rectangle size must be positive, got {}x{}",
                size.w, size.h
            )));
        }

        let rect = match self.rects.last().copied() {
            None => Rect::from_center(self.center, size),
            Some(last) => self.place_beside(last, size),
        };

        self.rects.push(rect);
        Ok(rect)
    }

    /// Attaches a rectangle of `size` beside `last` along the current growth
    /// direction, then corrects its position against the history.
    fn place_beside(&mut self, last: Rect, size: Size) -> Rect {
        let direction = self.direction;
        let offsetting = direction.ccw();
        let changed = direction.cw();

        let seed = Rect::new(last.x, last.y, size.w, size.h);
        let mut rect = seed.beside(&last, direction);
        rect = self.resolve_overlaps(rect, offsetting);
        rect = self.compact(rect, changed);

        // Rotate the spiral early when a same-size neighbor would already fit
        // in the next direction; otherwise the cloud degenerates into one arm.
        // Must be evaluated on the compacted position.
        let probe = rect.beside(&rect, changed);
        if self.fits(&probe) {
            trace!(?direction, ?changed, "growth direction rotated");
            self.direction = changed;
        }

        rect
    }

    /// Slides `rect` flush past each blocking rectangle along `offsetting`
    /// until it overlaps nothing. Every slide clears the blocker it jumped
    /// over and strictly advances, so the loop terminates.
    fn resolve_overlaps(&self, mut rect: Rect, offsetting: Direction) -> Rect {
        while let Some(hit) = self.rects.iter().find(|r| r.intersects(&rect)) {
            let moved = rect.beside(hit, offsetting);
            debug_assert_ne!(moved, rect, "overlap resolution must advance");
            rect = moved;
        }
        rect
    }

    /// Greedily steps `rect` one unit at a time along `toward`, committing a
    /// step only while it stays overlap-free, and stopping once the center is
    /// no longer beyond the leading edge.
    fn compact(&self, mut rect: Rect, toward: Direction) -> Rect {
        while self.center_is_beyond(&rect, toward) {
            let moved = rect.translated(toward, 1);
            if !self.fits(&moved) {
                break;
            }
            rect = moved;
        }
        rect
    }

    fn fits(&self, rect: &Rect) -> bool {
        self.rects.iter().all(|r| !r.intersects(rect))
    }

    /// True while the center lies strictly past `rect`'s leading edge along
    /// `direction`, i.e. a step that way still approaches the center.
    fn center_is_beyond(&self, rect: &Rect, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.center.y < rect.y,
            Direction::Down => self.center.y > rect.bottom(),
            Direction::Right => self.center.x > rect.right(),
            Direction::Left => self.center.x < rect.x,
        }
    }
}
