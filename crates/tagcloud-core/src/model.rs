use serde::{Deserialize, Serialize};

/// Integer point in the cloud's coordinate space. Coordinates may be negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Requested rectangle size. Valid only when both dimensions are strictly positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    pub fn is_valid(&self) -> bool {
        self.w > 0 && self.h > 0
    }

    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }
}

/// Axis-aligned rectangle. `x,y` is top-left; y grows downward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size` whose center is `center` (truncating division for
    /// odd dimensions).
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.w / 2,
            center.y - size.h / 2,
            size.w,
            size.h,
        )
    }

    /// Exclusive right edge coordinate (`x + w`).
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// The four corners, clockwise from top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// True if the intersection with `other` has strictly positive area.
    /// Rectangles that merely share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Copy of `self` moved `offset` units along `direction`.
    pub fn translated(&self, direction: Direction, offset: i32) -> Rect {
        let mut r = *self;
        match direction {
            Direction::Up => r.y -= offset,
            Direction::Down => r.y += offset,
            Direction::Right => r.x += offset,
            Direction::Left => r.x -= offset,
        }
        r
    }

    /// Copy of `self` slid along `direction` until flush beside `other`:
    /// the trailing edge touches `other`'s facing edge, the cross-axis
    /// coordinate is kept.
    pub fn beside(&self, other: &Rect, direction: Direction) -> Rect {
        let mut r = *self;
        match direction {
            Direction::Up => r.y = other.y - self.h,
            Direction::Down => r.y = other.bottom(),
            Direction::Right => r.x = other.right(),
            Direction::Left => r.x = other.x - self.w,
        }
        r
    }
}

/// Cardinal growth direction, cyclically ordered clockwise:
/// Up -> Right -> Down -> Left -> Up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Rotated one step clockwise.
    pub fn cw(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Rotated one step counter-clockwise.
    pub fn ccw(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }
}
