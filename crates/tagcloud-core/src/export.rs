use crate::model::{Point, Rect};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A complete layout: the cloud center plus the placement history in call
/// order. This is the hand-off format for rendering and metric consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudLayout {
    pub center: Point,
    pub rects: Vec<Rect>,
}

impl CloudLayout {
    pub fn new(center: Point, rects: Vec<Rect>) -> Self {
        Self { center, rects }
    }
}

/// Serialize a layout as `{ center: {x, y}, rects: [{x, y, w, h}, ...] }`
/// with a `count` hint. Suitable for generic tooling and simple consumption.
pub fn to_json(layout: &CloudLayout) -> Value {
    let rects_val: Vec<Value> = layout
        .rects
        .iter()
        .map(|r| json!({"x": r.x, "y": r.y, "w": r.w, "h": r.h}))
        .collect();
    json!({
        "center": {"x": layout.center.x, "y": layout.center.y},
        "count": layout.rects.len(),
        "rects": rects_val,
    })
}
