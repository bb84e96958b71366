use tagcloud_core::export::{to_json, CloudLayout};
use tagcloud_core::{Point, Rect};

fn sample_layout() -> CloudLayout {
    CloudLayout::new(
        Point::new(50, 50),
        vec![Rect::new(45, 48, 10, 4), Rect::new(45, 42, 10, 6)],
    )
}

#[test]
fn json_shape_has_center_count_and_rects() {
    let value = to_json(&sample_layout());

    assert_eq!(value["center"]["x"], 50);
    assert_eq!(value["center"]["y"], 50);
    assert_eq!(value["count"], 2);
    let rects = value["rects"].as_array().unwrap();
    assert_eq!(rects.len(), 2);
    assert_eq!(rects[0]["x"], 45);
    assert_eq!(rects[0]["y"], 48);
    assert_eq!(rects[0]["w"], 10);
    assert_eq!(rects[0]["h"], 4);
}

#[test]
fn layout_round_trips_through_json() {
    let layout = sample_layout();
    let text = serde_json::to_string(&to_json(&layout)).unwrap();
    let parsed: CloudLayout = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.center, layout.center);
    assert_eq!(parsed.rects, layout.rects);
}
