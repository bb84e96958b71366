use image::Rgba;
use tagcloud_core::render::render_cloud;
use tagcloud_core::{Rect, TagCloudError};

#[test]
fn canvas_is_bounding_region_plus_margin() {
    let rects = [Rect::new(0, 0, 2, 2), Rect::new(5, 5, 1, 1)];
    let img = render_cloud(&rects, 4, false).unwrap();
    assert_eq!(img.dimensions(), (6 + 8, 6 + 8));
}

#[test]
fn rectangles_are_filled_in_palette_order() {
    let rects = [Rect::new(-3, -3, 3, 3), Rect::new(0, 0, 3, 3)];
    let img = render_cloud(&rects, 2, false).unwrap();

    // First rectangle lands at canvas (2, 2) and is painted aqua.
    assert_eq!(img.get_pixel(2, 2), &Rgba([0, 255, 255, 255]));
    // Second rectangle starts at canvas (5, 5), bisque.
    assert_eq!(img.get_pixel(5, 5), &Rgba([255, 228, 196, 255]));
    // Margin stays background white.
    assert_eq!(img.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
}

#[test]
fn outlines_draw_a_red_border() {
    let rects = [Rect::new(0, 0, 4, 4)];
    let img = render_cloud(&rects, 1, true).unwrap();
    assert_eq!(img.get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
    assert_eq!(img.get_pixel(4, 4), &Rgba([255, 0, 0, 255]));
    // Interior keeps the fill color.
    assert_eq!(img.get_pixel(2, 2), &Rgba([0, 255, 255, 255]));
}

#[test]
fn fails_on_empty_history() {
    let err = render_cloud(&[], 4, false).unwrap_err();
    assert!(matches!(err, TagCloudError::InvalidInput(_)));
}
