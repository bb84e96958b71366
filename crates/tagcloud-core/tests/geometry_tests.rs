use tagcloud_core::{Direction, Point, Rect, Size};

#[test]
fn intersection_requires_positive_area() {
    let a = Rect::new(0, 0, 4, 4);
    assert!(a.intersects(&Rect::new(3, 3, 4, 4)));
    assert!(a.intersects(&a));
    assert!(a.intersects(&Rect::new(1, 1, 1, 1)));

    // Shared edges and corners are not overlaps.
    assert!(!a.intersects(&Rect::new(4, 0, 4, 4)));
    assert!(!a.intersects(&Rect::new(0, 4, 4, 4)));
    assert!(!a.intersects(&Rect::new(-4, 0, 4, 4)));
    assert!(!a.intersects(&Rect::new(4, 4, 4, 4)));
    assert!(!a.intersects(&Rect::new(9, 9, 2, 2)));
}

#[test]
fn translated_moves_along_each_direction() {
    let r = Rect::new(2, 3, 5, 7);
    assert_eq!(r.translated(Direction::Up, 2), Rect::new(2, 1, 5, 7));
    assert_eq!(r.translated(Direction::Down, 2), Rect::new(2, 5, 5, 7));
    assert_eq!(r.translated(Direction::Right, 2), Rect::new(4, 3, 5, 7));
    assert_eq!(r.translated(Direction::Left, 2), Rect::new(0, 3, 5, 7));
}

#[test]
fn beside_slides_flush_and_keeps_the_cross_axis() {
    let other = Rect::new(10, 20, 6, 8);
    let r = Rect::new(0, 0, 3, 4);
    assert_eq!(r.beside(&other, Direction::Up), Rect::new(0, 16, 3, 4));
    assert_eq!(r.beside(&other, Direction::Down), Rect::new(0, 28, 3, 4));
    assert_eq!(r.beside(&other, Direction::Right), Rect::new(16, 0, 3, 4));
    assert_eq!(r.beside(&other, Direction::Left), Rect::new(7, 0, 3, 4));

    // Flush means touching, not overlapping.
    for d in [Direction::Up, Direction::Right, Direction::Down, Direction::Left] {
        assert!(!r.beside(&other, d).intersects(&other));
    }
}

#[test]
fn direction_rotations_cycle() {
    let mut d = Direction::Up;
    let cw_order = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];
    for expected in cw_order {
        d = d.cw();
        assert_eq!(d, expected);
    }
    for _ in 0..4 {
        d = d.ccw();
    }
    assert_eq!(d, Direction::Up);
    assert_eq!(Direction::Right.ccw(), Direction::Up);
    assert_eq!(Direction::Up.ccw(), Direction::Left);
}

#[test]
fn from_center_truncates_odd_sizes() {
    let r = Rect::from_center(Point::new(0, 0), Size::new(9, 5));
    assert_eq!(r, Rect::new(-4, -2, 9, 5));
    assert_eq!(r.right(), 5);
    assert_eq!(r.bottom(), 3);
}

#[test]
fn areas_use_wide_arithmetic() {
    let r = Rect::new(0, 0, 100_000, 100_000);
    assert_eq!(r.area(), 10_000_000_000i64);
    assert_eq!(Size::new(100_000, 100_000).area(), 10_000_000_000i64);
}
