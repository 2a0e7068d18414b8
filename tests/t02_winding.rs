use pyx::{Bitmap, Canvas, Color, Direction, Paint, Path, Pixel, Point, Rect};

#[test]
fn t02_nested_opposite_contours_leave_a_hole() {
    let mut bm = Bitmap::new(10, 10);
    let mut path = Path::new();
    path.add_rect(&Rect::ltrb(1.0, 1.0, 9.0, 9.0), Direction::Clockwise);
    path.add_rect(&Rect::ltrb(3.0, 3.0, 7.0, 7.0), Direction::CounterClockwise);
    let mut canvas = Canvas::new(&mut bm);
    canvas.draw_path(&path, &mut Paint::new(Color::black()));

    let ink = Pixel::pack_argb(255, 0, 0, 0);
    assert_eq!(bm[(1, 1)], ink);
    assert_eq!(bm[(2, 5)], ink);
    assert_eq!(bm[(5, 5)], Pixel::zero());
    assert_eq!(bm[(8, 8)], ink);
    assert_eq!(bm[(0, 0)], Pixel::zero());
}

#[test]
fn t02_same_direction_overlap_fills_once() {
    // half-transparent ink shows double blends immediately
    let gray = Color::argb(0.5, 1.0, 1.0, 1.0);
    let mut path = Path::new();
    path.add_rect(&Rect::ltrb(1.0, 1.0, 6.0, 9.0), Direction::Clockwise);
    path.add_rect(&Rect::ltrb(4.0, 1.0, 9.0, 9.0), Direction::Clockwise);

    let mut bm = Bitmap::new(10, 10);
    Canvas::new(&mut bm).draw_path(&path, &mut Paint::new(gray));
    assert_eq!(bm[(5, 5)], bm[(2, 5)], "overlap blended twice");
    assert_eq!(bm[(5, 5)], Pixel::pack_argb(128, 128, 128, 128));
}

#[test]
fn t02_geometry_outside_the_device_keeps_winding() {
    // a contour far larger than the device still covers all of it
    let mut path = Path::new();
    path.add_rect(&Rect::ltrb(-100.0, -100.0, 110.0, 110.0),
                  Direction::Clockwise);
    let mut bm = Bitmap::new(10, 10);
    Canvas::new(&mut bm).draw_path(&path, &mut Paint::new(Color::black()));
    assert!(bm.pixels.iter().all(|&p| p == Pixel::pack_argb(255, 0, 0, 0)));
}

#[test]
fn t02_offscreen_triangle_clips_cleanly() {
    let mut path = Path::new();
    path.add_polygon(&[Point::new(-20.0, 0.0), Point::new(30.0, 0.0),
                       Point::new(5.0, 40.0)]);
    let mut bm = Bitmap::new(10, 10);
    Canvas::new(&mut bm).draw_path(&path, &mut Paint::new(Color::black()));
    // the whole visible band near the top is inside the triangle
    let ink = Pixel::pack_argb(255, 0, 0, 0);
    for x in 0..10 {
        assert_eq!(bm[(x, 0)], ink, "top row pixel {}", x);
    }
}

#[test]
fn t02_circle_covers_center_not_corners() {
    let mut path = Path::new();
    path.add_circle(Point::new(5.0, 5.0), 4.0, Direction::Clockwise);
    let mut bm = Bitmap::new(10, 10);
    Canvas::new(&mut bm).draw_path(&path, &mut Paint::new(Color::black()));
    let ink = Pixel::pack_argb(255, 0, 0, 0);
    assert_eq!(bm[(5, 5)], ink);
    assert_eq!(bm[(5, 2)], ink);
    assert_eq!(bm[(2, 5)], ink);
    assert_eq!(bm[(0, 0)], Pixel::zero());
    assert_eq!(bm[(9, 9)], Pixel::zero());
    assert_eq!(bm[(9, 0)], Pixel::zero());
    assert_eq!(bm[(0, 9)], Pixel::zero());
}

#[test]
fn t02_circle_directions_fill_identically() {
    let mut cw = Path::new();
    cw.add_circle(Point::new(5.0, 5.0), 4.0, Direction::Clockwise);
    let mut ccw = Path::new();
    ccw.add_circle(Point::new(5.0, 5.0), 4.0, Direction::CounterClockwise);

    let mut a = Bitmap::new(10, 10);
    Canvas::new(&mut a).draw_path(&cw, &mut Paint::new(Color::black()));
    let mut b = Bitmap::new(10, 10);
    Canvas::new(&mut b).draw_path(&ccw, &mut Paint::new(Color::black()));
    assert_eq!(a.pixels, b.pixels);
}
