use pyx::{Bitmap, Canvas, Color, LinearGradientShader, Paint, Pixel, Point,
          Rect, TileMode};

fn red() -> Color {
    Color::rgb(1.0, 0.0, 0.0)
}
fn blue() -> Color {
    Color::rgb(0.0, 0.0, 1.0)
}

#[test]
fn t04_two_stop_ramp_is_sampled_at_pixel_centers() {
    let colors = [red(), blue()];
    let mut shader = LinearGradientShader::new(
        Point::new(0.0, 0.0), Point::new(10.0, 0.0),
        &colors, TileMode::Clamp).unwrap();
    let mut bm = Bitmap::new(10, 1);
    let mut canvas = Canvas::new(&mut bm);
    canvas.draw_paint(&mut Paint::with_shader(&mut shader));

    // t = (x + 0.5) / 10
    assert_eq!(bm[(0, 0)], Pixel::pack_argb(255, 242, 0, 13));
    assert_eq!(bm[(9, 0)], Pixel::pack_argb(255, 13, 0, 242));
    for x in 1..10 {
        assert!(bm[(x, 0)].red() < bm[(x - 1, 0)].red(),
                "red must fall at {}", x);
        assert!(bm[(x, 0)].blue() > bm[(x - 1, 0)].blue(),
                "blue must rise at {}", x);
    }
}

#[test]
fn t04_three_stops_share_the_span_evenly() {
    let colors = [red(), Color::rgb(0.0, 1.0, 0.0), blue()];
    let mut shader = LinearGradientShader::new(
        Point::new(0.0, 0.0), Point::new(10.0, 0.0),
        &colors, TileMode::Clamp).unwrap();
    let mut bm = Bitmap::new(10, 1);
    Canvas::new(&mut bm).draw_paint(&mut Paint::with_shader(&mut shader));

    // x=2 sits halfway through the first pair of stops
    assert_eq!(bm[(2, 0)], Pixel::pack_argb(255, 128, 128, 0));
    // x=7 sits halfway through the second pair
    assert_eq!(bm[(7, 0)], Pixel::pack_argb(255, 0, 128, 128));
}

#[test]
fn t04_gradient_follows_the_canvas_transform() {
    let colors = [red(), blue()];
    let mut base = LinearGradientShader::new(
        Point::new(0.0, 0.0), Point::new(5.0, 0.0),
        &colors, TileMode::Clamp).unwrap();
    let mut a = Bitmap::new(10, 1);
    Canvas::new(&mut a).draw_rect(&Rect::ltrb(0.0, 0.0, 5.0, 1.0),
                                  &mut Paint::with_shader(&mut base));

    let mut moved = LinearGradientShader::new(
        Point::new(0.0, 0.0), Point::new(5.0, 0.0),
        &colors, TileMode::Clamp).unwrap();
    let mut b = Bitmap::new(10, 1);
    let mut canvas = Canvas::new(&mut b);
    canvas.translate(5.0, 0.0);
    canvas.draw_rect(&Rect::ltrb(0.0, 0.0, 5.0, 1.0),
                     &mut Paint::with_shader(&mut moved));

    for x in 0..5 {
        assert_eq!(a[(x, 0)], b[(x + 5, 0)], "column {}", x);
        assert_eq!(b[(x, 0)], Pixel::zero());
    }
}

#[test]
fn t04_repeat_tiling_wraps_the_ramp() {
    let colors = [red(), blue()];
    let mut shader = LinearGradientShader::new(
        Point::new(0.0, 0.0), Point::new(4.0, 0.0),
        &colors, TileMode::Repeat).unwrap();
    let mut bm = Bitmap::new(8, 1);
    Canvas::new(&mut bm).draw_paint(&mut Paint::with_shader(&mut shader));
    for x in 0..4 {
        assert_eq!(bm[(x, 0)], bm[(x + 4, 0)], "column {}", x);
    }
}

#[test]
fn t04_translucent_stops_blend_over_the_destination() {
    let colors = [Color::argb(0.0, 0.0, 0.0, 0.0), Color::argb(1.0, 0.0, 0.0, 0.0)];
    let mut shader = LinearGradientShader::new(
        Point::new(0.0, 0.0), Point::new(10.0, 0.0),
        &colors, TileMode::Clamp).unwrap();
    let mut bm = Bitmap::new(10, 1);
    let mut canvas = Canvas::new(&mut bm);
    canvas.clear(Color::white());
    canvas.draw_paint(&mut Paint::with_shader(&mut shader));
    // white shows through in proportion to the ramp's alpha
    assert_eq!(bm[(0, 0)].red(), 242);
    assert_eq!(bm[(9, 0)].red(), 13);
    assert!(bm.pixels.iter().all(|&p| p.alpha() == 255));
}
