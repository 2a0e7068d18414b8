use pyx::{Bitmap, BitmapShader, Canvas, Color, Paint, Pixel, Point, TileMode,
          Transform};

fn checker() -> Bitmap {
    let mut b = Bitmap::new(2, 2);
    b[(0, 0)] = Pixel::pack_argb(255, 255, 0, 0);
    b[(1, 0)] = Pixel::pack_argb(255, 0, 255, 0);
    b[(0, 1)] = Pixel::pack_argb(255, 0, 0, 255);
    b[(1, 1)] = Pixel::pack_argb(255, 255, 255, 255);
    b
}

fn square() -> [Point; 4] {
    [Point::new(0.0, 0.0), Point::new(4.0, 0.0),
     Point::new(4.0, 4.0), Point::new(0.0, 4.0)]
}

#[test]
fn t05_color_mesh_interpolates_toward_each_vertex() {
    let verts = [Point::new(0.0, 0.0), Point::new(8.0, 0.0),
                 Point::new(0.0, 8.0), Point::new(8.0, 8.0)];
    let colors = [Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0),
                  Color::rgb(0.0, 0.0, 1.0), Color::rgb(1.0, 1.0, 1.0)];
    let mut bm = Bitmap::new(8, 8);
    let mut canvas = Canvas::new(&mut bm);
    canvas.draw_mesh(&verts, Some(&colors), None, 2, &[0, 1, 2, 2, 1, 3],
                     &mut Paint::default());

    // each corner pixel is dominated by its vertex color
    assert!(bm[(0, 0)].red() > 200 && bm[(0, 0)].green() < 55);
    assert!(bm[(7, 0)].green() > 200 && bm[(7, 0)].red() < 55);
    assert!(bm[(0, 7)].blue() > 200 && bm[(0, 7)].red() < 55);
    let far = bm[(7, 7)];
    assert!(far.red() > 200 && far.green() > 200 && far.blue() > 200);
    assert!(bm.pixels.iter().all(|&p| p.alpha() == 255));
}

#[test]
fn t05_texture_mesh_maps_the_bitmap_onto_the_quad() {
    let tex_src = checker();
    let mut shader = BitmapShader::new(&tex_src, Transform::identity(),
                                       TileMode::Clamp);
    let verts = square();
    let texs = [Point::new(0.0, 0.0), Point::new(2.0, 0.0),
                Point::new(2.0, 2.0), Point::new(0.0, 2.0)];
    let mut bm = Bitmap::new(4, 4);
    let mut canvas = Canvas::new(&mut bm);
    let mut paint = Paint::with_shader(&mut shader);
    canvas.draw_mesh(&verts, None, Some(&texs), 2, &[0, 1, 2, 2, 3, 0],
                     &mut paint);

    // 2x2 texels stretched over a 4x4 quad
    assert_eq!(bm[(0, 0)], tex_src[(0, 0)]);
    assert_eq!(bm[(3, 0)], tex_src[(1, 0)]);
    assert_eq!(bm[(0, 3)], tex_src[(0, 1)]);
    assert_eq!(bm[(3, 3)], tex_src[(1, 1)]);
}

#[test]
fn t05_texture_mesh_without_a_shader_draws_nothing() {
    let verts = square();
    let texs = square();
    let mut bm = Bitmap::new(4, 4);
    let mut canvas = Canvas::new(&mut bm);
    canvas.draw_mesh(&verts, None, Some(&texs), 2, &[0, 1, 2, 2, 3, 0],
                     &mut Paint::default());
    assert!(bm.pixels.iter().all(|&p| p == Pixel::zero()));
}

#[test]
fn t05_white_colors_leave_the_texture_unchanged() {
    let tex_src = checker();
    let verts = square();
    let texs = [Point::new(0.0, 0.0), Point::new(2.0, 0.0),
                Point::new(2.0, 2.0), Point::new(0.0, 2.0)];
    let indices = [0, 1, 2, 2, 3, 0];

    let mut tex_only = Bitmap::new(4, 4);
    {
        let mut shader = BitmapShader::new(&tex_src, Transform::identity(),
                                           TileMode::Clamp);
        let mut paint = Paint::with_shader(&mut shader);
        Canvas::new(&mut tex_only)
            .draw_mesh(&verts, None, Some(&texs), 2, &indices, &mut paint);
    }

    let mut both = Bitmap::new(4, 4);
    {
        let whites = [Color::white(); 4];
        let mut shader = BitmapShader::new(&tex_src, Transform::identity(),
                                           TileMode::Clamp);
        let mut paint = Paint::with_shader(&mut shader);
        Canvas::new(&mut both)
            .draw_mesh(&verts, Some(&whites), Some(&texs), 2, &indices,
                       &mut paint);
    }
    assert_eq!(tex_only.pixels, both.pixels);
}

#[test]
fn t05_quad_levels_cover_the_same_footprint() {
    let verts = square();
    let colors = [Color::rgb(1.0, 0.0, 0.0); 4];
    let mut flat = Bitmap::new(4, 4);
    Canvas::new(&mut flat)
        .draw_quad(&verts, Some(&colors), None, 0, &mut Paint::default());
    let mut fine = Bitmap::new(4, 4);
    Canvas::new(&mut fine)
        .draw_quad(&verts, Some(&colors), None, 3, &mut Paint::default());
    assert_eq!(flat.pixels, fine.pixels);
    assert!(flat.pixels.iter().all(|&p| p == Pixel::pack_argb(255, 255, 0, 0)));
}

#[test]
fn t05_quad_interpolates_colors_bilinearly() {
    let verts = [Point::new(0.0, 0.0), Point::new(8.0, 0.0),
                 Point::new(8.0, 8.0), Point::new(0.0, 8.0)];
    let colors = [Color::black(), Color::black(),
                  Color::white(), Color::white()];
    let mut bm = Bitmap::new(8, 8);
    Canvas::new(&mut bm)
        .draw_quad(&verts, Some(&colors), None, 3, &mut Paint::default());
    // brightness grows downward, constant across a row
    for y in 1..8 {
        assert!(bm[(4, y)].red() >= bm[(4, y - 1)].red(), "row {}", y);
    }
    assert!(bm[(4, 0)].red() < 60);
    assert!(bm[(4, 7)].red() > 195);
}
