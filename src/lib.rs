/// How a draw call becomes pixels
///    canvas = Canvas( Bitmap )
///    canvas.draw_path(path, paint)
///  Geometry
///    path.transform(ctm)
///    path.segments()
///      curves::flatten_quad / flatten_cubic   -- curves to chords
///    edges::clip_segment()                    -- device clip + fences
///       Output: Edge { top_y, bottom_y, current_x, slope, winding }
///  Fill
///    raster::fill_path(edges, blit)           -- nonzero winding spans
///    raster::fill_convex(edges, blit)         -- two-edge fast path
///  Color
///    paint.shader.set_context(ctm)
///    paint.shader.shade_row()                 -- or paint.color.premul()
///    blend::BlendMode::proc()(src, dst)       -- Porter-Duff, packed ARGB

pub mod math;
pub mod geom;
pub mod transform;
pub mod pixel;
pub mod color;
pub mod blend;
pub mod bitmap;
pub mod paths;
pub mod curves;
pub mod edges;
pub mod raster;
pub mod shader;
pub mod paint;
pub mod canvas;
pub mod ppm;

pub use math::*;
pub use geom::*;
pub use transform::*;
pub use pixel::*;
pub use color::*;
pub use blend::*;
pub use bitmap::*;
pub use paths::*;
pub use curves::*;
pub use edges::*;
pub use raster::*;
pub use shader::*;
pub use paint::*;
pub use canvas::*;
pub use ppm::*;
