//! Rasterizes a [`Layout`] onto a fresh canvas.
//!
//! Drawing is done with tiny-skia and the result is handed back as a
//! straight-alpha [`RgbaImage`]. Nothing here touches the filesystem.

use image::RgbaImage;
use log::debug;
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::{Error, Result};
use crate::geometry::{DiscSpec, IconVariant, Layout, Point, StrokeSpec};
use crate::palette::Rgba;

/// Draw the fork glyph for `variant` on a `size`×`size` canvas.
pub fn render(variant: IconVariant, size: u32, background: Rgba) -> Result<RgbaImage> {
    let mut pixmap = blank(size, background)?;
    let layout = Layout::compute(variant, size);
    debug!(
        "Rendering {} icon at {size}px: trunk {}px, fork {:?}",
        variant.name(),
        layout.trunk_width(),
        layout.fork_point()
    );

    for stroke in &layout.strokes {
        draw_stroke(&mut pixmap, stroke);
    }
    for disc in &layout.discs {
        draw_disc(&mut pixmap, disc);
    }

    into_canvas(pixmap)
}

/// A flat canvas of a single color.
pub fn fill(size: u32, color: Rgba) -> Result<RgbaImage> {
    into_canvas(blank(size, color)?)
}

fn blank(size: u32, background: Rgba) -> Result<Pixmap> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }
    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| Error::Render(format!("cannot allocate {size}x{size} pixmap")))?;
    pixmap.fill(background.to_skia());
    Ok(pixmap)
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

// Integer coordinates address pixels; tiny-skia addresses pixel edges.
fn pixel_center(p: Point) -> (f32, f32) {
    (p.x as f32 + 0.5, p.y as f32 + 0.5)
}

fn draw_stroke(pixmap: &mut Pixmap, spec: &StrokeSpec) {
    let (x0, y0) = pixel_center(spec.from);
    let (x1, y1) = pixel_center(spec.to);

    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    pb.line_to(x1, y1);
    // Zero-length segments (tiny canvases) have no path.
    let Some(path) = pb.finish() else {
        return;
    };

    let stroke = Stroke {
        width: spec.width as f32,
        line_cap: LineCap::Butt,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint(spec.color), &stroke, Transform::identity(), None);
}

fn draw_disc(pixmap: &mut Pixmap, spec: &DiscSpec) {
    let (cx, cy) = pixel_center(spec.center);
    let Some(path) = PathBuilder::from_circle(cx, cy, spec.radius as f32) else {
        return;
    };
    pixmap.fill_path(
        &path,
        &paint(spec.color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

fn into_canvas(pixmap: Pixmap) -> Result<RgbaImage> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let raw: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    RgbaImage::from_raw(width, height, raw)
        .ok_or_else(|| Error::Render(format!("pixel buffer does not match {width}x{height}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn test_dimensions() {
        for variant in IconVariant::ALL {
            for size in [1, 7, 48, 512] {
                let canvas = render(variant, size, palette::TRANSPARENT).unwrap();
                assert_eq!(canvas.dimensions(), (size, size));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for variant in IconVariant::ALL {
            let a = render(variant, 256, palette::ICON_BACKGROUND).unwrap();
            let b = render(variant, 256, palette::ICON_BACKGROUND).unwrap();
            assert_eq!(a.as_raw(), b.as_raw(), "{} differs", variant.name());
        }
    }

    #[test]
    fn test_standard_icon_pixels() {
        let background = Rgba::from_hex("#E8F4FD").unwrap();
        let canvas = render(IconVariant::Standard, 1024, background).unwrap();

        assert_eq!(canvas.get_pixel(0, 0).0, background.to_array());
        assert_eq!(canvas.get_pixel(1023, 1023).0, background.to_array());

        // Halfway down the trunk (top 225, fork 460).
        assert_eq!(canvas.get_pixel(512, 342).0, palette::BLUE_DARK.to_array());
        // Just inside the left tip disc.
        assert_eq!(canvas.get_pixel(286, 798).0, palette::BLUE.to_array());
    }

    #[test]
    fn test_splash_is_transparent() {
        let canvas = render(IconVariant::Splash, 1024, palette::TRANSPARENT).unwrap();
        assert_eq!(canvas.get_pixel(0, 0).0[3], 0);
        assert_eq!(canvas.get_pixel(512, 300).0, palette::BLUE.to_array());
    }

    #[test]
    fn test_favicon_48() {
        let canvas = render(IconVariant::Favicon, 48, palette::TRANSPARENT).unwrap();
        assert_eq!(canvas.dimensions(), (48, 48));
        assert_eq!(canvas.get_pixel(0, 0).0[3], 0);
        assert_eq!(canvas.get_pixel(24, 16).0, palette::BLUE.to_array());
    }

    #[test]
    fn test_zero_size_rejected() {
        for variant in IconVariant::ALL {
            assert!(matches!(
                render(variant, 0, palette::TRANSPARENT),
                Err(Error::InvalidSize(0))
            ));
        }
        assert!(matches!(fill(0, palette::MONOCHROME), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn test_fill() {
        let canvas = fill(512, palette::ANDROID_BACKGROUND).unwrap();
        assert_eq!(canvas.dimensions(), (512, 512));
        assert!(canvas
            .pixels()
            .all(|px| px.0 == palette::ANDROID_BACKGROUND.to_array()));
    }
}
