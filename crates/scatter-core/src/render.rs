// File: crates/scatter-core/src/render.rs
// Summary: Headless PNG/RGBA rendering of a built chart using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, Orientation, TICK_PADDING, TICK_SIZE};
use crate::chart::{Chart, LEGEND_SWATCH};
use crate::theme::{rgb, Theme};

pub struct RenderOptions {
    /// Device pixels per chart pixel.
    pub scale: f32,
    pub theme: Theme,
    /// Text drawing varies across platforms; snapshot tests turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, theme: Theme::light(), draw_labels: true }
    }
}

impl Chart {
    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading raster pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let s = opts.scale.max(0.1);
        let width = (self.options.width as f32 * s).round() as i32;
        let height = (self.options.height as f32 * s).round() as i32;
        let mut surface = skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        canvas.scale((s, s));
        canvas.translate((self.frame.left as f32, self.frame.top as f32));

        draw_axis(canvas, &self.x_axis, self.frame.height() as f32, opts);
        draw_axis(canvas, &self.y_axis, 0.0, opts);
        draw_dots(canvas, self, opts);
        draw_legend(canvas, self, opts);
        if opts.draw_labels {
            draw_titles(canvas, self, opts);
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn text_paint(color: skia::Color) -> (skia::Paint, skia::Font) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(10.0);
    (paint, font)
}

/// `offset` is the cross-axis position of the axis line (plot height for the bottom axis).
fn draw_axis(canvas: &skia::Canvas, axis: &Axis, offset: f32, opts: &RenderOptions) {
    let mut line = skia::Paint::default();
    line.set_color(opts.theme.axis_line);
    line.set_anti_alias(true);
    line.set_stroke_width(1.0);
    let mut tick_line = line.clone();
    tick_line.set_color(opts.theme.tick);
    let (paint_text, font) = text_paint(opts.theme.axis_label);

    let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
    let tick = TICK_SIZE as f32;
    let gap = (TICK_SIZE + TICK_PADDING) as f32;
    match axis.orientation {
        Orientation::Bottom => {
            canvas.draw_line((r0, offset), (r1, offset), &line);
            for t in &axis.ticks {
                let x = t.px as f32;
                canvas.draw_line((x, offset), (x, offset + tick), &tick_line);
                if opts.draw_labels {
                    let (w, _) = font.measure_str(&t.label, Some(&paint_text));
                    canvas.draw_str(&t.label, (x - w / 2.0, offset + gap + 8.0), &font, &paint_text);
                }
            }
        }
        Orientation::Left => {
            canvas.draw_line((offset, r0), (offset, r1), &line);
            for t in &axis.ticks {
                let y = t.px as f32;
                canvas.draw_line((offset - tick, y), (offset, y), &tick_line);
                if opts.draw_labels {
                    let (w, _) = font.measure_str(&t.label, Some(&paint_text));
                    canvas.draw_str(&t.label, (offset - gap - w, y + 3.5), &font, &paint_text);
                }
            }
        }
    }
}

fn draw_dots(canvas: &skia::Canvas, chart: &Chart, opts: &RenderOptions) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(opts.theme.dot_stroke);
    let r = chart.options.dot_radius;
    for p in &chart.points {
        let center = (p.pos.x as f32, p.pos.y as f32);
        fill.set_color(rgb(p.color));
        canvas.draw_circle(center, r, &fill);
        canvas.draw_circle(center, r, &stroke);
    }
}

fn draw_legend(canvas: &skia::Canvas, chart: &Chart, opts: &RenderOptions) {
    let w = chart.frame.width() as f32;
    let swatch = LEGEND_SWATCH as f32;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    let (paint_text, font) = text_paint(opts.theme.axis_label);
    for entry in &chart.legend {
        let top = entry.offset_y as f32;
        fill.set_color(rgb(entry.color));
        canvas.draw_rect(skia::Rect::from_xywh(w - swatch, top, swatch, swatch), &fill);
        if opts.draw_labels {
            let (tw, _) = font.measure_str(entry.label, Some(&paint_text));
            canvas.draw_str(entry.label, (w - swatch - 4.0 - tw, top + 15.0), &font, &paint_text);
        }
    }
}

fn draw_titles(canvas: &skia::Canvas, chart: &Chart, opts: &RenderOptions) {
    let (paint, mut font) = text_paint(opts.theme.title);
    font.set_size(chart.y_title.font_size as f32);
    canvas.save();
    canvas.rotate(chart.y_title.rotate_deg as f32, None);
    canvas.draw_str(&chart.y_title.text, (chart.y_title.x as f32, chart.y_title.y as f32), &font, &paint);
    canvas.restore();

    font.set_size(24.0);
    let (tw, _) = font.measure_str(&chart.options.title, Some(&paint));
    let x = (chart.frame.width() as f32 - tw) / 2.0;
    canvas.draw_str(&chart.options.title, (x, -chart.frame.top as f32 / 2.0 + 8.0), &font, &paint);
}
