// File: crates/chart-core/src/chart.rs
// Summary: Multi-line price chart and headless PNG rendering using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use stock_core::ChartRequest;
use thiserror::Error;
use tracing::{debug, warn};

use crate::axis::{linspace, Axis, AxisKind};
use crate::series::LineSeries;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, MAX_POINTS, WIDTH};
use crate::view::ViewState;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid surface size {width}x{height}")]
    BadSize { width: i32, height: i32 },
    #[error("failed to create raster surface")]
    Surface,
    #[error("failed to read back rendered pixels")]
    Readback,
    #[error("encode PNG failed: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels, tick labels and legend text.
    pub draw_labels: bool,
    /// Lines longer than this are LTTB-downsampled before drawing.
    pub max_points: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            max_points: MAX_POINTS,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<LineSeries>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            x_axis: Axis::new("Time", AxisKind::Date),
            y_axis: Axis::new("Price", AxisKind::Value),
        }
    }

    /// One line per requested series, downsampled to `max_points`, axes autoscaled.
    pub fn from_request(request: &ChartRequest, max_points: usize) -> Self {
        let mut chart = Self::new(request.title.clone());
        chart.x_axis = Axis::new(request.x_label.clone(), AxisKind::Date);
        chart.y_axis = Axis::new(request.y_label.clone(), AxisKind::Value);
        for windowed in request.series() {
            if windowed.is_empty() {
                warn!(symbol = %windowed.label, "no samples in window; legend only");
            }
            let line = LineSeries::from_windowed(windowed);
            let line = line.downsample_lttb(max_points);
            debug!(symbol = %line.label, source = windowed.len(), drawn = line.len(), "prepared line");
            chart.add_series(line);
        }
        chart.autoscale_axes(0.02);
        chart
    }

    pub fn add_series(&mut self, series: LineSeries) {
        self.series.push(series);
    }

    /// Fit both axes to the data; `y_margin` pads the Y range by that fraction.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        ViewState::from_chart(self, y_margin).apply_to_chart(self);
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(RenderError::BadSize { width: opts.width, height: opts.height }.into());
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface)?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Readback.into());
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(RenderError::Readback)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).map_err(RenderError::from)?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(path, &bytes)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = PlotRect {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32) as f32,
            b: (opts.height - opts.insets.bottom as i32) as f32,
        };

        draw_grid(canvas, &plot, theme);
        draw_axes(canvas, &plot, theme);

        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s, theme.series_color(i));
        }

        if opts.draw_labels {
            let fonts = Fonts::new();
            draw_ticks(canvas, &plot, &self.x_axis, &self.y_axis, theme, &fonts);
            draw_labels(canvas, &plot, opts, &self.title, &self.x_axis, &self.y_axis, &fonts);
            draw_legend(canvas, &plot, &self.series, theme, &fonts);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Write encoded bytes to `path`, creating missing parent directories.
pub(crate) fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

const X_TICKS: usize = 6;
const Y_TICKS: usize = 6;

struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl PlotRect {
    fn sx(&self, axis: &Axis, x: f64) -> f32 {
        self.l + ((x - axis.min) / axis.span()) as f32 * (self.r - self.l)
    }
    fn sy(&self, axis: &Axis, y: f64) -> f32 {
        self.b - ((y - axis.min) / axis.span()) as f32 * (self.b - self.t)
    }
}

struct Fonts {
    small: skia::Font,
    regular: skia::Font,
    title: skia::Font,
}

impl Fonts {
    fn new() -> Self {
        Self { small: font(12.0), regular: font(14.0), title: font(18.0) }
    }
}

fn font(size: f32) -> skia::Font {
    match skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::default()) {
        Some(typeface) => skia::Font::from_typeface(typeface, size),
        None => {
            let mut f = skia::Font::default();
            f.set_size(size);
            f
        }
    }
}

fn text_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_color(color);
    p.set_anti_alias(true);
    p
}

fn text_width(font: &skia::Font, text: &str, paint: &skia::Paint) -> f32 {
    font.measure_str(text, Some(paint)).0
}

fn draw_grid(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for x in linspace(plot.l as f64, plot.r as f64, X_TICKS) {
        canvas.draw_line((x as f32, plot.t), (x as f32, plot.b), &paint);
    }
    for y in linspace(plot.t as f64, plot.b as f64, Y_TICKS) {
        canvas.draw_line((plot.l, y as f32), (plot.r, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((plot.l, plot.b), (plot.r, plot.b), &axis_paint);
    canvas.draw_line((plot.l, plot.t), (plot.l, plot.b), &axis_paint);
}

fn draw_ticks(canvas: &skia::Canvas, plot: &PlotRect, x_axis: &Axis, y_axis: &Axis, theme: &Theme, fonts: &Fonts) {
    let paint = text_paint(theme.tick);

    for v in x_axis.ticks(X_TICKS) {
        let label = x_axis.tick_label(v);
        let w = text_width(&fonts.small, &label, &paint);
        let x = plot.sx(x_axis, v) - w * 0.5;
        canvas.draw_str(&label, (x, plot.b + 18.0), &fonts.small, &paint);
    }
    for v in y_axis.ticks(Y_TICKS) {
        let label = y_axis.tick_label(v);
        let w = text_width(&fonts.small, &label, &paint);
        let y = plot.sy(y_axis, v) + 4.0;
        canvas.draw_str(&label, (plot.l - w - 8.0, y), &fonts.small, &paint);
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    opts: &RenderOptions,
    title: &str,
    x_axis: &Axis,
    y_axis: &Axis,
    fonts: &Fonts,
) {
    let label_paint = text_paint(opts.theme.axis_label);
    let title_paint = text_paint(opts.theme.title);

    let tw = text_width(&fonts.title, title, &title_paint);
    let cx = opts.width as f32 * 0.5;
    canvas.draw_str(title, (cx - tw * 0.5, plot.t * 0.5 + 6.0), &fonts.title, &title_paint);

    let xw = text_width(&fonts.regular, &x_axis.label, &label_paint);
    let mid = (plot.l + plot.r) * 0.5;
    canvas.draw_str(&x_axis.label, (mid - xw * 0.5, plot.b + 44.0), &fonts.regular, &label_paint);
    canvas.draw_str(&y_axis.label, (plot.l - 72.0, plot.t - 12.0), &fonts.regular, &label_paint);
}

fn draw_legend(canvas: &skia::Canvas, plot: &PlotRect, series: &[LineSeries], theme: &Theme, fonts: &Fonts) {
    let label_paint = text_paint(theme.axis_label);
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_stroke_width(3.0);

    let row_h = 18.0;
    let widest = series
        .iter()
        .map(|s| text_width(&fonts.regular, &s.label, &label_paint))
        .fold(0.0f32, f32::max);
    let x0 = plot.r - widest - 40.0;
    for (i, s) in series.iter().enumerate() {
        let y = plot.t + 16.0 + i as f32 * row_h;
        swatch.set_color(theme.series_color(i));
        canvas.draw_line((x0, y - 4.0), (x0 + 20.0, y - 4.0), &swatch);
        canvas.draw_str(&s.label, (x0 + 26.0, y), &fonts.regular, &label_paint);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &LineSeries,
    color: skia::Color,
) {
    let data = &series.data_xy;
    let Some(&(x0, y0)) = data.first() else { return };

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_color(color);

    if data.len() == 1 {
        stroke.set_style(skia::paint::Style::Fill);
        canvas.draw_circle((plot.sx(x_axis, x0), plot.sy(y_axis, y0)), 3.0, &stroke);
        return;
    }

    let mut path = skia::Path::new();
    path.move_to((plot.sx(x_axis, x0), plot.sy(y_axis, y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((plot.sx(x_axis, x), plot.sy(y_axis, y)));
    }

    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    canvas.draw_path(&path, &stroke);
}
