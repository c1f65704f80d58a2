//! Raster-Backend für den PNG-Export.
//!
//! Die Zeichenliste wird als SVG geschrieben, mit resvg in eine Pixmap
//! gerendert, auf den Export-Ausschnitt zugeschnitten und als PNG kodiert.

use super::projection_renderer::build_draw_list;
use crate::core::{Rgba, TextAlign, TextBaseline};
use crate::shared::{rgba_to_u8, DrawCommand, RenderScene, StrokeStyle};
use image::ImageEncoder;
use resvg::tiny_skia;
use resvg::usvg;
use std::path::Path;

/// Fehler beim Rastern und Exportieren.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Erzeugtes SVG konnte nicht geparst werden
    #[error("SVG konnte nicht geparst werden: {0}")]
    Svg(#[from] usvg::Error),
    /// Pixmap konnte nicht angelegt werden
    #[error("Zeichenfläche {width}×{height} konnte nicht angelegt werden")]
    Pixmap { width: u32, height: u32 },
    /// Ausschnitt liegt (teilweise) außerhalb oder ist leer
    #[error("Export-Ausschnitt ist leer")]
    EmptyCrop,
    /// PNG-Kodierung fehlgeschlagen
    #[error("PNG-Kodierung fehlgeschlagen: {0}")]
    Encode(#[from] image::ImageError),
    /// Datei konnte nicht geschrieben werden
    #[error("Datei konnte nicht geschrieben werden: {0}")]
    Io(#[from] std::io::Error),
}

/// Rechteckiger Export-Ausschnitt in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Ausschnitt mit `margin_ratio` × Canvas-Größe Rand auf jeder Seite.
    ///
    /// 400×400 mit Rand 1/8 ergibt (50, 50, 300, 300).
    pub fn for_canvas(canvas_size: [f32; 2], margin_ratio: f32) -> Self {
        let [width, height] = canvas_pixels(canvas_size);
        let margin_ratio = margin_ratio.clamp(0.0, 0.5);
        let x = (width as f32 * margin_ratio).round() as u32;
        let y = (height as f32 * margin_ratio).round() as u32;
        Self {
            x,
            y,
            width: width.saturating_sub(2 * x),
            height: height.saturating_sub(2 * y),
        }
    }

    /// Schneidet den Ausschnitt auf die Canvas-Größe zu (None = leer).
    fn clamped_to(self, canvas_width: u32, canvas_height: u32) -> Option<Self> {
        let width = self.width.min(canvas_width.saturating_sub(self.x));
        let height = self.height.min(canvas_height.saturating_sub(self.y));
        (width > 0 && height > 0).then_some(Self {
            width,
            height,
            ..self
        })
    }
}

fn canvas_pixels(canvas_size: [f32; 2]) -> [u32; 2] {
    canvas_size.map(|v| v.max(0.0).round() as u32)
}

// ── SVG ─────────────────────────────────────────────────────────────

/// Schreibt die Zeichenliste als SVG-Dokument mit weißem Hintergrund.
pub fn draw_list_to_svg(commands: &[DrawCommand], width: u32, height: u32) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = width,
        h = height
    ));
    svg.push_str("  <rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    for command in commands {
        match command {
            DrawCommand::StrokeCircle {
                center,
                radius,
                stroke,
            } => svg.push_str(&format!(
                "  <circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" fill=\"none\"{}/>\n",
                center.x,
                center.y,
                radius,
                stroke_attrs(stroke)
            )),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => svg.push_str(&format!(
                "  <circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" {}/>\n",
                center.x,
                center.y,
                radius,
                paint_attrs("fill", *color)
            )),
            DrawCommand::StrokeLine { from, to, stroke } => svg.push_str(&format!(
                "  <line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\"{}/>\n",
                from.x,
                from.y,
                to.x,
                to.y,
                stroke_attrs(stroke)
            )),
            DrawCommand::FillText {
                text,
                position,
                align,
                baseline,
                color,
                font_size,
            } => svg.push_str(&format!(
                "  <text x=\"{:.3}\" y=\"{:.3}\" font-family=\"sans-serif\" font-size=\"{:.1}\" text-anchor=\"{}\" dominant-baseline=\"{}\" {}>{}</text>\n",
                position.x,
                position.y,
                font_size,
                text_anchor(*align),
                dominant_baseline(*baseline),
                paint_attrs("fill", *color),
                quick_xml::escape::escape(text.as_str())
            )),
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn paint_attrs(attr: &str, color: Rgba) -> String {
    let [r, g, b, _] = rgba_to_u8(color);
    format!(
        "{attr}=\"#{r:02x}{g:02x}{b:02x}\" {attr}-opacity=\"{:.3}\"",
        color[3].clamp(0.0, 1.0)
    )
}

fn stroke_attrs(stroke: &StrokeStyle) -> String {
    let mut attrs = format!(
        " {} stroke-width=\"{:.3}\"",
        paint_attrs("stroke", stroke.color),
        stroke.width
    );
    if let Some([dash, gap]) = stroke.dash {
        attrs.push_str(&format!(" stroke-dasharray=\"{:.3} {:.3}\"", dash, gap));
    }
    attrs
}

fn text_anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Right => "end",
    }
}

fn dominant_baseline(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Top => "text-before-edge",
        TextBaseline::Middle => "central",
        TextBaseline::Bottom => "text-after-edge",
    }
}

// ── Raster ──────────────────────────────────────────────────────────

/// Rendert die Szene in Canvas-Größe und liefert das Vollbild als RGBA.
pub fn render_rgba(scene: &RenderScene) -> Result<image::RgbaImage, ExportError> {
    let [width, height] = canvas_pixels(scene.dimensions.canvas_size);
    let svg = draw_list_to_svg(&build_draw_list(scene), width, height);

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(&svg, &options)?;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ExportError::Pixmap { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // Opaker Hintergrund: vormultipliziert == nicht vormultipliziert
    image::RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or(ExportError::Pixmap { width, height })
}

/// Rendert die Szene, schneidet `crop` aus und kodiert das Ergebnis als PNG.
pub fn export_png_bytes(scene: &RenderScene, crop: CropRect) -> Result<Vec<u8>, ExportError> {
    let [width, height] = canvas_pixels(scene.dimensions.canvas_size);
    let crop = crop
        .clamped_to(width, height)
        .ok_or(ExportError::EmptyCrop)?;

    let full = render_rgba(scene)?;
    let cropped = image::imageops::crop_imm(&full, crop.x, crop.y, crop.width, crop.height)
        .to_image();

    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut bytes).write_image(
        cropped.as_raw(),
        cropped.width(),
        cropped.height(),
        image::ExtendedColorType::Rgba8,
    )?;

    log::debug!(
        "PNG kodiert: {}×{} bei ({}, {}), {} Bytes",
        crop.width,
        crop.height,
        crop.x,
        crop.y,
        bytes.len()
    );
    Ok(bytes)
}

/// Wie [`export_png_bytes`], schreibt das PNG aber direkt nach `path`.
pub fn export_png_file(scene: &RenderScene, crop: CropRect, path: &Path) -> Result<(), ExportError> {
    let bytes = export_png_bytes(scene, crop)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
