//! egui-Backend: zeichnet eine Zeichenliste mit dem `egui::Painter`.

use crate::core::{Rgba, TextAlign, TextBaseline, TextMeasure};
use crate::shared::{rgba_to_u8, DrawCommand, StrokeStyle};

/// Segmente für die Polygon-Näherung gestrichelter Kreise.
const DASHED_CIRCLE_SEGMENTS: usize = 96;

/// Zeichnet alle Befehle; Canvas-Koordinaten beginnen bei `origin`.
pub fn paint_draw_list(painter: &egui::Painter, origin: egui::Pos2, commands: &[DrawCommand]) {
    let to_screen = |p: glam::Vec2| origin + egui::vec2(p.x, p.y);

    for command in commands {
        match command {
            DrawCommand::StrokeCircle {
                center,
                radius,
                stroke,
            } => {
                let center = to_screen(*center);
                match stroke.dash {
                    Some([dash, gap]) => {
                        let points: Vec<egui::Pos2> = (0..=DASHED_CIRCLE_SEGMENTS)
                            .map(|i| {
                                let angle =
                                    i as f32 / DASHED_CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
                                center + *radius * egui::vec2(angle.cos(), angle.sin())
                            })
                            .collect();
                        painter.extend(egui::Shape::dashed_line(
                            &points,
                            egui_stroke(stroke),
                            dash,
                            gap,
                        ));
                    }
                    None => {
                        painter.circle_stroke(center, *radius, egui_stroke(stroke));
                    }
                }
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(to_screen(*center), *radius, color32(*color));
            }
            DrawCommand::StrokeLine { from, to, stroke } => {
                let points = [to_screen(*from), to_screen(*to)];
                match stroke.dash {
                    Some([dash, gap]) => {
                        painter.extend(egui::Shape::dashed_line(
                            &points,
                            egui_stroke(stroke),
                            dash,
                            gap,
                        ));
                    }
                    None => {
                        painter.line_segment(points, egui_stroke(stroke));
                    }
                }
            }
            DrawCommand::FillText {
                text,
                position,
                align,
                baseline,
                color,
                font_size,
            } => {
                painter.text(
                    to_screen(*position),
                    align2(*align, *baseline),
                    text,
                    egui::FontId::proportional(*font_size),
                    color32(*color),
                );
            }
        }
    }
}

/// Anker des Texts relativ zur Zeichenposition.
pub fn align2(align: TextAlign, baseline: TextBaseline) -> egui::Align2 {
    let x = match align {
        TextAlign::Left => egui::Align::Min,
        TextAlign::Right => egui::Align::Max,
    };
    let y = match baseline {
        TextBaseline::Top => egui::Align::Min,
        TextBaseline::Middle => egui::Align::Center,
        TextBaseline::Bottom => egui::Align::Max,
    };
    egui::Align2([x, y])
}

fn color32(color: Rgba) -> egui::Color32 {
    let [r, g, b, a] = rgba_to_u8(color);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn egui_stroke(stroke: &StrokeStyle) -> egui::Stroke {
    egui::Stroke::new(stroke.width, color32(stroke.color))
}

/// Textbreiten-Messung über das Font-System von egui.
pub struct PainterTextMeasure<'a> {
    painter: &'a egui::Painter,
}

impl<'a> PainterTextMeasure<'a> {
    /// Misst mit den Fonts des gegebenen Painters.
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl TextMeasure for PainterTextMeasure<'_> {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        self.painter
            .layout_no_wrap(
                text.to_string(),
                egui::FontId::proportional(font_size),
                egui::Color32::BLACK,
            )
            .size()
            .x
    }
}
