//! Circular countdown dial drawn with egui's painter.
//!
//! The dial is a pure function of the countdown snapshot: a grey disc, a
//! purple arc for the remaining fraction starting at 12 o'clock and sweeping
//! clockwise, and the remaining time as `M:SS` in the middle.

use eframe::egui::{self, Color32, Pos2, Stroke};
use std::f32::consts::PI;

use crate::countdown::TimerSnapshot;

#[derive(Debug, Clone)]
pub struct DialStyle {
    pub size: f32,
    pub margin: f32,
    pub arc_width: f32,
    pub arc_inset: f32,
    pub font_size: f32,
    pub disc_color: Color32,
    pub arc_color: Color32,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            size: 200.0,
            margin: 10.0,
            arc_width: 8.0,
            arc_inset: 4.0,
            font_size: 36.0,
            disc_color: Color32::from_rgba_unmultiplied(128, 128, 128, 51),
            arc_color: Color32::from_rgba_unmultiplied(102, 51, 204, 204),
        }
    }
}

/// What the dial shows for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DialFace {
    /// `None` when there is no duration loaded; no arc is drawn then.
    pub fraction: Option<f32>,
    pub label: String,
}

impl DialFace {
    pub fn new(snapshot: TimerSnapshot) -> Self {
        let fraction = if snapshot.total > 0 {
            Some(snapshot.remaining as f32 / snapshot.total as f32)
        } else {
            None
        };
        Self {
            fraction,
            label: format_clock(snapshot.remaining),
        }
    }
}

pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Points along the arc, one segment per ~3 px of arc length.
pub fn arc_points(center: Pos2, radius: f32, fraction: f32) -> Vec<Pos2> {
    let start_angle = -PI / 2.0;
    let sweep = 2.0 * PI * fraction.clamp(0.0, 1.0);
    let segments = ((sweep * radius / 3.0).ceil() as usize).clamp(8, 200);

    (0..=segments)
        .map(|i| {
            let angle = start_angle + sweep * i as f32 / segments as f32;
            egui::pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

pub fn paint(ui: &mut egui::Ui, snapshot: TimerSnapshot, style: &DialStyle) -> egui::Response {
    let face = DialFace::new(snapshot);
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(style.size, style.size), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.width().min(rect.height()) / 2.0 - style.margin;

    painter.circle_filled(center, radius, style.disc_color);

    if let Some(fraction) = face.fraction.filter(|f| *f > 0.0) {
        let points = arc_points(center, radius - style.arc_inset, fraction);
        painter.add(egui::Shape::line(
            points,
            Stroke::new(style.arc_width, style.arc_color),
        ));
    }

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        &face.label,
        egui::FontId::proportional(style.font_size),
        ui.visuals().strong_text_color(),
    );

    response
}
