//! Digital clock for the header bar
//!
//! Red seven-segment-ish digits with a colon that blinks once per
//! second. Clicking the clock toggles the calendar popup.

use chrono::{Local, Timelike};
use egui::{Response, Sense, Ui};

const DIGIT_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

pub fn digital_clock(ui: &mut Ui) -> Response {
    let now = Local::now();
    let colon_on = now.second() % 2 == 0;
    let colon = if colon_on { ":" } else { " " };
    let text = format!("{:02}{}{:02}", now.hour(), colon, now.minute());

    let resp = ui
        .add(
            egui::Label::new(
                egui::RichText::new(text)
                    .monospace()
                    .size(16.0)
                    .color(DIGIT_COLOR),
            )
            .sense(Sense::click()),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(now.format("%A, %B %e").to_string());

    resp
}
