//! Shared chrome widgets for desktop windows

use crate::theme::FolioColors;
use egui::{Response, Sense, Stroke, Ui, Widget};

/// Action returned by the window control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    None,
    Minimize,
    ToggleMaximize,
    Close,
}

/// Draw minimize, maximize and close buttons at the right end of a title
/// bar. Call inside a right-to-left layout so close lands outermost.
///
/// Returns the action the user clicked, or `WindowAction::None`.
pub fn window_control_buttons(ui: &mut Ui, colors: &FolioColors) -> WindowAction {
    let mut action = WindowAction::None;

    // Right-to-left: close, maximize, minimize.
    if control_button(ui, colors, Glyph::Close).clicked() {
        action = WindowAction::Close;
    }
    if control_button(ui, colors, Glyph::Maximize).clicked() {
        action = WindowAction::ToggleMaximize;
    }
    if control_button(ui, colors, Glyph::Minimize).clicked() {
        action = WindowAction::Minimize;
    }

    action
}

enum Glyph {
    Minimize,
    Maximize,
    Close,
}

fn control_button(ui: &mut Ui, colors: &FolioColors, glyph: Glyph) -> Response {
    let size = egui::vec2(20.0, 20.0);
    let (rect, resp) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        if resp.hovered() {
            let wash = if matches!(glyph, Glyph::Close) {
                egui::Color32::from_rgb(225, 29, 72)
            } else {
                colors.hover
            };
            painter.rect_filled(rect, 4.0, wash);
        }
        let fg = if resp.hovered() && matches!(glyph, Glyph::Close) {
            egui::Color32::WHITE
        } else {
            colors.text_dim
        };
        let stroke = Stroke::new(1.4, fg);
        let m = 6.0;
        match glyph {
            Glyph::Minimize => {
                painter.line_segment(
                    [
                        egui::pos2(rect.left() + m, rect.center().y),
                        egui::pos2(rect.right() - m, rect.center().y),
                    ],
                    stroke,
                );
            }
            Glyph::Maximize => {
                painter.rect_stroke(rect.shrink(m), 1.0, stroke);
            }
            Glyph::Close => {
                painter.line_segment(
                    [
                        rect.left_top() + egui::vec2(m, m),
                        rect.right_bottom() - egui::vec2(m, m),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        rect.right_top() + egui::vec2(-m, m),
                        rect.left_bottom() + egui::vec2(m, -m),
                    ],
                    stroke,
                );
            }
        }
    }

    resp
}

/// A desktop icon: emoji glyph above a small caption, hover wash behind.
pub struct DesktopIcon<'a> {
    glyph: &'a str,
    label: &'a str,
    colors: &'a FolioColors,
}

impl<'a> DesktopIcon<'a> {
    pub fn new(glyph: &'a str, label: &'a str, colors: &'a FolioColors) -> Self {
        Self {
            glyph,
            label,
            colors,
        }
    }
}

impl Widget for DesktopIcon<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired = egui::vec2(64.0, 64.0);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            if response.hovered() {
                painter.rect_filled(rect, 6.0, self.colors.hover);
            }
            painter.text(
                egui::pos2(rect.center().x, rect.top() + 20.0),
                egui::Align2::CENTER_CENTER,
                self.glyph,
                egui::FontId::proportional(26.0),
                self.colors.text,
            );
            painter.text(
                egui::pos2(rect.center().x, rect.bottom() - 12.0),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(11.0),
                self.colors.text,
            );
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

/// Small round status dot, filled when active, hollow otherwise.
pub fn status_dot(ui: &mut Ui, active: bool, colors: &FolioColors) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
    if ui.is_rect_visible(rect) {
        let center = rect.center();
        if active {
            ui.painter()
                .circle_filled(center, 4.0, egui::Color32::from_rgb(34, 197, 94));
        } else {
            ui.painter()
                .circle_stroke(center, 4.0, Stroke::new(1.0, colors.text_dim));
        }
    }
}
