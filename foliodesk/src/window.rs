//! Per-window chrome: title bar, controls, resize handles, transitions
//!
//! The window manager in foliocore owns geometry and stacking; this
//! module turns one `WindowRecord` into an egui `Area` and reports every
//! gesture back as a [`WindowEvent`]. Nothing here mutates the manager.
//!
//! Each window also carries a view-local phase for its open, minimize
//! and restore transitions. While a transition runs, the body is not
//! drawn; only the zoom outlines are painted on the foreground layer.

use crate::apps::{self, AppEvent, AppStates};
use foliocore::animation::Zoom;
use foliocore::theme::{FolioColors, FolioTheme, TerminalColors};
use foliocore::widgets::{window_control_buttons, WindowAction};
use foliocore::{AppKind, ResizeEdge, WindowId, WindowRecord};

use egui::{CursorIcon, Id, Order, Pos2, Rect, Sense, Vec2};

pub const TITLE_BAR_HEIGHT: f32 = 32.0;
const HANDLE_THICKNESS: f32 = 6.0;
const CORNER_HANDLE: f32 = 14.0;

/// Gesture or request reported by one window during a frame.
#[derive(Debug, Clone)]
pub enum WindowEvent {
    Focus(WindowId),
    Close(WindowId),
    Minimize(WindowId),
    ToggleMaximize(WindowId),
    Moved(WindowId, Vec2),
    Resized(WindowId, ResizeEdge, Vec2),
    App(AppEvent),
}

/// View-local transition state.
pub enum WindowPhase {
    Opening(Zoom),
    Open,
    Minimizing(Zoom),
    Hidden,
    Restoring(Zoom),
}

pub struct WindowView {
    pub phase: WindowPhase,
}

impl WindowView {
    /// View for a newly opened window. With an origin the window zooms
    /// out of it; without one it simply appears.
    pub fn opened(origin: Option<Pos2>, target: Rect) -> Self {
        let phase = match origin {
            Some(pos) => {
                let small = Rect::from_center_size(pos, Vec2::new(48.0, 36.0));
                WindowPhase::Opening(Zoom::grow(small, target))
            }
            None => WindowPhase::Open,
        };
        Self { phase }
    }

    /// Start the shrink toward the given anchor (the window-list toggle).
    pub fn begin_minimize(&mut self, window: Rect, anchor: Rect) {
        self.phase = WindowPhase::Minimizing(Zoom::shrink(window, anchor));
    }

    /// Start the grow back from `source` (list row, anchor, or icon).
    pub fn begin_restore(&mut self, source: Rect, target: Rect) {
        self.phase = WindowPhase::Restoring(Zoom::grow(source, target));
    }

    /// Advance the transition by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        match &mut self.phase {
            WindowPhase::Opening(zoom) | WindowPhase::Restoring(zoom) => {
                if zoom.update(dt) {
                    self.phase = WindowPhase::Open;
                }
            }
            WindowPhase::Minimizing(zoom) => {
                if zoom.update(dt) {
                    self.phase = WindowPhase::Hidden;
                }
            }
            WindowPhase::Open | WindowPhase::Hidden => {}
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            WindowPhase::Opening(_) | WindowPhase::Minimizing(_) | WindowPhase::Restoring(_)
        )
    }
}

/// Screen-space rect for a record: its stored workspace-local geometry
/// shifted under the header, or the whole workspace when maximized. The
/// stored geometry is never touched by maximize.
pub fn display_rect(record: &WindowRecord, workspace: Rect) -> Rect {
    if record.maximized {
        workspace
    } else {
        record.rect().translate(workspace.min.to_vec2())
    }
}

/// Draw one window and collect its events.
#[allow(clippy::too_many_arguments)]
pub fn show(
    ctx: &egui::Context,
    record: &WindowRecord,
    view: &WindowView,
    states: &mut AppStates,
    colors: &FolioColors,
    theme: &FolioTheme,
    workspace: Rect,
    focused: bool,
) -> Vec<WindowEvent> {
    let mut events = Vec::new();
    let rect = display_rect(record, workspace);

    match &view.phase {
        WindowPhase::Hidden => return events,
        WindowPhase::Opening(zoom) | WindowPhase::Restoring(zoom) | WindowPhase::Minimizing(zoom) => {
            let painter = ctx.layer_painter(egui::LayerId::new(
                Order::Foreground,
                Id::new(("zoom", record.id)),
            ));
            zoom.draw(&painter, colors.accent);
            return events;
        }
        WindowPhase::Open => {}
    }
    if record.minimized {
        // Minimized without a running shrink (restored state mismatch);
        // draw nothing.
        return events;
    }

    let area = egui::Area::new(Id::new(("window", record.id)))
        .order(Order::Middle)
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            ui.set_clip_rect(rect.expand(2.0));
            let frame = FolioTheme::window_frame(colors, theme.window_rounding);
            frame.show(ui, |ui| {
                ui.set_width(rect.width());
                ui.set_height(rect.height());

                title_bar(ui, record, colors, rect, &mut events);

                let body = Rect::from_min_max(
                    Pos2::new(rect.min.x, rect.min.y + TITLE_BAR_HEIGHT),
                    rect.max,
                );
                let mut body_ui = ui.child_ui(body, egui::Layout::top_down(egui::Align::Min));
                body_ui.set_clip_rect(body);
                for app_event in apps::draw_content(&mut body_ui, record, states, colors) {
                    events.push(WindowEvent::App(app_event));
                }
            });

            if !record.maximized {
                resize_handles(ui, record, rect, &mut events);
            }
        });

    // Accent ring on the focused window.
    if focused {
        ctx.layer_painter(area.response.layer_id).rect_stroke(
            rect,
            theme.window_rounding,
            egui::Stroke::new(1.5, colors.accent),
        );
    }

    events
}

fn title_bar(
    ui: &mut egui::Ui,
    record: &WindowRecord,
    colors: &FolioColors,
    rect: Rect,
    events: &mut Vec<WindowEvent>,
) {
    let bar_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), TITLE_BAR_HEIGHT));
    let fill = if record.kind == AppKind::Terminal {
        TerminalColors::TITLE_BAR
    } else {
        colors.title_bar
    };
    ui.painter().rect_filled(bar_rect, 6.0, fill);
    // Square off the bottom corners of the bar.
    ui.painter().rect_filled(
        Rect::from_min_max(
            Pos2::new(bar_rect.min.x, bar_rect.center().y),
            bar_rect.max,
        ),
        0.0,
        fill,
    );

    let text_color = if record.kind == AppKind::Terminal {
        egui::Color32::from_rgb(204, 204, 204)
    } else {
        colors.text
    };
    ui.painter().text(
        Pos2::new(bar_rect.min.x + 12.0, bar_rect.center().y),
        egui::Align2::LEFT_CENTER,
        &record.title,
        egui::FontId::proportional(13.0),
        text_color,
    );

    // Controls sit at the right end of the bar.
    let controls_rect = Rect::from_min_max(
        Pos2::new(bar_rect.max.x - 84.0, bar_rect.min.y),
        bar_rect.max,
    );
    let mut controls_ui = ui.child_ui(
        controls_rect,
        egui::Layout::right_to_left(egui::Align::Center),
    );
    match window_control_buttons(&mut controls_ui, colors) {
        WindowAction::Close => events.push(WindowEvent::Close(record.id)),
        WindowAction::Minimize => events.push(WindowEvent::Minimize(record.id)),
        WindowAction::ToggleMaximize => events.push(WindowEvent::ToggleMaximize(record.id)),
        WindowAction::None => {}
    }

    // Everything left of the controls drags the window.
    let drag_rect = Rect::from_min_max(bar_rect.min, Pos2::new(controls_rect.min.x, bar_rect.max.y));
    let drag = ui.interact(
        drag_rect,
        Id::new(("titlebar", record.id)),
        Sense::click_and_drag(),
    );
    let drag = if record.maximized {
        drag
    } else {
        drag.on_hover_cursor(CursorIcon::Grab)
    };
    if drag.double_clicked() {
        events.push(WindowEvent::ToggleMaximize(record.id));
    } else if drag.dragged() && drag.drag_delta() != Vec2::ZERO {
        events.push(WindowEvent::Moved(record.id, drag.drag_delta()));
    }
}

fn resize_handles(
    ui: &mut egui::Ui,
    record: &WindowRecord,
    rect: Rect,
    events: &mut Vec<WindowEvent>,
) {
    let handles = [
        (
            ResizeEdge::Right,
            Rect::from_min_max(
                Pos2::new(rect.max.x - HANDLE_THICKNESS, rect.min.y + TITLE_BAR_HEIGHT),
                Pos2::new(rect.max.x, rect.max.y - CORNER_HANDLE),
            ),
            CursorIcon::ResizeEast,
        ),
        (
            ResizeEdge::Left,
            Rect::from_min_max(
                Pos2::new(rect.min.x, rect.min.y + TITLE_BAR_HEIGHT),
                Pos2::new(rect.min.x + HANDLE_THICKNESS, rect.max.y - CORNER_HANDLE),
            ),
            CursorIcon::ResizeWest,
        ),
        (
            ResizeEdge::Bottom,
            Rect::from_min_max(
                Pos2::new(rect.min.x + CORNER_HANDLE, rect.max.y - HANDLE_THICKNESS),
                Pos2::new(rect.max.x - CORNER_HANDLE, rect.max.y),
            ),
            CursorIcon::ResizeSouth,
        ),
        (
            ResizeEdge::Corner,
            Rect::from_min_max(
                Pos2::new(rect.max.x - CORNER_HANDLE, rect.max.y - CORNER_HANDLE),
                rect.max,
            ),
            CursorIcon::ResizeSouthEast,
        ),
    ];

    for (edge, handle_rect, cursor) in handles {
        let resp = ui
            .interact(
                handle_rect,
                Id::new(("resize", record.id, edge as u8)),
                Sense::drag(),
            )
            .on_hover_cursor(cursor);
        if resp.dragged() && resp.drag_delta() != Vec2::ZERO {
            events.push(WindowEvent::Resized(record.id, edge, resp.drag_delta()));
        }
    }
}
