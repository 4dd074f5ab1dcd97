//! Active-windows dropdown
//!
//! Anchored under the header toggle. Each row focuses its window; the
//! row rect travels with the focus so a minimized window can zoom back
//! out of the row that summoned it.

use foliocore::theme::{FolioColors, FolioTheme};
use foliocore::widgets::status_dot;
use foliocore::{WindowId, WindowManager};

use egui::{Id, Order, Rect, Sense};

#[derive(Debug, Clone)]
pub enum ListEvent {
    /// Focus a window, restoring it from this row's rect if minimized.
    Focus(WindowId, Rect),
    Close(WindowId),
    CloseAll,
}

/// Draw the list. Returns the events plus the rect the panel occupied,
/// which the desktop uses for click-away dismissal.
pub fn show(
    ctx: &egui::Context,
    anchor: Rect,
    wm: &WindowManager,
    colors: &FolioColors,
) -> (Vec<ListEvent>, Rect) {
    let mut events = Vec::new();

    let area = egui::Area::new(Id::new("window_list"))
        .order(Order::Foreground)
        .fixed_pos(egui::pos2(anchor.right() - 260.0, anchor.bottom() + 6.0))
        .show(ctx, |ui| {
            FolioTheme::panel_frame(colors).show(ui, |ui| {
                ui.set_width(252.0);

                if wm.is_empty() {
                    ui.add_space(12.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("No open windows")
                                .color(colors.text_dim),
                        );
                    });
                    ui.add_space(12.0);
                    return;
                }

                // Topmost first, like a task switcher.
                for id in wm.ids_by_z().into_iter().rev() {
                    let Some(record) = wm.get(id) else { continue };
                    let row = ui
                        .horizontal(|ui| {
                            status_dot(ui, !record.minimized, colors);
                            ui.label(&record.title);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .small_button("✕")
                                        .on_hover_text("Close")
                                        .clicked()
                                    {
                                        events.push(ListEvent::Close(id));
                                    }
                                },
                            );
                        })
                        .response
                        .interact(Sense::click());

                    if row.hovered() {
                        ui.painter().rect_filled(row.rect, 4.0, colors.hover);
                    }
                    if row.clicked() {
                        events.push(ListEvent::Focus(id, row.rect));
                    }
                }

                ui.separator();
                if ui
                    .add(egui::Button::new("Close all").frame(false))
                    .clicked()
                {
                    events.push(ListEvent::CloseAll);
                }
            });
        });

    (events, area.response.rect)
}
