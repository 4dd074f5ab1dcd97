//! Trash: shelved projects that still deserve a look
//!
//! Each item opens the fake browser pointed at the project. The clicked
//! row's rect rides along as the zoom origin for the new window.

use super::AppEvent;
use foliocore::theme::FolioColors;
use foliocore::AppKind;

struct TrashItem {
    icon: &'static str,
    name: &'static str,
    blurb: &'static str,
    url: &'static str,
}

const ITEMS: &[TrashItem] = &[
    TrashItem {
        icon: "🧘",
        name: "yuj-mvp",
        blurb: "First cut of the yoga platform. Rewritten, kept for honesty.",
        url: "https://github.com/anasilveira/yuj-mvp",
    },
    TrashItem {
        icon: "📓",
        name: "blog-engine",
        blurb: "Hand-rolled static site generator. Markdown in, regrets out.",
        url: "https://github.com/anasilveira/blog-engine",
    },
    TrashItem {
        icon: "🎛",
        name: "delphi-dashboards",
        blurb: "Charts inside a 2004 codebase. It worked, which is the scary part.",
        url: "https://github.com/anasilveira/delphi-dashboards",
    },
];

pub fn draw(ui: &mut egui::Ui, colors: &FolioColors, events: &mut Vec<AppEvent>) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Nothing here is deleted, only retired. Click to visit.")
                    .color(colors.text_dim),
            );
            ui.add_space(8.0);

            for item in ITEMS {
                let resp = ui
                    .scope(|ui| {
                        egui::Frame::none()
                            .inner_margin(egui::Margin::same(8.0))
                            .rounding(egui::Rounding::same(6.0))
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    ui.label(egui::RichText::new(item.icon).size(22.0));
                                    ui.vertical(|ui| {
                                        ui.strong(item.name);
                                        ui.label(
                                            egui::RichText::new(item.blurb)
                                                .small()
                                                .color(colors.text_dim),
                                        );
                                    });
                                });
                            });
                    })
                    .response
                    .interact(egui::Sense::click());

                if resp.hovered() {
                    ui.painter().rect_filled(resp.rect, 6.0, colors.hover);
                }
                if resp.clicked() {
                    events.push(AppEvent::Open {
                        kind: AppKind::Browser,
                        payload: Some(item.url.to_owned()),
                        source: Some(resp.rect),
                    });
                }
            }
        });
}
