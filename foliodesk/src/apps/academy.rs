//! Yuj Academy project window

use foliocore::theme::FolioColors;

pub fn draw(ui: &mut egui::Ui, colors: &FolioColors) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🧘").size(28.0));
                ui.heading("Yuj Academy");
            });
            ui.add_space(8.0);
            ui.label(
                "A social platform for yoga teachers and their students: \
                 class schedules, location maps, and tools for publishing \
                 practice material. \"Yuj\" is the Sanskrit root of yoga, \
                 to yoke or unite.",
            );
            ui.add_space(10.0);
            ui.strong("Status");
            ui.label(
                egui::RichText::new("In active development with a small group of pilot teachers.")
                    .color(colors.text_dim),
            );
            ui.add_space(10.0);
            ui.hyperlink_to("Visit yuj.academy ↗", "https://yuj.academy");
        });
}
