//! README.md, the about window

use foliocore::theme::FolioColors;

pub fn draw(ui: &mut egui::Ui, colors: &FolioColors) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            ui.heading("Ana Silveira");
            ui.label(
                egui::RichText::new("Brazilian software developer. Delphi legacy + modern systems.")
                    .color(colors.text_dim),
            );
            ui.add_space(12.0);

            ui.label(
                "I build back-office systems by day and strange little \
                 interfaces by night. This site is one of the strange \
                 little interfaces: a desktop, with windows you can drag \
                 around, because a plain page felt too easy.",
            );
            ui.add_space(12.0);

            ui.strong("Projects");
            ui.label("• Knowledge module for Delphi apps (HTML content, videos, attachments)");
            ui.label("• Yuj Academy: yoga social platform (teachers, students, maps)");
            ui.add_space(12.0);

            ui.strong("Writing");
            ui.label("Engineering, product, systems thinking. Practical and grounded.");
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.hyperlink_to("GitHub", "https://github.com/anasilveira");
                ui.hyperlink_to("LinkedIn", "https://linkedin.com/in/anasilveira");
            });
            ui.add_space(8.0);
        });
}
