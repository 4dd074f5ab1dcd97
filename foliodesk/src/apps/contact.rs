//! Contact window with copy-to-clipboard for the email address

use foliocore::theme::FolioColors;

const EMAIL: &str = "ana@anasilveira.dev";

pub fn draw(ui: &mut egui::Ui, colors: &FolioColors) {
    ui.add_space(12.0);
    ui.heading("Say hi");
    ui.add_space(8.0);
    ui.label("Best way to reach me is email. I read everything, eventually.");
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.monospace(EMAIL);
        let copy = ui
            .button("📋 Copy")
            .on_hover_text("Copy address to clipboard");
        if copy.clicked() {
            ui.output_mut(|o| o.copied_text = EMAIL.to_owned());
            tracing::debug!("email address copied");
        }
    });
    ui.add_space(12.0);

    ui.label(egui::RichText::new("Elsewhere").color(colors.text_dim));
    ui.horizontal(|ui| {
        ui.hyperlink_to("GitHub", "https://github.com/anasilveira");
        ui.hyperlink_to("LinkedIn", "https://linkedin.com/in/anasilveira");
        ui.hyperlink_to("Writing", "https://anasilveira.dev/writing");
    });
}
