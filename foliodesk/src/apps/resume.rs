//! CV.pdf, the resume window

use foliocore::theme::FolioColors;

struct Entry {
    period: &'static str,
    role: &'static str,
    place: &'static str,
    note: &'static str,
}

const EXPERIENCE: &[Entry] = &[
    Entry {
        period: "2021 - now",
        role: "Senior Software Developer",
        place: "Vetta Sistemas",
        note: "ERP modules, document pipelines, a knowledge base engine embedded in Delphi clients.",
    },
    Entry {
        period: "2017 - 2021",
        role: "Software Developer",
        place: "Kumo Tecnologia",
        note: "Full-stack product work: REST services, billing integrations, internal tooling.",
    },
    Entry {
        period: "2014 - 2017",
        role: "Junior Developer",
        place: "Freelance",
        note: "Small business systems. Learned that deleting code is a feature.",
    },
];

pub fn draw(ui: &mut egui::Ui, colors: &FolioColors) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading("Curriculum Vitae");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⬇ Download PDF").clicked() {
                        ui.ctx()
                            .open_url(egui::OpenUrl::new_tab("https://anasilveira.dev/cv.pdf"));
                    }
                });
            });
            ui.add_space(10.0);

            ui.strong("Experience");
            ui.add_space(4.0);
            for entry in EXPERIENCE {
                ui.label(
                    egui::RichText::new(entry.period)
                        .small()
                        .color(colors.text_dim),
                );
                ui.label(format!("{} · {}", entry.role, entry.place));
                ui.label(egui::RichText::new(entry.note).color(colors.text_dim));
                ui.add_space(8.0);
            }

            ui.strong("Education");
            ui.add_space(4.0);
            ui.label("B.Sc. Computer Science, UFSC (2014)");
            ui.add_space(10.0);

            ui.strong("Skills");
            ui.add_space(4.0);
            ui.label("Delphi, SQL, Rust, TypeScript, systems that outlive their authors.");
            ui.add_space(8.0);
        });
}
