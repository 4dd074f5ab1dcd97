//! Fake browser
//!
//! Renders a toolbar with an address bar and a stand-in page. Embedding
//! real web content is out of scope for an egui shell, so the page shows
//! the address and offers to open it in the system browser.

use foliocore::theme::FolioColors;

const HOME: &str = "https://anasilveira.dev";

pub struct BrowserState {
    pub address: String,
    /// Address currently "loaded" in the fake page.
    pub loaded: String,
}

impl BrowserState {
    pub fn new(payload: Option<&str>) -> Self {
        let url = payload.unwrap_or(HOME).to_owned();
        Self {
            address: url.clone(),
            loaded: url,
        }
    }

    /// Normalize the address bar contents and load them.
    pub fn navigate(&mut self) {
        let mut url = self.address.trim().to_owned();
        if url.is_empty() {
            url = HOME.to_owned();
        } else if !url.starts_with("http://") && !url.starts_with("https://") {
            url = format!("https://{url}");
        }
        self.address = url.clone();
        self.loaded = url;
    }
}

pub fn draw(ui: &mut egui::Ui, state: &mut BrowserState, colors: &FolioColors) {
    // Toolbar.
    egui::Frame::none()
        .fill(colors.title_bar)
        .inner_margin(egui::Margin::symmetric(8.0, 6.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⟲").on_hover_text("Reload").clicked() {
                    state.navigate();
                }
                let edit = egui::TextEdit::singleline(&mut state.address)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace);
                let resp = ui.add(edit);
                if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    state.navigate();
                }
            });
        });
    ui.separator();

    // The "page".
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("🌐").size(40.0));
                ui.add_space(8.0);
                ui.heading("404 · simulation mode");
                ui.add_space(4.0);
                ui.monospace(&state.loaded);
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(
                        "This browser is part of the set dressing. The real one works better.",
                    )
                    .color(colors.text_dim),
                );
                ui.add_space(8.0);
                if ui.button("Open in your actual browser ↗").clicked() {
                    ui.ctx()
                        .open_url(egui::OpenUrl::new_tab(state.loaded.clone()));
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_becomes_the_loaded_page() {
        let state = BrowserState::new(Some("https://yuj.academy"));
        assert_eq!(state.loaded, "https://yuj.academy");
    }

    #[test]
    fn no_payload_loads_home() {
        let state = BrowserState::new(None);
        assert_eq!(state.loaded, HOME);
    }

    #[test]
    fn navigate_prepends_a_scheme() {
        let mut state = BrowserState::new(None);
        state.address = "example.com".to_owned();
        state.navigate();
        assert_eq!(state.loaded, "https://example.com");
    }

    #[test]
    fn navigate_on_empty_address_goes_home() {
        let mut state = BrowserState::new(Some("https://elsewhere.net"));
        state.address = "  ".to_owned();
        state.navigate();
        assert_eq!(state.loaded, HOME);
    }
}
