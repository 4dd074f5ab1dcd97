//! Window content for each application kind
//!
//! Apps are plain draw functions over shared state. They never touch the
//! window manager directly; anything that should open another window is
//! returned as an [`AppEvent`] and applied by the desktop after the UI
//! pass.

mod about;
mod academy;
mod browser;
mod contact;
mod resume;
mod taxmeter;
mod terminal;
mod trash;

pub use browser::BrowserState;
pub use terminal::TerminalState;

use foliocore::theme::FolioColors;
use foliocore::{AppKind, WindowId, WindowRecord};
use std::collections::HashMap;

/// Request emitted by app content during a frame.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Open (or focus) a window of `kind`, optionally with a payload and
    /// the screen rect the request came from (zoom origin).
    Open {
        kind: AppKind,
        payload: Option<String>,
        source: Option<egui::Rect>,
    },
}

/// Per-window app state that outlives a single frame.
#[derive(Default)]
pub struct AppStates {
    terminals: HashMap<WindowId, TerminalState>,
    browsers: HashMap<WindowId, BrowserState>,
}

impl AppStates {
    /// Drop state owned by a closed window.
    pub fn forget(&mut self, id: WindowId) {
        self.terminals.remove(&id);
        self.browsers.remove(&id);
    }

    pub fn clear(&mut self) {
        self.terminals.clear();
        self.browsers.clear();
    }
}

/// Draw the body of one window. Returns any requests the content made.
pub fn draw_content(
    ui: &mut egui::Ui,
    record: &WindowRecord,
    states: &mut AppStates,
    colors: &FolioColors,
) -> Vec<AppEvent> {
    let mut events = Vec::new();
    match record.kind {
        AppKind::About => about::draw(ui, colors),
        AppKind::Resume => resume::draw(ui, colors),
        AppKind::Contact => contact::draw(ui, colors),
        AppKind::Terminal => {
            let state = states.terminals.entry(record.id).or_default();
            terminal::draw(ui, state);
        }
        AppKind::Browser => {
            let state = states
                .browsers
                .entry(record.id)
                .or_insert_with(|| BrowserState::new(record.payload.as_deref()));
            browser::draw(ui, state, colors);
        }
        AppKind::Trash => trash::draw(ui, colors, &mut events),
        AppKind::Academy => academy::draw(ui, colors),
        AppKind::TaxMeter => taxmeter::draw(ui, colors),
    }
    events
}
