//! foliocore: shared library for the foliodesk desktop simulation

pub mod animation;
pub mod repaint;
pub mod theme;
pub mod widgets;
pub mod wm;

pub use repaint::RepaintController;
pub use theme::FolioTheme;
pub use wm::{AppKind, ResizeEdge, WindowId, WindowManager, WindowRecord};
