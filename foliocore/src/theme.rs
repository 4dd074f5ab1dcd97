//! foliodesk theme: light and dark palettes for the desktop chrome
//!
//! The desktop follows the system-preference model: one boolean flips
//! every surface between the light and dark palette. Windows are soft
//! grey/white cards with a subtle border; the terminal keeps its own
//! dark scheme in both modes.

use egui::{Color32, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Palette for one mode. Obtain via [`FolioColors::of`].
#[derive(Debug, Clone, Copy)]
pub struct FolioColors {
    /// Desktop background behind the marquee.
    pub desktop: Color32,
    /// Window body fill.
    pub window: Color32,
    /// Window border.
    pub border: Color32,
    /// Title bar fill.
    pub title_bar: Color32,
    /// Primary text.
    pub text: Color32,
    /// Secondary / dimmed text.
    pub text_dim: Color32,
    /// Header bar fill.
    pub header: Color32,
    /// Hover wash over interactive chrome.
    pub hover: Color32,
    /// Accent (links, active indicator).
    pub accent: Color32,
}

impl FolioColors {
    pub const LIGHT: FolioColors = FolioColors {
        desktop: Color32::from_rgb(240, 240, 240),
        window: Color32::from_rgb(255, 255, 255),
        border: Color32::from_rgb(209, 213, 219),
        title_bar: Color32::from_rgb(245, 245, 245),
        text: Color32::from_rgb(31, 41, 55),
        text_dim: Color32::from_rgb(107, 114, 128),
        header: Color32::from_rgb(233, 233, 233),
        hover: Color32::from_rgba_premultiplied(0, 0, 0, 12),
        accent: Color32::from_rgb(37, 99, 235),
    };

    pub const DARK: FolioColors = FolioColors {
        desktop: Color32::from_rgb(26, 26, 26),
        window: Color32::from_rgb(45, 45, 45),
        border: Color32::from_rgb(75, 85, 99),
        text: Color32::from_rgb(229, 231, 235),
        text_dim: Color32::from_rgb(156, 163, 175),
        title_bar: Color32::from_rgb(61, 61, 61),
        header: Color32::from_rgb(45, 45, 45),
        hover: Color32::from_rgba_premultiplied(255, 255, 255, 16),
        accent: Color32::from_rgb(96, 165, 250),
    };

    pub fn of(dark: bool) -> Self {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

/// Terminal colors are mode-independent, VS-Code-ish.
pub struct TerminalColors;

impl TerminalColors {
    pub const BACKGROUND: Color32 = Color32::from_rgb(30, 30, 30);
    pub const TITLE_BAR: Color32 = Color32::from_rgb(37, 37, 38);
    pub const OUTPUT: Color32 = Color32::from_rgb(206, 145, 120);
    pub const INPUT: Color32 = Color32::from_rgb(212, 212, 212);
    pub const PROMPT: Color32 = Color32::from_rgb(96, 165, 250);
}

/// Theme configuration for the desktop shell.
pub struct FolioTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_rounding: f32,
}

impl Default for FolioTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_rounding: 6.0,
        }
    }
}

impl FolioTheme {
    /// Apply the theme to an egui context for the given mode.
    pub fn apply(&self, ctx: &egui::Context, dark: bool) {
        let colors = FolioColors::of(dark);

        let mut style = Style::default();
        style.text_styles = [
            (
                TextStyle::Small,
                FontId::proportional(self.font_size_small),
            ),
            (TextStyle::Body, FontId::proportional(self.font_size_body)),
            (
                TextStyle::Button,
                FontId::proportional(self.font_size_body),
            ),
            (
                TextStyle::Heading,
                FontId::proportional(self.font_size_heading),
            ),
            (
                TextStyle::Monospace,
                FontId::monospace(self.font_size_body),
            ),
        ]
        .into();

        let mut visuals = if dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.window_fill = colors.window;
        visuals.panel_fill = colors.header;
        visuals.window_rounding = Rounding::same(self.window_rounding);
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.override_text_color = Some(colors.text);
        visuals.hyperlink_color = colors.accent;

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);
        ctx.set_style(style);
    }

    /// Frame for a window body.
    pub fn window_frame(colors: &FolioColors, rounding: f32) -> egui::Frame {
        egui::Frame::none()
            .fill(colors.window)
            .stroke(Stroke::new(1.0, colors.border))
            .rounding(Rounding::same(rounding))
    }

    /// Frame for overlay panels (active-windows list, user menu).
    pub fn panel_frame(colors: &FolioColors) -> egui::Frame {
        egui::Frame::none()
            .fill(colors.window)
            .stroke(Stroke::new(1.0, colors.border))
            .rounding(Rounding::same(6.0))
            .inner_margin(egui::Margin::same(8.0))
    }
}
