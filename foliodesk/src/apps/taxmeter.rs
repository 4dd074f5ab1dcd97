//! Tax meter
//!
//! A running estimate of taxes collected in Brazil since January 1st,
//! in the spirit of the Impostômetro billboard in São Paulo. The figure
//! is a linear extrapolation, not an official number.

use chrono::{DateTime, Datelike, Local, TimeZone};
use foliocore::theme::FolioColors;

/// Estimated collection rate in reais per second.
const RATE_PER_SEC: f64 = 101_500.0;

/// Total estimated collection between January 1st and `now`.
pub fn total_since_new_year(now: DateTime<Local>) -> f64 {
    let year_start = Local
        .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(now);
    let elapsed = (now - year_start).num_milliseconds().max(0) as f64 / 1000.0;
    elapsed * RATE_PER_SEC
}

/// Format a value in reais, pt-BR style: R$ 1.234.567,89
pub fn fmt_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$ {grouped},{frac:02}")
}

pub fn draw(ui: &mut egui::Ui, colors: &FolioColors) {
    let now = Local::now();
    let total = total_since_new_year(now);

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("💸").size(36.0));
        ui.add_space(4.0);
        ui.heading("Impostômetro");
        ui.label(
            egui::RichText::new(format!("Taxes collected in Brazil since Jan 1, {}", now.year()))
                .color(colors.text_dim),
        );
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new(fmt_brl(total))
                .size(30.0)
                .strong()
                .color(egui::Color32::from_rgb(220, 38, 38)),
        );
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new(format!(
                "Rolling at roughly {} every second.",
                fmt_brl(RATE_PER_SEC)
            ))
            .small()
            .color(colors.text_dim),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(fmt_brl(0.0), "R$ 0,00");
    }

    #[test]
    fn formats_small_amounts() {
        assert_eq!(fmt_brl(7.5), "R$ 7,50");
        assert_eq!(fmt_brl(999.99), "R$ 999,99");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(fmt_brl(1_234_567.89), "R$ 1.234.567,89");
        assert_eq!(fmt_brl(1_000.0), "R$ 1.000,00");
    }

    #[test]
    fn total_grows_with_time() {
        let t1 = Local.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().unwrap();
        let t2 = Local.with_ymd_and_hms(2026, 3, 1, 12, 0, 10).single().unwrap();
        let d = total_since_new_year(t2) - total_since_new_year(t1);
        assert!((d - 10.0 * RATE_PER_SEC).abs() < 1.0);
    }

    #[test]
    fn total_is_zero_at_new_year() {
        let t = Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().unwrap();
        assert_eq!(total_since_new_year(t), 0.0);
    }
}
