//! Month-view calendar popup
//!
//! Always renders six rows of seven days so the popup never changes
//! height when paging between months.

use chrono::{Datelike, Duration, Local, NaiveDate};
use foliocore::theme::FolioColors;

const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub struct CalendarWidget {
    /// First day of the displayed month.
    month: NaiveDate,
}

impl Default for CalendarWidget {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            month: first_of_month(today),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // The first of any valid month always exists.
    date.with_day(1).unwrap_or(date)
}

/// The 42 cells (6 weeks) shown for the month containing `month_start`,
/// beginning on the Sunday at or before the 1st.
pub fn grid_days(month_start: NaiveDate) -> Vec<NaiveDate> {
    let lead = month_start.weekday().num_days_from_sunday() as i64;
    let grid_start = month_start - Duration::days(lead);
    (0..42).map(|i| grid_start + Duration::days(i)).collect()
}

fn shift_month(month_start: NaiveDate, forward: bool) -> NaiveDate {
    let candidate = if forward {
        month_start + Duration::days(32)
    } else {
        month_start - Duration::days(1)
    };
    first_of_month(candidate)
}

impl CalendarWidget {
    /// Jump back to the current month.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn draw(&mut self, ui: &mut egui::Ui, colors: &FolioColors) {
        let today = Local::now().date_naive();

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.month = shift_month(self.month, false);
            }
            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.strong(self.month.format("%B %Y").to_string());
                },
            );
            if ui.button("▶").clicked() {
                self.month = shift_month(self.month, true);
            }
        });
        ui.add_space(4.0);

        let cell = egui::vec2(28.0, 24.0);
        egui::Grid::new("calendar_grid")
            .min_col_width(cell.x)
            .spacing(egui::vec2(2.0, 2.0))
            .show(ui, |ui| {
                for header in WEEKDAY_HEADERS {
                    ui.label(
                        egui::RichText::new(header)
                            .small()
                            .color(colors.text_dim),
                    );
                }
                ui.end_row();

                for (i, day) in grid_days(self.month).into_iter().enumerate() {
                    let in_month = day.month() == self.month.month();
                    let is_today = day == today;

                    let (rect, _) =
                        ui.allocate_exact_size(cell, egui::Sense::hover());
                    let painter = ui.painter();
                    if is_today {
                        painter.rect_filled(rect, 4.0, colors.accent);
                    }
                    let color = if is_today {
                        egui::Color32::WHITE
                    } else if in_month {
                        colors.text
                    } else {
                        colors.text_dim
                    };
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        day.day().to_string(),
                        egui::FontId::proportional(12.0),
                        color,
                    );

                    if (i + 1) % 7 == 0 {
                        ui.end_row();
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn grid_always_has_six_weeks() {
        for (y, m) in [(2026, 2), (2026, 8), (2024, 2), (2025, 12)] {
            let start = NaiveDate::from_ymd_opt(y, m, 1).unwrap();
            assert_eq!(grid_days(start).len(), 42);
        }
    }

    #[test]
    fn grid_starts_on_a_sunday() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let grid = grid_days(start);
        assert_eq!(grid[0].weekday(), Weekday::Sun);
        assert!(grid[0] <= start);
    }

    #[test]
    fn grid_contains_the_whole_month() {
        let start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let grid = grid_days(start);
        let last = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert!(grid.contains(&start));
        assert!(grid.contains(&last));
    }

    #[test]
    fn month_shifting_round_trips() {
        let start = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        let next = shift_month(start, true);
        assert_eq!(next, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
        assert_eq!(shift_month(next, false), start);
    }
}
