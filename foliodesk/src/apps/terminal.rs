//! Toy terminal
//!
//! A prompt, a scrollback, and a handful of commands. Output lines keep
//! their own color so the scrollback reads like a real shell session.

use chrono::Local;
use foliocore::theme::TerminalColors;

const PROMPT: &str = "guest@ana-desk:~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
}

#[derive(Debug, Clone)]
pub struct TermLine {
    pub kind: LineKind,
    pub text: String,
}

/// Scrollback and input buffer for one terminal window.
pub struct TerminalState {
    pub lines: Vec<TermLine>,
    pub input: String,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self {
            lines: vec![output("Welcome! Type 'help' to see what this thing can do.")],
            input: String::new(),
        }
    }
}

fn output(text: impl Into<String>) -> TermLine {
    TermLine {
        kind: LineKind::Output,
        text: text.into(),
    }
}

impl TerminalState {
    /// Execute one command line, appending the echo and its output.
    pub fn run(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.lines.push(TermLine {
            kind: LineKind::Command,
            text: format!("{PROMPT} {line}"),
        });

        match line {
            "help" => {
                self.lines.push(output("Available commands:"));
                self.lines.push(output("  help      show this list"));
                self.lines.push(output("  whoami    who is logged in"));
                self.lines.push(output("  cat_name  meet the cat"));
                self.lines.push(output("  date      current date and time"));
                self.lines.push(output("  clear     wipe the scrollback"));
            }
            "clear" => self.lines.clear(),
            "whoami" => self.lines.push(output("guest@ana-desk")),
            "cat_name" => self.lines.push(output("🐱 Mingau")),
            "date" => self
                .lines
                .push(output(Local::now().format("%a %b %e %T %Y").to_string())),
            other => self
                .lines
                .push(output(format!("command not found: {other}"))),
        }
    }
}

pub fn draw(ui: &mut egui::Ui, state: &mut TerminalState) {
    egui::Frame::none()
        .fill(TerminalColors::BACKGROUND)
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());

            let submitted = ui.input(|i| i.key_pressed(egui::Key::Enter));

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &state.lines {
                        let color = match line.kind {
                            LineKind::Command => TerminalColors::INPUT,
                            LineKind::Output => TerminalColors::OUTPUT,
                        };
                        ui.label(
                            egui::RichText::new(&line.text)
                                .monospace()
                                .color(color),
                        );
                    }

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(PROMPT)
                                .monospace()
                                .color(TerminalColors::PROMPT),
                        );
                        let edit = egui::TextEdit::singleline(&mut state.input)
                            .frame(false)
                            .desired_width(f32::INFINITY)
                            .text_color(TerminalColors::INPUT)
                            .font(egui::TextStyle::Monospace);
                        let resp = ui.add(edit);

                        if submitted && resp.lost_focus() {
                            let line = std::mem::take(&mut state.input);
                            state.run(&line);
                            resp.request_focus();
                        }
                    });
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_output(state: &TerminalState) -> &str {
        &state.lines.last().unwrap().text
    }

    #[test]
    fn starts_with_a_greeting() {
        let state = TerminalState::default();
        assert_eq!(state.lines.len(), 1);
        assert!(state.lines[0].text.contains("help"));
    }

    #[test]
    fn whoami_reports_the_guest_account() {
        let mut state = TerminalState::default();
        state.run("whoami");
        assert_eq!(last_output(&state), "guest@ana-desk");
    }

    #[test]
    fn cat_name_introduces_mingau() {
        let mut state = TerminalState::default();
        state.run("cat_name");
        assert_eq!(last_output(&state), "🐱 Mingau");
    }

    #[test]
    fn commands_are_echoed_with_the_prompt() {
        let mut state = TerminalState::default();
        state.run("whoami");
        let echo = &state.lines[state.lines.len() - 2];
        assert_eq!(echo.kind, LineKind::Command);
        assert_eq!(echo.text, format!("{PROMPT} whoami"));
    }

    #[test]
    fn unknown_commands_report_not_found() {
        let mut state = TerminalState::default();
        state.run("make coffee");
        assert_eq!(last_output(&state), "command not found: make coffee");
    }

    #[test]
    fn clear_wipes_the_scrollback() {
        let mut state = TerminalState::default();
        state.run("help");
        state.run("clear");
        assert!(state.lines.is_empty());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut state = TerminalState::default();
        let before = state.lines.len();
        state.run("   ");
        assert_eq!(state.lines.len(), before);
    }

    #[test]
    fn whitespace_around_commands_is_trimmed() {
        let mut state = TerminalState::default();
        state.run("  whoami  ");
        assert_eq!(last_output(&state), "guest@ana-desk");
    }
}
