//! Repaint scheduling for the desktop shell
//!
//! egui is an immediate-mode GUI and only paints when asked. The desktop
//! has three kinds of frames:
//!
//! 1. Input-driven: the user moved, clicked, typed. egui wakes itself.
//! 2. Animated: a zoom transition, the marquee, or the bouncing logo is
//!    running. These need a fast timed cadence (~30 fps).
//! 3. Ambient: only the clock digits and the tax counter are changing.
//!    One repaint per second is enough.
//!
//! `RepaintController` picks the cheapest cadence each frame. Background
//! threads (the weather fetch) call [`RepaintController::mark_needs_repaint`]
//! through the shared flag so their completion shows up without waiting
//! for input.

use std::time::Duration;

/// Cadence while any animation or moving decoration is on screen.
const FAST_INTERVAL: Duration = Duration::from_millis(33);

/// Cadence while only per-second displays (clock, counter) change.
const AMBIENT_INTERVAL: Duration = Duration::from_millis(1000);

/// Why the current frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame.
    Init,
    /// User input woke egui.
    Input,
    /// Internal state changed (background fetch finished).
    StateChange,
    /// Timed cadence.
    Timed,
}

/// Decides what repaint to request at the end of each frame.
///
/// Call [`begin_frame`](Self::begin_frame) at the top of `update()` and
/// [`end_frame`](Self::end_frame) at the bottom.
pub struct RepaintController {
    /// Whether an animation or moving decoration needs the fast cadence.
    animating: bool,
    /// Whether ambient per-second updates are visible at all.
    ambient: bool,
    /// One-shot repaint request, set from UI code or worker threads.
    needs_repaint: bool,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            animating: false,
            ambient: true,
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Enable the fast cadence while zooms or decorations are moving.
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Enable or disable the ambient once-per-second cadence.
    ///
    /// The logged-out screen has no clock or counter, so it turns this
    /// off and sleeps until input.
    pub fn set_ambient(&mut self, ambient: bool) {
        self.ambient = ambient;
    }

    /// Request a single repaint at the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Classify the frame. Call at the start of `update()`.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.raw_scroll_delta != egui::Vec2::ZERO
                || i.pointer.is_moving()
        });

        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else {
            RepaintReason::Timed
        };
        self.needs_repaint = false;
    }

    /// Schedule the next frame. Call at the end of `update()`.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;

        if self.needs_repaint {
            ctx.request_repaint();
        } else if self.animating {
            ctx.request_repaint_after(FAST_INTERVAL);
        } else if self.ambient {
            ctx.request_repaint_after(AMBIENT_INTERVAL);
        }
        // Otherwise egui sleeps until the next input event.
    }
}
