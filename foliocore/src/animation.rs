//! Window animation math
//!
//! Open, minimize and restore transitions are drawn as a rectangle zoom:
//! a handful of trailing outlines interpolate between a source rect (the
//! clicked icon, or the minimize anchor) and the window's rect. Progress
//! is advanced by per-frame delta time; there are no timers and no
//! double-frame reflow tricks, the paint loop is the animation.
//!
//! Maximize is deliberately not animated: it is an instantaneous geometry
//! change, the zoom is reserved for open/minimize semantics.

use egui::{Color32, Painter, Pos2, Rect, Stroke};

/// Duration of one zoom transition in seconds.
pub const ZOOM_DURATION: f32 = 0.35;

/// Trailing outline count for the zoom effect.
const ZOOM_STEPS: usize = 4;

/// Per-step timing stagger, as a fraction of total progress.
const STEP_STAGGER: f32 = 0.15;

/// Direction of a zoom transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDir {
    /// Rectangles expand from the source toward the window (open/restore).
    Grow,
    /// Rectangles contract from the window toward the target (minimize).
    Shrink,
}

/// One in-flight zoom transition between two rectangles.
#[derive(Debug, Clone)]
pub struct Zoom {
    pub dir: ZoomDir,
    /// Small rect (icon / anchor / restore source).
    pub small: Rect,
    /// Full window rect.
    pub full: Rect,
    /// 0.0 at start, 1.0 when complete.
    pub progress: f32,
}

impl Zoom {
    pub fn grow(small: Rect, full: Rect) -> Self {
        Self {
            dir: ZoomDir::Grow,
            small,
            full,
            progress: 0.0,
        }
    }

    pub fn shrink(full: Rect, small: Rect) -> Self {
        Self {
            dir: ZoomDir::Shrink,
            small,
            full,
            progress: 0.0,
        }
    }

    /// Advance by `dt` seconds. Returns `true` once complete.
    pub fn update(&mut self, dt: f32) -> bool {
        self.progress = (self.progress + dt / ZOOM_DURATION).min(1.0);
        self.finished()
    }

    pub fn finished(&self) -> bool {
        self.progress >= 1.0
    }

    fn endpoints(&self) -> (Rect, Rect) {
        match self.dir {
            ZoomDir::Grow => (self.small, self.full),
            ZoomDir::Shrink => (self.full, self.small),
        }
    }

    /// The leading rect at the current progress.
    pub fn current_rect(&self) -> Rect {
        let (from, to) = self.endpoints();
        lerp_rect(from, to, ease_out_quad(self.progress))
    }

    fn step_rect(&self, step: usize) -> Rect {
        let offset = step as f32 / ZOOM_STEPS as f32 * STEP_STAGGER;
        let t = (self.progress - offset).clamp(0.0, 1.0);
        let (from, to) = self.endpoints();
        lerp_rect(from, to, ease_out_quad(t))
    }

    /// Draw the trailing outlines, leading edge most opaque.
    pub fn draw(&self, painter: &Painter, color: Color32) {
        for step in 0..ZOOM_STEPS {
            let rect = self.step_rect(step);
            let alpha = 220 - (step as u32 * 45).min(180) as u8;
            let stroke_color =
                Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha);
            painter.rect_stroke(rect, 4.0, Stroke::new(1.5, stroke_color));
        }
    }
}

/// Linear interpolation between two rectangles.
pub fn lerp_rect(a: Rect, b: Rect, t: f32) -> Rect {
    Rect::from_min_max(
        Pos2::new(lerp(a.min.x, b.min.x, t), lerp(a.min.y, b.min.y, t)),
        Pos2::new(lerp(a.max.x, b.max.x, t), lerp(a.max.y, b.max.y, t)),
    )
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out: fast start, smooth deceleration.
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_min_size(Pos2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn lerp_rect_midpoint() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(100.0, 100.0, 30.0, 30.0);
        let mid = lerp_rect(a, b, 0.5);
        assert_eq!(mid.min, Pos2::new(50.0, 50.0));
        assert_eq!(mid.max, Pos2::new(70.0, 70.0));
    }

    #[test]
    fn ease_out_quad_shape() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        // Ease-out is above the linear diagonal.
        assert!(ease_out_quad(0.5) > 0.5);
    }

    #[test]
    fn zoom_completes_after_duration() {
        let mut z = Zoom::grow(rect(0.0, 0.0, 10.0, 10.0), rect(50.0, 50.0, 400.0, 300.0));
        assert!(!z.update(ZOOM_DURATION / 2.0));
        assert!(z.update(ZOOM_DURATION));
        assert!(z.finished());
        assert_eq!(z.progress, 1.0);
    }

    #[test]
    fn grow_starts_small_and_ends_full() {
        let small = rect(0.0, 0.0, 10.0, 10.0);
        let full = rect(50.0, 50.0, 400.0, 300.0);
        let mut z = Zoom::grow(small, full);
        assert_eq!(z.current_rect(), small);
        z.update(10.0 * ZOOM_DURATION);
        assert_eq!(z.current_rect(), full);
    }

    #[test]
    fn shrink_starts_full_and_ends_small() {
        let small = rect(900.0, 8.0, 24.0, 24.0);
        let full = rect(50.0, 50.0, 400.0, 300.0);
        let mut z = Zoom::shrink(full, small);
        assert_eq!(z.current_rect(), full);
        z.update(10.0 * ZOOM_DURATION);
        assert_eq!(z.current_rect(), small);
    }
}
