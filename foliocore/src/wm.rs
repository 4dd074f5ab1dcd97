//! Window manager state machine
//!
//! Owns the collection of open windows, the monotonic z-order counter and
//! every mutation the desktop shell can request: open, focus, close,
//! minimize, maximize, move, resize. Pure state, no painting and no I/O,
//! so the whole thing is testable without a UI context.
//!
//! Coordinates are in the workspace's local space (origin at the top-left
//! of the area between the sidebars, below the header). Views receive
//! `&WindowRecord` snapshots and report intent back through the desktop's
//! callbacks; nothing outside this module mutates a record.

use egui::{Pos2, Rect, Vec2};

/// Opaque window identifier, unique for the session.
pub type WindowId = u64;

/// Width below which window content becomes unusable.
pub const MIN_WIDTH: f32 = 300.0;
/// Height floor, same reasoning as [`MIN_WIDTH`].
pub const MIN_HEIGHT: f32 = 200.0;

/// Z value the first window gets; purely cosmetic, only ordering matters.
const BASE_Z: u32 = 100;

/// The closed set of applications the desktop can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppKind {
    About,
    Resume,
    Contact,
    Terminal,
    Browser,
    Trash,
    Academy,
    TaxMeter,
}

impl AppKind {
    pub const ALL: [AppKind; 8] = [
        AppKind::About,
        AppKind::Resume,
        AppKind::Contact,
        AppKind::Terminal,
        AppKind::Browser,
        AppKind::Trash,
        AppKind::Academy,
        AppKind::TaxMeter,
    ];

    /// Title shown in the title bar and the active-windows list.
    pub fn title(self) -> &'static str {
        match self {
            AppKind::About => "README.md",
            AppKind::Resume => "CV.pdf",
            AppKind::Contact => "Contact",
            AppKind::Terminal => "Terminal",
            AppKind::Browser => "Browser",
            AppKind::Trash => "Trash",
            AppKind::Academy => "Yuj Academy",
            AppKind::TaxMeter => "Tax Meter",
        }
    }

    /// Fallback size used when a record carries no explicit size.
    pub fn default_size(self) -> Vec2 {
        match self {
            AppKind::Terminal | AppKind::Browser => Vec2::new(800.0, 500.0),
            AppKind::TaxMeter => Vec2::new(560.0, 320.0),
            _ => Vec2::new(520.0, 400.0),
        }
    }
}

/// Which handle a resize gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Corner,
    Right,
    Bottom,
    Left,
}

/// One open application instance.
#[derive(Debug, Clone)]
pub struct WindowRecord {
    pub id: WindowId,
    pub kind: AppKind,
    pub title: String,
    /// Top-left corner, workspace-local.
    pub pos: Pos2,
    /// Explicit size; falls back to [`AppKind::default_size`] when `None`.
    pub size: Option<Vec2>,
    /// Stacking order; higher draws on top and wins input on overlap.
    pub z: u32,
    pub minimized: bool,
    pub maximized: bool,
    /// Opaque content data, e.g. a URL for the browser app.
    pub payload: Option<String>,
    /// Where the window visually originated (icon center, workspace-local).
    /// Consumed once by the entry animation.
    pub open_origin: Option<Pos2>,
    /// Rectangle the restore-from-minimized animation grows from. Set when
    /// the window is focused from the active-windows list; kept until the
    /// next focus overwrites it.
    pub restore_origin: Option<Rect>,
}

impl WindowRecord {
    /// Effective size: explicit size or the per-kind default.
    pub fn effective_size(&self) -> Vec2 {
        self.size.unwrap_or_else(|| self.kind.default_size())
    }

    /// The rect the window occupies when not maximized, workspace-local.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.pos, self.effective_size())
    }
}

/// The authoritative window collection plus the top-z counter.
///
/// Iteration order is insertion order; visual stacking is governed by
/// each record's `z` alone.
#[derive(Debug, Default)]
pub struct WindowManager {
    windows: Vec<WindowRecord>,
    next_id: WindowId,
    top_z: u32,
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
            top_z: BASE_Z,
        }
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Ids sorted bottom to top. The shell paints in this order and
    /// hit-tests it in reverse.
    pub fn ids_by_z(&self) -> Vec<WindowId> {
        let mut pairs: Vec<(u32, WindowId)> =
            self.windows.iter().map(|w| (w.z, w.id)).collect();
        pairs.sort_by_key(|&(z, _)| z);
        pairs.into_iter().map(|(_, id)| id).collect()
    }

    /// Open a new window, centered in `workspace` with a cascade offset,
    /// immediately topmost and unminimized.
    ///
    /// `source` is the clicked icon's rect in *screen* coordinates; it is
    /// converted to a workspace-local `open_origin` so the entry animation
    /// can grow out of the icon.
    pub fn open(
        &mut self,
        kind: AppKind,
        payload: Option<String>,
        workspace: Rect,
        source: Option<Rect>,
    ) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;
        self.top_z += 1;

        // Fill most of the workspace but leave a visible margin; never
        // smaller than a usable floor even on tiny viewports.
        let target = Vec2::new(
            (workspace.width() - 100.0).max(600.0),
            (workspace.height() - 80.0).max(400.0),
        );
        let centered = Pos2::new(
            (workspace.width() - target.x) / 2.0,
            (workspace.height() - target.y) / 2.0,
        );
        let cascade = (self.windows.len() % 5) as f32 * 20.0;

        let open_origin = source.map(|rect| {
            let c = rect.center();
            Pos2::new(c.x - workspace.min.x, c.y - workspace.min.y)
        });

        tracing::debug!(?kind, id, "open window");
        self.windows.push(WindowRecord {
            id,
            kind,
            title: kind.title().to_owned(),
            pos: centered + Vec2::splat(cascade),
            size: Some(target),
            z: self.top_z,
            minimized: false,
            maximized: false,
            payload,
            open_origin,
            restore_origin: None,
        });
        id
    }

    /// Seed a window with explicit geometry (the About window that greets
    /// the user on startup). Same z discipline as [`open`], no animation.
    pub fn open_at(&mut self, kind: AppKind, pos: Pos2, size: Vec2) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;
        self.top_z += 1;
        self.windows.push(WindowRecord {
            id,
            kind,
            title: kind.title().to_owned(),
            pos,
            size: Some(size),
            z: self.top_z,
            minimized: false,
            maximized: false,
            payload: None,
            open_origin: None,
            restore_origin: None,
        });
        id
    }

    /// Raise a window to the top and unminimize it. Tolerant lookup: a
    /// stale id (window closed before a queued callback fired) is a no-op,
    /// not an error.
    ///
    /// `restore_source` is the rect (screen coords) the restore animation
    /// should grow from, supplied when focusing from the windows list.
    pub fn focus(&mut self, id: WindowId, restore_source: Option<Rect>) {
        let max_z = self.windows.iter().map(|w| w.z).max().unwrap_or(BASE_Z);
        // Counter never decreases, so z values never collide even when the
        // collection has shrunk since the last focus.
        self.top_z = self.top_z.max(max_z) + 1;
        let top_z = self.top_z;
        if let Some(win) = self.get_mut(id) {
            win.z = top_z;
            win.minimized = false;
            if restore_source.is_some() {
                win.restore_origin = restore_source;
            }
        }
    }

    /// Remove the matching record; no-op when absent.
    pub fn close(&mut self, id: WindowId) {
        self.windows.retain(|w| w.id != id);
    }

    pub fn close_all(&mut self) {
        self.windows.clear();
    }

    /// Hide the window (z untouched, so restore keeps its stacking slot).
    pub fn minimize(&mut self, id: WindowId) {
        if let Some(win) = self.get_mut(id) {
            win.minimized = true;
        }
    }

    /// Flip maximized. Stored geometry is untouched; the maximized rect
    /// is computed from the workspace at render time.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        if let Some(win) = self.get_mut(id) {
            win.maximized = !win.maximized;
        }
    }

    /// Apply a drag delta. No clamping: a window may be dragged partially
    /// or fully off-screen (recovery via restore/maximize). Suspended
    /// while maximized.
    pub fn move_by(&mut self, id: WindowId, delta: Vec2) {
        if let Some(win) = self.get_mut(id) {
            if win.maximized {
                return;
            }
            win.pos += delta;
        }
    }

    /// Apply a resize delta from the given edge. Width/height are floored
    /// so a fast gesture can never collapse the window to an unusable or
    /// negative size; there is no maximum. Dragging the left edge shifts
    /// `pos.x` to keep the right edge fixed, the one case where resize
    /// also moves the window. Suspended while maximized.
    pub fn resize_by(&mut self, id: WindowId, delta: Vec2, edge: ResizeEdge) {
        if let Some(win) = self.get_mut(id) {
            if win.maximized {
                return;
            }
            let current = win.size.unwrap_or_else(|| win.kind.default_size());
            let mut size = current;
            match edge {
                ResizeEdge::Right => {
                    size.x = (current.x + delta.x).max(MIN_WIDTH);
                }
                ResizeEdge::Bottom => {
                    size.y = (current.y + delta.y).max(MIN_HEIGHT);
                }
                ResizeEdge::Corner => {
                    size.x = (current.x + delta.x).max(MIN_WIDTH);
                    size.y = (current.y + delta.y).max(MIN_HEIGHT);
                }
                ResizeEdge::Left => {
                    size.x = (current.x - delta.x).max(MIN_WIDTH);
                    win.pos.x += current.x - size.x;
                }
            }
            win.size = Some(size);
        }
    }

    /// Take the entry-animation origin, leaving `None` behind. Returns
    /// `None` when the window has none (seeded windows) or it was already
    /// consumed.
    pub fn take_open_origin(&mut self, id: WindowId) -> Option<Pos2> {
        self.get_mut(id).and_then(|w| w.open_origin.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> Rect {
        Rect::from_min_size(Pos2::new(96.0, 40.0), Vec2::new(1000.0, 700.0))
    }

    fn manager_with(kinds: &[AppKind]) -> WindowManager {
        let mut wm = WindowManager::new();
        for &kind in kinds {
            wm.open(kind, None, workspace(), None);
        }
        wm
    }

    #[test]
    fn open_assigns_unique_ids_and_increasing_z() {
        let mut wm = WindowManager::new();
        let mut seen_ids = Vec::new();
        let mut last_z = 0;
        for &kind in &AppKind::ALL {
            let id = wm.open(kind, None, workspace(), None);
            assert!(!seen_ids.contains(&id));
            seen_ids.push(id);
            let z = wm.get(id).unwrap().z;
            assert!(z > last_z);
            last_z = z;
        }
    }

    #[test]
    fn open_is_topmost_and_unminimized() {
        let mut wm = manager_with(&[AppKind::About, AppKind::Contact]);
        let id = wm.open(AppKind::Terminal, None, workspace(), None);
        let win = wm.get(id).unwrap();
        assert!(!win.minimized);
        assert!(wm.windows().iter().all(|w| w.id == id || w.z < win.z));
    }

    #[test]
    fn open_converts_source_rect_to_workspace_local_origin() {
        let mut wm = WindowManager::new();
        let icon = Rect::from_min_size(Pos2::new(120.0, 140.0), Vec2::new(40.0, 40.0));
        let id = wm.open(AppKind::About, None, workspace(), Some(icon));
        let origin = wm.get(id).unwrap().open_origin.unwrap();
        // Icon center (140, 160) minus workspace min (96, 40).
        assert_eq!(origin, Pos2::new(44.0, 120.0));
    }

    #[test]
    fn take_open_origin_consumes_once() {
        let mut wm = WindowManager::new();
        let icon = Rect::from_min_size(Pos2::ZERO, Vec2::new(10.0, 10.0));
        let id = wm.open(AppKind::About, None, workspace(), Some(icon));
        assert!(wm.take_open_origin(id).is_some());
        assert!(wm.take_open_origin(id).is_none());
    }

    #[test]
    fn focus_raises_strictly_above_all_others() {
        let mut wm = manager_with(&[AppKind::About, AppKind::Contact, AppKind::Trash]);
        let bottom = wm.windows()[0].id;
        wm.focus(bottom, None);
        let z = wm.get(bottom).unwrap().z;
        assert!(wm.windows().iter().all(|w| w.id == bottom || w.z < z));
    }

    #[test]
    fn focus_on_top_window_still_increases_z() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        let before = wm.get(id).unwrap().z;
        wm.focus(id, None);
        assert!(wm.get(id).unwrap().z > before);
        // Stacking is unchanged: still the only/top window.
        assert_eq!(wm.ids_by_z().last(), Some(&id));
    }

    #[test]
    fn focus_missing_id_is_noop() {
        let mut wm = manager_with(&[AppKind::About]);
        let snapshot: Vec<_> = wm.windows().iter().map(|w| (w.id, w.z)).collect();
        wm.focus(9999, None);
        let after: Vec<_> = wm.windows().iter().map(|w| (w.id, w.z)).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn focus_records_restore_origin_and_keeps_it_without_a_new_source() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        let row = Rect::from_min_size(Pos2::new(900.0, 120.0), Vec2::new(260.0, 32.0));
        wm.focus(id, Some(row));
        assert_eq!(wm.get(id).unwrap().restore_origin, Some(row));
        // Plain focus keeps the previous origin.
        wm.focus(id, None);
        assert_eq!(wm.get(id).unwrap().restore_origin, Some(row));
    }

    #[test]
    fn close_removes_exactly_one_and_leaves_others_untouched() {
        let mut wm = manager_with(&[AppKind::About, AppKind::Contact, AppKind::Trash]);
        let victim = wm.windows()[1].id;
        let others: Vec<_> = wm
            .windows()
            .iter()
            .filter(|w| w.id != victim)
            .map(|w| (w.id, w.z, w.pos))
            .collect();
        wm.close(victim);
        assert_eq!(wm.len(), 2);
        assert!(wm.get(victim).is_none());
        let after: Vec<_> = wm.windows().iter().map(|w| (w.id, w.z, w.pos)).collect();
        assert_eq!(others, after);
    }

    #[test]
    fn close_missing_id_is_noop() {
        let mut wm = manager_with(&[AppKind::About]);
        wm.close(42);
        assert_eq!(wm.len(), 1);
    }

    #[test]
    fn close_all_empties_any_collection() {
        let mut wm = WindowManager::new();
        wm.close_all();
        assert!(wm.is_empty());
        wm.open(AppKind::About, None, workspace(), None);
        wm.open(AppKind::Trash, None, workspace(), None);
        wm.close_all();
        assert!(wm.is_empty());
    }

    #[test]
    fn minimize_keeps_z_and_focus_restores() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        let (pos, size, z) = {
            let w = wm.get(id).unwrap();
            (w.pos, w.size, w.z)
        };
        wm.minimize(id);
        let w = wm.get(id).unwrap();
        assert!(w.minimized);
        assert_eq!(w.z, z);
        wm.focus(id, None);
        let w = wm.get(id).unwrap();
        assert!(!w.minimized);
        assert_eq!(w.pos, pos);
        assert_eq!(w.size, size);
    }

    #[test]
    fn toggle_maximize_twice_restores_geometry() {
        let mut wm = manager_with(&[AppKind::Browser]);
        let id = wm.windows()[0].id;
        let (pos, size) = {
            let w = wm.get(id).unwrap();
            (w.pos, w.size)
        };
        wm.toggle_maximize(id);
        assert!(wm.get(id).unwrap().maximized);
        // Stored geometry untouched while maximized.
        assert_eq!(wm.get(id).unwrap().pos, pos);
        assert_eq!(wm.get(id).unwrap().size, size);
        wm.toggle_maximize(id);
        let w = wm.get(id).unwrap();
        assert!(!w.maximized);
        assert_eq!(w.pos, pos);
        assert_eq!(w.size, size);
    }

    #[test]
    fn move_applies_exact_delta() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        wm.get_mut(id).unwrap().pos = Pos2::new(100.0, 50.0);
        wm.move_by(id, Vec2::new(20.0, -10.0));
        assert_eq!(wm.get(id).unwrap().pos, Pos2::new(120.0, 40.0));
    }

    #[test]
    fn move_allows_offscreen_positions() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        wm.move_by(id, Vec2::new(-10_000.0, -10_000.0));
        let pos = wm.get(id).unwrap().pos;
        assert!(pos.x < 0.0 && pos.y < 0.0);
    }

    #[test]
    fn move_and_resize_are_suspended_while_maximized() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        let (pos, size) = {
            let w = wm.get(id).unwrap();
            (w.pos, w.size)
        };
        wm.toggle_maximize(id);
        wm.move_by(id, Vec2::new(50.0, 50.0));
        wm.resize_by(id, Vec2::new(50.0, 50.0), ResizeEdge::Corner);
        let w = wm.get(id).unwrap();
        assert_eq!(w.pos, pos);
        assert_eq!(w.size, size);
    }

    #[test]
    fn resize_right_floors_width() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        wm.get_mut(id).unwrap().size = Some(Vec2::new(320.0, 400.0));
        wm.resize_by(id, Vec2::new(-1000.0, 0.0), ResizeEdge::Right);
        assert_eq!(wm.get(id).unwrap().size.unwrap().x, MIN_WIDTH);
    }

    #[test]
    fn resize_bottom_floors_height() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        wm.get_mut(id).unwrap().size = Some(Vec2::new(400.0, 210.0));
        wm.resize_by(id, Vec2::new(0.0, -500.0), ResizeEdge::Bottom);
        assert_eq!(wm.get(id).unwrap().size.unwrap().y, MIN_HEIGHT);
    }

    #[test]
    fn resize_corner_grows_both_axes_without_maximum() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        wm.get_mut(id).unwrap().size = Some(Vec2::new(400.0, 300.0));
        wm.resize_by(id, Vec2::new(5000.0, 5000.0), ResizeEdge::Corner);
        assert_eq!(wm.get(id).unwrap().size, Some(Vec2::new(5400.0, 5300.0)));
    }

    #[test]
    fn resize_left_preserves_right_edge() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        {
            let w = wm.get_mut(id).unwrap();
            w.pos = Pos2::new(200.0, 100.0);
            w.size = Some(Vec2::new(400.0, 300.0));
        }
        let right_before = 200.0 + 400.0;
        // Drag the left edge 60 px leftward: window grows.
        wm.resize_by(id, Vec2::new(-60.0, 0.0), ResizeEdge::Left);
        let w = wm.get(id).unwrap();
        assert_eq!(w.size.unwrap().x, 460.0);
        assert_eq!(w.pos.x + w.size.unwrap().x, right_before);
    }

    #[test]
    fn resize_left_respects_floor_and_still_keeps_right_edge() {
        let mut wm = manager_with(&[AppKind::About]);
        let id = wm.windows()[0].id;
        {
            let w = wm.get_mut(id).unwrap();
            w.pos = Pos2::new(200.0, 100.0);
            w.size = Some(Vec2::new(320.0, 300.0));
        }
        wm.resize_by(id, Vec2::new(1000.0, 0.0), ResizeEdge::Left);
        let w = wm.get(id).unwrap();
        assert_eq!(w.size.unwrap().x, MIN_WIDTH);
        assert_eq!(w.pos.x + w.size.unwrap().x, 520.0);
    }

    #[test]
    fn open_focus_close_scenario() {
        let mut wm = WindowManager::new();
        let about = wm.open(AppKind::About, None, workspace(), None);
        let contact = wm.open(AppKind::Contact, None, workspace(), None);
        assert_eq!(wm.len(), 2);
        assert!(wm.get(contact).unwrap().z > wm.get(about).unwrap().z);

        let contact_before = wm.get(contact).unwrap().clone();
        wm.focus(about, None);
        assert!(wm.get(about).unwrap().z > wm.get(contact).unwrap().z);
        let contact_after = wm.get(contact).unwrap();
        assert_eq!(contact_after.z, contact_before.z);
        assert_eq!(contact_after.pos, contact_before.pos);

        wm.close(about);
        assert_eq!(wm.len(), 1);
        assert!(wm.get(contact).is_some());
    }

    #[test]
    fn ids_by_z_orders_bottom_to_top() {
        let mut wm = manager_with(&[AppKind::About, AppKind::Contact, AppKind::Trash]);
        let first = wm.windows()[0].id;
        wm.focus(first, None);
        let order = wm.ids_by_z();
        assert_eq!(order.last(), Some(&first));
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn browser_payload_is_carried() {
        let mut wm = WindowManager::new();
        let id = wm.open(
            AppKind::Browser,
            Some("https://example.com".to_owned()),
            workspace(),
            None,
        );
        assert_eq!(
            wm.get(id).unwrap().payload.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn cascade_offsets_successive_windows() {
        let mut wm = WindowManager::new();
        let a = wm.open(AppKind::About, None, workspace(), None);
        let b = wm.open(AppKind::About, None, workspace(), None);
        let pa = wm.get(a).unwrap().pos;
        let pb = wm.get(b).unwrap().pos;
        assert_eq!(pb - pa, Vec2::splat(20.0));
    }
}
