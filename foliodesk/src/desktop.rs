//! The desktop shell
//!
//! Owns the window manager, the per-window views, and all the chrome
//! around them: header bar with clock, weather and the windows list,
//! sidebar shortcuts, the marquee and bouncing-logo decorations, the
//! user menu, and the blue-screen goodbye behind "Log out".
//!
//! Frame shape: draw the header, draw the workspace decorations and
//! icons, draw every window bottom to top, then apply all collected
//! events to the window manager in one batch.

use crate::apps::{AppEvent, AppStates};
use crate::config::Settings;
use crate::widgets::calendar::CalendarWidget;
use crate::widgets::clock;
use crate::widgets::weather::WeatherWidget;
use crate::window::{self, WindowView};
use crate::window_list::{self, ListEvent};

use foliocore::theme::{FolioColors, FolioTheme};
use foliocore::widgets::DesktopIcon;
use foliocore::{AppKind, RepaintController, WindowId, WindowManager};

use egui::{Color32, Id, Order, Pos2, Rect, Vec2};
use std::collections::HashMap;
use std::time::Instant;

const HEADER_HEIGHT: f32 = 44.0;
const MARQUEE_TEXT: &str = "ANA SILVEIRA · SOFTWARE DEVELOPER · FLORIANÓPOLIS · ";
const MARQUEE_SPEED: f32 = 30.0;
const LOGO_SIZE: Vec2 = Vec2::new(110.0, 56.0);

const LOGO_COLORS: [Color32; 5] = [
    Color32::from_rgb(37, 99, 235),
    Color32::from_rgb(220, 38, 38),
    Color32::from_rgb(22, 163, 74),
    Color32::from_rgb(217, 119, 6),
    Color32::from_rgb(147, 51, 234),
];

/// Sidebar shortcuts: (glyph, kind), left column then right column.
const LEFT_ICONS: [(&str, AppKind); 2] = [("📄", AppKind::About), ("🧘", AppKind::Academy)];
const RIGHT_ICONS: [(&str, AppKind); 5] = [
    ("📑", AppKind::Resume),
    ("🖥", AppKind::Terminal),
    ("✉", AppKind::Contact),
    ("🗑", AppKind::Trash),
    ("💸", AppKind::TaxMeter),
];

pub struct DesktopApp {
    wm: WindowManager,
    views: HashMap<WindowId, WindowView>,
    app_states: AppStates,

    settings: Settings,
    theme: FolioTheme,
    theme_dirty: bool,

    weather: WeatherWidget,
    calendar: CalendarWidget,

    show_calendar: bool,
    show_window_list: bool,
    show_user_menu: bool,
    show_logout_dialog: bool,
    motion_enabled: bool,
    logged_out: bool,

    login_time: Instant,

    // Decoration state. The badge is released by clicking the header
    // logo and dismissed by clicking the badge itself.
    logo_active: bool,
    logo_pos: Pos2,
    logo_vel: Vec2,
    logo_color: usize,

    // Previous-frame rects for popup anchoring and dismissal.
    clock_rect: Rect,
    list_button_rect: Rect,
    user_button_rect: Rect,
    calendar_rect: Rect,
    window_list_rect: Rect,
    user_menu_rect: Rect,

    repaint: RepaintController,
}

impl DesktopApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::load_or_default();
        let theme = FolioTheme::default();
        theme.apply(&cc.egui_ctx, settings.dark_mode);

        let weather = WeatherWidget::new(settings.latitude, settings.longitude, &settings.place);

        let mut wm = WindowManager::new();
        // The site greets visitors with the readme already open.
        wm.open_at(
            AppKind::About,
            Pos2::new(100.0, 50.0),
            Vec2::new(800.0, 600.0),
        );

        let mut views = HashMap::new();
        for record in wm.windows() {
            views.insert(record.id, WindowView::opened(None, record.rect()));
        }

        tracing::info!("desktop started");
        Self {
            wm,
            views,
            app_states: AppStates::default(),
            settings,
            theme,
            theme_dirty: false,
            weather,
            calendar: CalendarWidget::default(),
            show_calendar: false,
            show_window_list: false,
            show_user_menu: false,
            show_logout_dialog: false,
            motion_enabled: true,
            logged_out: false,
            login_time: Instant::now(),
            logo_active: false,
            logo_pos: Pos2::new(200.0, 300.0),
            logo_vel: Vec2::new(120.0, 90.0),
            logo_color: 0,
            clock_rect: Rect::NOTHING,
            list_button_rect: Rect::NOTHING,
            user_button_rect: Rect::NOTHING,
            calendar_rect: Rect::NOTHING,
            window_list_rect: Rect::NOTHING,
            user_menu_rect: Rect::NOTHING,
            repaint: RepaintController::new(),
        }
    }

    fn colors(&self) -> FolioColors {
        FolioColors::of(self.settings.dark_mode)
    }

    fn save_settings(&self) {
        if let Err(err) = self.settings.save() {
            tracing::warn!(%err, "could not persist settings");
        }
    }

    /// Open a window of `kind`, with the clicked widget's screen rect as
    /// the zoom origin, and create its view.
    fn open_window(
        &mut self,
        kind: AppKind,
        payload: Option<String>,
        workspace: Rect,
        source: Option<Rect>,
    ) {
        let id = self.wm.open(kind, payload, workspace, source);
        let origin = self
            .wm
            .take_open_origin(id)
            .map(|local| workspace.min + local.to_vec2());
        if let Some(record) = self.wm.get(id) {
            let target = window::display_rect(record, workspace);
            self.views.insert(id, WindowView::opened(origin, target));
        }
    }

    fn close_window(&mut self, id: WindowId) {
        self.wm.close(id);
        self.views.remove(&id);
        self.app_states.forget(id);
    }

    /// Focus, growing a minimized window back out of `source`.
    fn focus_window(&mut self, id: WindowId, source: Option<Rect>, workspace: Rect) {
        let was_minimized = self.wm.get(id).map(|w| w.minimized).unwrap_or(false);
        self.wm.focus(id, source);
        if was_minimized {
            if let Some(record) = self.wm.get(id) {
                let target = window::display_rect(record, workspace);
                let from = record
                    .restore_origin
                    .or(source)
                    .unwrap_or(self.list_button_rect);
                if let Some(view) = self.views.get_mut(&id) {
                    view.begin_restore(from, target);
                }
            }
        }
    }

    /// Release the bouncing badge from the screen center with a start
    /// angle scrambled by the clock, or recall it if already out.
    fn toggle_logo(&mut self, screen: Rect) {
        self.logo_active = !self.logo_active;
        if self.logo_active {
            self.logo_pos = screen.center();
            let angle = (self.login_time.elapsed().subsec_nanos() % 628) as f32 / 100.0;
            self.logo_vel = Vec2::angled(angle) * 150.0;
        }
    }

    fn log_out(&mut self) {
        tracing::info!("logging out");
        self.logged_out = true;
        self.show_user_menu = false;
        self.show_window_list = false;
        self.show_calendar = false;
    }

    /// Back from the blue screen: a fresh session.
    fn log_in(&mut self) {
        self.wm = WindowManager::new();
        self.wm.open_at(
            AppKind::About,
            Pos2::new(100.0, 50.0),
            Vec2::new(800.0, 600.0),
        );
        self.views.clear();
        for record in self.wm.windows() {
            self.views
                .insert(record.id, WindowView::opened(None, record.rect()));
        }
        self.app_states.clear();
        self.logged_out = false;
        self.login_time = Instant::now();
    }

    fn header(&mut self, ctx: &egui::Context, colors: &FolioColors) {
        egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(colors.header)
                    .inner_margin(egui::Margin::symmetric(12.0, 6.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    // Left cluster: clock and weather.
                    let clock_resp = clock::digital_clock(ui);
                    self.clock_rect = clock_resp.rect;
                    if clock_resp.clicked() {
                        self.show_calendar = !self.show_calendar;
                        if self.show_calendar {
                            self.calendar.reset();
                        }
                    }
                    ui.add_space(12.0);
                    self.weather.draw(ui, colors);

                    // Right cluster, built right to left.
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let user = ui
                            .button("👤")
                            .on_hover_text(self.settings.user_name.clone());
                        self.user_button_rect = user.rect;
                        if user.clicked() {
                            self.show_user_menu = !self.show_user_menu;
                        }

                        let mode_icon = if self.settings.dark_mode { "☀" } else { "🌙" };
                        if ui.button(mode_icon).on_hover_text("Toggle theme").clicked() {
                            self.settings.dark_mode = !self.settings.dark_mode;
                            self.theme_dirty = true;
                            self.save_settings();
                        }

                        let list_label = format!("🗗 {}", self.wm.len());
                        let list = ui.button(list_label).on_hover_text("Open windows");
                        self.list_button_rect = list.rect;
                        if list.clicked() {
                            self.show_window_list = !self.show_window_list;
                        }

                        // Center logo, in the space that remains.
                        // Clicking it releases (or recalls) the bouncing badge.
                        ui.with_layout(
                            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                            |ui| {
                                let logo = ui
                                    .add(
                                        egui::Label::new(
                                            egui::RichText::new("✦ anasilveira.dev")
                                                .strong()
                                                .color(colors.text),
                                        )
                                        .sense(egui::Sense::click()),
                                    )
                                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                                if logo.clicked() {
                                    self.toggle_logo(ui.ctx().screen_rect());
                                }
                            },
                        );
                    });
                });
            });
    }

    /// Marquee rows drifting across the background, direction and speed
    /// alternating per row.
    fn marquee(&self, ui: &egui::Ui, workspace: Rect) {
        let painter = ui.painter();
        let faint = if self.settings.dark_mode {
            Color32::from_rgba_premultiplied(255, 255, 255, 10)
        } else {
            Color32::from_rgba_premultiplied(0, 0, 0, 10)
        };

        let font = egui::FontId::proportional(26.0);
        let text_width = MARQUEE_TEXT.chars().count() as f32 * 14.0;
        let elapsed = self.login_time.elapsed().as_secs_f32();
        let mut y = workspace.min.y + 60.0;
        let mut row = 0;
        while y < workspace.max.y {
            let speed = MARQUEE_SPEED * if row % 3 == 0 { 1.4 } else { 1.0 };
            let scroll = (elapsed * speed) % text_width;
            let offset = if row % 2 == 0 { -scroll } else { scroll - text_width };
            let mut x = workspace.min.x + offset;
            while x < workspace.max.x {
                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::LEFT_CENTER,
                    MARQUEE_TEXT,
                    font.clone(),
                    faint,
                );
                x += text_width;
            }
            y += 110.0;
            row += 1;
        }
    }

    /// DVD-style bouncing badge. Color advances on every wall hit;
    /// clicking it puts it away.
    fn bouncing_badge(&mut self, ui: &mut egui::Ui, workspace: Rect, dt: f32) {
        self.logo_pos += self.logo_vel * dt;
        let bounds = workspace.shrink2(LOGO_SIZE * 0.5);
        if self.logo_pos.x <= bounds.min.x || self.logo_pos.x >= bounds.max.x {
            self.logo_vel.x = -self.logo_vel.x;
            self.logo_color = (self.logo_color + 1) % LOGO_COLORS.len();
        }
        if self.logo_pos.y <= bounds.min.y || self.logo_pos.y >= bounds.max.y {
            self.logo_vel.y = -self.logo_vel.y;
            self.logo_color = (self.logo_color + 1) % LOGO_COLORS.len();
        }
        self.logo_pos = bounds.clamp(self.logo_pos);

        let logo_rect = Rect::from_center_size(self.logo_pos, LOGO_SIZE);
        let logo_color = LOGO_COLORS[self.logo_color];
        let painter = ui.painter();
        painter.rect_stroke(logo_rect, 8.0, egui::Stroke::new(2.0, logo_color));
        painter.text(
            logo_rect.center(),
            egui::Align2::CENTER_CENTER,
            "AS",
            egui::FontId::proportional(30.0),
            logo_color,
        );

        let resp = ui.interact(logo_rect, Id::new("bouncing_badge"), egui::Sense::click());
        if resp.clicked() {
            self.logo_active = false;
        }
    }

    /// Sidebar shortcut columns. Returns open requests.
    fn sidebars(
        &mut self,
        ui: &mut egui::Ui,
        workspace: Rect,
        colors: &FolioColors,
    ) -> Vec<(AppKind, Rect)> {
        let mut opens = Vec::new();
        let spacing = 78.0;

        for (column, icons) in [
            (workspace.min.x + 12.0, &LEFT_ICONS[..]),
            (workspace.max.x - 76.0, &RIGHT_ICONS[..]),
        ] {
            for (i, (glyph, kind)) in icons.iter().enumerate() {
                let rect = Rect::from_min_size(
                    Pos2::new(column, workspace.min.y + 16.0 + i as f32 * spacing),
                    Vec2::new(64.0, 64.0),
                );
                let mut icon_ui = ui.child_ui(rect, egui::Layout::top_down(egui::Align::Center));
                let resp = icon_ui.add(DesktopIcon::new(glyph, kind.title(), colors));
                if resp.clicked() {
                    opens.push((*kind, resp.rect));
                }
            }
        }
        opens
    }

    fn user_menu(&mut self, ctx: &egui::Context, colors: &FolioColors) {
        let area = egui::Area::new(Id::new("user_menu"))
            .order(Order::Foreground)
            .fixed_pos(Pos2::new(
                self.user_button_rect.right() - 200.0,
                self.user_button_rect.bottom() + 6.0,
            ))
            .show(ctx, |ui| {
                FolioTheme::panel_frame(colors).show(ui, |ui| {
                    ui.set_width(192.0);
                    ui.strong(format!("Welcome, {}", self.settings.user_name));
                    let mins = self.login_time.elapsed().as_secs() / 60;
                    ui.label(
                        egui::RichText::new(format!("guest session · {mins} min"))
                            .small()
                            .color(colors.text_dim),
                    );
                    ui.separator();

                    if ui
                        .checkbox(&mut self.settings.dark_mode, "Dark mode")
                        .changed()
                    {
                        self.theme_dirty = true;
                        self.save_settings();
                    }
                    ui.checkbox(&mut self.motion_enabled, "Desktop motion");
                    ui.separator();

                    if ui.button("Log out").clicked() {
                        self.show_logout_dialog = true;
                        self.show_user_menu = false;
                    }
                });
            });
        self.user_menu_rect = area.response.rect;
    }

    fn calendar_popup(&mut self, ctx: &egui::Context, colors: &FolioColors) {
        let area = egui::Area::new(Id::new("calendar_popup"))
            .order(Order::Foreground)
            .fixed_pos(Pos2::new(
                self.clock_rect.left(),
                self.clock_rect.bottom() + 10.0,
            ))
            .show(ctx, |ui| {
                FolioTheme::panel_frame(colors).show(ui, |ui| {
                    self.calendar.draw(ui, colors);
                });
            });
        self.calendar_rect = area.response.rect;
    }

    /// Close any popup the press landed outside of.
    fn dismiss_popups(&mut self, pressed_at: Option<Pos2>) {
        let Some(pos) = pressed_at else { return };
        if self.show_window_list
            && !self.window_list_rect.contains(pos)
            && !self.list_button_rect.contains(pos)
        {
            self.show_window_list = false;
        }
        if self.show_user_menu
            && !self.user_menu_rect.contains(pos)
            && !self.user_button_rect.contains(pos)
        {
            self.show_user_menu = false;
        }
        if self.show_calendar
            && !self.calendar_rect.contains(pos)
            && !self.clock_rect.contains(pos)
        {
            self.show_calendar = false;
        }
    }

    fn logout_dialog(&mut self, ctx: &egui::Context, colors: &FolioColors) {
        egui::Area::new(Id::new("logout_dialog"))
            .order(Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                FolioTheme::panel_frame(colors).show(ui, |ui| {
                    ui.set_width(280.0);
                    ui.add_space(4.0);
                    ui.strong("Log out?");
                    ui.label(
                        egui::RichText::new(
                            "Open windows will be closed and the session will end.",
                        )
                        .color(colors.text_dim),
                    );
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.show_logout_dialog = false;
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("Log out").clicked() {
                                    self.show_logout_dialog = false;
                                    self.log_out();
                                }
                            },
                        );
                    });
                });
            });
    }

    fn blue_screen(&mut self, ctx: &egui::Context) {
        let restart = ctx.input(|i| {
            i.key_pressed(egui::Key::Enter) || i.pointer.any_pressed()
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_rgb(0, 120, 215)))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();
                let x = rect.min.x + rect.width() * 0.14;
                let mut y = rect.min.y + rect.height() * 0.25;

                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::LEFT_TOP,
                    ":(",
                    egui::FontId::proportional(96.0),
                    Color32::WHITE,
                );
                y += 130.0;
                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::LEFT_TOP,
                    "You logged out of a website. The website ran into a problem\n\
                     with that and needs to restart.",
                    egui::FontId::proportional(22.0),
                    Color32::WHITE,
                );
                y += 80.0;
                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::LEFT_TOP,
                    "0% complete",
                    egui::FontId::proportional(18.0),
                    Color32::WHITE,
                );
                y += 60.0;
                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::LEFT_TOP,
                    "Stop code: GUEST_SESSION_ENDED\nPress Enter or click anywhere to restart.",
                    egui::FontId::proportional(14.0),
                    Color32::from_rgba_premultiplied(255, 255, 255, 200),
                );
            });

        if restart {
            self.log_in();
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);

        if self.logged_out {
            self.blue_screen(ctx);
            self.repaint.set_animating(false);
            self.repaint.set_ambient(false);
            self.repaint.end_frame(ctx);
            return;
        }

        if self.theme_dirty {
            self.theme.apply(ctx, self.settings.dark_mode);
            self.theme_dirty = false;
        }
        if self.weather.poll() {
            self.repaint.mark_needs_repaint();
        }

        let colors = self.colors();
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        let pressed_at = ctx.input(|i| {
            if i.pointer.primary_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });

        self.header(ctx, &colors);
        let workspace = ctx.available_rect();

        let mut events = Vec::new();
        let mut icon_opens = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(colors.desktop))
            .show(ctx, |ui| {
                if self.motion_enabled {
                    self.marquee(ui, workspace);
                }
                if self.logo_active {
                    self.bouncing_badge(ui, workspace, dt);
                }
                icon_opens = self.sidebars(ui, workspace, &colors);
            });

        // Windows, bottom to top. The topmost unminimized one is focused.
        let order = self.wm.ids_by_z();
        let focused = order
            .iter()
            .rev()
            .find(|id| {
                self.wm
                    .get(**id)
                    .map(|w| !w.minimized)
                    .unwrap_or(false)
            })
            .copied();

        for &id in &order {
            if let Some(view) = self.views.get_mut(&id) {
                view.tick(dt);
            }
            let Some(record) = self.wm.get(id) else { continue };
            let Some(view) = self.views.get(&id) else { continue };
            events.extend(window::show(
                ctx,
                record,
                view,
                &mut self.app_states,
                &colors,
                &self.theme,
                workspace,
                focused == Some(id),
            ));
        }
        // Match egui's layer stacking to the manager's z order.
        for &id in &order {
            ctx.move_to_top(egui::LayerId::new(Order::Middle, Id::new(("window", id))));
        }

        // Press on a window body raises it.
        if let Some(pos) = pressed_at {
            if let Some(layer) = ctx.layer_id_at(pos) {
                if layer.order == Order::Middle {
                    for &id in &order {
                        if layer.id == Id::new(("window", id)) && focused != Some(id) {
                            events.push(window::WindowEvent::Focus(id));
                        }
                    }
                }
            }
        }

        if self.show_window_list {
            let (list_events, list_rect) =
                window_list::show(ctx, self.list_button_rect, &self.wm, &colors);
            self.window_list_rect = list_rect;
            for event in list_events {
                match event {
                    ListEvent::Focus(id, rect) => self.focus_window(id, Some(rect), workspace),
                    ListEvent::Close(id) => self.close_window(id),
                    ListEvent::CloseAll => {
                        self.wm.close_all();
                        self.views.clear();
                        self.app_states.clear();
                    }
                }
            }
        }
        if self.show_user_menu {
            self.user_menu(ctx, &colors);
        }
        if self.show_calendar {
            self.calendar_popup(ctx, &colors);
        }
        if self.show_logout_dialog {
            self.logout_dialog(ctx, &colors);
        }
        self.dismiss_popups(pressed_at);

        for (kind, rect) in icon_opens {
            self.open_window(kind, None, workspace, Some(rect));
        }
        for event in events {
            match event {
                window::WindowEvent::Focus(id) => self.focus_window(id, None, workspace),
                window::WindowEvent::Close(id) => self.close_window(id),
                window::WindowEvent::Minimize(id) => {
                    if let Some(record) = self.wm.get(id) {
                        let from = window::display_rect(record, workspace);
                        let anchor = self.list_button_rect;
                        if let Some(view) = self.views.get_mut(&id) {
                            view.begin_minimize(from, anchor);
                        }
                    }
                    self.wm.minimize(id);
                }
                window::WindowEvent::ToggleMaximize(id) => self.wm.toggle_maximize(id),
                window::WindowEvent::Moved(id, delta) => self.wm.move_by(id, delta),
                window::WindowEvent::Resized(id, edge, delta) => {
                    self.wm.resize_by(id, delta, edge)
                }
                window::WindowEvent::App(AppEvent::Open {
                    kind,
                    payload,
                    source,
                }) => {
                    self.open_window(kind, payload, workspace, source);
                }
            }
        }

        // Drop views whose windows are gone (close_all, stale ids).
        self.views.retain(|id, _| self.wm.get(*id).is_some());

        let zooming = self.views.values().any(|v| v.is_animating());
        self.repaint
            .set_animating(zooming || self.motion_enabled || self.logo_active);
        self.repaint.set_ambient(true);
        self.repaint.end_frame(ctx);
    }
}
