use std::sync::mpsc;

use turntable_core::consts::{COARSE_STEP_FRAMES, KEY_SCROLL_STEP_PX};
use turntable_core::player::Player;
use turntable_core::sequence::SequenceInfo;

use crate::convert::surface_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::prefs::Prefs;
use crate::worker;

pub struct TurntableApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,

    /// The frame player, once a sequence is open. Owned by the UI thread;
    /// the worker only feeds it through `poll_results`.
    pub player: Option<Player>,
    pub info: Option<SequenceInfo>,
    pub prefs: Prefs,

    /// GPU copy of the player surface, refreshed whenever it repaints.
    pub texture: Option<egui::TextureHandle>,

    /// Offset into the simulated page that drives scrubbing.
    pub scroll_offset: f32,
    /// Scrollable distance of the simulated page, set by the viewport.
    pub scrollable: f32,
    /// Last known viewport size, used to size the surface of a new player.
    pub viewport_size: (u32, u32),

    pub log_messages: Vec<String>,
    pub show_about: bool,
}

impl TurntableApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let prefs = Prefs::load();
        ctx.set_visuals(prefs.theme_mode.visuals());

        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        if let Some(ref spec) = prefs.last_sequence {
            let _ = cmd_tx.send(WorkerCommand::OpenSequence {
                dir: spec.dir.clone(),
                prefix: spec.prefix.clone(),
            });
        }

        Self {
            cmd_tx,
            result_rx,
            player: None,
            info: None,
            prefs,
            texture: None,
            scroll_offset: 0.0,
            scrollable: 0.0,
            viewport_size: (1280, 720),
            log_messages: Vec::new(),
            show_about: false,
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.prefs.theme_mode = self.prefs.theme_mode.toggled();
        ctx.set_visuals(self.prefs.theme_mode.visuals());
        self.prefs.save();
    }

    /// Upload the current surface pixels to the GPU.
    pub fn refresh_texture(&mut self, ctx: &egui::Context) {
        let Some(ref player) = self.player else { return };
        let image = surface_to_color_image(player.surface());
        self.texture = Some(ctx.load_texture("surface", image, egui::TextureOptions::NEAREST));
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::SequenceOpened { spec, info } => {
                    let (w, h) = self.viewport_size;
                    match Player::new(spec.clone(), w, h) {
                        Ok(player) => {
                            self.player = Some(player);
                            self.info = info;
                            self.texture = None;
                            self.scroll_offset = 0.0;
                            self.prefs.last_sequence = Some(spec);
                            self.prefs.save();
                        }
                        Err(e) => self.add_log(format!("ERROR: {e}")),
                    }
                }
                WorkerResult::FrameSettled { index, outcome } => {
                    let mut drew = false;
                    let mut notice = None;
                    if let Some(ref mut player) = self.player {
                        match player.apply_load(index, outcome) {
                            Ok(d) => drew = d,
                            Err(e) => notice = Some(format!("ERROR: {e}")),
                        }
                        if index == 0 {
                            if let Some(err) = player.first_frame_error() {
                                notice = Some(format!("ERROR: first frame failed: {err}"));
                            }
                        }
                    }
                    if drew {
                        self.refresh_texture(ctx);
                    }
                    if let Some(msg) = notice {
                        self.add_log(msg);
                    }
                }
                WorkerResult::PreloadFinished { report } => {
                    if report.failed.is_empty() {
                        self.add_log("Sequence ready".into());
                    } else {
                        self.add_log(format!(
                            "Sequence ready, {} frames unavailable",
                            report.failed.len()
                        ));
                    }
                }
                WorkerResult::Error { message } => {
                    self.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.add_log(message);
                }
            }
        }
    }

    /// Frame-by-frame keyboard navigation, mirroring the scroll-scrub
    /// controls: arrows step one frame (and nudge the page), PageUp/PageDown
    /// step coarsely, Home/End jump, Space toggles playback.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let Some(ref mut player) = self.player else { return };

        let (down, up, page_down, page_up, home, end, space) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::PageDown),
                i.key_pressed(egui::Key::PageUp),
                i.key_pressed(egui::Key::Home),
                i.key_pressed(egui::Key::End),
                i.key_pressed(egui::Key::Space),
            )
        });

        let mut dirty = false;
        if down {
            dirty |= player.step(1);
            self.scroll_offset = (self.scroll_offset + KEY_SCROLL_STEP_PX).min(self.scrollable);
        }
        if up {
            dirty |= player.step(-1);
            self.scroll_offset = (self.scroll_offset - KEY_SCROLL_STEP_PX).max(0.0);
        }
        if page_down {
            dirty |= player.step(COARSE_STEP_FRAMES);
        }
        if page_up {
            dirty |= player.step(-COARSE_STEP_FRAMES);
        }
        if home {
            dirty |= player.set_frame(0);
            self.scroll_offset = 0.0;
        }
        if end {
            dirty |= player.set_frame(player.frame_count() as i64 - 1);
            self.scroll_offset = self.scrollable;
        }
        if space {
            player.toggle_play();
        }

        if dirty {
            self.refresh_texture(ctx);
        }
    }

    fn advance_playback(&mut self, ctx: &egui::Context) {
        let mut dirty = false;
        if let Some(ref mut player) = self.player {
            if player.is_playing() {
                let dt = ctx.input(|i| i.stable_dt) as f64;
                dirty = player.advance(dt);
                ctx.request_repaint();
            }
        }
        if dirty {
            self.refresh_texture(ctx);
        }
    }
}

impl eframe::App for TurntableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_keys(ctx);
        self.advance_playback(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Turntable")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Turntable");
                        ui.label("Scroll-scrubbed image sequence viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
