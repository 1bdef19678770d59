use turntable_core::consts::DEFAULT_PREFIX;

use crate::app::TurntableApp;
use crate::messages::WorkerCommand;
use crate::prefs::ThemeMode;

pub fn show(ctx: &egui::Context, app: &mut TurntableApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open Sequence...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_sequence(app);
                }

                if ui.button("Save Frame As...").clicked() {
                    ui.close();
                    save_frame(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let label = match app.prefs.theme_mode {
                    ThemeMode::Dark => "Light Mode",
                    ThemeMode::Light => "Dark Mode",
                };
                if ui.button(label).clicked() {
                    ui.close();
                    app.toggle_theme(ctx);
                }

                if ui.button("Redraw").clicked() {
                    ui.close();
                    if let Some(ref mut player) = app.player {
                        player.render();
                    }
                    app.refresh_texture(ctx);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_sequence(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_sequence(app: &mut TurntableApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            let _ = cmd_tx.send(WorkerCommand::OpenSequence {
                dir,
                prefix: DEFAULT_PREFIX.to_string(),
            });
        }
    });
}

fn save_frame(app: &mut TurntableApp) {
    let surface = match app.player {
        Some(ref player) => player.surface().clone(),
        None => {
            app.add_log("Nothing to save yet".into());
            return;
        }
    };
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("frame.png")
            .save_file()
        {
            if let Err(e) = surface.save_png(&path) {
                tracing::warn!(error = %e, "failed to save frame");
            }
        }
    });
}
