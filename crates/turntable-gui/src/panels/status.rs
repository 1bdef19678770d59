use crate::app::TurntableApp;

pub fn show(ctx: &egui::Context, app: &mut TurntableApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        match app.player {
            Some(ref player) if !player.is_ready() => {
                let cache = player.cache();
                let fraction = cache.settled_count() as f32 / cache.len().max(1) as f32;
                let detail = format!(
                    "Loading frames ({}/{}) {}%",
                    cache.settled_count(),
                    cache.len(),
                    player.progress_percent()
                );
                ui.add(egui::ProgressBar::new(fraction).text(detail).animate(true));
            }
            _ => {
                // Invisible placeholder: same height, no animation
                ui.add(egui::ProgressBar::new(0.0).text(""));
            }
        }

        ui.horizontal(|ui| {
            if let Some(ref player) = app.player {
                ui.label(format!(
                    "Frame {}/{}",
                    player.current_frame() + 1,
                    player.frame_count()
                ));
                ui.separator();
                let failed = player.cache().failed_count();
                if failed > 0 {
                    ui.colored_label(
                        egui::Color32::from_rgb(220, 80, 60),
                        format!("{failed} unavailable"),
                    );
                    ui.separator();
                }
                if player.is_playing() {
                    ui.label("Playing");
                    ui.separator();
                }
            }
            if let Some(ref info) = app.info {
                ui.label(format!("{}x{}", info.width, info.height));
            }
        });

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for msg in &app.log_messages {
                    ui.label(msg);
                }
            });
    });
}
