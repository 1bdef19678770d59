use turntable_core::scrub::ScrollMetrics;

use crate::app::TurntableApp;

/// Height of the simulated portfolio page, in viewport heights. The
/// animation scrubs across the first 85% of its scrollable distance and
/// holds the final frame through the rest.
const PAGE_VIEWPORT_SPAN: f32 = 7.0;

pub fn show(ctx: &egui::Context, app: &mut TurntableApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if app.player.is_none() {
            show_placeholder(ui);
            return;
        }

        let width = rect.width().round().max(1.0) as u32;
        let height = rect.height().round().max(1.0) as u32;
        app.viewport_size = (width, height);
        app.scrollable = rect.height() * (PAGE_VIEWPORT_SPAN - 1.0);

        let mut dirty = false;
        {
            let player = app.player.as_mut().expect("player checked above");

            if (width, height) != (player.surface().width(), player.surface().height())
                && player.resize(width, height).is_ok()
            {
                dirty = true;
            }

            // Wheel input drives the simulated page; the page position
            // drives the frame.
            let response = ui.allocate_rect(rect, egui::Sense::hover());
            let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll_delta != 0.0 && response.hovered() {
                app.scroll_offset =
                    (app.scroll_offset - scroll_delta).clamp(0.0, app.scrollable);
                dirty |= player.on_scroll(ScrollMetrics {
                    offset: app.scroll_offset as f64,
                    content_height: (rect.height() * PAGE_VIEWPORT_SPAN) as f64,
                    viewport_height: rect.height() as f64,
                });
            }
        }

        if dirty {
            app.refresh_texture(ctx);
        }

        if let Some(ref texture) = app.texture {
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        draw_overlays(ui, rect, app);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a frame sequence to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn draw_overlays(ui: &mut egui::Ui, rect: egui::Rect, app: &TurntableApp) {
    let Some(ref player) = app.player else { return };

    if let Some(err) = player.first_frame_error() {
        draw_failure_notice(ui, rect, err);
        return;
    }

    if !player.is_ready() {
        draw_loading_overlay(ui, rect, player.progress_percent());
    }
}

fn draw_loading_overlay(ui: &mut egui::Ui, rect: egui::Rect, percent: u8) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(140));
    ui.painter().text(
        rect.center() - egui::vec2(0.0, 28.0),
        egui::Align2::CENTER_CENTER,
        "Loading turntable...",
        egui::FontId::proportional(20.0),
        egui::Color32::WHITE,
    );

    let bar_rect =
        egui::Rect::from_center_size(rect.center(), egui::vec2(rect.width().min(420.0), 18.0));
    ui.put(
        bar_rect,
        egui::ProgressBar::new(percent as f32 / 100.0).text(format!("{percent}% loaded")),
    );
}

fn draw_failure_notice(ui: &mut egui::Ui, rect: egui::Rect, err: &str) {
    let notice_rect = egui::Rect::from_center_size(
        egui::pos2(rect.center().x, rect.top() + 40.0),
        egui::vec2(rect.width().min(560.0), 44.0),
    );
    ui.painter()
        .rect_filled(notice_rect, 6.0, egui::Color32::from_rgb(120, 30, 30));
    ui.painter().text(
        notice_rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("Could not load the first frame: {err}"),
        egui::FontId::proportional(14.0),
        egui::Color32::WHITE,
    );
}
