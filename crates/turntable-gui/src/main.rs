mod app;
mod convert;
mod messages;
mod panels;
mod prefs;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Turntable"),
        ..Default::default()
    };

    eframe::run_native(
        "Turntable",
        options,
        Box::new(|cc| Ok(Box::new(app::TurntableApp::new(&cc.egui_ctx)))),
    )
}
