use turntable_core::surface::Surface;

/// Convert the player surface (RGBA8) to an egui ColorImage for upload.
pub fn surface_to_color_image(surface: &Surface) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [surface.width() as usize, surface.height() as usize],
        surface.as_raw(),
    )
}
