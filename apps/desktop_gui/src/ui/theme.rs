use eframe::egui;
use egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(0x32, 0x8a, 0xf2);
pub const PLACEHOLDER: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0);
pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(0xf8, 0xfa, 0xfc);

pub const CARD_IMAGE_SIZE: egui::Vec2 = egui::vec2(280.0, 180.0);
pub const LOGO_HEIGHT: f32 = 36.0;
pub const FAILURE_IMAGE_HEIGHT: f32 = 240.0;
pub const SPINNER_SIZE: f32 = 50.0;

pub fn showcase_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.selection.bg_fill = ACCENT;
    visuals.hyperlink_color = ACCENT;
    visuals.panel_fill = PAGE_BACKGROUND;
    visuals
}
