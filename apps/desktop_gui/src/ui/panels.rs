//! Widgets for the showcase page. None of these touch app state; they report
//! what the user did and the app decides what it means.

use client_core::{FAILURE_CAPTION, FAILURE_TITLE};
use eframe::egui;
use egui::TextureHandle;
use shared::domain::{Category, Project};

use crate::ui::theme;

pub fn header(ui: &mut egui::Ui, logo: Option<TextureHandle>) {
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        match logo {
            Some(texture) => {
                ui.add(egui::Image::new(&texture).max_height(theme::LOGO_HEIGHT));
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(theme::LOGO_HEIGHT * 3.0, theme::LOGO_HEIGHT),
                    egui::Sense::hover(),
                );
                ui.painter().rect_filled(rect, 4.0, theme::PLACEHOLDER);
            }
        }
    });
}

/// Returns whatever the user picked this frame, including the active category.
pub fn category_selector(ui: &mut egui::Ui, selected: Category) -> Option<Category> {
    let mut choice = selected;
    let mut picked = None;
    egui::ComboBox::from_id_salt("category_select")
        .selected_text(choice.display_text())
        .show_ui(ui, |ui| {
            for category in Category::ALL {
                if ui
                    .selectable_value(&mut choice, category, category.display_text())
                    .clicked()
                {
                    picked = Some(category);
                }
            }
        });
    picked
}

pub fn loading_view(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.add(
            egui::Spinner::new()
                .size(theme::SPINNER_SIZE)
                .color(theme::ACCENT),
        );
    });
}

/// `image_for` yields the card texture and whether its download failed.
pub fn project_list(
    ui: &mut egui::Ui,
    projects: &[Project],
    mut image_for: impl FnMut(&str) -> (Option<TextureHandle>, bool),
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for project in projects {
                    let (texture, failed) = image_for(&project.image_url);
                    project_card(ui, project, texture, failed);
                }
            });
        });
}

fn project_card(
    ui: &mut egui::Ui,
    project: &Project,
    texture: Option<TextureHandle>,
    image_failed: bool,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(theme::CARD_IMAGE_SIZE.x);
        ui.vertical(|ui| {
            match texture {
                Some(texture) => {
                    ui.add(egui::Image::new(&texture).fit_to_exact_size(theme::CARD_IMAGE_SIZE));
                }
                None => {
                    let (rect, _) =
                        ui.allocate_exact_size(theme::CARD_IMAGE_SIZE, egui::Sense::hover());
                    ui.painter().rect_filled(rect, 4.0, theme::PLACEHOLDER);
                    if !image_failed {
                        ui.put(rect, egui::Spinner::new());
                    }
                }
            }
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&project.name).strong());
        });
    });
}

/// Returns true when Retry was clicked.
pub fn failure_view(ui: &mut egui::Ui, illustration: Option<TextureHandle>) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        if let Some(texture) = illustration {
            ui.add(egui::Image::new(&texture).max_height(theme::FAILURE_IMAGE_HEIGHT));
        }
        ui.heading(FAILURE_TITLE);
        ui.label(FAILURE_CAPTION);
        ui.add_space(12.0);
        let button = egui::Button::new(egui::RichText::new("Retry").color(egui::Color32::WHITE))
            .fill(theme::ACCENT);
        retry = ui.add(button).clicked();
    });
    retry
}
