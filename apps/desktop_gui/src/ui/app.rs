use std::time::Duration;

use client_core::{ShowcaseConfig, ShowcaseEvent, ShowcaseState, ShowcaseView};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{category_pick, plan_image_fetches, reduce};
use crate::ui::{images::ImageCache, panels};

const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct ShowcaseApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    logo_url: String,
    failure_image_url: String,

    showcase: ShowcaseState,
    images: ImageCache,
    mounted: bool,

    /// App-level problems (backend down, queue full). Listing failures live
    /// in `showcase` instead.
    status: Option<String>,
}

impl ShowcaseApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        config: &ShowcaseConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            logo_url: config.logo_url.to_string(),
            failure_image_url: config.failure_image_url.to_string(),
            showcase: ShowcaseState::new(),
            images: ImageCache::default(),
            mounted: false,
            status: None,
        }
    }

    fn dispatch(&mut self, event: ShowcaseEvent) {
        if let Some(cmd) = reduce(&mut self.showcase, event) {
            self.send(cmd);
        }
        for cmd in plan_image_fetches(&self.showcase, &mut self.images) {
            self.send(cmd);
        }
    }

    fn request_image(&mut self, url: String) {
        if self.images.begin_request(&url) {
            self.send(BackendCommand::FetchImage { url });
        }
    }

    fn send(&mut self, cmd: BackendCommand) {
        let image_url = match &cmd {
            BackendCommand::FetchImage { url } => Some(url.clone()),
            BackendCommand::FetchProjects(_) => None,
        };
        match dispatch_backend_command(&self.cmd_tx, cmd) {
            Ok(()) => {}
            Err(err) => {
                if let Some(url) = image_url {
                    self.images.forget(&url);
                }
                tracing::warn!("{}", err.message());
                self.status = Some(err.status_line());
            }
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Error(err) => {
                    tracing::error!(context = ?err.context(), "{}", err.message());
                    self.status = Some(err.status_line());
                }
                UiEvent::FetchCompleted(completion) => self.dispatch(completion),
                UiEvent::ImageLoaded { url, image } => self.images.store_loaded(url, image),
                UiEvent::ImageFailed { url, reason } => {
                    tracing::debug!(%url, "image unavailable: {reason}");
                    self.images.store_failed(url);
                }
            }
        }
    }

    fn needs_polling(&self) -> bool {
        matches!(self.showcase.view(), ShowcaseView::Loading) || self.images.has_pending()
    }

    fn show_page(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        let selected = self.showcase.selected();
        if let Some(event) = panels::category_selector(ui, selected)
            .and_then(|picked| category_pick(selected, picked))
        {
            self.dispatch(event);
        }
        ui.add_space(12.0);

        let ctx = ui.ctx().clone();
        match self.showcase.view() {
            ShowcaseView::Empty => {}
            ShowcaseView::Loading => panels::loading_view(ui),
            ShowcaseView::List(projects) => {
                let images = &mut self.images;
                panels::project_list(ui, projects, |url| {
                    (images.texture(&ctx, url), images.is_failed(url))
                });
            }
            ShowcaseView::Failure => {
                self.request_image(self.failure_image_url.clone());
                let illustration = self.images.texture(&ctx, &self.failure_image_url);
                if panels::failure_view(ui, illustration) {
                    self.dispatch(ShowcaseEvent::Retry);
                }
            }
        }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.mounted {
            self.mounted = true;
            self.request_image(self.logo_url.clone());
            self.dispatch(ShowcaseEvent::Mounted);
        }

        self.process_ui_events();

        egui::TopBottomPanel::top("showcase_nav").show(ctx, |ui| {
            ui.add_space(6.0);
            let logo = self.images.texture(ctx, &self.logo_url);
            panels::header(ui, logo);
            ui.add_space(6.0);
        });

        if let Some(status) = &self.status {
            egui::TopBottomPanel::bottom("showcase_status").show(ctx, |ui| {
                ui.colored_label(ui.visuals().error_fg_color, status);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| self.show_page(ui));

        if self.needs_polling() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
