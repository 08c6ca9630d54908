//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{run_fetch, ProjectsClient, ShowcaseEvent};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::ui::images::decode_preview_image;

/// Starts the backend worker thread. Every command runs as its own task, so a
/// slow listing never holds up a newer one.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, client: ProjectsClient) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!(api_url = %client.api_url(), "backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                match cmd {
                    BackendCommand::FetchProjects(request) => {
                        tokio::spawn(async move {
                            let completion = run_fetch(&client, request).await;
                            deliver_completion(ui_tx, completion).await;
                        });
                    }
                    BackendCommand::FetchImage { url } => {
                        tokio::spawn(async move {
                            let event = fetch_and_decode_image(&client, url).await;
                            let _ = ui_tx.try_send(event);
                        });
                    }
                }
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    });
}

/// Listing results must reach the UI or the view stays on its spinner, so this
/// waits for room in the queue instead of dropping. Only a closed UI is ignored.
async fn deliver_completion(ui_tx: Sender<UiEvent>, completion: ShowcaseEvent) {
    let sent = tokio::task::spawn_blocking(move || ui_tx.send(UiEvent::FetchCompleted(completion)))
        .await;
    match sent {
        Ok(Ok(())) => {}
        Ok(Err(_)) => tracing::debug!("ui closed before fetch completion was delivered"),
        Err(err) => tracing::error!("fetch completion delivery task failed: {err}"),
    }
}

async fn fetch_and_decode_image(client: &ProjectsClient, url: String) -> UiEvent {
    let bytes = match client.fetch_image(&url).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(%url, error = ?err, "image fetch failed");
            return UiEvent::ImageFailed {
                url,
                reason: err.to_string(),
            };
        }
    };

    match tokio::task::spawn_blocking(move || decode_preview_image(&bytes)).await {
        Ok(Ok(image)) => UiEvent::ImageLoaded { url, image },
        Ok(Err(reason)) => {
            tracing::warn!(%url, "image decode failed: {reason}");
            UiEvent::ImageFailed { url, reason }
        }
        Err(err) => UiEvent::ImageFailed {
            url,
            reason: format!("image decode task failed: {err}"),
        },
    }
}
