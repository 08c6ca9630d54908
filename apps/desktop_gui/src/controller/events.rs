//! UI/backend events and error modeling for the showcase controller.

use client_core::ShowcaseEvent;

use crate::ui::images::PreviewImage;

pub enum UiEvent {
    Error(UiError),
    FetchCompleted(ShowcaseEvent),
    ImageLoaded { url: String, image: PreviewImage },
    ImageFailed { url: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CommandQueue,
}

/// Problems with the app itself, as opposed to a failed listing, which is
/// part of the showcase state.
#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_line(&self) -> String {
        match self.context {
            UiErrorContext::BackendStartup => {
                format!("Backend worker failed to start; restart the app. ({})", self.message)
            }
            UiErrorContext::CommandQueue => self.message.clone(),
        }
    }
}
