//! Backend commands queued from UI to backend worker.

use client_core::FetchRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    FetchProjects(FetchRequest),
    FetchImage { url: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchProjects(_) => "fetch_projects",
            BackendCommand::FetchImage { .. } => "fetch_image",
        }
    }
}
