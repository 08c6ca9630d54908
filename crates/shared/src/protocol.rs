use serde::{Deserialize, Serialize};

use crate::domain::{Project, ProjectId};

/// Project record as the listing endpoint returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProject {
    pub id: ProjectId,
    pub name: String,
    pub image_url: String,
}

/// Body of `GET <endpoint>?category=<id>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<RawProject>,
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            image_url: raw.image_url,
        }
    }
}

impl ProjectsResponse {
    pub fn into_projects(self) -> Vec<Project> {
        self.projects.into_iter().map(Project::from).collect()
    }
}
