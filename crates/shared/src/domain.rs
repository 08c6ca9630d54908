use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownCategory;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(ProjectId);

/// Filter applied to the project listing. Order of [`Category::ALL`] is the
/// order the selector presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    All,
    Static,
    Responsive,
    Dynamic,
    React,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Static,
        Category::Responsive,
        Category::Dynamic,
        Category::React,
    ];

    /// Machine id sent as the `category` query parameter.
    pub fn id(self) -> &'static str {
        match self {
            Category::All => "ALL",
            Category::Static => "STATIC",
            Category::Responsive => "RESPONSIVE",
            Category::Dynamic => "DYNAMIC",
            Category::React => "REACT",
        }
    }

    pub fn display_text(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Static => "Static",
            Category::Responsive => "Responsive",
            Category::Dynamic => "Dynamic",
            Category::React => "React",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Display shape of a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_is_first_in_selector_order() {
        assert_eq!(Category::default(), Category::ALL[0]);
        assert_eq!(Category::default(), Category::All);
    }

    #[test]
    fn parses_every_machine_id() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn rejects_unknown_or_lowercase_ids() {
        assert_eq!(
            "react".parse::<Category>(),
            Err(UnknownCategory("react".to_string()))
        );
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn labels_match_selector_text() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.display_text()).collect();
        assert_eq!(labels, ["All", "Static", "Responsive", "Dynamic", "React"]);
    }

    #[test]
    fn category_serializes_as_machine_id() {
        let json = serde_json::to_string(&Category::Responsive).expect("serialize");
        assert_eq!(json, "\"RESPONSIVE\"");
    }

    #[test]
    fn project_serializes_image_url_as_camel_case() {
        let project = Project {
            id: ProjectId("1".to_string()),
            name: "Repo Analyzer".to_string(),
            image_url: "http://x/1.png".to_string(),
        };
        let value = serde_json::to_value(&project).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({"id": "1", "name": "Repo Analyzer", "imageUrl": "http://x/1.png"})
        );
    }
}
