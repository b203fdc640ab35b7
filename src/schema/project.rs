use serde::{Deserialize, Serialize};

use super::Id;

/// Fixed set of tags a project can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Laravel,
    React,
    Fullstack,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub technologies: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
}

/// Insert shape for [`Project`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl NewProject {
    /// A non-featured project with no links.
    pub fn new<T, S>(
        title: impl Into<String>,
        description: impl Into<String>,
        category: ProjectCategory,
        technologies: T,
    ) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            technologies: technologies.into_iter().map(Into::into).collect(),
            demo_url: None,
            github_url: None,
            image_url: None,
            featured: false,
        }
    }

    pub fn demo_url(mut self, url: impl Into<String>) -> Self {
        self.demo_url = Some(url.into());
        self
    }

    pub fn github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub(crate) fn into_record(self, id: Id) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            technologies: self.technologies,
            demo_url: self.demo_url,
            github_url: self.github_url,
            image_url: self.image_url,
            featured: self.featured,
        }
    }
}
