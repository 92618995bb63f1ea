use std::fmt;

use serde::{Deserialize, Serialize};

// structs and types

pub type ProjectId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    FullStack,
    Frontend,
    Backend,
}

impl ProjectCategory {
    pub fn all() -> Vec<Self> {
        vec![Self::FullStack, Self::Frontend, Self::Backend]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullStack => "Full Stack",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
        }
    }
}

// a single card in the projects grid
//
// these are fixed when the site is built and never change at runtime
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub category: ProjectCategory,
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    pub featured: bool,
    pub demo_link: String,
    pub code_link: String,
}

pub const FILTER_ALL: &str = "All";

// CategoryFilter
//
// the selection is kept as a label rather than a ProjectCategory so that an
// unknown label can be represented; it simply matches nothing
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Only(label) => label,
        }
    }

    pub fn matches(&self, card: &ProjectCard) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => card.category.label() == label,
        }
    }

    // the buttons shown above the grid, in display order
    pub fn choices() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(ProjectCategory::all().into_iter().map(Self::from))
            .collect()
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> CategoryFilter {
        match label {
            FILTER_ALL => CategoryFilter::All,
            other => CategoryFilter::Only(other.to_owned()),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> CategoryFilter {
        CategoryFilter::from(label.as_str())
    }
}

impl From<ProjectCategory> for CategoryFilter {
    fn from(category: ProjectCategory) -> CategoryFilter {
        CategoryFilter::Only(category.label().to_owned())
    }
}

// ProjectFilter
//
// owns the active selection over a fixed list of cards
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectFilter {
    projects: Vec<ProjectCard>,
    active: CategoryFilter,
}

impl ProjectFilter {
    pub fn new(projects: Vec<ProjectCard>) -> Self {
        ProjectFilter {
            projects,
            active: CategoryFilter::All,
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<CategoryFilter>) {
        self.active = filter.into();
        tracing::debug!("project filter set to {}", self.active.label());
    }

    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    pub fn filtered(&self) -> Vec<&ProjectCard> {
        filter_projects(&self.projects, &self.active)
    }
}

// relative order of the input is preserved
pub fn filter_projects<'a>(projects: &'a [ProjectCard], filter: &CategoryFilter) -> Vec<&'a ProjectCard> {
    projects.iter().filter(|card| filter.matches(card)).collect()
}
