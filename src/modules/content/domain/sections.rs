//! Static registry of the home page sections and the collections behind them.

use serde::Serialize;
use utoipa::ToSchema;

/// Server-side tables the site reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Hero,
    About,
    Skills,
    Projects,
    ProjectDetails,
    PastProjects,
    Posts,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Hero,
        Collection::About,
        Collection::Skills,
        Collection::Projects,
        Collection::ProjectDetails,
        Collection::PastProjects,
        Collection::Posts,
    ];

    pub fn table(self) -> &'static str {
        match self {
            Collection::Hero => "hero",
            Collection::About => "about",
            Collection::Skills => "skills",
            Collection::Projects => "projects",
            Collection::ProjectDetails => "project_details",
            Collection::PastProjects => "past_projects",
            Collection::Posts => "posts",
        }
    }

    pub fn table_names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Collection::table)
    }
}

/// How a section lays out its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    Banner,
    Profile,
    CardGrid,
    ProjectCards,
    PostList,
    ContactLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Blog,
    Contact,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Blog,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Blog => "Thoughts",
            Section::Contact => "Contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Section::Hero => "",
            Section::About => "About Me",
            Section::Skills => "Skills",
            Section::Projects => "Featured Projects",
            Section::Blog => "Latest Thoughts",
            Section::Contact => "Get in Touch",
        }
    }

    /// Contact is static and has no backing collection.
    pub fn collection(self) -> Option<Collection> {
        match self {
            Section::Hero => Some(Collection::Hero),
            Section::About => Some(Collection::About),
            Section::Skills => Some(Collection::Skills),
            Section::Projects => Some(Collection::Projects),
            Section::Blog => Some(Collection::Posts),
            Section::Contact => None,
        }
    }

    pub fn template(self) -> Template {
        match self {
            Section::Hero => Template::Banner,
            Section::About => Template::Profile,
            Section::Skills => Template::CardGrid,
            Section::Projects => Template::ProjectCards,
            Section::Blog => Template::PostList,
            Section::Contact => Template::ContactLinks,
        }
    }

    /// Text shown when the section has no rows.
    pub fn empty_text(self) -> Option<&'static str> {
        match self {
            Section::Skills => Some("No skills yet. Add some to your database!"),
            Section::Projects => Some("No projects yet. Add some to your database!"),
            Section::Blog => Some("No blog posts yet."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn anchors_are_unique_and_in_page_order() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["hero", "about", "skills", "projects", "blog", "contact"]
        );
        let unique: HashSet<_> = anchors.iter().collect();
        assert_eq!(unique.len(), anchors.len());
    }

    #[test]
    fn sections_bind_expected_collections() {
        assert_eq!(Section::Blog.collection(), Some(Collection::Posts));
        assert_eq!(Section::Contact.collection(), None);
        assert_eq!(Section::Projects.template(), Template::ProjectCards);
    }

    #[test]
    fn every_collection_has_a_table() {
        let tables: Vec<_> = Collection::table_names().collect();
        assert_eq!(tables.len(), 7);
        assert!(tables.contains(&"past_projects"));
        assert!(tables.contains(&"project_details"));
    }
}
