//! Page models served by the routes. Every optional row field is already
//! resolved to its display text or placeholder image here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::SiteProfile;
use crate::modules::content::application::ports::incoming::use_cases::{HomeSections, ProjectPage};
use crate::modules::content::domain::entities::{About, Hero, PastProject, Post, Project, Skill};
use crate::modules::content::domain::sections::{Section, Template};
use crate::modules::presentation::{
    MasterDetail, SelectorView, LOADING_BOUNCE, MOBILE_BREAKPOINT, SCROLL_TOP_THRESHOLD,
};
use crate::shared::assets::{AssetResolver, ImageSlot};

pub const DEFAULT_HERO_TITLE: &str = "Your Title";
pub const DEFAULT_HERO_SUBTITLE: &str = "Your subtitle goes here.";
pub const DEFAULT_ABOUT_HEADING: &str = "About Me";
pub const DEFAULT_ABOUT_CONTENT: &str = "This is where you can write about yourself.";
pub const DEFAULT_SUMMARY: &str = "No summary available.";
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";
pub const CONTACT_BLURB: &str = "This is where you can add your contact links.";
pub const PAST_PROJECTS_HEADING: &str = "Past Projects";
pub const PAST_PROJECTS_INTRO: &str =
    "A collection of older projects: experiments, builds, and examples to learn from.";

// ============================================================================
// Shared
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LinkView {
    #[schema(example = "Projects")]
    pub label: String,
    #[schema(example = "#projects")]
    pub href: String,
    /// Opens in a new tab.
    pub external: bool,
}

impl LinkView {
    fn internal(label: &str, href: String) -> Self {
        Self {
            label: label.to_string(),
            href,
            external: false,
        }
    }

    fn external(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            external: true,
        }
    }
}

/// A titled home page block with its rows and the text shown when empty.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ListSection<T> {
    pub anchor: String,
    pub heading: String,
    pub template: Template,
    pub items: Vec<T>,
    pub empty_text: Option<String>,
}

impl<T> ListSection<T> {
    fn new(section: Section, items: Vec<T>) -> Self {
        Self {
            anchor: section.anchor().to_string(),
            heading: section.heading().to_string(),
            template: section.template(),
            empty_text: section
                .empty_text()
                .filter(|_| items.is_empty())
                .map(str::to_string),
            items,
        }
    }
}

// ============================================================================
// Home
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    /// Absent when no background is stored; the banner then shows only the
    /// animated gradient.
    pub background_url: Option<String>,
    pub background_color: Option<String>,
    pub loading_logo_url: String,
    pub call_to_action: LinkView,
}

impl HeroView {
    pub fn build(hero: Option<Hero>, assets: &AssetResolver) -> Self {
        let hero = hero.as_ref();
        Self {
            title: hero
                .map(|h| h.title.clone())
                .unwrap_or_else(|| DEFAULT_HERO_TITLE.to_string()),
            subtitle: hero
                .and_then(|h| h.subtitle.clone())
                .unwrap_or_else(|| DEFAULT_HERO_SUBTITLE.to_string()),
            background_url: assets.resolve_present(hero.and_then(|h| h.background_url.as_deref())),
            background_color: hero.and_then(|h| h.background_color.clone()),
            loading_logo_url: ImageSlot::LoadingLogo.placeholder(),
            call_to_action: LinkView::internal("Learn More", format!("#{}", Section::About.anchor())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AboutView {
    pub anchor: String,
    pub heading: String,
    pub content: String,
    pub avatar_url: Option<String>,
}

impl AboutView {
    pub fn build(about: Option<About>, assets: &AssetResolver) -> Self {
        let about = about.as_ref();
        Self {
            anchor: Section::About.anchor().to_string(),
            heading: about
                .map(|a| a.heading.clone())
                .unwrap_or_else(|| DEFAULT_ABOUT_HEADING.to_string()),
            content: about
                .map(|a| a.content.clone())
                .unwrap_or_else(|| DEFAULT_ABOUT_CONTENT.to_string()),
            avatar_url: assets.resolve_present(about.and_then(|a| a.avatar_url.as_deref())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillView {
    pub id: String,
    pub name: String,
    pub level: Option<String>,
    pub category: Option<String>,
}

impl From<Skill> for SkillView {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id.to_string(),
            name: skill.name,
            level: skill.level,
            category: skill.category,
        }
    }
}

/// Home page card. The same fields feed its quick-peek overlay.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectCardView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub cover_url: String,
    #[schema(example = "/projects/4b1e")]
    pub details_href: String,
}

impl ProjectCardView {
    pub fn build(project: Project, assets: &AssetResolver) -> Self {
        Self {
            details_href: format!("/projects/{}", project.id),
            id: project.id.to_string(),
            summary: project
                .summary
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            cover_url: assets.resolve(project.cover_url.as_deref(), ImageSlot::HomeProjectCover),
            title: project.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PostView {
    pub id: String,
    pub title: Option<String>,
    pub content: String,
    pub tagline: Option<String>,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            tagline: post.tagline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactView {
    pub anchor: String,
    pub heading: String,
    pub blurb: String,
    pub links: Vec<LinkView>,
}

impl ContactView {
    pub fn build(site: &SiteProfile) -> Self {
        Self {
            anchor: Section::Contact.anchor().to_string(),
            heading: Section::Contact.heading().to_string(),
            blurb: CONTACT_BLURB.to_string(),
            links: vec![
                LinkView::internal("Email", format!("mailto:{}", site.contact_email)),
                LinkView::external("LinkedIn", &site.linkedin_url),
                LinkView::external("GitHub", &site.github_url),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FooterView {
    pub year: i32,
    pub owner: String,
}

/// Client-side timing and breakpoints the page animates with.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BehaviorView {
    pub loading_bounce_ms: u64,
    pub scroll_top_threshold: f64,
    pub mobile_breakpoint: f64,
}

impl Default for BehaviorView {
    fn default() -> Self {
        Self {
            loading_bounce_ms: LOADING_BOUNCE.as_millis() as u64,
            scroll_top_threshold: SCROLL_TOP_THRESHOLD,
            mobile_breakpoint: MOBILE_BREAKPOINT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HomePageView {
    pub nav: Vec<LinkView>,
    pub hero: HeroView,
    pub about: AboutView,
    pub skills: ListSection<SkillView>,
    pub projects: ListSection<ProjectCardView>,
    pub blog: ListSection<PostView>,
    pub contact: ContactView,
    pub footer: FooterView,
    pub behavior: BehaviorView,
}

impl HomePageView {
    pub fn build(sections: HomeSections, site: &SiteProfile, assets: &AssetResolver, year: i32) -> Self {
        let projects = sections
            .projects
            .into_iter()
            .map(|p| ProjectCardView::build(p, assets))
            .collect();

        Self {
            nav: nav_links(site),
            hero: HeroView::build(sections.hero, assets),
            about: AboutView::build(sections.about, assets),
            skills: ListSection::new(
                Section::Skills,
                sections.skills.into_iter().map(SkillView::from).collect(),
            ),
            projects: ListSection::new(Section::Projects, projects),
            blog: ListSection::new(
                Section::Blog,
                sections.posts.into_iter().map(PostView::from).collect(),
            ),
            contact: ContactView::build(site),
            footer: FooterView {
                year,
                owner: site.owner.clone(),
            },
            behavior: BehaviorView::default(),
        }
    }
}

/// Section anchors in page order, then the CV link.
pub fn nav_links(site: &SiteProfile) -> Vec<LinkView> {
    Section::ALL
        .into_iter()
        .map(|s| LinkView::internal(s.nav_label(), format!("#{}", s.anchor())))
        .chain(std::iter::once(LinkView::external("CV", &site.cv_url)))
        .collect()
}

// ============================================================================
// Past projects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PastProjectNavItem {
    pub id: String,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PastProjectListItem {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PastProjectDetailView {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub screenshots: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub back: LinkView,
}

impl PastProjectDetailView {
    fn build(project: &PastProject, assets: &AssetResolver) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title.clone(),
            created_at: project.created_at,
            description: project
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            tech_stack: project.tech_stack.clone(),
            screenshots: project
                .screenshots
                .iter()
                .map(|s| assets.resolve(Some(s.as_str()), ImageSlot::PastProjectScreenshot))
                .collect(),
            repo_url: project.repo_url.clone(),
            demo_url: project.demo_url.clone(),
            back: LinkView::internal("Back to All Projects", "/past-projects".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PastProjectsContent {
    List {
        heading: String,
        intro: String,
        items: Vec<PastProjectListItem>,
    },
    Detail {
        project: PastProjectDetailView,
    },
    /// The requested id matched nothing; rendered as an empty detail.
    Missing {
        active_id: String,
        back: LinkView,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PastProjectsPageView {
    pub back: LinkView,
    pub nav: Vec<PastProjectNavItem>,
    pub content: PastProjectsContent,
}

impl PastProjectsPageView {
    pub fn build(selector: &MasterDetail<PastProject>, assets: &AssetResolver) -> Self {
        let nav = selector
            .items()
            .iter()
            .map(|p| PastProjectNavItem {
                id: p.id.to_string(),
                title: p.title.clone(),
                active: selector.is_active(p),
            })
            .collect();

        let content = match selector.view() {
            SelectorView::List(items) => PastProjectsContent::List {
                heading: PAST_PROJECTS_HEADING.to_string(),
                intro: PAST_PROJECTS_INTRO.to_string(),
                items: items
                    .iter()
                    .map(|p| PastProjectListItem {
                        id: p.id.to_string(),
                        title: p.title.clone(),
                        created_at: p.created_at,
                    })
                    .collect(),
            },
            SelectorView::Detail(project) => PastProjectsContent::Detail {
                project: PastProjectDetailView::build(project, assets),
            },
            SelectorView::Missing(id) => PastProjectsContent::Missing {
                active_id: id.to_string(),
                back: LinkView::internal("Back to All Projects", "/past-projects".to_string()),
            },
        };

        Self {
            back: LinkView::internal("Back to Home", "/".to_string()),
            nav,
            content,
        }
    }
}

// ============================================================================
// Project page
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectPageView {
    pub id: String,
    pub title: String,
    pub cover_url: String,
    /// Overview block; omitted when no description is stored.
    pub description: Option<String>,
    pub tech_stack: Vec<String>,
    pub links: Vec<LinkView>,
    pub screenshots: Vec<String>,
    pub back: LinkView,
}

impl ProjectPageView {
    pub fn build(page: ProjectPage, assets: &AssetResolver) -> Self {
        let ProjectPage { project, details } = page;

        let links = [("View Repo", &details.repo_url), ("Live Demo", &details.demo_url)]
            .into_iter()
            .filter_map(|(label, url)| url.as_deref().map(|u| LinkView::external(label, u)))
            .collect();

        Self {
            id: project.id.to_string(),
            cover_url: assets.resolve(project.cover_url.as_deref(), ImageSlot::ProjectPageCover),
            title: project.title,
            description: details.description.filter(|d| !d.trim().is_empty()),
            tech_stack: details.tech_stack,
            links,
            screenshots: details
                .screenshots
                .iter()
                .map(|s| assets.resolve(Some(s.as_str()), ImageSlot::ProjectScreenshot))
                .collect(),
            back: LinkView::internal("Back to Home", "/".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::entities::{ProjectDetails, RowId};

    fn at() -> DateTime<Utc> {
        "2024-03-01T00:00:00Z".parse().unwrap()
    }

    fn project(id: &str, summary: Option<&str>, cover: Option<&str>) -> Project {
        Project {
            id: RowId::from(id),
            title: format!("Project {id}"),
            summary: summary.map(str::to_string),
            cover_url: cover.map(str::to_string),
            is_archived: false,
            is_featured: true,
            created_at: at(),
        }
    }

    fn past(id: &str) -> PastProject {
        PastProject {
            id: RowId::from(id),
            title: format!("Old {id}"),
            description: None,
            tech_stack: vec!["Go".into()],
            repo_url: Some("https://github.com/x/y".into()),
            demo_url: None,
            screenshots: vec!["shots/1.png".into(), "".into()],
            created_at: at(),
        }
    }

    #[test]
    fn empty_home_renders_every_placeholder() {
        let view = HomePageView::build(
            HomeSections::default(),
            &SiteProfile::default(),
            &AssetResolver::default(),
            2026,
        );

        assert_eq!(view.hero.title, DEFAULT_HERO_TITLE);
        assert_eq!(view.hero.subtitle, DEFAULT_HERO_SUBTITLE);
        assert_eq!(view.hero.background_url, None);
        assert_eq!(view.hero.loading_logo_url, "https://placehold.co/80x80");
        assert_eq!(view.about.heading, DEFAULT_ABOUT_HEADING);
        assert_eq!(view.about.content, DEFAULT_ABOUT_CONTENT);
        assert_eq!(
            view.skills.empty_text.as_deref(),
            Some("No skills yet. Add some to your database!")
        );
        assert_eq!(
            view.projects.empty_text.as_deref(),
            Some("No projects yet. Add some to your database!")
        );
        assert_eq!(view.blog.empty_text.as_deref(), Some("No blog posts yet."));
        assert_eq!(view.footer.owner, "Your Name");
        assert_eq!(view.footer.year, 2026);
    }

    #[test]
    fn populated_section_has_no_empty_text() {
        let sections = HomeSections {
            projects: vec![project("p1", None, None)],
            ..HomeSections::default()
        };

        let view = HomePageView::build(sections, &SiteProfile::default(), &AssetResolver::default(), 2026);

        assert_eq!(view.projects.empty_text, None);
        let card = &view.projects.items[0];
        assert_eq!(card.summary, DEFAULT_SUMMARY);
        assert_eq!(card.cover_url, "https://placehold.co/400x300");
        assert_eq!(card.details_href, "/projects/p1");
    }

    #[test]
    fn nav_lists_sections_in_order_then_cv() {
        let links = nav_links(&SiteProfile::default());
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();

        assert_eq!(
            labels,
            vec!["Home", "About", "Skills", "Projects", "Thoughts", "Contact", "CV"]
        );
        assert_eq!(links[4].href, "#blog");
        assert!(links[6].external);
    }

    #[test]
    fn hero_background_joins_asset_base() {
        let assets = AssetResolver::new(Some("https://cdn.example.com".into()));
        let hero = Hero {
            id: RowId::from("h"),
            title: "Hi".into(),
            subtitle: Some("Sub".into()),
            background_url: Some("bg.jpg".into()),
            background_color: Some("#000".into()),
            created_at: at(),
        };

        let view = HeroView::build(Some(hero), &assets);

        assert_eq!(view.background_url.as_deref(), Some("https://cdn.example.com/bg.jpg"));
        assert_eq!(view.subtitle, "Sub");
        assert_eq!(view.call_to_action.href, "#about");
    }

    #[test]
    fn past_projects_list_marks_nothing_active() {
        let selector = MasterDetail::new(vec![past("a"), past("b")]);
        let view = PastProjectsPageView::build(&selector, &AssetResolver::default());

        assert!(view.nav.iter().all(|n| !n.active));
        match view.content {
            PastProjectsContent::List { items, heading, .. } => {
                assert_eq!(items.len(), 2);
                assert_eq!(heading, PAST_PROJECTS_HEADING);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn past_project_detail_resolves_placeholders() {
        let selector = MasterDetail::new(vec![past("a"), past("b")]).with_active(Some(RowId::from("b")));
        let view = PastProjectsPageView::build(&selector, &AssetResolver::default());

        assert!(view.nav[1].active);
        match view.content {
            PastProjectsContent::Detail { project } => {
                assert_eq!(project.id, "b");
                assert_eq!(project.description, DEFAULT_DESCRIPTION);
                assert_eq!(
                    project.screenshots,
                    vec!["shots/1.png".to_string(), "https://placehold.co/400x300".to_string()]
                );
            }
            other => panic!("expected detail, got {other:?}"),
        }
    }

    #[test]
    fn past_project_unknown_id_is_missing() {
        let selector = MasterDetail::new(vec![past("a")]).with_active(Some(RowId::from("nope")));
        let view = PastProjectsPageView::build(&selector, &AssetResolver::default());

        let json = serde_json::to_value(&view.content).unwrap();
        assert_eq!(json["kind"], "missing");
        assert_eq!(json["active_id"], "nope");
    }

    #[test]
    fn project_page_keeps_only_present_links() {
        let page = ProjectPage {
            project: project("p1", Some("Short"), None),
            details: ProjectDetails {
                project_id: RowId::from("p1"),
                description: Some("  ".into()),
                tech_stack: vec!["Rust".into()],
                repo_url: None,
                demo_url: Some("https://demo".into()),
                screenshots: vec!["".into()],
            },
        };

        let view = ProjectPageView::build(page, &AssetResolver::default());

        assert_eq!(view.cover_url, "https://placehold.co/1600x900");
        assert_eq!(view.description, None);
        assert_eq!(view.links.len(), 1);
        assert_eq!(view.links[0].label, "Live Demo");
        assert_eq!(view.screenshots, vec!["https://placehold.co/600x400"]);
    }
}
