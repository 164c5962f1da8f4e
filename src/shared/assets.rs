// src/shared/assets.rs

/// Host used for every image that has no stored reference.
pub const PLACEHOLDER_HOST: &str = "https://placehold.co";

/// Placeholder image of the given pixel size, e.g. `https://placehold.co/400x300`.
pub fn placeholder_url(width: u32, height: u32) -> String {
    format!("{PLACEHOLDER_HOST}/{width}x{height}")
}

/// Fixed placeholder sizes used by the page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    LoadingLogo,
    HomeProjectCover,
    ProjectPageCover,
    ProjectScreenshot,
    PastProjectScreenshot,
}

impl ImageSlot {
    pub fn size(self) -> (u32, u32) {
        match self {
            ImageSlot::LoadingLogo => (80, 80),
            ImageSlot::HomeProjectCover => (400, 300),
            ImageSlot::ProjectPageCover => (1600, 900),
            ImageSlot::ProjectScreenshot => (600, 400),
            ImageSlot::PastProjectScreenshot => (400, 300),
        }
    }

    pub fn placeholder(self) -> String {
        let (w, h) = self.size();
        placeholder_url(w, h)
    }
}

/// Turns stored image references into URLs a browser can load.
///
/// Absolute `http(s)` references pass through and relative ones are joined
/// onto the configured base. Missing or blank ones become the slot placeholder.
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    base_url: Option<String>,
}

impl AssetResolver {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty());
        Self { base_url }
    }

    pub fn resolve(&self, reference: Option<&str>, slot: ImageSlot) -> String {
        self.resolve_present(reference).unwrap_or_else(|| slot.placeholder())
    }

    /// Like [`resolve`](Self::resolve) with no placeholder, for templates
    /// that omit the element entirely when nothing is stored.
    pub fn resolve_present(&self, reference: Option<&str>) -> Option<String> {
        let r = reference.map(str::trim).filter(|r| !r.is_empty())?;
        if is_absolute(r) {
            return Some(r.to_string());
        }
        Some(match &self.base_url {
            Some(base) => format!("{}/{}", base, r.trim_start_matches('/')),
            None => r.to_string(),
        })
    }
}

fn is_absolute(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}
