#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Contact,
}

impl Route {
    /// Resolves a literal path (`/`, `/about`, ...) to a page.
    #[must_use]
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/projects" => Some(Route::Projects),
            "/contact" => Some(Route::Contact),
            _ => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn all() -> &'static [Route] {
        &[Route::Home, Route::About, Route::Projects, Route::Contact]
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Route::Home => Route::About,
            Route::About => Route::Projects,
            Route::Projects => Route::Contact,
            Route::Contact => Route::Home,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Route::Home => Route::Contact,
            Route::About => Route::Home,
            Route::Projects => Route::About,
            Route::Contact => Route::Projects,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Fullstack,
    Frontend,
    Live,
    Design,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Beta,
    Live,
    Maintenance,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Beta => "Beta",
            ProjectStatus::Live => "Live",
            ProjectStatus::Maintenance => "Maintenance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectTab {
    #[default]
    All,
    Fullstack,
    Frontend,
    Design,
}

impl ProjectTab {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ProjectTab::All => "All Projects",
            ProjectTab::Fullstack => "Fullstack",
            ProjectTab::Frontend => "Frontend",
            ProjectTab::Design => "UI/UX",
        }
    }

    #[must_use]
    pub fn all() -> &'static [ProjectTab] {
        &[
            ProjectTab::All,
            ProjectTab::Fullstack,
            ProjectTab::Frontend,
            ProjectTab::Design,
        ]
    }

    #[must_use]
    pub fn next(self) -> Self {
        let tabs = Self::all();
        let idx = tabs.iter().position(|t| *t == self).unwrap_or(0);
        tabs[(idx + 1) % tabs.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let tabs = Self::all();
        let idx = tabs.iter().position(|t| *t == self).unwrap_or(0);
        tabs[(idx + tabs.len() - 1) % tabs.len()]
    }

    /// "All" shows everything; other tabs match the category exactly.
    #[must_use]
    pub fn includes(&self, project: &Project) -> bool {
        match self {
            ProjectTab::All => true,
            ProjectTab::Fullstack => project.category == ProjectCategory::Fullstack,
            ProjectTab::Frontend => project.category == ProjectCategory::Frontend,
            ProjectTab::Design => project.category == ProjectCategory::Design,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub demo: Option<&'static str>,
    pub github: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expertise {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingTier {
    pub tier: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub years: &'static str,
    pub title: &'static str,
    pub place: &'static str,
    pub description: &'static str,
    pub grade: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub handle: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone_display: &'static str,
    /// Digits only, as expected by wa.me links.
    pub whatsapp: &'static str,
}
