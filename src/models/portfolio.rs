use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub tooltip: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub bio: &'static str,
    pub resume_url: &'static str,
    pub frontend: Vec<Skill>,
    pub backend: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech: Vec<&'static str>,
    pub icon: &'static str,
    pub gradient: &'static str,
    pub github: &'static str,
    pub demo: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub tooltip: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub hover_color: &'static str,
    pub new_tab: bool,
}

impl SocialLink {
    pub fn new(
        label: &'static str,
        href: &'static str,
        tooltip: &'static str,
        icon: &'static str,
        color: &'static str,
        hover_color: &'static str,
    ) -> Self {
        SocialLink {
            label,
            href,
            tooltip,
            icon,
            color,
            hover_color,
            // mailto: links open the mail client in place
            new_tab: !href.starts_with("mailto:"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioContent {
    pub hero: Hero,
    pub about: About,
    pub projects: Vec<Project>,
    pub socials: Vec<SocialLink>,
    pub nav: Vec<NavItem>,
}

impl PortfolioContent {
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
