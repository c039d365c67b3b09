use serde::{Deserialize, Serialize};

/// Feature flags from the config document. Everything defaults off:
/// a site without a config document renders text-only, no terminal.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub images_enabled: bool,
    pub terminal_enabled: bool,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Navigation {
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

/// Button label overrides. Absent keys keep the built-in labels.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Buttons {
    pub hero_primary: Option<String>,
    pub hero_secondary: Option<String>,
    pub hero_download: Option<String>,
    pub header_cta: Option<String>,
    pub contact_submit: Option<String>,
    pub form_title: Option<String>,
    pub form_helper: Option<String>,
}

/// Per-section title/subtitle overrides.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionTitles {
    pub about: SectionHeading,
    pub skills: SectionHeading,
    pub experience: SectionHeading,
    pub personal_projects: SectionHeading,
    pub education: SectionHeading,
    pub contact: SectionHeading,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeading {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

impl SectionHeading {
    pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(default)
    }
}

/// Labels for the three project filter tabs.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterLabels {
    pub all: Option<String>,
    pub active: Option<String>,
    pub archived: Option<String>,
}

impl FilterLabels {
    pub fn label_for<'a>(&'a self, filter: &str, default: &'a str) -> &'a str {
        let label = match filter {
            "all" => self.all.as_deref(),
            "active" => self.active.as_deref(),
            "archived" => self.archived.as_deref(),
            _ => None,
        };
        label.unwrap_or(default)
    }
}
