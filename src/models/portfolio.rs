use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::config::{Buttons, Features, FilterLabels, Navigation, SectionTitles};

/// The aggregated content record for one page render.
/// Built once by the content loader, read-only everywhere else.
/// Every field is optional; renderers skip what is absent.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioRecord {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub summary: Option<String>,
    pub about: Option<String>,
    pub availability: Option<String>,
    pub cv_link: Option<String>,
    pub quick_facts: Vec<String>,

    pub contact: Option<Contact>,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Role>,
    pub personal_projects: Vec<PersonalProject>,
    pub education: Option<Education>,

    // Presentation config. The config document is shallow-merged over the
    // profile document, so these land on the same record.
    pub features: Features,
    pub navigation: Navigation,
    pub buttons: Buttons,
    pub sections: SectionTitles,
    pub project_filters: Option<FilterLabels>,
}

impl PortfolioRecord {
    /// Resolve an item's image path, honoring the global image flag.
    /// Disabled images are omitted entirely, not hidden.
    pub fn image_url<'a>(&self, image: Option<&'a str>) -> Option<&'a str> {
        if !self.features.images_enabled {
            return None;
        }
        image.filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub footer_links: Vec<FooterLink>,
    pub form: Option<ContactFormConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormConfig {
    pub endpoint: Option<String>,
    pub method: Option<String>,
    pub interests: Vec<String>,
    pub helper_messages: Vec<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub name: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub role: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub achievements: Achievements,
    pub projects: Vec<RoleProject>,
    pub tech: Vec<String>,
    pub image: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleProject {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub impact: Option<String>,
    pub tech: Vec<String>,
    pub image: Option<String>,
}

/// Achievement bullets for one role, grouped by category in document order.
///
/// Content documents have shipped several shapes over time: an object
/// mapping category name to a list of bullets, a flat list of bullets, and
/// the serialized group list itself. All three deserialize here; the flat
/// form becomes a single untitled group.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Achievements(pub Vec<AchievementGroup>);

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementGroup {
    pub category: Option<String>,
    pub items: Vec<String>,
}

impl Achievements {
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|g| g.items.is_empty())
    }
}

impl<'de> Deserialize<'de> for Achievements {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let groups = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(category, items)| AchievementGroup {
                    category: Some(category),
                    items: string_list(&items),
                })
                .collect(),
            Value::Array(entries) => {
                let mut groups = Vec::new();
                let mut loose = Vec::new();
                for entry in entries {
                    match entry {
                        Value::String(item) => loose.push(item),
                        Value::Object(_) => {
                            if let Ok(group) = serde_json::from_value::<AchievementGroup>(entry) {
                                groups.push(group);
                            }
                        }
                        _ => {}
                    }
                }
                if !loose.is_empty() {
                    groups.push(AchievementGroup {
                        category: None,
                        items: loose,
                    });
                }
                groups
            }
            Value::Null => Vec::new(),
            other => {
                return Err(serde::de::Error::custom(format!(
                    "achievements must be an object or an array, got {}",
                    other
                )))
            }
        };
        Ok(Achievements(groups))
    }
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub stars: Option<i64>,
    pub forks: Option<i64>,
    pub tech: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub image: Option<String>,
}

/// Project lifecycle flag. Anything that isn't "archived" counts as active,
/// matching how the content documents have always been written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Archived => "Archived",
        }
    }

    /// Exact-match filter semantics; "all" matches everything.
    pub fn matches(&self, filter: &str) -> bool {
        filter == "all" || filter == self.as_str()
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "archived" {
            ProjectStatus::Archived
        } else {
            ProjectStatus::Active
        })
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub period: Option<String>,
    pub location: Option<String>,
    pub gpa: Option<String>,
}
