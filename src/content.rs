use std::path::{Path, PathBuf};

use log::info;
use serde_json::{json, Map, Value};

use crate::models::portfolio::PortfolioRecord;

/// The seven content documents that make up one portfolio record.
/// Order matters only for error messages; the loader fetches all of them
/// at once and fails the whole load if any one is missing or malformed.
pub const DOCUMENTS: &[&str] = &[
    "profile",
    "contact",
    "skills",
    "experience",
    "personal-projects",
    "education",
    "config",
];

const DEFAULT_CONTENT_DIR: &str = "website/content";

/// Site-level settings from folio.toml. Absent file means defaults.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub site_url: String,
}

impl SiteSettings {
    pub fn load() -> Self {
        let config = server_config();
        let site_url = config
            .get("site")
            .and_then(|s| s.get("url"))
            .and_then(|v| v.as_str())
            .unwrap_or("http://localhost:8000")
            .trim_end_matches('/')
            .to_string();
        SiteSettings { site_url }
    }
}

/// Where content documents come from: a local directory (the normal
/// deployment) or a remote HTTP base such as a CDN prefix.
pub enum ContentSource {
    Dir(PathBuf),
    Remote {
        base: String,
        client: reqwest::Client,
    },
}

impl ContentSource {
    /// Build the source from folio.toml. `[content] url` wins over
    /// `[content] dir`; with neither, documents live in website/content/.
    pub fn configured() -> Self {
        let config = server_config();
        let content = config.get("content");

        if let Some(base) = content
            .and_then(|c| c.get("url"))
            .and_then(|v| v.as_str())
        {
            info!("Content source: remote base {}", base);
            return ContentSource::Remote {
                base: base.trim_end_matches('/').to_string(),
                client: reqwest::Client::new(),
            };
        }

        let dir = content
            .and_then(|c| c.get("dir"))
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_CONTENT_DIR);
        info!("Content source: directory {}", dir);
        ContentSource::Dir(PathBuf::from(dir))
    }

    pub fn dir(&self) -> Option<&Path> {
        match self {
            ContentSource::Dir(path) => Some(path),
            ContentSource::Remote { .. } => None,
        }
    }

    /// Fetch and parse one document. Any I/O error, non-success status,
    /// or parse error is a load failure for the caller to surface.
    async fn fetch(&self, doc: &str) -> Result<Value, String> {
        match self {
            ContentSource::Dir(dir) => {
                let path = dir.join(format!("{}.json", doc));
                let bytes = rocket::tokio::fs::read(&path)
                    .await
                    .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
                serde_json::from_slice(&bytes)
                    .map_err(|e| format!("failed to parse {}: {}", path.display(), e))
            }
            ContentSource::Remote { base, client } => {
                let url = format!("{}/{}.json", base, doc);
                let response = client
                    .get(&url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| format!("failed to fetch {}: {}", url, e))?;
                response
                    .json()
                    .await
                    .map_err(|e| format!("failed to parse {}: {}", url, e))
            }
        }
    }
}

/// Load the aggregated portfolio record. All seven fetches are issued
/// immediately; the join fails fast on the first error, there is no
/// partial-success mode and no retry.
pub async fn load_portfolio(source: &ContentSource) -> Result<PortfolioRecord, String> {
    let (profile, contact, skills, experience, personal_projects, education, config) =
        rocket::tokio::try_join!(
            source.fetch("profile"),
            source.fetch("contact"),
            source.fetch("skills"),
            source.fetch("experience"),
            source.fetch("personal-projects"),
            source.fetch("education"),
            source.fetch("config"),
        )?;

    let merged = aggregate(
        profile,
        contact,
        skills,
        experience,
        personal_projects,
        education,
        config,
    )?;

    serde_json::from_value(merged).map_err(|e| format!("content documents are malformed: {}", e))
}

/// Assemble the raw record: the profile document is the base, the section
/// documents land under their own keys, and the config document is
/// shallow-merged over the top as an override layer.
pub fn aggregate(
    profile: Value,
    contact: Value,
    skills: Value,
    experience: Value,
    personal_projects: Value,
    education: Value,
    config: Value,
) -> Result<Value, String> {
    let mut root = match profile {
        Value::Object(map) => map,
        _ => return Err("profile document must be a JSON object".to_string()),
    };

    root.insert("contact".to_string(), contact);
    root.insert("skills".to_string(), skills);
    root.insert("experience".to_string(), experience);
    root.insert("personal_projects".to_string(), personal_projects);
    root.insert("education".to_string(), education);

    shallow_merge(&mut root, config)?;

    Ok(Value::Object(root))
}

/// Top-level keys of `overlay` replace keys of `base`; nothing deeper.
fn shallow_merge(base: &mut Map<String, Value>, overlay: Value) -> Result<(), String> {
    match overlay {
        Value::Object(map) => {
            for (key, value) in map {
                base.insert(key, value);
            }
            Ok(())
        }
        Value::Null => Ok(()),
        _ => Err("config document must be a JSON object".to_string()),
    }
}

/// Write starter content documents so a fresh install serves a complete
/// page. Each document is only created if missing; existing content is
/// never touched.
pub fn seed_defaults(dir: &Path) -> Result<(), String> {
    let defaults: &[(&str, Value)] = &[
        (
            "profile",
            json!({
                "name": "Your Name",
                "headline": "Software Engineer",
                "subheadline": "I build reliable backend systems.",
                "summary": "Edit website/content/profile.json to introduce yourself.",
                "about": "A few paragraphs about you, your interests, and how you work.",
                "availability": "Open to opportunities",
                "cv_link": "",
                "quick_facts": ["Based somewhere", "Remote-friendly"]
            }),
        ),
        (
            "contact",
            json!({
                "email": "you@example.com",
                "linkedin": "https://www.linkedin.com/in/your-handle",
                "github": "https://github.com/your-handle",
                "footer_links": [
                    { "label": "GitHub", "url": "https://github.com/your-handle" },
                    { "label": "LinkedIn", "url": "https://www.linkedin.com/in/your-handle" }
                ],
                "form": {
                    "endpoint": "",
                    "method": "POST",
                    "interests": ["Backend role", "Consulting", "Just saying hi"],
                    "helper_messages": [
                        "Hi! I'd like to talk about a backend engineering role.",
                        "Hi! I have a project I could use your help with.",
                        "Hi! Just wanted to say your site looks great."
                    ]
                }
            }),
        ),
        (
            "skills",
            json!([
                { "name": "Languages", "items": ["Rust", "TypeScript", "SQL"] },
                { "name": "Infrastructure", "items": ["Linux", "Docker", "CI/CD"] }
            ]),
        ),
        (
            "experience",
            json!([
                {
                    "role": "Backend Engineer",
                    "company": "Example Corp",
                    "period": "2023 — Present",
                    "location": "Remote",
                    "summary": "Describe what you own and ship here.",
                    "achievements": {
                        "Impact": ["Replace these bullets with real outcomes."]
                    },
                    "tech": ["Rust", "PostgreSQL"]
                }
            ]),
        ),
        (
            "personal-projects",
            json!([
                {
                    "title": "folio",
                    "description": "This very site.",
                    "status": "active",
                    "tech": ["Rust", "Rocket"],
                    "github": "https://github.com/your-handle/folio"
                }
            ]),
        ),
        (
            "education",
            json!({
                "school": "Your University",
                "degree": "B.Sc., Computer Science",
                "period": "2016 — 2020",
                "location": "Your City",
                "gpa": ""
            }),
        ),
        (
            "config",
            json!({
                "features": { "images_enabled": false, "terminal_enabled": true },
                "navigation": {
                    "items": [
                        { "label": "About", "href": "#about" },
                        { "label": "Skills", "href": "#skills" },
                        { "label": "Experience", "href": "#experience" },
                        { "label": "Projects", "href": "#personal-projects" },
                        { "label": "Education", "href": "#education" },
                        { "label": "Contact", "href": "#contact" }
                    ]
                },
                "buttons": {
                    "hero_primary": "Get in touch",
                    "hero_secondary": "View experience",
                    "hero_download": "Download CV"
                },
                "sections": {
                    "about": { "title": "About" },
                    "skills": { "title": "Skills" },
                    "experience": { "title": "Experience" },
                    "personal_projects": {
                        "title": "Personal Projects",
                        "subtitle": "Things I build on my own time"
                    },
                    "education": { "title": "Education" },
                    "contact": { "title": "Contact" }
                },
                "project_filters": { "all": "All", "active": "Active", "archived": "Archived" }
            }),
        ),
    ];

    for (doc, value) in defaults {
        let path = dir.join(format!("{}.json", doc));
        if path.exists() {
            continue;
        }
        let body = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
        std::fs::write(&path, body)
            .map_err(|e| format!("failed to seed {}: {}", path.display(), e))?;
        info!("  Seeded content document: {}", path.display());
    }

    Ok(())
}

fn server_config() -> toml::Value {
    let raw = std::fs::read_to_string("folio.toml").unwrap_or_default();
    raw.parse()
        .unwrap_or(toml::Value::Table(Default::default()))
}
