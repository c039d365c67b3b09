#![cfg(test)]

use std::fs;
use std::path::{Path, PathBuf};

use rocket::http::Status;
use rocket::local::blocking::Client;
use serde_json::{json, Value};

use crate::content::{self, ContentSource, SiteSettings};
use crate::models::portfolio::{PortfolioRecord, ProjectStatus};
use crate::render;
use crate::seo;

/// Atomic counter for unique content directories so parallel tests don't collide.
static TEST_DIR_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// Create a fresh temp content directory, seeded with the default documents.
fn test_content_dir() -> PathBuf {
    let id = TEST_DIR_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("folio_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).expect("Failed to create test content dir");
    content::seed_defaults(&dir).expect("Failed to seed test content");
    dir
}

fn write_doc(dir: &Path, name: &str, value: &Value) {
    fs::write(
        dir.join(format!("{}.json", name)),
        serde_json::to_string_pretty(value).unwrap(),
    )
    .unwrap();
}

fn record_from(value: Value) -> PortfolioRecord {
    serde_json::from_value(value).expect("record should deserialize")
}

/// A record exercising every section, images and terminal on.
fn full_record() -> PortfolioRecord {
    record_from(json!({
        "name": "Jordan Reyes",
        "headline": "Backend Engineer",
        "subheadline": "Distributed systems, done calmly",
        "summary": "I design and run payment platforms.",
        "about": "Ten years of backend work across fintech and infrastructure.",
        "availability": "Open to staff roles",
        "cv_link": "https://example.com/cv.pdf",
        "quick_facts": ["10 yrs experience", "Remote-friendly"],
        "contact": {
            "email": "jordan@example.com",
            "linkedin": "https://www.linkedin.com/in/jordanreyes",
            "github": "https://github.com/jordanreyes",
            "footer_links": [
                { "label": "GitHub", "url": "https://github.com/jordanreyes" }
            ],
            "form": {
                "endpoint": "https://forms.example.com/f/abc123",
                "method": "POST",
                "interests": ["Backend role", "Consulting"],
                "helper_messages": ["Hi! About a backend role.", "Hi! About consulting."]
            }
        },
        "skills": [
            { "name": "Languages", "items": ["Rust", "Go", "SQL"] },
            { "name": "Cloud", "items": ["AWS", "Terraform"] }
        ],
        "experience": [
            {
                "role": "Staff Engineer",
                "company": "Example Corp",
                "period": "2023 — Present",
                "location": "Remote",
                "summary": "Own the payments platform.",
                "achievements": {
                    "Scale": ["Cut p99 latency in half", "Survived a 10x traffic spike"],
                    "Team": ["Mentored four engineers"]
                },
                "projects": [
                    {
                        "title": "Ledger rewrite",
                        "summary": "Replaced the ledger service.",
                        "impact": "Zero reconciliation incidents since launch",
                        "tech": ["Rust", "PostgreSQL"],
                        "image": "ledger.webp"
                    }
                ],
                "tech": ["Rust", "Kafka"],
                "image": "office.webp"
            }
        ],
        "personal_projects": [
            {
                "title": "folio",
                "description": "This site.",
                "status": "active",
                "stars": 120,
                "forks": 14,
                "tech": ["Rust", "Rocket"],
                "github": "https://github.com/jordanreyes/folio",
                "demo": "https://folio.example.com"
            },
            {
                "title": "oldtool",
                "description": "A retired CLI.",
                "status": "archived",
                "tech": ["Go"]
            }
        ],
        "education": {
            "school": "State University",
            "degree": "B.Sc., Computer Science",
            "period": "2012 — 2016",
            "location": "Springfield",
            "gpa": "GPA 3.8/4.0"
        },
        "features": { "images_enabled": true, "terminal_enabled": true },
        "navigation": {
            "items": [
                { "label": "About", "href": "#about" },
                { "label": "Contact", "href": "#contact" }
            ]
        },
        "buttons": { "hero_primary": "Say hello" },
        "sections": {
            "skills": { "title": "What I use" },
            "personal_projects": { "title": "Side Projects", "subtitle": "Nights and weekends" }
        },
        "project_filters": { "all": "All", "active": "Active", "archived": "Archived" }
    }))
}

fn page(record: &PortfolioRecord, filter: &str, form_sent: bool) -> String {
    let seo_meta = seo::build_meta(record, "http://localhost:8000", "/");
    render::render_page(&render::PageContext {
        record,
        filter,
        form_sent,
        site_url: "http://localhost:8000",
        seo_meta: &seo_meta,
    })
}

/// True when every needle appears in the haystack in the given order.
fn ordered(haystack: &str, needles: &[&str]) -> bool {
    let mut pos = 0;
    for needle in needles {
        match haystack[pos..].find(needle) {
            Some(i) => pos += i + needle.len(),
            None => return false,
        }
    }
    true
}

fn test_client(dir: &Path) -> Client {
    let rocket = rocket::build()
        .manage(SiteSettings {
            site_url: "http://localhost:8000".to_string(),
        })
        .manage(ContentSource::Dir(dir.to_path_buf()))
        .attach(crate::FreshContent)
        .mount("/", crate::routes::public::routes());
    Client::tracked(rocket).expect("valid rocket instance")
}

// ═══════════════════════════════════════════════════════════
// Content loader
// ═══════════════════════════════════════════════════════════

#[test]
fn aggregate_assembles_sections_under_their_keys() {
    let merged = content::aggregate(
        json!({ "name": "A", "headline": "H" }),
        json!({ "email": "a@b.c" }),
        json!([{ "name": "G", "items": ["x"] }]),
        json!([]),
        json!([]),
        json!({ "school": "S" }),
        json!({}),
    )
    .unwrap();

    assert_eq!(merged["name"], "A");
    assert_eq!(merged["contact"]["email"], "a@b.c");
    assert_eq!(merged["skills"][0]["name"], "G");
    assert_eq!(merged["education"]["school"], "S");
}

#[test]
fn aggregate_config_overrides_profile_keys() {
    let merged = content::aggregate(
        json!({ "name": "A", "headline": "Old" }),
        json!({}),
        json!([]),
        json!([]),
        json!([]),
        json!({}),
        json!({ "headline": "New", "features": { "images_enabled": true } }),
    )
    .unwrap();

    assert_eq!(merged["headline"], "New");
    assert_eq!(merged["name"], "A");
    assert_eq!(merged["features"]["images_enabled"], true);
}

#[test]
fn aggregate_rejects_non_object_profile() {
    let result = content::aggregate(
        json!([1, 2, 3]),
        json!({}),
        json!([]),
        json!([]),
        json!([]),
        json!({}),
        json!({}),
    );
    assert!(result.is_err());
}

#[test]
fn aggregate_rejects_non_object_config() {
    let result = content::aggregate(
        json!({}),
        json!({}),
        json!([]),
        json!([]),
        json!([]),
        json!({}),
        json!("not a config"),
    );
    assert!(result.is_err());
}

#[test]
fn load_portfolio_reads_seeded_directory() {
    let dir = test_content_dir();
    let source = ContentSource::Dir(dir);
    let record = rocket::execute(content::load_portfolio(&source)).unwrap();
    assert_eq!(record.name.as_deref(), Some("Your Name"));
    assert!(!record.skills.is_empty());
    assert!(!record.navigation.items.is_empty());
}

#[test]
fn load_portfolio_fails_when_any_document_is_missing() {
    let dir = test_content_dir();
    fs::remove_file(dir.join("skills.json")).unwrap();
    let source = ContentSource::Dir(dir);
    assert!(rocket::execute(content::load_portfolio(&source)).is_err());
}

#[test]
fn load_portfolio_fails_on_malformed_document() {
    let dir = test_content_dir();
    fs::write(dir.join("experience.json"), "{not json").unwrap();
    let source = ContentSource::Dir(dir);
    assert!(rocket::execute(content::load_portfolio(&source)).is_err());
}

#[test]
fn seed_defaults_never_overwrites_existing_documents() {
    let dir = test_content_dir();
    write_doc(&dir, "profile", &json!({ "name": "Kept" }));
    content::seed_defaults(&dir).unwrap();
    let raw = fs::read_to_string(dir.join("profile.json")).unwrap();
    assert!(raw.contains("Kept"));
}

// ═══════════════════════════════════════════════════════════
// Record model
// ═══════════════════════════════════════════════════════════

#[test]
fn empty_record_defaults_everything_off() {
    let record = record_from(json!({}));
    assert!(record.name.is_none());
    assert!(record.skills.is_empty());
    assert!(!record.features.images_enabled);
    assert!(!record.features.terminal_enabled);
    assert!(record.project_filters.is_none());
}

#[test]
fn achievements_object_form_keeps_document_order() {
    let record = record_from(json!({
        "experience": [{
            "company": "X",
            "achievements": {
                "Zeta": ["z1"],
                "Alpha": ["a1", "a2"]
            }
        }]
    }));
    let groups = &record.experience[0].achievements.0;
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].category.as_deref(), Some("Zeta"));
    assert_eq!(groups[1].category.as_deref(), Some("Alpha"));
    assert_eq!(groups[1].items, vec!["a1", "a2"]);
}

#[test]
fn achievements_flat_list_becomes_single_untitled_group() {
    let record = record_from(json!({
        "experience": [{ "company": "X", "achievements": ["did a", "did b"] }]
    }));
    let groups = &record.experience[0].achievements.0;
    assert_eq!(groups.len(), 1);
    assert!(groups[0].category.is_none());
    assert_eq!(groups[0].items, vec!["did a", "did b"]);
}

#[test]
fn project_status_parses_leniently() {
    let record = record_from(json!({
        "personal_projects": [
            { "title": "a", "status": "archived" },
            { "title": "b", "status": "active" },
            { "title": "c", "status": "who knows" },
            { "title": "d" }
        ]
    }));
    let statuses: Vec<ProjectStatus> = record
        .personal_projects
        .iter()
        .map(|p| p.status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            ProjectStatus::Archived,
            ProjectStatus::Active,
            ProjectStatus::Active,
            ProjectStatus::Active
        ]
    );
}

#[test]
fn project_status_filter_matching() {
    assert!(ProjectStatus::Active.matches("all"));
    assert!(ProjectStatus::Archived.matches("all"));
    assert!(ProjectStatus::Active.matches("active"));
    assert!(!ProjectStatus::Archived.matches("active"));
    assert!(!ProjectStatus::Active.matches("archived"));
}

#[test]
fn image_url_respects_the_feature_flag() {
    let mut record = full_record();
    assert_eq!(record.image_url(Some("a.webp")), Some("a.webp"));
    record.features.images_enabled = false;
    assert_eq!(record.image_url(Some("a.webp")), None);
    record.features.images_enabled = true;
    assert_eq!(record.image_url(Some("")), None);
    assert_eq!(record.image_url(None), None);
}

// ═══════════════════════════════════════════════════════════
// Section renderers
// ═══════════════════════════════════════════════════════════

#[test]
fn hero_headline_and_quick_facts_scenario() {
    let record = record_from(json!({
        "headline": "Backend Engineer",
        "quick_facts": ["5 yrs experience", "Remote-friendly"]
    }));
    let html = render::build_hero(&record);

    assert!(html.contains("<h1 id=\"headline\">Backend Engineer</h1>"));
    let chips = html.matches("<span class=\"pill\">").count();
    assert_eq!(chips, 2);
    assert!(ordered(
        &html,
        &["id=\"quick-facts\"", "5 yrs experience", "Remote-friendly"]
    ));
}

#[test]
fn hero_without_data_emits_no_optional_parts() {
    let record = record_from(json!({}));
    let html = render::build_hero(&record);
    assert!(!html.contains("id=\"headline\""));
    assert!(!html.contains("id=\"quick-facts\""));
    assert!(!html.contains("id=\"contact-cards\""));
    assert!(!html.contains("id=\"hero-download\""));
}

#[test]
fn hero_contact_cards_show_handles() {
    let record = full_record();
    let html = render::build_hero(&record);
    assert!(html.contains("@jordanreyes"));
    assert!(html.contains("https://github.com/jordanreyes"));
}

#[test]
fn skills_renders_every_group_and_item_in_order() {
    let record = record_from(json!({
        "skills": [
            { "name": "One", "items": ["a", "b", "c"] },
            { "name": "Two", "items": ["d", "e"] },
            { "name": "Three", "items": ["f"] }
        ]
    }));
    let html = render::build_skills(&record);

    assert_eq!(html.matches("skill-card").count(), 3);
    assert_eq!(html.matches("<span class=\"pill\">").count(), 6);
    assert!(ordered(&html, &["One", "a", "b", "c", "Two", "d", "e", "Three", "f"]));
}

#[test]
fn renderers_no_op_when_their_data_is_absent() {
    let record = record_from(json!({}));
    assert!(render::build_about(&record).is_empty());
    assert!(render::build_skills(&record).is_empty());
    assert!(render::build_experience(&record).is_empty());
    assert!(render::build_personal_projects(&record, "all").is_empty());
    assert!(render::build_education(&record).is_empty());
    assert!(render::build_contact(&record, false, "http://localhost:8000").is_empty());
    assert!(render::build_terminal(&record).is_empty());
}

#[test]
fn missing_single_field_does_not_affect_sibling_sections() {
    let mut value = serde_json::to_value(full_record()).unwrap();
    value.as_object_mut().unwrap().remove("skills");
    let record = record_from(value);

    assert!(render::build_skills(&record).is_empty());
    // Siblings render exactly as they do on the full record.
    let full = full_record();
    assert_eq!(render::build_about(&record), render::build_about(&full));
    assert_eq!(render::build_education(&record), render::build_education(&full));
    assert_eq!(
        render::build_personal_projects(&record, "all"),
        render::build_personal_projects(&full, "all")
    );
}

#[test]
fn experience_renders_achievement_categories_in_order() {
    let record = full_record();
    let html = render::build_experience(&record);

    assert!(ordered(
        &html,
        &[
            "Scale",
            "Cut p99 latency in half",
            "Survived a 10x traffic spike",
            "Team",
            "Mentored four engineers"
        ]
    ));
    assert_eq!(html.matches("achievement-category-title").count(), 2);
    assert_eq!(html.matches("achievement-card").count(), 3);
}

#[test]
fn experience_includes_nested_projects_and_tech() {
    let record = full_record();
    let html = render::build_experience(&record);
    assert!(html.contains("Key Projects"));
    assert!(html.contains("Ledger rewrite"));
    assert!(html.contains("Zero reconciliation incidents since launch"));
    assert!(html.contains("tech-tag"));
}

#[test]
fn experience_images_are_omitted_when_flag_is_off() {
    let mut record = full_record();
    let with_images = render::build_experience(&record);
    assert!(with_images.contains("<img"));
    assert!(with_images.contains("loading=\"lazy\""));

    record.features.images_enabled = false;
    let without_images = render::build_experience(&record);
    assert!(!without_images.contains("<img"));
}

#[test]
fn data_sourced_text_is_escaped() {
    let record = record_from(json!({
        "headline": "<script>alert(\"x\")</script>",
        "about": "a < b & c"
    }));
    let hero = render::build_hero(&record);
    assert!(!hero.contains("<script>alert"));
    assert!(hero.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));

    let about = render::build_about(&record);
    assert!(about.contains("a &lt; b &amp; c"));
}

#[test]
fn personal_projects_filter_hides_non_matching_cards() {
    let record = full_record();

    let active = render::build_personal_projects(&record, "active");
    // The archived card is present but not shown.
    assert!(active.contains("data-status=\"archived\" style=\"display:none\""));
    assert!(!active.contains("data-status=\"active\" style=\"display:none\""));

    let all = render::build_personal_projects(&record, "all");
    assert!(!all.contains("display:none"));
}

#[test]
fn archived_project_scenario() {
    let record = record_from(json!({
        "personal_projects": [{ "title": "X", "status": "archived" }],
        "project_filters": {}
    }));
    let html = render::build_personal_projects(&record, "active");
    assert!(ordered(&html, &["data-status=\"archived\"", "style=\"display:none\"", "X"]));
}

#[test]
fn exactly_one_filter_tab_is_active() {
    let record = full_record();
    for filter in ["all", "active", "archived"] {
        let html = render::build_personal_projects(&record, filter);
        assert_eq!(html.matches("tab-button active").count(), 1, "filter={}", filter);
        assert!(html.contains(&format!("data-filter=\"{}\"", filter)));
    }
}

#[test]
fn filter_tabs_absent_without_filter_config() {
    let mut value = serde_json::to_value(full_record()).unwrap();
    value.as_object_mut().unwrap().remove("project_filters");
    let record = record_from(value);
    let html = render::build_personal_projects(&record, "all");
    assert!(!html.contains("project-filter"));
    assert!(html.contains("personal-project-cards"));
}

#[test]
fn personal_projects_render_stats_and_links() {
    let record = full_record();
    let html = render::build_personal_projects(&record, "all");
    assert!(html.contains("120"));
    assert!(html.contains("14"));
    assert!(html.contains("Live Demo"));
    assert!(html.contains("status-badge status-active"));
    assert!(html.contains("status-badge status-archived"));
}

#[test]
fn education_card_contents() {
    let record = full_record();
    let html = render::build_education(&record);
    assert!(ordered(
        &html,
        &["State University", "B.Sc., Computer Science", "2012 — 2016", "Springfield", "GPA 3.8/4.0"]
    ));
}

#[test]
fn contact_form_posts_to_configured_endpoint() {
    let record = full_record();
    let html = render::build_contact(&record, false, "http://localhost:8000");

    assert!(html.contains("action=\"https://forms.example.com/f/abc123\""));
    assert!(html.contains("method=\"POST\""));
    assert!(html.contains("value=\"http://localhost:8000/?success=true\""));
    assert!(html.contains("name=\"_honey\""));
    // Interest buttons carry their canned messages.
    assert!(html.contains("data-message=\"Hi! About a backend role.\""));
    assert!(html.contains("data-message=\"Hi! About consulting.\""));
    // No success banner unless the redirect came back.
    assert!(!html.contains("form-message success"));
}

#[test]
fn contact_without_endpoint_renders_no_form() {
    let record = record_from(json!({
        "contact": { "email": "a@b.c", "form": { "interests": ["x"] } }
    }));
    let html = render::build_contact(&record, false, "http://localhost:8000");
    assert!(!html.contains("<form"));
    assert!(html.contains("mailto:a@b.c"));
    assert!(html.contains("id=\"copy-email\""));
}

#[test]
fn contact_shows_success_banner_after_redirect() {
    let record = full_record();
    let html = render::build_contact(&record, true, "http://localhost:8000");
    assert!(html.contains("form-message success"));
    assert!(html.contains("Message sent successfully!"));
}

#[test]
fn footer_has_year_and_links() {
    let record = full_record();
    let html = render::build_footer(&record);
    let year = chrono::Utc::now().format("%Y").to_string();
    assert!(html.contains(&year));
    assert!(html.contains("Jordan Reyes"));
    assert!(html.contains("id=\"footer-links\""));

    let bare = render::build_footer(&record_from(json!({})));
    assert!(bare.contains(&year));
    assert!(!bare.contains("footer-links"));
}

#[test]
fn handle_from_url_variants() {
    assert_eq!(
        render::handle_from_url("https://github.com/jordanreyes"),
        "@jordanreyes"
    );
    assert_eq!(
        render::handle_from_url("https://www.linkedin.com/in/jordanreyes/"),
        "@jordanreyes"
    );
    assert_eq!(render::handle_from_url("not a url"), "not a url");
}

// ═══════════════════════════════════════════════════════════
// Terminal animation data
// ═══════════════════════════════════════════════════════════

#[test]
fn terminal_sets_derive_from_the_record() {
    let record = full_record();
    let sets = render::terminal_sets(&record);

    assert_eq!(sets.len(), 3);
    assert_eq!(sets[0].command, "cat companies.txt");
    assert_eq!(sets[0].output, vec!["Example Corp (2023 — Present)"]);
    assert_eq!(sets[1].command, "ls tech-stack/");
    assert_eq!(sets[1].output[0], "Languages: Rust, Go, SQL");
    assert_eq!(sets[2].command, "cat education.json");
    assert_eq!(sets[2].output[0], "State University");
}

#[test]
fn terminal_sets_skip_empty_sections() {
    let record = record_from(json!({
        "skills": [{ "name": "Only", "items": ["x"] }],
        "features": { "terminal_enabled": true }
    }));
    let sets = render::terminal_sets(&record);
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].title, "Tech Stack");
}

#[test]
fn terminal_fragment_is_gated_and_carries_data() {
    let mut record = full_record();
    let html = render::build_terminal(&record);
    assert!(html.contains("id=\"terminal-data\""));
    assert!(html.contains("cat companies.txt"));

    record.features.terminal_enabled = false;
    assert!(render::build_terminal(&record).is_empty());
}

// ═══════════════════════════════════════════════════════════
// Full page and error view
// ═══════════════════════════════════════════════════════════

#[test]
fn full_page_contains_every_section_in_layout_order() {
    let record = full_record();
    let html = page(&record, "all", false);

    assert!(ordered(
        &html,
        &[
            "id=\"hero\"",
            "id=\"terminal\"",
            "id=\"about\"",
            "id=\"skills\"",
            "id=\"experience\"",
            "id=\"personal-projects\"",
            "id=\"education\"",
            "id=\"contact\"",
        ]
    ));
    // Section title overrides apply.
    assert!(html.contains("What I use"));
    assert!(html.contains("Side Projects"));
    assert!(html.contains("Say hello"));
    // No leftover placeholders.
    assert!(!html.contains("{{"));
}

#[test]
fn page_scripts_are_feature_gated() {
    let mut record = full_record();
    let html = page(&record, "all", false);
    assert!(html.contains("terminal-data"));
    assert!(html.contains("project-filter"));
    assert!(html.contains("localStorage.setItem('theme'"));

    record.features.terminal_enabled = false;
    record.project_filters = None;
    let html = page(&record, "all", false);
    assert!(!html.contains("terminal-data"));
    assert!(!html.contains("#project-filter"));
    // Theme, nav, and scroll affordances are unconditional chrome.
    assert!(html.contains("localStorage.setItem('theme'"));
    assert!(html.contains("IntersectionObserver"));
    assert!(html.contains("window.scrollY>320"));
}

#[test]
fn form_redirect_cleans_query_from_url() {
    let record = full_record();
    let html = page(&record, "all", true);
    assert!(html.contains("history.replaceState"));

    let html = page(&record, "all", false);
    assert!(!html.contains("history.replaceState"));
}

#[test]
fn theme_state_lives_in_one_storage_key() {
    let record = full_record();
    let html = page(&record, "all", false);
    // One getter, one setter, same key; initial markup is theme-neutral.
    assert_eq!(html.matches("localStorage.getItem('theme')").count(), 1);
    assert_eq!(html.matches("localStorage.setItem('theme'").count(), 1);
    assert!(!html.contains("<body class"));
}

#[test]
fn error_page_shows_apology_and_no_mounts() {
    let html = render::render_error_page(&seo::fallback_meta());

    assert!(html.contains("Unable to load content"));
    assert!(html.contains("location.reload()"));
    assert!(!html.contains("id=\"skills-grid\""));
    assert!(!html.contains("id=\"experience-list\""));
    assert!(!html.contains("id=\"personal-project-cards\""));
    assert!(!html.contains("{{"));
}

// ═══════════════════════════════════════════════════════════
// SEO
// ═══════════════════════════════════════════════════════════

#[test]
fn seo_meta_combines_name_and_headline() {
    let record = full_record();
    let meta = seo::build_meta(&record, "http://localhost:8000", "/");
    assert!(meta.contains("<title>Jordan Reyes — Backend Engineer</title>"));
    assert!(meta.contains("I design and run payment platforms."));
    assert!(meta.contains("canonical\" href=\"http://localhost:8000/\""));
    assert!(meta.contains("og:title"));
}

#[test]
fn seo_meta_defaults_and_truncates() {
    let record = record_from(json!({}));
    let meta = seo::build_meta(&record, "http://localhost:8000", "/");
    assert!(meta.contains("<title>Portfolio</title>"));

    let long = (0..60).map(|i| format!("word{}", i)).collect::<Vec<_>>().join(" ");
    let record = record_from(json!({ "summary": long }));
    let meta = seo::build_meta(&record, "http://localhost:8000", "/");
    assert!(meta.contains("word27"));
    assert!(!meta.contains("word28"));
    assert!(meta.contains('\u{2026}'));
}

// ═══════════════════════════════════════════════════════════
// Routes
// ═══════════════════════════════════════════════════════════

#[test]
fn homepage_renders_seeded_content() {
    let dir = test_content_dir();
    let client = test_client(&dir);
    let response = client.get("/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Cache-Control"),
        Some("no-cache")
    );
    let body = response.into_string().unwrap();
    assert!(body.contains("id=\"hero\""));
    assert!(body.contains("id=\"skills-grid\""));
    assert!(body.contains("Your Name"));
}

#[test]
fn homepage_shows_error_view_when_a_document_is_missing() {
    let dir = test_content_dir();
    fs::remove_file(dir.join("contact.json")).unwrap();
    let client = test_client(&dir);
    let response = client.get("/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().unwrap();
    assert!(body.contains("Unable to load content"));
    assert!(!body.contains("id=\"skills-grid\""));
    assert!(!body.contains("id=\"experience-list\""));
}

#[test]
fn homepage_applies_filter_query() {
    let dir = test_content_dir();
    write_doc(
        &dir,
        "personal-projects",
        &json!([
            { "title": "Live", "status": "active" },
            { "title": "Done", "status": "archived" }
        ]),
    );
    let client = test_client(&dir);

    let body = client.get("/?filter=active").dispatch().into_string().unwrap();
    assert!(body.contains("data-status=\"archived\" style=\"display:none\""));
    assert!(!body.contains("data-status=\"active\" style=\"display:none\""));

    // Nonsense filters behave like "all".
    let body = client.get("/?filter=bogus").dispatch().into_string().unwrap();
    assert!(!body.contains("display:none\">"));
}

#[test]
fn homepage_success_query_shows_banner() {
    let dir = test_content_dir();
    write_doc(
        &dir,
        "contact",
        &json!({
            "email": "you@example.com",
            "form": { "endpoint": "https://forms.example.com/f/x" }
        }),
    );
    let client = test_client(&dir);
    let body = client.get("/?success=true").dispatch().into_string().unwrap();
    assert!(body.contains("Message sent successfully!"));
    assert!(body.contains("history.replaceState"));
}

#[test]
fn portfolio_json_round_trips_the_record() {
    let dir = test_content_dir();
    let client = test_client(&dir);
    let response = client.get("/api/portfolio.json").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let record: Value = response.into_json().unwrap();
    assert_eq!(record["name"], "Your Name");
    assert!(record["skills"].is_array());
}

#[test]
fn portfolio_json_unavailable_on_broken_content() {
    let dir = test_content_dir();
    fs::write(dir.join("profile.json"), "{broken").unwrap();
    let client = test_client(&dir);
    let response = client.get("/api/portfolio.json").dispatch();
    assert_eq!(response.status(), Status::ServiceUnavailable);
}

#[test]
fn robots_txt_allows_everything() {
    let dir = test_content_dir();
    let client = test_client(&dir);
    let body = client.get("/robots.txt").dispatch().into_string().unwrap();
    assert!(body.starts_with("User-agent: *"));
}
