use std::path::Path;

use serde::Serialize;

use crate::models::portfolio::{Contact, PortfolioRecord};

/// Everything one page render needs. The record is read-only; the rest is
/// per-request presentation state (query-derived filter, form redirect flag).
pub struct PageContext<'a> {
    pub record: &'a PortfolioRecord,
    pub filter: &'a str,
    pub form_sent: bool,
    pub site_url: &'a str,
    pub seo_meta: &'a str,
}

/// Renders the full page by substituting section fragments into the layout.
/// A custom layout at website/templates/layout.html wins over the built-in
/// default; a layout missing some placeholder simply skips that section.
pub fn render_page(ctx: &PageContext) -> String {
    let record = ctx.record;

    let html = load_layout()
        .replace("{{seo_meta}}", ctx.seo_meta)
        .replace("{{styles}}", DEFAULT_CSS)
        .replace(
            "{{site_name}}",
            &html_escape(record.name.as_deref().unwrap_or("Portfolio")),
        )
        .replace("{{nav_links}}", &build_nav_links(record))
        .replace("{{mobile_nav_links}}", &build_nav_links(record))
        .replace("{{header_cta}}", &build_header_cta(record))
        .replace("{{load_error}}", "")
        .replace("{{hero}}", &build_hero(record))
        .replace("{{terminal}}", &build_terminal(record))
        .replace("{{about}}", &build_about(record))
        .replace("{{skills}}", &build_skills(record))
        .replace("{{experience}}", &build_experience(record))
        .replace(
            "{{personal_projects}}",
            &build_personal_projects(record, ctx.filter),
        )
        .replace("{{education}}", &build_education(record))
        .replace(
            "{{contact}}",
            &build_contact(record, ctx.form_sent, ctx.site_url),
        )
        .replace("{{footer}}", &build_footer(record))
        .replace("{{scripts}}", &build_scripts(record, ctx.form_sent));

    strip_unreplaced_placeholders(&html)
}

/// The failed-load view: the main region carries the apology and a reload
/// control, the surrounding chrome stays as the layout renders it.
pub fn render_error_page(seo_meta: &str) -> String {
    let html = load_layout()
        .replace("{{seo_meta}}", seo_meta)
        .replace("{{styles}}", DEFAULT_CSS)
        .replace("{{site_name}}", "Portfolio")
        .replace("{{load_error}}", APOLOGY_HTML)
        .replace(
            "{{scripts}}",
            &format!(
                "<script>{}</script>\n<script>{}</script>\n<script>{}</script>",
                NAV_JS, SCROLL_JS, THEME_JS
            ),
        );

    strip_unreplaced_placeholders(&html)
}

fn load_layout() -> String {
    let custom = Path::new("website/templates/layout.html");
    if let Ok(layout) = std::fs::read_to_string(custom) {
        if !layout.trim().is_empty() {
            return layout;
        }
    }
    DEFAULT_LAYOUT.to_string()
}

// ── Section renderers ──────────────────────────────────
//
// Each builder returns the HTML fragment for one layout slot, or an empty
// string when its data is absent. Data-sourced text always goes through
// html_escape; only renderer-owned chrome is written as markup.

pub fn build_nav_links(record: &PortfolioRecord) -> String {
    let mut html = String::new();
    for item in &record.navigation.items {
        html.push_str(&format!(
            "<a href=\"{}\" class=\"nav-link\">{}</a>\n",
            html_escape(&item.href),
            html_escape(&item.label)
        ));
    }
    html
}

fn build_header_cta(record: &PortfolioRecord) -> String {
    let label = record.buttons.header_cta.as_deref().unwrap_or("Contact me");
    format!(
        "<a href=\"#contact\" id=\"cta-primary\" class=\"btn btn-primary header-cta\">{}</a>",
        html_escape(label)
    )
}

pub fn build_hero(record: &PortfolioRecord) -> String {
    let mut html = String::from("<section id=\"hero\" class=\"hero\"><div class=\"hero-copy\">");

    if let Some(availability) = &record.availability {
        html.push_str(&format!(
            "<span id=\"availability\" class=\"availability-badge\">{}</span>",
            html_escape(availability)
        ));
    }
    if let Some(headline) = &record.headline {
        html.push_str(&format!("<h1 id=\"headline\">{}</h1>", html_escape(headline)));
    }
    if let Some(subheadline) = &record.subheadline {
        html.push_str(&format!(
            "<p id=\"subheadline\" class=\"subheadline\">{}</p>",
            html_escape(subheadline)
        ));
    }
    if let Some(summary) = &record.summary {
        html.push_str(&format!(
            "<p id=\"summary\" class=\"hero-summary\">{}</p>",
            html_escape(summary)
        ));
    }

    let primary = record.buttons.hero_primary.as_deref().unwrap_or("Get in touch");
    let secondary = record
        .buttons
        .hero_secondary
        .as_deref()
        .unwrap_or("View experience");
    html.push_str("<div class=\"hero-actions\">");
    html.push_str(&format!(
        "<a href=\"#contact\" id=\"hero-primary\" class=\"btn btn-primary\">{}</a>",
        html_escape(primary)
    ));
    html.push_str(&format!(
        "<a href=\"#experience\" id=\"hero-secondary\" class=\"btn btn-ghost\">{}</a>",
        html_escape(secondary)
    ));
    if let Some(cv_link) = record.cv_link.as_deref().filter(|s| !s.is_empty()) {
        let label = record.buttons.hero_download.as_deref().unwrap_or("Download CV");
        html.push_str(&format!(
            "<a href=\"{}\" id=\"hero-download\" class=\"btn btn-ghost\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
            html_escape(cv_link),
            html_escape(label)
        ));
    }
    html.push_str("</div>");

    if !record.quick_facts.is_empty() {
        html.push_str("<div id=\"quick-facts\" class=\"quick-facts\">");
        for fact in &record.quick_facts {
            html.push_str(&format!("<span class=\"pill\">{}</span>", html_escape(fact)));
        }
        html.push_str("</div>");
    }

    if let Some(contact) = &record.contact {
        let mut cards = String::new();
        if let Some(linkedin) = contact.linkedin.as_deref().filter(|s| !s.is_empty()) {
            cards.push_str(&build_contact_card("LinkedIn", linkedin));
        }
        if let Some(github) = contact.github.as_deref().filter(|s| !s.is_empty()) {
            cards.push_str(&build_contact_card("GitHub", github));
        }
        if !cards.is_empty() {
            html.push_str(&format!(
                "<div id=\"contact-cards\" class=\"contact-cards\">{}</div>",
                cards
            ));
        }
    }

    html.push_str("</div></section>");
    html
}

fn build_contact_card(label: &str, value: &str) -> String {
    let href = if value.starts_with("http") {
        value.to_string()
    } else {
        format!("mailto:{}", value)
    };
    format!(
        "<div class=\"contact-card glass\">{icon}<div><div class=\"contact-card-label\">{label}</div>\
         <a href=\"{href}\" target=\"_blank\" rel=\"noreferrer\">{handle}</a></div></div>",
        icon = icon_for(label),
        label = html_escape(label),
        href = html_escape(&href),
        handle = html_escape(&handle_from_url(value)),
    )
}

pub fn build_about(record: &PortfolioRecord) -> String {
    let about = match record.about.as_deref().filter(|s| !s.is_empty()) {
        Some(text) => text,
        None => return String::new(),
    };
    let heading = record.sections.about.title_or("About");
    format!(
        "<section id=\"about\" class=\"section\"><h2>{}</h2><p id=\"about-text\" class=\"about-text\">{}</p></section>",
        html_escape(heading),
        html_escape(about)
    )
}

pub fn build_skills(record: &PortfolioRecord) -> String {
    if record.skills.is_empty() {
        return String::new();
    }
    let heading = record.sections.skills.title_or("Skills");
    let mut html = format!(
        "<section id=\"skills\" class=\"section\"><h2>{}</h2><div id=\"skills-grid\" class=\"skills-grid\">",
        html_escape(heading)
    );
    for group in &record.skills {
        html.push_str("<div class=\"skill-card glass\">");
        if let Some(name) = &group.name {
            html.push_str(&format!(
                "<div class=\"skill-group-name\">{}</div>",
                html_escape(name)
            ));
        }
        html.push_str("<div class=\"skill-items\">");
        for item in &group.items {
            html.push_str(&format!("<span class=\"pill\">{}</span>", html_escape(item)));
        }
        html.push_str("</div></div>");
    }
    html.push_str("</div></section>");
    html
}

pub fn build_experience(record: &PortfolioRecord) -> String {
    if record.experience.is_empty() {
        return String::new();
    }
    let heading = record.sections.experience.title_or("Experience");
    let mut html = format!(
        "<section id=\"experience\" class=\"section\"><h2>{}</h2><div id=\"experience-list\" class=\"experience-list\">",
        html_escape(heading)
    );

    for role in &record.experience {
        html.push_str(
            "<div class=\"experience-timeline\"><div class=\"experience-marker\"></div>\
             <div class=\"experience-card glass\">",
        );

        if let Some(image) = record.image_url(role.image.as_deref()) {
            let company = role.company.as_deref().unwrap_or("workspace");
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{} workspace\" class=\"experience-hero-image\" loading=\"lazy\">",
                html_escape(image),
                html_escape(company)
            ));
        }

        html.push_str("<div class=\"experience-body\"><div class=\"experience-header\">");
        if let Some(title) = &role.role {
            html.push_str(&format!(
                "<div class=\"experience-role\">{}</div>",
                html_escape(title)
            ));
        }
        if let Some(company) = &role.company {
            html.push_str(&format!(
                "<div class=\"experience-company\">{}</div>",
                html_escape(company)
            ));
        }
        if role.period.is_some() || role.location.is_some() {
            html.push_str("<div class=\"experience-meta\">");
            if let Some(period) = &role.period {
                html.push_str(&format!("<span>{}</span>", html_escape(period)));
            }
            if let Some(location) = &role.location {
                if role.period.is_some() {
                    html.push_str("<span class=\"meta-sep\">&#8226;</span>");
                }
                html.push_str(&format!("<span>{}</span>", html_escape(location)));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");

        if let Some(summary) = &role.summary {
            html.push_str(&format!(
                "<p class=\"experience-summary\">{}</p>",
                html_escape(summary)
            ));
        }

        // Achievement groups render in document order, category title first.
        if !role.achievements.is_empty() {
            html.push_str("<div class=\"experience-achievements\">");
            for group in &role.achievements.0 {
                html.push_str("<div class=\"achievement-category\">");
                if let Some(category) = &group.category {
                    html.push_str(&format!(
                        "<div class=\"achievement-category-title\">{}</div>",
                        html_escape(category)
                    ));
                }
                for item in &group.items {
                    html.push_str(&format!(
                        "<div class=\"achievement-card\">{}</div>",
                        html_escape(item)
                    ));
                }
                html.push_str("</div>");
            }
            html.push_str("</div>");
        }

        if !role.projects.is_empty() {
            html.push_str(
                "<div class=\"experience-projects\"><div class=\"experience-projects-title\">Key Projects</div>\
                 <div class=\"experience-projects-grid\">",
            );
            for project in &role.projects {
                html.push_str("<div class=\"project-card glass\">");
                if let Some(image) = record.image_url(project.image.as_deref()) {
                    let title = project.title.as_deref().unwrap_or("project");
                    html.push_str(&format!(
                        "<img src=\"{}\" alt=\"{}\" class=\"project-image\" loading=\"lazy\">",
                        html_escape(image),
                        html_escape(title)
                    ));
                }
                html.push_str("<div class=\"project-body\">");
                if let Some(title) = &project.title {
                    html.push_str(&format!(
                        "<div class=\"project-title\">{}</div>",
                        html_escape(title)
                    ));
                }
                if let Some(summary) = &project.summary {
                    html.push_str(&format!(
                        "<div class=\"project-description\">{}</div>",
                        html_escape(summary)
                    ));
                }
                if let Some(impact) = &project.impact {
                    html.push_str(&format!(
                        "<div class=\"project-impact\">{}</div>",
                        html_escape(impact)
                    ));
                }
                html.push_str(&build_tech_pills(&project.tech));
                html.push_str("</div></div>");
            }
            html.push_str("</div></div>");
        }

        if !role.tech.is_empty() {
            html.push_str("<div class=\"experience-tech\">");
            for tech in &role.tech {
                html.push_str(&format!("<span class=\"tech-tag\">{}</span>", html_escape(tech)));
            }
            html.push_str("</div>");
        }

        html.push_str("</div></div></div>");
    }

    html.push_str("</div></section>");
    html
}

pub fn build_personal_projects(record: &PortfolioRecord, filter: &str) -> String {
    if record.personal_projects.is_empty() {
        return String::new();
    }
    let heading = record.sections.personal_projects.title_or("Personal Projects");
    let mut html = format!(
        "<section id=\"personal-projects\" class=\"section\"><h2>{}</h2>",
        html_escape(heading)
    );
    if let Some(subtitle) = &record.sections.personal_projects.subtitle {
        html.push_str(&format!(
            "<p class=\"section-subtitle\">{}</p>",
            html_escape(subtitle)
        ));
    }

    // Filter tabs only exist when the config document names them; the
    // ?filter= query renders the same state the buttons produce client-side.
    if let Some(labels) = &record.project_filters {
        html.push_str("<div id=\"project-filter\" class=\"project-filter\">");
        for (key, default) in [("all", "All"), ("active", "Active"), ("archived", "Archived")] {
            let active = if key == filter { " active" } else { "" };
            html.push_str(&format!(
                "<a href=\"?filter={key}#personal-projects\" class=\"tab-button{active}\" data-filter=\"{key}\">{label}</a>",
                key = key,
                active = active,
                label = html_escape(labels.label_for(key, default)),
            ));
        }
        html.push_str("</div>");
    }

    html.push_str("<div id=\"personal-project-cards\" class=\"project-grid\">");
    for project in &record.personal_projects {
        let status = project.status;
        let hidden = if status.matches(filter) {
            ""
        } else {
            " style=\"display:none\""
        };
        html.push_str(&format!(
            "<div class=\"project-card glass\" data-status=\"{}\"{}>",
            status.as_str(),
            hidden
        ));

        if let Some(image) = record.image_url(project.image.as_deref()) {
            let title = project.title.as_deref().unwrap_or("project");
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" class=\"project-image\" loading=\"lazy\">",
                html_escape(image),
                html_escape(title)
            ));
        }

        html.push_str("<div class=\"project-body\"><div class=\"project-head\"><div>");
        if let Some(title) = &project.title {
            html.push_str(&format!(
                "<div class=\"project-title\">{}</div>",
                html_escape(title)
            ));
        }
        if let Some(description) = &project.description {
            html.push_str(&format!(
                "<div class=\"project-description\">{}</div>",
                html_escape(description)
            ));
        }
        html.push_str("</div>");
        html.push_str(&format!(
            "<span class=\"status-badge status-{}\"><span class=\"status-dot\"></span>{}</span>",
            status.as_str(),
            status.label()
        ));
        html.push_str("</div>");

        if project.stars.is_some() || project.forks.is_some() {
            html.push_str("<div class=\"project-stats\">");
            if let Some(stars) = project.stars {
                html.push_str(&format!("<span>{} {}</span>", STAR_ICON, stars));
            }
            if let Some(forks) = project.forks {
                html.push_str(&format!("<span>{} {}</span>", FORK_ICON, forks));
            }
            html.push_str("</div>");
        }

        html.push_str(&build_tech_pills(&project.tech));

        let mut links = String::new();
        if let Some(github) = project.github.as_deref().filter(|s| !s.is_empty()) {
            links.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{} GitHub</a>",
                html_escape(github),
                icon_for("GitHub")
            ));
        }
        if let Some(demo) = project.demo.as_deref().filter(|s| !s.is_empty()) {
            links.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{} Live Demo</a>",
                html_escape(demo),
                EXTERNAL_ICON
            ));
        }
        if !links.is_empty() {
            html.push_str(&format!("<div class=\"project-links\">{}</div>", links));
        }

        html.push_str("</div></div>");
    }
    html.push_str("</div></section>");
    html
}

pub fn build_education(record: &PortfolioRecord) -> String {
    let education = match &record.education {
        Some(e) => e,
        None => return String::new(),
    };
    let heading = record.sections.education.title_or("Education");
    let mut html = format!(
        "<section id=\"education\" class=\"section\"><h2>{}</h2><div id=\"education-card\" class=\"glass education-card\">",
        html_escape(heading)
    );
    if let Some(school) = &education.school {
        html.push_str(&format!(
            "<div class=\"education-school\">{}</div>",
            html_escape(school)
        ));
    }
    if let Some(degree) = &education.degree {
        html.push_str(&format!(
            "<div class=\"education-degree\">{}</div>",
            html_escape(degree)
        ));
    }
    if education.period.is_some() || education.location.is_some() {
        let line = [education.period.as_deref(), education.location.as_deref()]
            .iter()
            .flatten()
            .map(|s| html_escape(s))
            .collect::<Vec<_>>()
            .join(" &#183; ");
        html.push_str(&format!("<div class=\"education-meta\">{}</div>", line));
    }
    if let Some(gpa) = education.gpa.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!("<div class=\"education-gpa\">{}</div>", html_escape(gpa)));
    }
    html.push_str("</div></section>");
    html
}

pub fn build_contact(record: &PortfolioRecord, form_sent: bool, site_url: &str) -> String {
    let contact = match &record.contact {
        Some(c) => c,
        None => return String::new(),
    };
    let heading = record.sections.contact.title_or("Contact");
    let mut html = format!(
        "<section id=\"contact\" class=\"section\"><h2>{}</h2>",
        html_escape(heading)
    );

    if form_sent {
        html.push_str(
            "<div id=\"form-message\" class=\"form-message success\">\
             Message sent successfully! I'll get back to you soon.</div>",
        );
    }

    html.push_str("<div class=\"contact-grid\">");

    html.push_str(
        "<div id=\"contact-details\" class=\"contact-intro glass\">\
         <div class=\"contact-headline\">Let's Connect</div>\
         <p class=\"contact-blurb\">Open to discussing engineering opportunities, \
         technical collaborations, or platform architecture challenges.</p>",
    );
    if let Some(email) = contact.email.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!(
            "<div class=\"contact-channel\"><div class=\"contact-channel-label\">Get in Touch</div>\
             <a href=\"mailto:{email}\" class=\"contact-email\">{icon}<span>{email}</span></a>\
             <button type=\"button\" id=\"copy-email\" class=\"copy-email\" data-email=\"{email}\">Copy email</button></div>",
            email = html_escape(email),
            icon = icon_for("Email"),
        ));
    }
    html.push_str("</div>");

    html.push_str(&build_contact_form(record, contact, site_url));
    html.push_str("</div>");
    html.push_str(&format!("<script>{}</script>", CONTACT_JS));
    html.push_str("</section>");
    html
}

/// The form posts straight to the configured third-party endpoint; `_next`
/// sends the browser back here with ?success=true. No endpoint, no form.
fn build_contact_form(record: &PortfolioRecord, contact: &Contact, site_url: &str) -> String {
    let form = match &contact.form {
        Some(f) => f,
        None => return String::new(),
    };
    let endpoint = match form.endpoint.as_deref().filter(|s| !s.is_empty()) {
        Some(e) => e,
        None => return String::new(),
    };
    let method = form.method.as_deref().unwrap_or("POST");
    let title = record.buttons.form_title.as_deref().unwrap_or("Send a message");
    let helper = record
        .buttons
        .form_helper
        .as_deref()
        .unwrap_or("I usually reply within a couple of days.");
    let submit = record
        .buttons
        .contact_submit
        .as_deref()
        .unwrap_or("Send Message");

    let mut html = format!(
        "<form id=\"contact-form\" class=\"glass contact-form\" action=\"{}\" method=\"{}\">",
        html_escape(endpoint),
        html_escape(method)
    );
    html.push_str(&format!(
        "<div class=\"form-title\">{}</div><p class=\"form-helper\">{}</p>",
        html_escape(title),
        html_escape(helper)
    ));
    html.push_str(&format!(
        "<input type=\"hidden\" name=\"_next\" value=\"{}/?success=true\">",
        html_escape(site_url)
    ));
    html.push_str(
        "<div style=\"display:none\"><input type=\"text\" name=\"_honey\" tabindex=\"-1\" autocomplete=\"off\"></div>",
    );

    if !form.interests.is_empty() {
        html.push_str("<div id=\"interest-buttons\" class=\"interest-buttons\">");
        for (idx, label) in form.interests.iter().enumerate() {
            let message = form
                .helper_messages
                .get(idx)
                .map(String::as_str)
                .unwrap_or(label);
            html.push_str(&format!(
                "<button type=\"button\" class=\"interest-btn\" data-message=\"{}\">{}</button>",
                html_escape(message),
                html_escape(label)
            ));
        }
        html.push_str("</div>");
    }

    html.push_str(
        "<input type=\"text\" name=\"name\" placeholder=\"Your name\" required>\
         <input type=\"email\" name=\"email\" placeholder=\"your@email.com\" required>\
         <textarea name=\"message\" rows=\"5\" placeholder=\"Your message\u{2026}\" required></textarea>",
    );
    html.push_str(&format!(
        "<button type=\"submit\" class=\"btn btn-primary\">{}</button>",
        html_escape(submit)
    ));
    html.push_str("</form>");
    html
}

pub fn build_footer(record: &PortfolioRecord) -> String {
    let year = chrono::Utc::now().format("%Y");
    let mut html = format!(
        "<div class=\"footer-inner\"><div class=\"footer-copyright\">&copy; <span id=\"footer-year\">{}</span>",
        year
    );
    if let Some(name) = &record.name {
        html.push_str(&format!(" {}", html_escape(name)));
    }
    html.push_str("</div>");

    let links = record
        .contact
        .as_ref()
        .map(|c| c.footer_links.as_slice())
        .unwrap_or(&[]);
    if !links.is_empty() {
        html.push_str("<div id=\"footer-links\" class=\"footer-links\">");
        for link in links {
            html.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}<span>{}</span></a>",
                html_escape(&link.url),
                icon_for(&link.label),
                html_escape(&link.label)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

// ── Terminal animation ─────────────────────────────────

/// One canned command/output pair for the decorative terminal.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TerminalSet {
    pub title: String,
    pub command: String,
    pub output: Vec<String>,
}

/// Derive the terminal data sets from the record so the animation never
/// contradicts the content documents. Empty sets are dropped.
pub fn terminal_sets(record: &PortfolioRecord) -> Vec<TerminalSet> {
    let mut sets = Vec::new();

    let companies: Vec<String> = record
        .experience
        .iter()
        .filter_map(|role| {
            let company = role.company.as_deref()?;
            Some(match role.period.as_deref() {
                Some(period) => format!("{} ({})", company, period),
                None => company.to_string(),
            })
        })
        .collect();
    if !companies.is_empty() {
        sets.push(TerminalSet {
            title: "Companies".to_string(),
            command: "cat companies.txt".to_string(),
            output: companies,
        });
    }

    let stack: Vec<String> = record
        .skills
        .iter()
        .filter(|group| !group.items.is_empty())
        .map(|group| match group.name.as_deref() {
            Some(name) => format!("{}: {}", name, group.items.join(", ")),
            None => group.items.join(", "),
        })
        .collect();
    if !stack.is_empty() {
        sets.push(TerminalSet {
            title: "Tech Stack".to_string(),
            command: "ls tech-stack/".to_string(),
            output: stack,
        });
    }

    if let Some(education) = &record.education {
        let mut output = Vec::new();
        if let Some(school) = &education.school {
            output.push(school.clone());
        }
        if let Some(degree) = &education.degree {
            output.push(degree.clone());
        }
        match (education.gpa.as_deref(), education.period.as_deref()) {
            (Some(gpa), Some(period)) if !gpa.is_empty() => {
                output.push(format!("{} ({})", gpa, period))
            }
            (Some(gpa), None) if !gpa.is_empty() => output.push(gpa.to_string()),
            (_, Some(period)) => output.push(period.to_string()),
            _ => {}
        }
        if !output.is_empty() {
            sets.push(TerminalSet {
                title: "Education".to_string(),
                command: "cat education.json".to_string(),
                output,
            });
        }
    }

    sets
}

pub fn build_terminal(record: &PortfolioRecord) -> String {
    if !record.features.terminal_enabled {
        return String::new();
    }
    let sets = terminal_sets(record);
    if sets.is_empty() {
        return String::new();
    }
    // JSON inside a script tag; escape "</" so content can't close it.
    let data = serde_json::to_string(&sets)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");

    format!(
        "<div id=\"terminal\" class=\"terminal glass\">\
         <div class=\"terminal-bar\"><span class=\"terminal-dot\"></span><span class=\"terminal-dot\"></span>\
         <span class=\"terminal-dot\"></span><span class=\"terminal-title\">~/portfolio</span></div>\
         <div id=\"terminal-content\" class=\"terminal-content\"></div>\
         <script type=\"application/json\" id=\"terminal-data\">{}</script></div>",
        data
    )
}

// ── Script bundle ──────────────────────────────────────

fn build_scripts(record: &PortfolioRecord, form_sent: bool) -> String {
    let mut html = format!(
        "<script>{}</script>\n<script>{}</script>\n<script>{}</script>",
        NAV_JS, SCROLL_JS, THEME_JS
    );
    if record.project_filters.is_some() {
        html.push_str(&format!("\n<script>{}</script>", FILTER_JS));
    }
    if record.features.terminal_enabled {
        html.push_str(&format!("\n<script>{}</script>", TERMINAL_JS));
    }
    if form_sent {
        // Drop the success query from the visible URL without reloading.
        html.push_str(
            "\n<script>history.replaceState({}, document.title, window.location.pathname);</script>",
        );
    }
    html
}

// ── Helpers ────────────────────────────────────────────

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// "@handle" from a profile URL's last path segment, or the raw string when
/// it isn't a URL.
pub fn handle_from_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(|segment| format!("@{}", segment))
            .unwrap_or_else(|| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

fn build_tech_pills(tech: &[String]) -> String {
    if tech.is_empty() {
        return String::new();
    }
    let mut html = String::from("<div class=\"tech-pills\">");
    for item in tech {
        html.push_str(&format!("<span class=\"pill\">{}</span>", html_escape(item)));
    }
    html.push_str("</div>");
    html
}

fn strip_unreplaced_placeholders(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("{{") {
        let (head, tail) = rest.split_at(start);
        result.push_str(head);
        match tail[2..].find("}}") {
            Some(end)
                if !tail[2..2 + end].is_empty()
                    && tail[2..2 + end]
                        .bytes()
                        .all(|b| b.is_ascii_lowercase() || b == b'_') =>
            {
                rest = &tail[2 + end + 2..];
            }
            _ => {
                result.push_str("{{");
                rest = &tail[2..];
            }
        }
    }
    result.push_str(rest);
    result
}

fn icon_for(label: &str) -> &'static str {
    match label.to_lowercase().as_str() {
        "email" => EMAIL_ICON,
        "linkedin" => LINKEDIN_ICON,
        "github" => GITHUB_ICON,
        _ => DEFAULT_ICON,
    }
}

// ── Icon chrome (renderer-owned, never data-sourced) ───

const EMAIL_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path stroke-linecap="round" stroke-linejoin="round" d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8m-18 8h18a2 2 0 002-2V8a2 2 0 00-2-2H3a2 2 0 00-2 2v6a2 2 0 002 2z"/></svg>"#;

const LINKEDIN_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/></svg>"#;

const GITHUB_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/></svg>"#;

const EXTERNAL_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path stroke-linecap="round" stroke-linejoin="round" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"/></svg>"#;

const STAR_ICON: &str = r#"<svg class="icon" viewBox="0 0 20 20" fill="currentColor"><path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z"/></svg>"#;

const FORK_ICON: &str = r#"<svg class="icon" viewBox="0 0 20 20" fill="currentColor"><path fill-rule="evenodd" d="M7.707 3.293a1 1 0 010 1.414L5.414 7H11a7 7 0 017 7v2a1 1 0 11-2 0v-2a5 5 0 00-5-5H5.414l2.293 2.293a1 1 0 11-1.414 1.414l-4-4a1 1 0 010-1.414l4-4a1 1 0 011.414 0z" clip-rule="evenodd"/></svg>"#;

const DEFAULT_ICON: &str = r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><circle cx="12" cy="12" r="9"/></svg>"#;

const APOLOGY_HTML: &str = r#"<section class="section load-error">
    <h2>Unable to load content</h2>
    <p>Please refresh the page or check your connection.</p>
    <button onclick="location.reload()" class="btn btn-primary">Retry</button>
</section>"#;

// ── Interaction scripts ────────────────────────────────
//
// Browser-only affordances. Menu open state, active filter, and theme each
// live in DOM class state or browser storage, owned by exactly one script.

const NAV_JS: &str = r##"(function(){
var toggle=document.getElementById('menu-toggle');
var panel=document.getElementById('mobile-nav');
var overlay=document.getElementById('mobile-overlay');
var closeBtn=document.getElementById('mobile-nav-close');
function openMenu(){
  if(!panel)return;
  panel.classList.add('open');
  if(overlay)overlay.classList.add('visible');
  if(toggle)toggle.setAttribute('aria-expanded','true');
  document.body.classList.add('nav-locked');
}
function closeMenu(){
  if(!panel)return;
  panel.classList.remove('open');
  if(overlay)overlay.classList.remove('visible');
  if(toggle)toggle.setAttribute('aria-expanded','false');
  document.body.classList.remove('nav-locked');
}
if(toggle)toggle.addEventListener('click',function(e){
  e.stopPropagation();
  panel&&panel.classList.contains('open')?closeMenu():openMenu();
});
if(closeBtn)closeBtn.addEventListener('click',closeMenu);
if(overlay)overlay.addEventListener('click',function(e){if(e.target===overlay)closeMenu();});
document.querySelectorAll('#mobile-nav a').forEach(function(link){
  link.addEventListener('click',function(){setTimeout(closeMenu,100);});
});
document.addEventListener('keydown',function(e){
  if(e.key==='Escape'&&panel&&panel.classList.contains('open'))closeMenu();
});
var sections=document.querySelectorAll('main section[id]');
var links=document.querySelectorAll('nav a[href^="#"]');
if('IntersectionObserver' in window&&sections.length){
  var observer=new IntersectionObserver(function(entries){
    entries.forEach(function(entry){
      if(!entry.isIntersecting)return;
      links.forEach(function(link){
        link.classList.toggle('nav-active',link.getAttribute('href').slice(1)===entry.target.id);
      });
    });
  },{threshold:0.4});
  sections.forEach(function(section){observer.observe(section);});
}
document.querySelectorAll('a[href^="#"]').forEach(function(anchor){
  anchor.addEventListener('click',function(e){
    var href=this.getAttribute('href');
    if(href==='#'||href==='#hero'){e.preventDefault();window.scrollTo({top:0,behavior:'smooth'});return;}
    var target=document.querySelector(href);
    if(!target)return;
    e.preventDefault();
    var top=target.getBoundingClientRect().top+window.pageYOffset-80;
    window.scrollTo({top:top,behavior:'smooth'});
  });
});
})();"##;

const SCROLL_JS: &str = r#"(function(){
var btn=document.getElementById('scroll-top');
var bar=document.getElementById('progress-bar');
window.addEventListener('scroll',function(){
  if(btn)btn.classList.toggle('visible',window.scrollY>320);
  if(bar){
    var height=document.documentElement.scrollHeight-window.innerHeight;
    var progress=height>0?(window.scrollY/height)*100:0;
    bar.style.width=Math.min(Math.max(progress,0),100)+'%';
  }
});
if(btn)btn.addEventListener('click',function(){window.scrollTo({top:0,behavior:'smooth'});});
})();"#;

const THEME_JS: &str = r#"(function(){
var btn=document.getElementById('theme-toggle');
var icon=document.getElementById('theme-icon');
var stored=null;
try{stored=localStorage.getItem('theme');}catch(e){}
if(stored==='light'){
  document.body.classList.add('theme-light');
  if(icon)icon.textContent='☀️';
}
if(btn)btn.addEventListener('click',function(){
  var light=document.body.classList.toggle('theme-light');
  if(icon)icon.textContent=light?'☀️':'🌙';
  try{localStorage.setItem('theme',light?'light':'dark');}catch(e){}
});
})();"#;

const FILTER_JS: &str = r#"(function(){
var buttons=document.querySelectorAll('#project-filter .tab-button');
var cards=document.querySelectorAll('#personal-project-cards .project-card');
buttons.forEach(function(btn){
  btn.addEventListener('click',function(e){
    e.preventDefault();
    var filter=btn.dataset.filter;
    buttons.forEach(function(b){b.classList.remove('active');});
    btn.classList.add('active');
    cards.forEach(function(card){
      card.style.display=(filter==='all'||card.dataset.status===filter)?'':'none';
    });
  });
});
})();"#;

const TERMINAL_JS: &str = r#"(function(){
var terminal=document.getElementById('terminal-content');
var dataTag=document.getElementById('terminal-data');
if(!terminal||!dataTag)return;
var sets=[];
try{sets=JSON.parse(dataTag.textContent);}catch(e){return;}
if(!sets.length)return;
var current=0;
var typing=false;
function showSet(){
  if(typing)return;
  typing=true;
  terminal.innerHTML='';
  var set=sets[current];
  var line=document.createElement('div');
  line.className='terminal-line';
  var prompt=document.createElement('span');
  prompt.className='terminal-prompt';
  prompt.textContent='$ ';
  var command=document.createElement('span');
  command.className='terminal-command';
  command.textContent=set.command;
  line.appendChild(prompt);
  line.appendChild(command);
  terminal.appendChild(line);
  setTimeout(function(){
    set.output.forEach(function(text,idx){
      setTimeout(function(){
        var out=document.createElement('div');
        out.className='terminal-line terminal-output';
        out.textContent=text;
        terminal.appendChild(out);
        terminal.scrollTop=terminal.scrollHeight;
        if(idx===set.output.length-1){
          setTimeout(function(){
            typing=false;
            current=(current+1)%sets.length;
            setTimeout(showSet,2000);
          },1000);
        }
      },idx*300);
    });
  },800);
}
setTimeout(showSet,1000);
})();"#;

const CONTACT_JS: &str = r#"(function(){
var copyBtn=document.getElementById('copy-email');
if(copyBtn)copyBtn.addEventListener('click',function(){
  var email=copyBtn.dataset.email;
  if(navigator.clipboard&&navigator.clipboard.writeText){
    navigator.clipboard.writeText(email).then(function(){
      copyBtn.textContent='Copied!';
      setTimeout(function(){copyBtn.textContent='Copy email';},1600);
    },function(){window.location.href='mailto:'+email;});
  }else{window.location.href='mailto:'+email;}
});
var form=document.getElementById('contact-form');
var textarea=form?form.querySelector('textarea[name="message"]'):null;
document.querySelectorAll('#interest-buttons .interest-btn').forEach(function(btn){
  btn.addEventListener('click',function(){
    if(!textarea)return;
    textarea.value=btn.dataset.message||btn.textContent;
    textarea.focus();
  });
});
if(form)form.addEventListener('submit',function(){
  var submit=form.querySelector('button[type="submit"]');
  if(submit){submit.disabled=true;submit.textContent='Sending…';}
});
})();"#;

// ── Layout and styles ──────────────────────────────────

const DEFAULT_LAYOUT: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {{seo_meta}}
    <style>{{styles}}</style>
</head>
<body>
    <div id="progress-bar"></div>
    <header class="site-header">
        <div class="header-inner">
            <a href="#" class="site-name">{{site_name}}</a>
            <nav id="nav-links" class="desktop-nav">{{nav_links}}</nav>
            <div class="header-actions">
                <button id="theme-toggle" aria-label="Toggle theme"><span id="theme-icon">&#127769;</span></button>
                {{header_cta}}
                <button id="menu-toggle" aria-expanded="false" aria-label="Menu"><span class="menu-icon">&#9776;</span></button>
            </div>
        </div>
    </header>
    <div id="mobile-overlay"></div>
    <aside id="mobile-nav">
        <button id="mobile-nav-close" aria-label="Close">&times;</button>
        <nav id="mobile-nav-content">{{mobile_nav_links}}</nav>
    </aside>
    <main id="main">
        {{load_error}}
        {{hero}}
        {{terminal}}
        {{about}}
        {{skills}}
        {{experience}}
        {{personal_projects}}
        {{education}}
        {{contact}}
    </main>
    <footer class="site-footer">{{footer}}</footer>
    <button id="scroll-top" aria-label="Scroll to top">&#8593;</button>
    {{scripts}}
</body>
</html>"##;

const DEFAULT_CSS: &str = r#"
:root{--bg:#0b1220;--bg-soft:#101a2e;--panel:rgba(148,163,184,0.06);--border:#1e293b;--text:#e2e8f0;--text-soft:#94a3b8;--muted:#64748b;--accent:#22d3ee;--accent-soft:rgba(34,211,238,0.12);}
body.theme-light{--bg:#f8fafc;--bg-soft:#eef2f7;--panel:#ffffff;--border:#dbe3ee;--text:#0f172a;--text-soft:#475569;--muted:#64748b;--accent:#0891b2;--accent-soft:rgba(8,145,178,0.1);}
*{box-sizing:border-box;margin:0;padding:0;}
html{scroll-behavior:smooth;}
body{background:var(--bg);color:var(--text);font-family:ui-sans-serif,system-ui,-apple-system,"Segoe UI",sans-serif;line-height:1.6;}
body.nav-locked{overflow:hidden;}
a{color:inherit;text-decoration:none;}
.icon{width:18px;height:18px;flex-shrink:0;vertical-align:middle;}
.glass{background:var(--panel);border:1px solid var(--border);border-radius:14px;backdrop-filter:blur(8px);}
#progress-bar{position:fixed;top:0;left:0;height:3px;width:0;background:var(--accent);z-index:1001;transition:width .1s linear;}
.site-header{position:fixed;top:0;left:0;right:0;z-index:1000;background:color-mix(in srgb,var(--bg) 85%,transparent);border-bottom:1px solid var(--border);backdrop-filter:blur(12px);}
.header-inner{max-width:1060px;margin:0 auto;display:flex;align-items:center;justify-content:space-between;gap:16px;padding:14px 24px;}
.site-name{font-weight:600;}
.desktop-nav{display:flex;gap:18px;font-size:14px;color:var(--text-soft);}
.nav-link:hover{color:var(--accent);}
.nav-link.nav-active{color:var(--accent);}
.header-actions{display:flex;align-items:center;gap:10px;}
#theme-toggle,#menu-toggle{background:none;border:1px solid var(--border);border-radius:8px;padding:6px 10px;cursor:pointer;color:var(--text);font-size:14px;}
#menu-toggle{display:none;}
#mobile-overlay{position:fixed;inset:0;background:rgba(2,6,23,0.6);opacity:0;pointer-events:none;transition:opacity .2s;z-index:1001;}
#mobile-overlay.visible{opacity:1;pointer-events:auto;}
#mobile-nav{position:fixed;top:0;right:0;bottom:0;width:min(320px,85vw);background:var(--bg-soft);border-left:1px solid var(--border);transform:translateX(100%);transition:transform .25s ease;z-index:1002;padding:64px 28px;}
#mobile-nav.open{transform:translateX(0);}
#mobile-nav-close{position:absolute;top:16px;right:20px;background:none;border:none;color:var(--text);font-size:26px;cursor:pointer;}
#mobile-nav-content{display:flex;flex-direction:column;gap:16px;font-size:16px;}
main{max-width:1060px;margin:0 auto;padding:96px 24px 48px;}
.section{padding:48px 0;}
.section h2{font-size:1.7rem;margin-bottom:18px;}
.section-subtitle{color:var(--text-soft);margin:-10px 0 18px;}
.hero{padding:72px 0 32px;}
.availability-badge{display:inline-block;padding:4px 12px;border-radius:999px;border:1px solid var(--accent);color:var(--accent);font-size:12px;margin-bottom:16px;}
.hero h1{font-size:clamp(2rem,5vw,3rem);line-height:1.15;}
.subheadline{color:var(--accent);font-size:1.15rem;margin-top:8px;}
.hero-summary{color:var(--text-soft);max-width:640px;margin-top:14px;}
.hero-actions{display:flex;flex-wrap:wrap;gap:12px;margin-top:22px;}
.btn{display:inline-flex;align-items:center;gap:8px;padding:10px 20px;border-radius:10px;font-size:14px;font-weight:500;cursor:pointer;border:1px solid transparent;}
.btn-primary{background:var(--accent);color:#06202a;}
.btn-primary:hover{filter:brightness(1.1);}
.btn-ghost{border-color:var(--border);color:var(--text);}
.btn-ghost:hover{border-color:var(--accent);color:var(--accent);}
.quick-facts{display:flex;flex-wrap:wrap;gap:10px;margin-top:22px;}
.pill{display:inline-block;padding:4px 12px;border-radius:999px;background:var(--bg-soft);border:1px solid var(--border);font-size:13px;color:var(--text-soft);}
.contact-cards{display:flex;flex-wrap:wrap;gap:12px;margin-top:22px;}
.contact-card{display:flex;align-items:center;gap:12px;padding:12px 16px;font-size:14px;}
.contact-card .icon{color:var(--accent);width:22px;height:22px;}
.contact-card-label{color:var(--muted);font-size:12px;}
.contact-card a:hover{color:var(--accent);}
.about-text{color:var(--text-soft);max-width:720px;white-space:pre-line;}
.skills-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:16px;}
.skill-card{padding:18px;}
.skill-group-name{font-weight:600;margin-bottom:10px;}
.skill-items{display:flex;flex-wrap:wrap;gap:8px;}
.experience-list{display:flex;flex-direction:column;gap:28px;}
.experience-timeline{position:relative;padding-left:24px;}
.experience-timeline::before{content:"";position:absolute;left:5px;top:14px;bottom:-28px;width:1px;background:var(--border);}
.experience-timeline:last-child::before{display:none;}
.experience-marker{position:absolute;left:0;top:10px;width:11px;height:11px;border-radius:50%;background:var(--accent);}
.experience-card{overflow:hidden;}
.experience-hero-image{width:100%;max-height:260px;object-fit:cover;display:block;}
.experience-body{padding:22px 26px;}
.experience-role{font-size:1.15rem;font-weight:600;}
.experience-company{color:var(--accent);font-weight:500;}
.experience-meta{display:flex;gap:8px;color:var(--muted);font-size:13px;margin-top:4px;}
.experience-summary{color:var(--text-soft);margin-top:12px;}
.experience-achievements{display:flex;flex-direction:column;gap:16px;margin-top:16px;}
.achievement-category-title{font-size:12px;text-transform:uppercase;letter-spacing:.08em;color:var(--muted);margin-bottom:8px;}
.achievement-card{border-left:2px solid var(--accent);padding:6px 12px;margin-bottom:8px;color:var(--text-soft);font-size:14px;background:var(--bg-soft);border-radius:0 8px 8px 0;}
.experience-projects{margin-top:20px;}
.experience-projects-title{font-weight:600;margin-bottom:12px;}
.experience-projects-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:14px;}
.experience-tech{display:flex;flex-wrap:wrap;gap:8px;margin-top:18px;}
.tech-tag{padding:3px 10px;border-radius:6px;background:var(--accent-soft);color:var(--accent);font-size:12px;}
.tech-pills{display:flex;flex-wrap:wrap;gap:8px;}
.project-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:18px;}
.project-card{overflow:hidden;display:flex;flex-direction:column;}
.project-image{width:100%;height:160px;object-fit:cover;display:block;}
.project-body{padding:18px;display:flex;flex-direction:column;gap:12px;flex:1;}
.project-head{display:flex;align-items:flex-start;justify-content:space-between;gap:12px;}
.project-title{font-weight:600;font-size:1.05rem;}
.project-description{color:var(--text-soft);font-size:14px;margin-top:4px;}
.project-impact{color:var(--accent);font-size:14px;font-weight:500;}
.project-stats{display:flex;gap:14px;color:var(--muted);font-size:13px;}
.project-stats .icon{width:14px;height:14px;}
.project-links{display:flex;gap:16px;font-size:14px;}
.project-links a{color:var(--accent);display:inline-flex;align-items:center;gap:6px;}
.project-links .icon{width:15px;height:15px;}
.status-badge{display:inline-flex;align-items:center;gap:6px;padding:3px 10px;border-radius:999px;font-size:12px;border:1px solid var(--border);white-space:nowrap;}
.status-dot{width:7px;height:7px;border-radius:50%;background:var(--muted);}
.status-badge.status-active .status-dot{background:var(--accent);}
.status-badge.status-active{color:var(--accent);border-color:var(--accent);}
.status-badge.status-archived{color:var(--muted);}
.project-filter{display:flex;gap:8px;margin-bottom:20px;}
.tab-button{padding:6px 16px;border-radius:8px;border:1px solid var(--border);font-size:13px;color:var(--text-soft);}
.tab-button:hover{border-color:var(--accent);}
.tab-button.active{background:var(--accent-soft);border-color:var(--accent);color:var(--accent);}
.education-card{padding:22px 26px;}
.education-school{font-size:1.1rem;font-weight:600;}
.education-degree{color:var(--text-soft);}
.education-meta{color:var(--muted);font-size:13px;margin-top:4px;}
.education-gpa{margin-top:8px;font-size:14px;}
.contact-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(300px,1fr));gap:20px;}
.contact-intro{padding:24px;}
.contact-headline{font-size:1.4rem;font-weight:700;margin-bottom:10px;}
.contact-blurb{color:var(--text-soft);font-size:14px;}
.contact-channel{margin-top:18px;padding-top:16px;border-top:1px solid var(--border);}
.contact-channel-label{font-size:11px;text-transform:uppercase;letter-spacing:.1em;color:var(--muted);margin-bottom:10px;}
.contact-email{display:flex;align-items:center;gap:10px;font-size:14px;}
.contact-email .icon{color:var(--accent);}
.contact-email:hover{color:var(--accent);}
.copy-email{margin-top:10px;padding:7px 14px;border-radius:8px;border:1px solid var(--border);background:none;color:var(--text);font-size:13px;cursor:pointer;}
.copy-email:hover{border-color:var(--accent);}
.contact-form{padding:24px;display:flex;flex-direction:column;gap:12px;}
.form-title{font-weight:600;font-size:1.05rem;}
.form-helper{color:var(--muted);font-size:13px;}
.contact-form input,.contact-form textarea{background:var(--bg-soft);border:1px solid var(--border);border-radius:8px;padding:10px 12px;color:var(--text);font:inherit;font-size:14px;}
.contact-form input:focus,.contact-form textarea:focus{outline:none;border-color:var(--accent);}
.interest-buttons{display:flex;flex-wrap:wrap;gap:8px;}
.interest-btn{padding:6px 12px;border-radius:8px;border:1px solid var(--border);background:var(--bg-soft);color:var(--text-soft);font-size:12px;cursor:pointer;}
.interest-btn:hover{border-color:var(--accent);color:var(--text);}
.form-message{padding:12px 16px;border-radius:8px;font-size:14px;margin-bottom:18px;}
.form-message.success{background:rgba(34,197,94,0.12);color:#4ade80;border:1px solid rgba(34,197,94,0.4);}
.terminal{max-width:640px;margin:8px 0 24px;overflow:hidden;}
.terminal-bar{display:flex;align-items:center;gap:6px;padding:10px 14px;border-bottom:1px solid var(--border);}
.terminal-dot{width:10px;height:10px;border-radius:50%;background:var(--border);}
.terminal-title{margin-left:8px;color:var(--muted);font-size:12px;}
.terminal-content{font-family:ui-monospace,"SFMono-Regular",Menlo,monospace;font-size:13px;padding:14px 16px;min-height:150px;max-height:220px;overflow-y:auto;}
.terminal-prompt{color:var(--accent);}
.terminal-command{color:var(--text);}
.terminal-output{color:var(--text-soft);}
.site-footer{border-top:1px solid var(--border);margin-top:32px;}
.footer-inner{max-width:1060px;margin:0 auto;padding:24px;display:flex;align-items:center;justify-content:space-between;gap:16px;flex-wrap:wrap;color:var(--muted);font-size:13px;}
.footer-links{display:flex;gap:18px;}
.footer-links a{display:inline-flex;align-items:center;gap:6px;}
.footer-links a:hover{color:var(--accent);}
.footer-links .icon{width:15px;height:15px;}
#scroll-top{position:fixed;bottom:24px;right:24px;width:42px;height:42px;border-radius:50%;border:1px solid var(--border);background:var(--bg-soft);color:var(--text);font-size:17px;cursor:pointer;opacity:0;pointer-events:none;transition:opacity .25s;z-index:999;}
#scroll-top.visible{opacity:1;pointer-events:auto;}
.load-error{text-align:center;padding:96px 0;}
.load-error p{color:var(--text-soft);margin:12px 0 20px;}
@media (max-width:760px){
.desktop-nav{display:none;}
#menu-toggle{display:inline-block;}
.header-cta{display:none;}
}
"#;
