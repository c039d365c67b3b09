use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;

use crate::content::{self, ContentSource, SiteSettings};
use crate::models::portfolio::PortfolioRecord;
use crate::render::{self, PageContext};
use crate::seo;

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage, portfolio_json, robots]
}

const FILTERS: &[&str] = &["all", "active", "archived"];

// ── Homepage ───────────────────────────────────────────

#[get("/?<filter>&<success>")]
pub async fn homepage(
    source: &State<ContentSource>,
    settings: &State<SiteSettings>,
    filter: Option<String>,
    success: Option<bool>,
) -> RawHtml<String> {
    let record = match content::load_portfolio(source).await {
        Ok(record) => record,
        Err(e) => {
            log::error!("Content load failed: {}", e);
            return RawHtml(render::render_error_page(&seo::fallback_meta()));
        }
    };

    // Unknown filter values fall back to "all" rather than hiding everything.
    let filter = filter
        .as_deref()
        .filter(|f| FILTERS.contains(f))
        .unwrap_or("all");

    let seo_meta = seo::build_meta(&record, &settings.site_url, "/");
    let ctx = PageContext {
        record: &record,
        filter,
        form_sent: success.unwrap_or(false),
        site_url: &settings.site_url,
        seo_meta: &seo_meta,
    };
    RawHtml(render::render_page(&ctx))
}

// ── Aggregated record, read-only ───────────────────────

#[get("/api/portfolio.json")]
pub async fn portfolio_json(
    source: &State<ContentSource>,
) -> Result<Json<PortfolioRecord>, Status> {
    match content::load_portfolio(source).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            log::error!("Content load failed: {}", e);
            Err(Status::ServiceUnavailable)
        }
    }
}

#[get("/robots.txt")]
pub fn robots() -> &'static str {
    "User-agent: *\nAllow: /\n"
}
