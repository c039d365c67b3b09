#[macro_use]
extern crate rocket;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::FileServer;
use rocket::http::Header;
use rocket::response::content::RawHtml;

mod boot;
mod content;
mod models;
mod render;
mod routes;
mod seo;

#[cfg(test)]
mod tests;

use content::{ContentSource, SiteSettings};

/// Pages are assembled from the content documents on every request;
/// tell browsers not to hold on to them.
pub struct FreshContent;

#[rocket::async_trait]
impl Fairing for FreshContent {
    fn info(&self) -> Info {
        Info { name: "Fresh Content Pages", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        let path = req.uri().path().as_str();
        if path == "/" || path.starts_with("/api/") {
            res.set_header(Header::new("Cache-Control", "no-cache"));
        }
    }
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    // Boot check — verify/create directories, validate config files
    boot::run();

    let settings = SiteSettings::load();
    let source = ContentSource::configured();

    // Local content gets seeded and sanity-checked at boot; remote
    // sources are only checked per request.
    if let Some(dir) = source.dir() {
        content::seed_defaults(dir).expect("Failed to seed default content documents");
        boot::check_documents(dir);
    }

    rocket::build()
        .manage(settings)
        .manage(source)
        .attach(FreshContent)
        .mount("/static", FileServer::from("website/static"))
        .mount("/", routes::public::routes())
        .register("/", catchers![not_found, server_error])
}
