use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::content;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &[
    "website",
    "website/content",
    "website/static",
    "website/templates",
];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories and aborts if the filesystem is unusable.
pub fn run() {
    info!("Folio boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Content directory writable ──────────────────
    let content_dir = Path::new("website/content");
    if content_dir.exists() {
        let test_file = content_dir.join(".write_test");
        match fs::write(&test_file, "test") {
            Ok(_) => {
                let _ = fs::remove_file(&test_file);
            }
            Err(e) => {
                warn!(
                    "  Content directory not writable: {} (seeding will fail)",
                    e
                );
                warnings += 1;
            }
        }
    }

    // ── 3. Config files ────────────────────────────────
    if !Path::new("folio.toml").exists() {
        warn!("  folio.toml not found — using default site settings");
        warnings += 1;
    }
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found — using default config");
        warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}

/// Verify every content document exists and parses. A broken document does
/// not abort the server (each page load shows the error view instead), but
/// the problem should be visible in the log before the first request.
pub fn check_documents(dir: &Path) -> u32 {
    let mut problems = 0u32;

    for doc in content::DOCUMENTS {
        let path = dir.join(format!("{}.json", doc));
        if !path.exists() {
            warn!("  Missing content document: {}", path.display());
            problems += 1;
            continue;
        }
        match fs::read(&path) {
            Ok(bytes) => {
                if let Err(e) = serde_json::from_slice::<serde_json::Value>(&bytes) {
                    warn!("  Invalid JSON in {}: {}", path.display(), e);
                    problems += 1;
                }
            }
            Err(e) => {
                warn!("  Unreadable content document {}: {}", path.display(), e);
                problems += 1;
            }
        }
    }

    if problems > 0 {
        warn!(
            "Content check found {} problem(s); page loads will show the error view until fixed.",
            problems
        );
    } else {
        info!("Content check passed: all documents parse.");
    }
    problems
}
