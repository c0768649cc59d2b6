//! Serve the site's static files (`assets/` images, `data/` JSON) next to the rendered page.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

pub const STATIC_DIRS: &[&str] = &["assets", "data"];

/// Routes for each static directory under `site_root`. Missing directories simply 404.
pub fn static_routes<S>(site_root: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    STATIC_DIRS.iter().fold(Router::new(), |router, dir| {
        router.nest_service(&format!("/{dir}"), ServeDir::new(site_root.join(dir)))
    })
}
