/// Subdirectory the static bundle is hosted under.
pub const BASE_PATH: &str = "/my-portfolio";

pub const CONTACT_RECIPIENT: &str = "btn.daniel@yahoo.com";

/// The scroll-spy probe sits this fraction of the viewport below the scroll offset.
pub const SCROLL_PROBE_DIVISOR: f64 = 3.0;

/// Joins `path` onto [`BASE_PATH`] with exactly one `/` between them.
pub fn with_base(path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{BASE_PATH}/")
    } else {
        format!("{BASE_PATH}/{path}")
    }
}

/// Absolute URL of a compiled asset in the site-root relative `site_pkg_dir`.
pub fn pkg_href(site_pkg_dir: &str, file: &str) -> String {
    format!("/{}/{file}", site_pkg_dir.trim_matches('/'))
}
