//! Post-processing of the pre-rendered site so that one directory,
//! `<site-root>/my-portfolio`, can be uploaded to the static host as-is.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::config::{with_base, BASE_PATH};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no page was rendered at {}", .0.display())]
    MissingPage(PathBuf),
    #[error("page references assets outside the bundle: {0:?}")]
    ForeignAssets(Vec<String>),
    #[error("page references missing assets: {0:?}")]
    MissingAssets(Vec<String>),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn base_dir_name() -> &'static str {
    BASE_PATH.trim_matches('/')
}

/// The directory that is hosted under the base path.
pub fn bundle_dir(site_root: &Path) -> PathBuf {
    site_root.join(base_dir_name())
}

pub fn index_file(site_root: &Path) -> PathBuf {
    bundle_dir(site_root).join("index.html")
}

/// The route generator writes the base route, which has no trailing slash,
/// next to the bundle directory instead of inside it.
fn rendered_file(site_root: &Path) -> PathBuf {
    site_root.join(format!("{}.html", base_dir_name()))
}

/// Moves the rendered base route to `<bundle>/index.html`.
pub async fn relocate_index(site_root: &Path) -> Result<PathBuf, ExportError> {
    let index = index_file(site_root);
    let rendered = rendered_file(site_root);
    if tokio::fs::try_exists(&rendered).await? {
        tokio::fs::create_dir_all(bundle_dir(site_root)).await?;
        tokio::fs::rename(&rendered, &index).await?;
    }
    if !tokio::fs::try_exists(&index).await? {
        return Err(ExportError::MissingPage(index));
    }
    Ok(index)
}

/// Root-relative `href`/`src` values in the page.
pub fn asset_refs(html: &str) -> Vec<String> {
    ["href=\"", "src=\""]
        .iter()
        .flat_map(|attr| html.split(attr).skip(1))
        .filter_map(|rest| rest.split('"').next())
        .filter(|url| url.starts_with('/'))
        .map(str::to_string)
        .collect()
}

/// Every asset the exported page asks for must sit inside the bundle directory.
pub async fn check_assets(site_root: &Path) -> Result<(), ExportError> {
    let html = tokio::fs::read_to_string(index_file(site_root)).await?;
    let base = with_base("");
    let (inside, outside): (Vec<_>, Vec<_>) = asset_refs(&html)
        .into_iter()
        .partition(|url| url.starts_with(&base));
    if !outside.is_empty() {
        return Err(ExportError::ForeignAssets(outside));
    }
    let mut missing = Vec::new();
    for url in inside {
        if !tokio::fs::try_exists(site_root.join(url.trim_start_matches('/'))).await? {
            missing.push(url);
        }
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ExportError::MissingAssets(missing))
    }
}
