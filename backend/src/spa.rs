use std::path::{Path, PathBuf};
use include_dir::Dir;
use rocket::{fs::NamedFile, State};
use tracing::info;
use uuid::Uuid;
use crate::error::StartupError;

pub struct StaticDir(pub PathBuf);

/// Unpacks the embedded build of the frontend so it can be served from disk.
pub fn extract_static(dir: &Dir<'_>) -> Result<PathBuf, StartupError> {
    let target = std::env::temp_dir().join(format!("uplix_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&target)?;
    dir.extract(&target)?;
    info!("📦 Static files extracted to {}", target.display());
    Ok(target)
}

/// Serves a built asset when one exists and `index.html` otherwise, so client
/// routes such as `/scored-repos/<id>` survive a reload. `/api/*` is never
/// answered with the app shell.
#[rocket::get("/<path..>", rank = 20)]
pub async fn spa_handler(path: PathBuf, static_dir: &State<StaticDir>) -> Option<NamedFile> {
    if path.starts_with("api") {
        return None;
    }
    let root: &Path = &static_dir.0;
    let file_path = root.join(&path);
    if file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(root.join("index.html")).await.ok()
    }
}
