use std::path::{Path, PathBuf};
use tracing::Instrument;

use crate::models::{self, WORKSPACE_VERSION};

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("could not read workspace {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write workspace {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("workspace {path} is not valid JSON: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("workspace {path} has version {found}, this build understands up to {supported}")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },
    #[error("could not encode workspace: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load the workspace at `path`; a missing file is an empty workspace.
pub async fn fetch(path: &Path) -> Result<models::Workspace, DbError> {
    let span = tracing::info_span!("Fetch workspace", path = %path.display());

    let bytes = match tokio::fs::read(path).instrument(span).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No workspace at {}, starting empty", path.display());
            return Ok(models::Workspace::default());
        }
        Err(source) => {
            tracing::error!("Failed to read workspace, error: {:?}", source);
            return Err(DbError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let workspace: models::Workspace =
        serde_json::from_slice(&bytes).map_err(|source| DbError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    if workspace.version > WORKSPACE_VERSION {
        return Err(DbError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: workspace.version,
            supported: WORKSPACE_VERSION,
        });
    }

    Ok(workspace)
}

/// Write `workspace` to `path` via a temporary sibling file and a rename, so
/// a crash mid-write never leaves half a snapshot behind.
pub async fn save(path: &Path, workspace: &models::Workspace) -> Result<(), DbError> {
    let span = tracing::info_span!("Save workspace", path = %path.display(), projects = workspace.projects.len());

    let payload = serde_json::to_vec_pretty(workspace)?;
    let tmp = tmp_path(path);
    let write_err = |source| DbError::Write {
        path: path.to_path_buf(),
        source,
    };

    async {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }
        tokio::fs::write(&tmp, &payload).await.map_err(write_err)?;
        tokio::fs::rename(&tmp, path).await.map_err(write_err)
    }
    .instrument(span)
    .await
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "workspace".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::NewProject;
    use crate::services::ProjectStore;

    #[tokio::test]
    async fn missing_file_is_an_empty_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = fetch(&dir.path().join("nope.json")).await.unwrap();
        assert_eq!(workspace, models::Workspace::default());
    }

    #[tokio::test]
    async fn saved_workspace_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("board.json");

        let mut store = ProjectStore::new();
        store
            .create_project(NewProject::new("Launch", "go-to-market"))
            .unwrap();
        let mut workspace = models::Workspace::default();
        store.write_into(&mut workspace);

        save(&path, &workspace).await.unwrap();
        assert!(!tmp_path(&path).exists());

        let loaded = fetch(&path).await.unwrap();
        assert_eq!(loaded, workspace);
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(fetch(&path).await, Err(DbError::Decode { .. })));
    }

    #[tokio::test]
    async fn newer_version_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, r#"{"version": 99, "projects": []}"#).unwrap();

        assert!(matches!(
            fetch(&path).await,
            Err(DbError::UnsupportedVersion { found: 99, .. })
        ));
    }
}
