use crate::domain::model::SentinelStatus;
use crate::domain::ports::SentinelProbe;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::Path;

/// Stats the path through `tokio::fs`, following symlinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl SentinelProbe for FsProbe {
    async fn probe(&self, path: &Path) -> Result<SentinelStatus> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SentinelStatus::Missing),
            Err(e) => return Err(e.into()),
        };

        if !metadata.is_file() {
            return Ok(SentinelStatus::NotAFile);
        }

        let modified: DateTime<Utc> = metadata.modified()?.into();
        Ok(SentinelStatus::File { modified })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_path() {
        let dir = TempDir::new().unwrap();
        let status = FsProbe.probe(&dir.path().join("absent.lock")).await.unwrap();
        assert_eq!(status, SentinelStatus::Missing);
    }

    #[tokio::test]
    async fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let status = FsProbe.probe(dir.path()).await.unwrap();
        assert_eq!(status, SentinelStatus::NotAFile);
    }

    #[tokio::test]
    async fn test_regular_file_reports_mtime() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nats-extension.lock");
        std::fs::write(&path, b"").unwrap();
        let expected: DateTime<Utc> = std::fs::metadata(&path).unwrap().modified().unwrap().into();

        let status = FsProbe.probe(&path).await.unwrap();
        assert_eq!(status, SentinelStatus::File { modified: expected });
    }

    #[tokio::test]
    async fn test_other_faults_propagate() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain");
        std::fs::write(&file, b"").unwrap();

        // A regular file used as a directory component fails with ENOTDIR, not ENOENT.
        let result = FsProbe.probe(&file.join("nats-extension.lock")).await;
        assert!(result.is_err());
    }
}
