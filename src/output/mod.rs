//! Artifact output
//!
//! Each artifact is written as a whole file. A failure on one artifact is
//! recorded and the remaining artifacts are still written.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OutputError;

/// A rendered file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

impl Artifact {
    pub fn new(path: PathBuf, contents: String) -> Self {
        Self { path, contents }
    }
}

/// Destination for rendered artifacts, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactSink {
    /// Make sure a directory and its parents exist
    fn create_dir_all(&mut self, path: &Path) -> Result<(), OutputError>;

    /// Write (or overwrite) a whole file
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), OutputError>;
}

/// Sink writing to the local filesystem
#[derive(Debug, Default)]
pub struct FsSink;

impl ArtifactSink for FsSink {
    fn create_dir_all(&mut self, path: &Path) -> Result<(), OutputError> {
        fs::create_dir_all(path).map_err(|source| OutputError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), OutputError> {
        fs::write(path, contents).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Outcome of writing a batch of artifacts
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<OutputError>,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Write every artifact, continuing past failures
pub fn write_artifacts(sink: &mut impl ArtifactSink, artifacts: &[Artifact]) -> WriteReport {
    let mut report = WriteReport::default();

    for artifact in artifacts {
        let result = match artifact.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => sink.create_dir_all(dir),
            None => Ok(()),
        }
        .and_then(|()| sink.write_file(&artifact.path, &artifact.contents));

        match result {
            Ok(()) => {
                tracing::info!("wrote {}", artifact.path.display());
                report.written.push(artifact.path.clone());
            }
            Err(err) => {
                match std::error::Error::source(&err) {
                    Some(source) => tracing::error!("{err}: {source}"),
                    None => tracing::error!("{err}"),
                }
                report.failed.push(err);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sample() -> Vec<Artifact> {
        vec![
            Artifact::new(PathBuf::from("myform/generated_form_model.rs"), "model".into()),
            Artifact::new(PathBuf::from("index-template.html"), "index".into()),
            Artifact::new(PathBuf::from("response-template.html"), "response".into()),
        ]
    }

    #[test]
    fn test_failed_write_does_not_block_others() {
        let mut sink = MockArtifactSink::new();
        sink.expect_create_dir_all()
            .withf(|path| path == Path::new("myform"))
            .times(1)
            .returning(|_| Ok(()));
        sink.expect_write_file()
            .withf(|path, _| path == Path::new("index-template.html"))
            .times(1)
            .returning(|path, _| {
                Err(OutputError::Write {
                    path: path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                })
            });
        sink.expect_write_file()
            .withf(|path, _| path != Path::new("index-template.html"))
            .times(2)
            .returning(|_, _| Ok(()));

        let report = write_artifacts(&mut sink, &sample());

        assert!(!report.is_complete());
        assert_eq!(
            report.written,
            vec![
                PathBuf::from("myform/generated_form_model.rs"),
                PathBuf::from("response-template.html"),
            ]
        );
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path(), &PathBuf::from("index-template.html"));
    }

    #[test]
    fn test_failed_directory_skips_only_its_file() {
        let mut sink = MockArtifactSink::new();
        sink.expect_create_dir_all().times(1).returning(|path| {
            Err(OutputError::CreateDir {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::Other, "read-only"),
            })
        });
        sink.expect_write_file().times(2).returning(|_, _| Ok(()));

        let report = write_artifacts(&mut sink, &sample());

        assert_eq!(report.written.len(), 2);
        assert!(matches!(report.failed[0], OutputError::CreateDir { .. }));
    }

    #[test]
    fn test_fs_sink_writes_and_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let artifacts = vec![
            Artifact::new(dir.path().join("myform").join("model.rs"), "first".into()),
            Artifact::new(dir.path().join("index-template.html"), "page".into()),
        ];

        let report = write_artifacts(&mut FsSink, &artifacts);
        assert!(report.is_complete());
        assert_eq!(
            fs::read_to_string(dir.path().join("myform/model.rs")).unwrap(),
            "first"
        );

        let again = vec![Artifact::new(
            dir.path().join("myform").join("model.rs"),
            "second".into(),
        )];
        assert!(write_artifacts(&mut FsSink, &again).is_complete());
        assert_eq!(
            fs::read_to_string(dir.path().join("myform/model.rs")).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_fs_sink_reports_unwritable_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("myform");
        fs::write(&blocker, "not a directory").unwrap();

        let artifacts = vec![
            Artifact::new(blocker.join("model.rs"), "model".into()),
            Artifact::new(dir.path().join("index-template.html"), "page".into()),
        ];
        let report = write_artifacts(&mut FsSink, &artifacts);

        assert_eq!(report.written, vec![dir.path().join("index-template.html")]);
        assert_eq!(report.failed.len(), 1);
    }
}
