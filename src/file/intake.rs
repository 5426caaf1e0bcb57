use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::imaging::encode_data_uri;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),
    #[error("failed to decode image: {0}")]
    Decode(String),
}

/// A file offered to the customizer by drop or by the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    pub path: PathBuf,
    pub media_type: String,
}

impl IncomingFile {
    /// Declare the media type from the file extension
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let media_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self { path, media_type }
    }

    pub fn with_media_type(path: impl Into<PathBuf>, media_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            media_type: media_type.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Sequence number of one read request; higher is newer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReadToken(u64);

/// An accepted file waiting to be read off the event loop
#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub token: ReadToken,
    pub file: IncomingFile,
}

impl ReadRequest {
    /// Blocking read, meant to run on the IO task pool
    pub fn run(self) -> ReadCompletion {
        let bytes = read_bytes(&self.file.path);
        ReadCompletion {
            token: self.token,
            media_type: self.file.media_type,
            bytes,
        }
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, IntakeError> {
    fs::read(path).map_err(|source| IntakeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug)]
pub struct ReadCompletion {
    pub token: ReadToken,
    pub media_type: String,
    pub bytes: Result<Vec<u8>, IntakeError>,
}

/// Hands out read tokens and decides which completions still count.
///
/// Only the most recently issued token is honored, so an older read that
/// finishes late can't replace a newer image.
#[derive(Debug, Default)]
pub struct IntakePipeline {
    issued: u64,
    awaiting: Option<ReadToken>,
}

impl IntakePipeline {
    pub fn submit(&mut self, file: IncomingFile) -> Result<ReadRequest, IntakeError> {
        if !file.is_image() {
            return Err(IntakeError::UnsupportedMediaType(file.media_type));
        }
        self.issued += 1;
        let token = ReadToken(self.issued);
        self.awaiting = Some(token);
        Ok(ReadRequest { token, file })
    }

    /// Forget any in-flight read
    pub fn invalidate(&mut self) {
        self.awaiting = None;
    }

    pub fn is_reading(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Returns the data URI to show, `Ok(None)` for a stale completion
    pub fn complete(&mut self, completion: ReadCompletion) -> Result<Option<String>, IntakeError> {
        if self.awaiting != Some(completion.token) {
            return Ok(None);
        }
        self.awaiting = None;
        let bytes = completion.bytes?;
        Ok(Some(encode_data_uri(&completion.media_type, &bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(token: ReadToken, bytes: &[u8]) -> ReadCompletion {
        ReadCompletion {
            token,
            media_type: "image/png".to_string(),
            bytes: Ok(bytes.to_vec()),
        }
    }

    #[test]
    fn test_media_type_from_extension() {
        assert_eq!(IncomingFile::from_path("shirt.png").media_type, "image/png");
        assert_eq!(IncomingFile::from_path("photo.JPG").media_type, "image/jpeg");
        assert_eq!(IncomingFile::from_path("notes.txt").media_type, "text/plain");
        assert!(!IncomingFile::from_path("no_extension").is_image());
    }

    #[test]
    fn test_non_image_rejected() {
        let mut pipeline = IntakePipeline::default();
        let result = pipeline.submit(IncomingFile::with_media_type("a.txt", "text/plain"));
        assert!(matches!(result, Err(IntakeError::UnsupportedMediaType(t)) if t == "text/plain"));
        assert!(!pipeline.is_reading());
    }

    #[test]
    fn test_latest_request_wins() {
        let mut pipeline = IntakePipeline::default();
        let first = pipeline.submit(IncomingFile::from_path("a.png")).unwrap();
        let second = pipeline.submit(IncomingFile::from_path("b.png")).unwrap();
        assert!(second.token > first.token);

        let newer = pipeline.complete(completion(second.token, b"new")).unwrap();
        assert_eq!(newer.as_deref(), Some("data:image/png;base64,bmV3"));

        // The first read finishing late is ignored
        let stale = pipeline.complete(completion(first.token, b"old")).unwrap();
        assert!(stale.is_none());
    }

    #[test]
    fn test_invalidate_drops_in_flight_read() {
        let mut pipeline = IntakePipeline::default();
        let request = pipeline.submit(IncomingFile::from_path("a.png")).unwrap();
        pipeline.invalidate();
        assert!(pipeline.complete(completion(request.token, b"x")).unwrap().is_none());
    }

    #[test]
    fn test_read_failure_surfaces_error() {
        let mut pipeline = IntakePipeline::default();
        let request = pipeline
            .submit(IncomingFile::from_path("/definitely/not/here.png"))
            .unwrap();
        let result = pipeline.complete(request.run());
        assert!(matches!(result, Err(IntakeError::Read { .. })));
        assert!(!pipeline.is_reading());
    }

    #[test]
    fn test_reads_file_from_disk() {
        let path = std::env::temp_dir().join("shirt_customizer_intake_test.png");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let mut pipeline = IntakePipeline::default();
        let request = pipeline.submit(IncomingFile::from_path(&path)).unwrap();
        let uri = pipeline.complete(request.run()).unwrap();
        assert_eq!(uri.as_deref(), Some("data:image/png;base64,iVBORw=="));

        let _ = fs::remove_file(&path);
    }
}
