//! Test utilities for pipeline tests.
//!
//! Mock providers with scripted behavior and call recording, so stage and
//! executor tests never touch the network or the filesystem.

#![allow(dead_code)]

use async_trait::async_trait;
use marquee_core::{CompletionRequest, CompletionResponse, MovieFacts};
use marquee_error::{
    MarqueeResult, ProviderError, ProviderErrorKind, StorageError, StorageErrorKind,
};
use marquee_interface::{LanguageModel, LookupOutcome, MetadataProvider};
use marquee_storage::OutputSink;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A single scripted model response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text
    Text(String),
    /// Fail with this provider error
    Error(ProviderErrorKind),
    /// Return this text after sleeping
    Delayed(Duration, String),
}

/// Language model that replays scripted responses in order.
///
/// Once the script is exhausted every call fails with `EmptyResponse`.
#[derive(Clone)]
pub struct MockLanguageModel {
    script: Arc<Mutex<Vec<MockResponse>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLanguageModel {
    /// Replay `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        let mut script = responses;
        script.reverse();
        Self {
            script: Arc::new(Mutex::new(script)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer every call in `texts` order with plain text.
    pub fn new_texts(texts: &[&str]) -> Self {
        Self::new_sequence(
            texts
                .iter()
                .map(|t| MockResponse::Text(t.to_string()))
                .collect(),
        )
    }

    /// Number of completed or failed calls.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    async fn complete(&self, req: &CompletionRequest) -> MarqueeResult<CompletionResponse> {
        self.requests.lock().unwrap().push(req.clone());
        let next = self.script.lock().unwrap().pop();

        match next {
            Some(MockResponse::Text(text)) => Ok(CompletionResponse::new(text)),
            Some(MockResponse::Error(kind)) => Err(ProviderError::new(kind).into()),
            Some(MockResponse::Delayed(delay, text)) => {
                tokio::time::sleep(delay).await;
                Ok(CompletionResponse::new(text))
            }
            None => Err(ProviderError::new(ProviderErrorKind::EmptyResponse).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Behavior of a [`MockMetadataProvider`].
#[derive(Debug, Clone)]
pub enum MockLookup {
    /// Report a match with these facts
    Found(MovieFacts),
    /// Report no match with this explanation
    NotFound(String),
    /// Fail the lookup
    Error(ProviderErrorKind),
}

/// Metadata provider with a fixed answer and lookup recording.
#[derive(Clone)]
pub struct MockMetadataProvider {
    behavior: MockLookup,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockMetadataProvider {
    /// Provider that always answers with `behavior`.
    pub fn new(behavior: MockLookup) -> Self {
        Self {
            behavior,
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Provider that always finds `facts`.
    pub fn found(facts: MovieFacts) -> Self {
        Self::new(MockLookup::Found(facts))
    }

    /// Titles looked up, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    /// Number of lookups performed.
    pub fn call_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

#[async_trait]
impl MetadataProvider for MockMetadataProvider {
    async fn lookup(&self, title: &str) -> MarqueeResult<LookupOutcome> {
        self.lookups.lock().unwrap().push(title.to_string());
        match &self.behavior {
            MockLookup::Found(facts) => Ok(LookupOutcome::Found(facts.clone())),
            MockLookup::NotFound(reason) => Ok(LookupOutcome::NotFound(reason.clone())),
            MockLookup::Error(kind) => Err(ProviderError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Output sink that keeps writes in memory.
#[derive(Clone, Default)]
pub struct RecordingOutputSink {
    directories: Arc<Mutex<Vec<PathBuf>>>,
    writes: Arc<Mutex<Vec<(PathBuf, String)>>>,
    fail_writes: bool,
}

impl RecordingOutputSink {
    /// Sink that accepts every write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink whose writes always fail.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Directories passed to `ensure_directory`.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.directories.lock().unwrap().clone()
    }

    /// Successful writes as `(path, content)`.
    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl OutputSink for RecordingOutputSink {
    async fn ensure_directory(&self, dir: &Path) -> MarqueeResult<()> {
        self.directories.lock().unwrap().push(dir.to_path_buf());
        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &str) -> MarqueeResult<PathBuf> {
        if self.fail_writes {
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: permission denied",
                path.display()
            )))
            .into());
        }
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(path.to_path_buf())
    }
}

/// Facts for the film used throughout the tests.
pub fn inception_facts() -> MovieFacts {
    MovieFacts {
        title: Some("Inception".to_string()),
        year: Some("2010".to_string()),
        imdb_rating: Some("8.8".to_string()),
        cast: vec![
            "Leonardo DiCaprio".to_string(),
            "Joseph Gordon-Levitt".to_string(),
        ],
        genre: Some("Action, Adventure, Sci-Fi".to_string()),
        plot: Some(
            "A thief who steals corporate secrets through the use of dream-sharing technology \
             is given the inverse task of planting an idea into the mind of a C.E.O."
                .to_string(),
        ),
    }
}
