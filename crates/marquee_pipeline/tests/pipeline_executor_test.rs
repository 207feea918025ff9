//! End-to-end pipeline runs against mock providers.

mod test_utils;

use marquee_core::MovieFacts;
use marquee_error::{MarqueeErrorKind, PipelineErrorKind, ProviderErrorKind};
use marquee_pipeline::{
    PipelineExecutor, PipelineSettings, THEME_FAILED_PLACEHOLDER, THEME_SKIPPED_PLACEHOLDER,
};
use marquee_storage::FileSystemOutput;
use std::path::PathBuf;
use std::sync::Arc;
use test_utils::{
    MockLanguageModel, MockLookup, MockMetadataProvider, MockResponse, RecordingOutputSink,
    inception_facts,
};

fn settings() -> anyhow::Result<PipelineSettings> {
    Ok(PipelineSettings::builder().output_dir("out").build()?)
}

fn executor(
    model: &MockLanguageModel,
    metadata: &MockMetadataProvider,
    sink: &RecordingOutputSink,
    settings: PipelineSettings,
) -> PipelineExecutor {
    PipelineExecutor::new(
        Arc::new(model.clone()),
        Arc::new(metadata.clone()),
        Arc::new(sink.clone()),
        settings,
    )
}

#[tokio::test]
async fn test_misspelled_title_is_written() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_texts(&["Inception", "  Dreams within dreams \n"]);
    let metadata = MockMetadataProvider::found(inception_facts());
    let sink = RecordingOutputSink::new();

    let record = executor(&model, &metadata, &sink, settings()?)
        .run("inceptio")
        .await?;

    assert_eq!(record.raw_title(), "inceptio");
    assert_eq!(record.refined_title.as_deref(), Some("Inception"));
    assert!(!record.title_uncertain);
    assert_eq!(record.theme.as_deref(), Some("Dreams within dreams"));
    assert_eq!(metadata.lookups(), vec!["Inception".to_string()]);
    assert_eq!(model.call_count(), 2);

    let expected_path = PathBuf::from("out").join("inception.txt");
    assert_eq!(record.written_path.as_ref(), Some(&expected_path));
    let message = record.final_message.unwrap_or_default();
    assert!(message.contains("Successfully wrote"));
    assert!(message.contains("'Inception'"));

    let writes = sink.writes();
    assert_eq!(writes.len(), 1);
    let (path, content) = &writes[0];
    assert_eq!(path, &expected_path);
    assert!(content.contains("Movie Title: Inception (2010)"));
    assert!(content.contains("IMDb Rating: 8.8"));
    assert!(content.contains("Main Cast: Leonardo DiCaprio, Joseph Gordon-Levitt"));
    assert!(content.contains("Dreams within dreams"));
    assert!(content.contains("dream-sharing technology"));
    Ok(())
}

#[tokio::test]
async fn test_uncertain_title_skips_lookup_and_write() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_texts(&["Asdkjasdkj Nonsense [UNCERTAIN]"]);
    let metadata = MockMetadataProvider::found(inception_facts());
    let sink = RecordingOutputSink::new();

    let record = executor(&model, &metadata, &sink, settings()?)
        .run("asdkjasdkj nonsense")
        .await?;

    assert!(record.title_uncertain);
    assert_eq!(record.refined_title.as_deref(), Some("Asdkjasdkj Nonsense"));
    assert_eq!(metadata.call_count(), 0);
    assert!(!record.metadata.as_ref().is_some_and(|m| m.found()));
    assert_eq!(record.theme.as_deref(), Some(THEME_SKIPPED_PLACEHOLDER));
    assert_eq!(model.call_count(), 1);

    assert!(record.written_path.is_none());
    assert!(sink.writes().is_empty());
    assert!(sink.directories().is_empty());
    assert_eq!(
        record.final_message.as_deref(),
        Some(
            "Could not confidently identify the movie 'asdkjasdkj nonsense' \
             (best guess: 'Asdkjasdkj Nonsense'); no file was written."
        )
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_plot_skips_theme_call() -> anyhow::Result<()> {
    let facts = MovieFacts {
        plot: Some("N/A".to_string()),
        ..inception_facts()
    };
    let model = MockLanguageModel::new_texts(&["Inception"]);
    let metadata = MockMetadataProvider::found(facts);
    let sink = RecordingOutputSink::new();

    let record = executor(&model, &metadata, &sink, settings()?)
        .run("Inception")
        .await?;

    assert_eq!(model.call_count(), 1);
    assert_eq!(record.theme.as_deref(), Some(THEME_SKIPPED_PLACEHOLDER));
    assert!(record.written_path.is_some());

    let writes = sink.writes();
    assert!(writes[0].1.contains("Plot Summary:\nN/A\n"));
    assert!(writes[0].1.contains(THEME_SKIPPED_PLACEHOLDER));
    Ok(())
}

#[tokio::test]
async fn test_short_plot_skips_theme_call() -> anyhow::Result<()> {
    let facts = MovieFacts {
        plot: Some("  Dreams.  ".to_string()),
        ..inception_facts()
    };
    let model = MockLanguageModel::new_texts(&["Inception"]);
    let metadata = MockMetadataProvider::found(facts);
    let sink = RecordingOutputSink::new();

    let record = executor(&model, &metadata, &sink, settings()?)
        .run("Inception")
        .await?;

    assert_eq!(model.call_count(), 1);
    assert_eq!(record.theme.as_deref(), Some(THEME_SKIPPED_PLACEHOLDER));
    Ok(())
}

#[tokio::test]
async fn test_not_found_never_writes() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_texts(&["Inception"]);
    let metadata = MockMetadataProvider::new(MockLookup::NotFound("Movie not found!".into()));
    let sink = RecordingOutputSink::new();

    let record = executor(&model, &metadata, &sink, settings()?)
        .run("inception")
        .await?;

    assert_eq!(model.call_count(), 1);
    assert!(sink.writes().is_empty());
    assert!(record.written_path.is_none());
    assert_eq!(
        record.final_message.as_deref(),
        Some("Movie 'Inception' not found: Movie not found!; no file was written.")
    );
    Ok(())
}

#[tokio::test]
async fn test_lookup_failure_becomes_not_found() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_texts(&["Inception"]);
    let metadata = MockMetadataProvider::new(MockLookup::Error(ProviderErrorKind::HttpStatus {
        status_code: 503,
        message: "Service Unavailable".into(),
    }));
    let sink = RecordingOutputSink::new();

    let record = executor(&model, &metadata, &sink, settings()?)
        .run("inception")
        .await?;

    let found = record.metadata.as_ref().map(|m| m.found());
    assert_eq!(found, Some(false));
    let error = record
        .metadata
        .as_ref()
        .and_then(|m| m.error())
        .unwrap_or_default();
    assert!(error.starts_with("Metadata lookup failed"));
    assert!(error.contains("503"));
    assert!(sink.writes().is_empty());
    assert!(
        record
            .final_message
            .unwrap_or_default()
            .starts_with("Movie 'Inception' not found")
    );
    Ok(())
}

#[tokio::test]
async fn test_title_refinement_failure_is_fatal() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_sequence(vec![MockResponse::Error(
        ProviderErrorKind::HttpStatus {
            status_code: 401,
            message: "Invalid API key".into(),
        },
    )]);
    let metadata = MockMetadataProvider::found(inception_facts());
    let sink = RecordingOutputSink::new();

    let result = executor(&model, &metadata, &sink, settings()?)
        .run("inceptio")
        .await;

    let err = match result {
        Ok(record) => panic!("expected failure, got {:?}", record),
        Err(e) => e,
    };
    match err.kind() {
        MarqueeErrorKind::Pipeline(e) => match &e.kind {
            PipelineErrorKind::TitleRefinement { title, message } => {
                assert_eq!(title, "inceptio");
                assert!(message.contains("401"));
            }
            other => panic!("unexpected pipeline error: {}", other),
        },
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(metadata.call_count(), 0);
    assert!(sink.writes().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_empty_title_is_rejected() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_texts(&["Inception"]);
    let metadata = MockMetadataProvider::found(inception_facts());
    let sink = RecordingOutputSink::new();

    let result = executor(&model, &metadata, &sink, settings()?)
        .run("   ")
        .await;

    assert!(result.is_err());
    assert_eq!(model.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_theme_failure_uses_placeholder() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_sequence(vec![
        MockResponse::Text("Inception".into()),
        MockResponse::Error(ProviderErrorKind::Transport("connection reset".into())),
    ]);
    let metadata = MockMetadataProvider::found(inception_facts());
    let sink = RecordingOutputSink::new();

    let record = executor(&model, &metadata, &sink, settings()?)
        .run("inceptio")
        .await?;

    assert_eq!(record.theme.as_deref(), Some(THEME_FAILED_PLACEHOLDER));
    assert!(record.written_path.is_some());
    assert!(sink.writes()[0].1.contains(THEME_FAILED_PLACEHOLDER));
    Ok(())
}

#[tokio::test]
async fn test_write_failure_is_reported() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_texts(&["Inception", "Dreams within dreams"]);
    let metadata = MockMetadataProvider::found(inception_facts());
    let sink = RecordingOutputSink::failing();

    let record = executor(&model, &metadata, &sink, settings()?)
        .run("inceptio")
        .await?;

    assert!(record.written_path.is_none());
    let message = record.final_message.unwrap_or_default();
    assert!(message.starts_with("Failed to write movie details for 'Inception'"));
    assert!(message.contains("permission denied"));
    Ok(())
}

#[tokio::test]
async fn test_empty_refinement_keeps_raw_title() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_texts(&["   ", "Dreams within dreams"]);
    let metadata = MockMetadataProvider::found(inception_facts());
    let sink = RecordingOutputSink::new();

    let record = executor(&model, &metadata, &sink, settings()?)
        .run("Inception")
        .await?;

    assert_eq!(record.refined_title.as_deref(), Some("Inception"));
    assert!(!record.title_uncertain);
    assert_eq!(metadata.lookups(), vec!["Inception".to_string()]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stalled_refinement_times_out() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_sequence(vec![MockResponse::Delayed(
        std::time::Duration::from_secs(120),
        "Inception".into(),
    )]);
    let metadata = MockMetadataProvider::found(inception_facts());
    let sink = RecordingOutputSink::new();
    let settings = PipelineSettings::builder()
        .output_dir("out")
        .call_timeout_secs(Some(5))
        .build()?;

    let result = executor(&model, &metadata, &sink, settings)
        .run("inceptio")
        .await;

    let message = match result {
        Ok(record) => panic!("expected timeout, got {:?}", record),
        Err(e) => e.to_string(),
    };
    assert!(message.contains("No response within 5 seconds"));
    assert_eq!(metadata.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_filesystem_run_overwrites_previous_output() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output_dir = dir.path().join("movie_outputs");
    let settings = PipelineSettings::builder()
        .output_dir(output_dir.clone())
        .build()?;
    let model = MockLanguageModel::new_texts(&[
        "Inception",
        "First theme",
        "Inception",
        "Dreams within dreams",
    ]);
    let metadata = MockMetadataProvider::found(inception_facts());
    let executor = PipelineExecutor::new(
        Arc::new(model.clone()),
        Arc::new(metadata),
        Arc::new(FileSystemOutput::new()),
        settings,
    );

    executor.run("inceptio").await?;
    let record = executor.run("inceptio").await?;

    let path = output_dir.join("inception.txt");
    assert_eq!(record.written_path.as_ref(), Some(&path));
    let content = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Movie Title: Inception (2010)");
    assert_eq!(lines[6], "Dreams within dreams");
    assert!(!content.contains("First theme"));
    assert_eq!(std::fs::read_dir(&output_dir)?.count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_record_serializes_to_json() -> anyhow::Result<()> {
    let model = MockLanguageModel::new_texts(&["Inception", "Dreams within dreams"]);
    let metadata = MockMetadataProvider::found(inception_facts());
    let sink = RecordingOutputSink::new();

    let record = executor(&model, &metadata, &sink, settings()?)
        .run("inceptio")
        .await?;

    let json = serde_json::to_value(&record)?;
    assert_eq!(json["refined_title"], "Inception");
    assert_eq!(json["metadata"]["year"], "2010");
    assert_eq!(json["theme"], "Dreams within dreams");
    Ok(())
}
