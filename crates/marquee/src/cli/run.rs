//! Title run command handler.

use marquee::{MarqueeError, PipelineExecutor, PipelineRecord};

/// How a run ended, for status reporting.
#[derive(Debug)]
pub enum RunOutcome {
    /// The pipeline completed, whether or not a file was written
    Completed(PipelineRecord),
    /// Title refinement failed and nothing else ran
    Failed(MarqueeError),
}

impl RunOutcome {
    /// The final status line.
    pub fn status_line(&self) -> String {
        match self {
            RunOutcome::Completed(record) => format!(
                "Status: {}",
                record.final_message.as_deref().unwrap_or("Run finished")
            ),
            RunOutcome::Failed(e) => format!("Critical error: {}", e),
        }
    }

    /// Whether the process should exit successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }
}

/// Run one title through the pipeline.
#[tracing::instrument(skip(executor))]
pub async fn run_title(executor: &PipelineExecutor, title: &str) -> RunOutcome {
    match executor.run(title).await {
        Ok(record) => {
            match serde_json::to_string(&record) {
                Ok(json) => tracing::debug!(record = %json, "Run report"),
                Err(e) => tracing::warn!(error = %e, "Could not serialize run report"),
            }
            RunOutcome::Completed(record)
        }
        Err(e) => {
            tracing::error!(error = %e, "Pipeline run failed");
            RunOutcome::Failed(e)
        }
    }
}
