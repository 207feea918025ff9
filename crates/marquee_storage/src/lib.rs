//! Output storage for the marquee pipeline.
//!
//! The pipeline writes exactly one text file per successful run. This crate
//! defines the [`OutputSink`] capability the write branch calls and a
//! filesystem implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use marquee_storage::{FileSystemOutput, OutputSink};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sink = FileSystemOutput::new();
//! let dir = std::path::Path::new("movie_outputs");
//! sink.ensure_directory(dir).await?;
//! let path = sink.write_file(&dir.join("inception.txt"), "Movie Title: Inception (2010)\n").await?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod sink;

pub use filesystem::FileSystemOutput;
pub use sink::OutputSink;
