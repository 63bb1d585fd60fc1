//! JSON writing module for parsed bulletins
//!
//! Records are written as a plain JSON array. In debug mode the array is
//! wrapped together with the parse trace as `{ "debug": [...], "data": [...] }`.

use crate::error::Result;
use crate::parser::ParseTrace;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Records paired with the trace that produced them
#[derive(Debug, Serialize)]
pub struct DebugEnvelope<'a, T: Serialize> {
    pub debug: &'a ParseTrace,
    pub data: &'a T,
}

/// Render records as pretty JSON, wrapped in the debug envelope when a trace is given
pub fn render_json<T: Serialize>(data: &T, trace: Option<&ParseTrace>) -> Result<String> {
    let json = match trace {
        Some(trace) => serde_json::to_string_pretty(&DebugEnvelope { debug: trace, data })?,
        None => serde_json::to_string_pretty(data)?,
    };
    Ok(json)
}

/// Writer of batch output files into one directory
#[derive(Debug, Clone)]
pub struct JsonWriter {
    output_dir: PathBuf,
}

impl JsonWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write records to `<output_dir>/<filename>`, creating the directory when needed
    pub async fn write<T: Serialize>(
        &self,
        filename: &str,
        data: &T,
        trace: Option<&ParseTrace>,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).await?;

        let path = self.output_dir.join(filename);
        let json = render_json(data, trace)?;
        fs::write(&path, json.as_bytes()).await?;

        debug!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(path)
    }
}
