use crate::types::{PhasingResponse, ResolvedProfile};
use anyhow::{Context, Result};
use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};

/// Render one response envelope with a trailing newline.
pub fn render_response(response: &PhasingResponse, pretty: bool) -> Result<String> {
    let mut text = if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    }
    .context("Failed to serialize response envelope")?;
    text.push('\n');
    Ok(text)
}

/// Render responses as newline-delimited JSON, one envelope per line.
pub fn render_batch(responses: &[PhasingResponse]) -> Result<String> {
    let mut text = String::new();
    for response in responses {
        text.push_str(&render_response(response, false)?);
    }
    Ok(text)
}

/// Write to a file, or to stdout when no path is given.
pub fn write_output(text: &str, output_path: Option<&str>) -> Result<()> {
    match output_path {
        Some(path) if path != "-" => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            eprintln!("Output written to {}", path);
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .context("Failed to write to standard output")?;
            handle.flush().context("Failed to flush standard output")?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ProfileRow<'a> {
    request_id: &'a str,
    gene: &'a str,
    diplotype: &'a str,
    status: String,
    contributing_rsids: String,
}

impl<'a> ProfileRow<'a> {
    fn new(request_id: Option<&'a str>, profile: &'a ResolvedProfile) -> Self {
        Self {
            request_id: request_id.unwrap_or(""),
            gene: &profile.gene,
            diplotype: &profile.diplotype,
            status: profile.status.to_string(),
            contributing_rsids: profile.contributing_rsids.join(","),
        }
    }
}

/// Tab-separated table of resolved profiles, one row per gene.
pub struct ProfileTableWriter {
    writer: Writer<File>,
    records_written: usize,
}

impl ProfileTableWriter {
    pub fn new(output_path: &str) -> Result<Self> {
        let file = File::create(output_path)
            .with_context(|| format!("Failed to create profile table: {}", output_path))?;

        // Header row comes from the ProfileRow field names on first serialize()
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_writer(file);

        Ok(Self {
            writer,
            records_written: 0,
        })
    }

    pub fn write_response(&mut self, response: &PhasingResponse) -> Result<()> {
        let request_id = response.request_id.as_deref();
        for profile in &response.resolved_profiles {
            self.writer
                .serialize(ProfileRow::new(request_id, profile))
                .context("Failed to write profile row")?;
            self.records_written += 1;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush profile table")?;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }
}
