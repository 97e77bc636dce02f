use crate::error::PhasingError;
use crate::types::*;
use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// True when the path names standard input.
pub fn is_stdin(path: Option<&str>) -> bool {
    matches!(path, None | Some("-"))
}

/// Read the whole input, gunzipping `.gz` files, or stdin when no path is given.
pub fn read_input(path: Option<&str>) -> Result<String> {
    let mut text = String::new();

    match path {
        Some(file_path) if !is_stdin(path) => {
            if !Path::new(file_path).exists() {
                return Err(PhasingError::MissingInput(file_path.to_string()).into());
            }

            let file = File::open(file_path)
                .with_context(|| format!("Failed to open input file: {}", file_path))?;
            let mut reader = BufReader::new(file);

            if file_path.ends_with(".gz") {
                log::info!("Decompressing {}...", file_path);
                MultiGzDecoder::new(reader)
                    .read_to_string(&mut text)
                    .with_context(|| format!("Failed to decompress {}", file_path))?;
            } else {
                reader
                    .read_to_string(&mut text)
                    .with_context(|| format!("Failed to read {}", file_path))?;
            }

            log::info!("Read {} bytes from {}", text.len(), file_path);
        }
        _ => {
            io::stdin()
                .lock()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
        }
    }

    Ok(text)
}

pub fn parse_request(text: &str) -> Result<PhasingRequest, PhasingError> {
    serde_json::from_str(text).map_err(PhasingError::InvalidEnvelope)
}

/// Parse newline-delimited envelopes, skipping blank lines.
pub fn parse_batch(text: &str) -> Result<Vec<PhasingRequest>, PhasingError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| PhasingError::InvalidBatchLine {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

pub fn read_request(path: Option<&str>) -> Result<PhasingRequest> {
    let source = path.unwrap_or("-");
    let text = read_input(path)?;
    if text.trim().is_empty() {
        return Err(PhasingError::EmptyInput(source.to_string()).into());
    }

    let request = parse_request(&text)
        .with_context(|| format!("Failed to parse request envelope from {}", source))?;
    Ok(request)
}

pub fn read_batch(path: Option<&str>) -> Result<Vec<PhasingRequest>> {
    let source = path.unwrap_or("-");
    let text = read_input(path)?;

    let requests = parse_batch(&text)
        .with_context(|| format!("Failed to parse request batch from {}", source))?;
    if requests.is_empty() {
        return Err(PhasingError::EmptyInput(source.to_string()).into());
    }

    log::info!("Parsed {} request envelopes", requests.len());
    Ok(requests)
}
