use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tempfile::NamedTempFile;
use tracing::info;

use super::build::build_client;
use super::render::{ClientSettings, FetchClientRenderer, Renderer};
use crate::error::GenerateError;
use crate::naming::is_identifier;
use crate::spec::{load_schema, SchemaDocument};

/// Produce the complete client source for an already-loaded document.
///
/// # Errors
///
/// Returns an error if the factory name is not an identifier, the document
/// fails validation, or the template cannot be rendered.
pub fn generate_client_source(
    doc: &SchemaDocument,
    settings: &ClientSettings,
) -> Result<String, GenerateError> {
    if !is_identifier(&settings.api_name) {
        return Err(GenerateError::InvalidApiName(settings.api_name.clone()));
    }
    let module = build_client(doc)?;
    FetchClientRenderer::new(settings.clone()).render(&module)
}

/// Load `input`, generate the client and write it to `output` (stdout when `None`).
///
/// Nothing is written unless every step succeeds. File output goes through a
/// temporary file in the destination directory that replaces the target in
/// one rename.
///
/// # Errors
///
/// Returns an error if loading, generation or writing fails.
pub fn generate_client(
    input: &Path,
    output: Option<&Path>,
    settings: &ClientSettings,
) -> anyhow::Result<()> {
    let doc = load_schema(input)?;
    let source = generate_client_source(&doc, settings)
        .with_context(|| format!("Failed to generate client from {}", input.display()))?;

    match output {
        Some(path) => {
            write_atomically(path, source.as_bytes())?;
            info!(path = %path.display(), bytes = source.len(), "Wrote client");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(source.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write client to stdout")?;
        }
    }
    Ok(())
}

fn write_atomically(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Unable to create file in {}", dir.display()))?;
    temp.write_all(contents)
        .and_then(|()| temp.flush())
        .with_context(|| format!("Unable to write {}", path.display()))?;
    temp.persist(path)
        .with_context(|| format!("Unable to create file {}", path.display()))?;
    Ok(())
}
