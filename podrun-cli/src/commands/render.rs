//! Render command handler

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use super::load_spec;

/// Print the Pod creation request for a spec
pub fn handle_render(path: &Path) -> Result<ExitCode> {
    let spec = load_spec(path)?;

    println!("{}", serde_json::to_string_pretty(&spec.pod_manifest())?);

    Ok(ExitCode::SUCCESS)
}
