//! `guidgen stack` command.

use std::path::Path;

use crate::cli::OutputFormat;
use crate::config::GeneratorOptions;
use crate::context::ServiceContext;
use crate::stack::{name_stack, ResourceName, StackManifest};

/// Name every resource in `manifest` (or the built-in microservice stack)
/// and render the result.
///
/// # Errors
///
/// Returns an error string if the manifest cannot be loaded or the output
/// cannot be serialized.
pub fn run(
    ctx: &ServiceContext,
    options: GeneratorOptions,
    manifest: Option<&Path>,
    format: OutputFormat,
) -> Result<String, String> {
    let manifest = match manifest {
        Some(path) => StackManifest::load(path).map_err(|e| e.to_string())?,
        None => StackManifest::microservice(),
    };
    let names = name_stack(&ctx.generator(options), &manifest);

    match format {
        OutputFormat::Table => Ok(render_table(&manifest.name, &names)),
        OutputFormat::Yaml => serde_yaml::to_string(&names)
            .map(|s| s.trim_end().to_string())
            .map_err(|e| format!("Failed to render YAML: {e}")),
        OutputFormat::Json => serde_json::to_string_pretty(&names)
            .map_err(|e| format!("Failed to render JSON: {e}")),
    }
}

fn render_table(stack: &str, names: &[ResourceName]) -> String {
    if names.is_empty() {
        return format!("Stack {stack} has no resources.");
    }

    let rows: Vec<(String, String, String)> = names
        .iter()
        .map(|n| (n.logical_id.clone(), n.kind.to_string(), n.name.to_string()))
        .collect();

    let id_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max("LOGICAL ID".len());
    let kind_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max("KIND".len());

    let mut lines = vec![
        format!("{:<id_width$}  {:<kind_width$}  NAME", "LOGICAL ID", "KIND"),
        format!("{:-<id_width$}  {:-<kind_width$}  {:-<4}", "", "", ""),
    ];
    for (id, kind, name) in &rows {
        lines.push(format!("{id:<id_width$}  {kind:<kind_width$}  {name}"));
    }
    lines.push(format!("\n{} resource(s) in stack {stack}.", rows.len()));
    lines.join("\n")
}
