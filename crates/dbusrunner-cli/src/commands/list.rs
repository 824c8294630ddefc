//! Implementation of the `dbusrunner list` command.

use dbusrunner_adapters::InMemoryStore;
use dbusrunner_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = TemplateService::new(Box::new(InMemoryStore::with_builtin()?));
    let templates = service.list()?;

    let format = args.format.unwrap_or(match output.format() {
        OutputFormat::Json => ListFormat::Json,
        _ => ListFormat::Table,
    });

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for line in table_rows(&templates) {
                output.print(&line)?;
            }
        }
        ListFormat::List => {
            for t in &templates {
                output.data(&t.id)?;
            }
        }
        ListFormat::Json => {
            // Bypasses quiet mode: JSON must stay parseable in pipes.
            let json =
                serde_json::to_string_pretty(&templates).map_err(|e| CliError::IoError {
                    message: "failed to serialise template list".into(),
                    source: e.into(),
                })?;
            output.data(&json)?;
        }
    }

    Ok(())
}

fn table_rows(templates: &[TemplateInfo]) -> Vec<String> {
    let id_width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);
    let style_width = templates
        .iter()
        .map(|t| t.path_style.len())
        .max()
        .unwrap_or(0);

    templates
        .iter()
        .map(|t| {
            format!(
                "  {:id_width$}  {:style_width$}  {}",
                t.id, t.path_style, t.description
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: &str, style: &str) -> TemplateInfo {
        TemplateInfo {
            id: id.into(),
            description: "d".into(),
            path_style: style.into(),
            files: 1,
        }
    }

    #[test]
    fn table_columns_are_aligned() {
        let rows = table_rows(&[info("runner", "default"), info("runner-scoped", "app-scoped")]);
        assert_eq!(rows[0], "  runner         default     d");
        assert_eq!(rows[1], "  runner-scoped  app-scoped  d");
    }
}
