use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::input;
use crate::commands::input::QueryInput;
use crate::output_utils;
use libgraphql_fields::FieldMap;
use libgraphql_fields::query_to_field_map;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExtractCmd {
    #[arg(
        help="Print compact JSON instead of pretty-printed JSON.",
        long,
    )]
    compact: bool,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        conflicts_with="FILE_OR_DIR_PATHS",
        help="A query document to extract from, given inline.",
        long,
        short='q',
    )]
    query: Option<String>,

    #[arg(
        help="Paths to GraphQL files or directories containing GraphQL \
             files. Reads one query from stdin when neither paths nor \
             --query are given.",
        name="FILE_OR_DIR_PATHS",
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl ExtractCmd {
    async fn collect_inputs(&self) -> anyhow::Result<Vec<QueryInput>> {
        if let Some(query) = &self.query {
            return Ok(vec![input::inline(query.clone())]);
        }
        if self.file_or_dir_paths.is_empty() {
            return Ok(vec![input::read_stdin().await?]);
        }
        let file_paths =
            input::find_graphql_files(&self.file_or_dir_paths, &self.graphql_file_exts)?;
        if file_paths.is_empty() {
            anyhow::bail!(
                "no files with extensions {} found",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }
        input::read_files(file_paths).await
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> serde_json::Result<String> {
        if self.compact {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ExtractCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let inputs = match self.collect_inputs().await {
            Ok(inputs) => inputs,
            Err(e) => return CommandResult::error(&e),
        };

        let mut field_maps: BTreeMap<String, FieldMap> = BTreeMap::new();
        let mut diagnostics = vec![];
        for QueryInput { label, source } in &inputs {
            match query_to_field_map(source) {
                Ok(field_map) => {
                    log::debug!("Extracted {} top-level fields from {label}.", field_map.len());
                    field_maps.insert(label.to_owned(), field_map);
                },
                Err(e) => {
                    log::debug!("Failed to extract fields from {label}.");
                    diagnostics.push(output_utils::label_diagnostic(
                        &e.format_detailed(Some(source)),
                        label,
                    ));
                },
            }
        }

        if !diagnostics.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} of {} inputs failed:\n\n{}",
                diagnostics.len(),
                inputs.len(),
                diagnostics.join("\n"),
            ));
        }

        let json = if inputs.len() == 1 {
            let single = field_maps.into_values().next().unwrap_or_default();
            self.to_json(&single)
        } else {
            self.to_json(&field_maps)
        };
        match json {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!("Failed to serialize field maps: {e}")),
        }
    }
}
