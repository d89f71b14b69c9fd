use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::input;
use crate::output_utils;
use libgraphql_fields::GraphQLLexError;
use libgraphql_fields::token::GraphQLTokenKind;
use libgraphql_fields::token_source::StrGraphQLTokenSource;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        conflicts_with="FILE_PATH",
        help="A query document to tokenize, given inline.",
        long,
        short='q',
    )]
    query: Option<String>,

    #[arg(
        help="Path to a GraphQL file. Reads from stdin when neither a path \
             nor --query is given.",
        name="FILE_PATH",
    )]
    file_path: Option<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let query_input = match (self.query, self.file_path) {
            (Some(query), _) => Ok(input::inline(query)),
            (None, Some(path)) => input::read_files(vec![path])
                .await
                .and_then(|mut inputs| {
                    inputs.pop().ok_or_else(|| anyhow::anyhow!("no input read"))
                }),
            (None, None) => input::read_stdin().await,
        };
        let query_input = match query_input {
            Ok(query_input) => query_input,
            Err(e) => return CommandResult::error(&e),
        };

        let mut output = String::new();
        for token in StrGraphQLTokenSource::new(&query_input.source) {
            if let GraphQLTokenKind::Error { message, error_notes } = token.kind {
                let error = GraphQLLexError::new(message, token.span, error_notes);
                return CommandResult::stderr(format_args!(
                    "{}",
                    output_utils::label_diagnostic(
                        &error.format_detailed(Some(&query_input.source)),
                        &query_input.label,
                    ),
                ))
                .with_stdout(output.trim_end().to_string());
            }
            let _ = writeln!(
                output,
                "{}:{} {:?}",
                token.span.start_inclusive.line() + 1,
                token.span.start_inclusive.col_utf8() + 1,
                token.kind,
            );
        }
        CommandResult::stdout(format_args!("{}", output.trim_end()))
    }
}
