mod extract;
mod input;
mod tokens;

use crate::Cli;
use crate::CommandResult;
use extract::ExtractCmd;
use tokens::TokensCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-fields")]
pub(crate) enum CommandEnum {
    /// Extract the field map of each input query as JSON.
    Extract(Box<ExtractCmd>),

    /// Print the token stream of a query, one token per line.
    Tokens(Box<TokensCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Extract(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}
