mod columns;
mod list;

use crate::argparse::{Cli, Commands};
use crate::client::resolve_api_url;
pub use columns::handle_columns_command;
pub use list::handle_list_command;
use std::error::Error;

pub async fn handle_command(cli: Cli) -> Result<(), Box<dyn Error>> {
    let api_url = resolve_api_url(cli.api_url);

    match cli.command {
        Commands::List(args) => handle_list_command(args, api_url).await,
        Commands::Columns => {
            handle_columns_command();
            Ok(())
        }
    }
}
