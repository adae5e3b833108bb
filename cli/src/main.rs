mod argparse;
mod client;
mod commands;
mod utils;

use argparse::parse_args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    commands::handle_command(cli).await?;

    Ok(())
}
