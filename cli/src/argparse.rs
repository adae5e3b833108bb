use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "starchart",
    about = "Explore a remote planet collection from the terminal",
    version = "0.1.0",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Planet collection endpoint, e.g. https://swapi.dev/api/planets.
    /// Falls back to the STARCHART_API_URL environment variable.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the collection and list matching planets
    List(ListArgs),
    /// Show the filterable columns and accepted comparison operators
    Columns,
}

#[derive(Args)]
pub struct ListArgs {
    /// Numeric filter expression such as "population > 1000000".
    /// May be given several times; at most one filter per column.
    #[arg(long, short = 'f')]
    pub filter: Vec<String>,

    /// Keep only planets whose name contains this text (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Column to sort by
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort in descending order (ascending is the default)
    #[arg(long, default_value_t = false)]
    pub desc: bool,

    /// Print the matching planets as pretty JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
