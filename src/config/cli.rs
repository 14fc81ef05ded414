use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "currency-exchange")]
#[command(about = "Convert an amount between two currencies using the exchange service")]
pub struct CliConfig {
    /// Currency on hand, e.g. USD
    #[arg(long)]
    pub src: String,

    /// Currency to convert to, e.g. EUR
    #[arg(long)]
    pub dst: String,

    /// Amount of the source currency
    #[arg(long, default_value = "1")]
    pub amount: f64,

    /// TOML file with a [service] section; the environment is used otherwise
    #[arg(long)]
    pub config: Option<String>,

    /// Override the service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Only check that both currency codes are accepted
    #[arg(long)]
    pub check: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
