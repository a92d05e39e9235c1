use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Food-ordering storefront server")]
pub struct Cli {
    /// Insert the example menu into an empty catalog before serving.
    #[arg(long)]
    pub seed_products: bool,
}
