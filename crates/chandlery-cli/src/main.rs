mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chandlery_grouping::SortOrder;

#[derive(Debug, Parser)]
#[command(name = "chandlery-cli")]
#[command(about = "Group and deduplicate scraped chandlery listings")]
struct Cli {
    /// JSON array of scraped listings (defaults to `CHANDLERY_LISTINGS_PATH`)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract size, color, material and base name from a single title
    Extract {
        title: String,
    },
    /// Group listings into product families
    Group {
        /// Print only the family with this group id
        #[arg(long)]
        group_id: Option<String>,
    },
    /// One row per product family, represented by its cheapest variant
    Dedupe,
    /// Listings that share a family with the given product
    Variants {
        product_id: String,
    },
    /// Convert listings into store rows carrying their grouping keys
    Sync {
        /// Print the one-row-per-family catalog view instead of product rows
        #[arg(long)]
        grouped: bool,
    },
    /// Search, filter, sort and paginate the listing batch
    Search {
        /// Case-insensitive text match on title, description and category
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        price_min: Option<f64>,
        #[arg(long)]
        price_max: Option<f64>,
        /// Keep only listings with this stock flag (`true` or `false`)
        #[arg(long)]
        in_stock: Option<bool>,
        /// newest, price-asc, price-desc or name
        #[arg(long, default_value = "newest")]
        sort: SortOrder,
        #[arg(long, default_value = "1")]
        page: usize,
        /// Results per page (defaults to `CHANDLERY_DEFAULT_PER_PAGE`)
        #[arg(long)]
        per_page: Option<usize>,
        /// Also collapse the page into product families
        #[arg(long)]
        deduplicate: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = chandlery_core::load_app_config()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let input = cli
        .input
        .unwrap_or_else(|| config.listings_path.clone());

    tracing::debug!(env = %config.env, input = %input.display(), "starting chandlery-cli");

    match cli.command {
        Commands::Extract { title } => commands::run_extract(&title),
        Commands::Group { group_id } => commands::run_group(&input, group_id.as_deref()).await,
        Commands::Dedupe => commands::run_dedupe(&input).await,
        Commands::Variants { product_id } => commands::run_variants(&input, &product_id).await,
        Commands::Sync { grouped } => commands::run_sync(&input, &config, grouped).await,
        Commands::Search {
            q,
            category,
            price_min,
            price_max,
            in_stock,
            sort,
            page,
            per_page,
            deduplicate,
        } => {
            let query = chandlery_grouping::CatalogQuery {
                q,
                category,
                price_min,
                price_max,
                in_stock,
                sort,
                page,
                per_page: per_page.unwrap_or(config.default_per_page),
                deduplicate,
            };
            commands::run_search(&input, &config, &query).await
        }
    }
}
