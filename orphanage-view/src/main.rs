//! orphanage-view — mount the detail view for one record and print it

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use orphanage_view::html::HtmlRenderer;
use orphanage_view::{DetailView, Page, ViewConfig, logging, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "orphanage-view", version, about = "Render the detail page of one orphanage")]
struct Cli {
    /// Orphanage identifier (the route parameter)
    id: String,

    /// API base URL (overrides API_BASE_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides API_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Map tile access token (overrides MAPBOX_TOKEN)
    #[arg(long, env = "MAPBOX_TOKEN", hide_env_values = true)]
    mapbox_token: Option<String>,

    /// Select this photo before rendering
    #[arg(long)]
    image: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn view_config(&self) -> ViewConfig {
        let mut config = ViewConfig::from_env();
        if let Some(url) = &self.api_url {
            config.client = config.client.with_base_url(url.clone());
        }
        if let Some(timeout) = self.timeout {
            config.client = config.client.with_timeout(timeout);
        }
        if let Some(token) = &self.mapbox_token {
            config = config.with_mapbox_token(token.clone());
        }
        config
    }
}

fn print_page(page: &Page, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Html => println!("{}", HtmlRenderer::new()?.render(page)?),
        OutputFormat::Text => println!("{}", text::render_text(page)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(page)?),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Before parsing so `env = ...` arguments see .env values
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.view_config();
    let source = Arc::new(config.connect()?);
    tracing::info!(api = %config.client.base_url, id = %cli.id, "Mounting detail view");

    let mut view = DetailView::new(source);
    view.load(&cli.id).await;

    if let Some(index) = cli.image {
        if let Err(e) = view.select_image(index) {
            tracing::warn!(error = %e, "Cannot select image");
        }
    }

    print_page(&view.render(&config.render_config()), cli.format)
}
