use clap::Parser;

use page_scrape::cli::FetchArgs;
use page_scrape::links::list_links;
use page_scrape::models::PageLinks;
use page_scrape::render::render_links;

const DEFAULT_URL: &str = "http://en.wikipedia.org/wiki/Kevin_Bacon";

#[derive(Parser)]
#[command(name = "list-links", about = "Print the href of every anchor on a web page")]
struct Cli {
    /// Page to fetch
    #[arg(default_value = DEFAULT_URL)]
    url: String,

    #[command(flatten)]
    fetch: FetchArgs,
}

#[tokio::main]
async fn main() -> Result<(), page_scrape::Error> {
    page_scrape::init_tracing();
    let cli = Cli::parse();

    let links = list_links(&cli.url, &cli.fetch.config()).await?;

    let report = PageLinks { url: cli.url, links };
    render_links(&mut std::io::stdout().lock(), &report, cli.fetch.json)
}
