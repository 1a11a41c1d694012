use clap::Parser;

use page_scrape::cli::FetchArgs;
use page_scrape::models::PageTitle;
use page_scrape::render::render_title;
use page_scrape::title::get_title;

const DEFAULT_URL: &str = "http://pythonscraping.com/pages/page1.html";

#[derive(Parser)]
#[command(name = "get-title", about = "Print the first <h1> of a web page")]
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

    let title = get_title(&cli.url, &cli.fetch.config()).await;

    let report = PageTitle { url: cli.url, title };
    render_title(&mut std::io::stdout().lock(), &report, cli.fetch.json)
}
