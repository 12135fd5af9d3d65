use activity_board::app::{self, ActivityBoard, Command, TerminalSurface};
use activity_board::client::NoWasmClient;
use activity_board::config::Config;
use activity_board::error::Result;
use activity_board::interface::HttpClient;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "activity-board", about = "Browse and manage school activity signups")]
struct Cli {
    /// Backend origin, e.g. http://127.0.0.1:8000
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(url) = cli.base_url.as_deref() {
        config = config.with_base_url(url);
    }
    log::info!("Using backend at {}", config.base_url);

    let client = NoWasmClient::new(&config).await?;
    let surface = TerminalSurface::stdout(cli.command.assume_yes());
    let board = ActivityBoard::new(client, surface, &config);

    app::run(&board, cli.command).await
}
