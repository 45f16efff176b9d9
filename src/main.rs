use ipo_lookup::client::IpoClient;
use ipo_lookup::config::Config;
use ipo_lookup::output;
use ipo_lookup::terminal::TerminalSurface;
use ipo_lookup::widget::SearchWidget;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    output::startup_banner("IPO LOOKUP", "search");
    output::config_item("API", &config.api_url);

    let widget = SearchWidget::new(IpoClient::new(config.api_url), TerminalSurface::new());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = JoinSet::new();

    output::prompt();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                output::error(&format!("Failed to read input: {}", e));
                break;
            }
        };

        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        // Each Enter is its own submission; a slow lookup does not block typing.
        let widget = widget.clone();
        pending.spawn(async move {
            widget.submit(&line).await;
            output::prompt();
        });

        while pending.try_join_next().is_some() {}
    }

    while pending.join_next().await.is_some() {}
    output::info("Bye");
}
