use ipo_lookup::config::Config;
use ipo_lookup::output;
use ipo_lookup::server::LookupServer;
use ipo_lookup::store::RecordStore;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    output::startup_banner("IPO LOOKUP", "server");
    output::config_item("Data", &config.data_path);
    output::config_item("Port", &config.server_port.to_string());

    let store = match RecordStore::load(&config.data_path).await {
        Ok(store) => store,
        Err(e) => {
            output::error(&format!("{}: {}", config.data_path, e));
            return ExitCode::FAILURE;
        }
    };
    if store.is_empty() {
        output::warn("Record file is empty; every lookup will be not found");
    }

    let server = LookupServer::new(store, config.server_port);
    if let Err(e) = server.run().await {
        output::error(&e.to_string());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
