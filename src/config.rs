use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub server_port: u16,
    pub data_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("IPO_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            server_port: env::var("IPO_SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            data_path: env::var("IPO_DATA_PATH").unwrap_or_else(|_| "data/ipos.json".to_string()),
        }
    }
}
