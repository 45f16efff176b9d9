use crate::output;
use crate::record::IpoRecord;
use crate::store::{RecordStore, StoreStats};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

const NOT_FOUND_DETAIL: &str = "IPO not found in database.";

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct LookupQuery {
    name: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: &'static str,
}

/// HTTP backend answering `GET /ipo?name=` from a [`RecordStore`].
pub struct LookupServer {
    port: u16,
    store: Arc<RecordStore>,
}

impl LookupServer {
    pub fn new(store: RecordStore, port: u16) -> Self {
        Self {
            port,
            store: Arc::new(store),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/ipo", get(lookup_handler))
            .route("/api/ipos", get(list_handler))
            .route("/api/stats", get(stats_handler))
            .route("/health", get(health_handler))
            .with_state(self.store.clone())
    }

    async fn bind(&self) -> Result<TcpListener, ServerError> {
        let addr = format!("0.0.0.0:{}", self.port);
        TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })
    }

    /// Binds and serves in a background task. Port 0 picks a free port;
    /// the bound address is returned.
    pub async fn start(&self) -> Result<SocketAddr, ServerError> {
        let listener = self.bind().await?;
        let addr = listener.local_addr()?;
        let app = self.router();

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                output::error(&format!("Lookup server stopped: {}", e));
            }
        });

        Ok(addr)
    }

    /// Binds and serves until the process ends.
    pub async fn run(&self) -> Result<(), ServerError> {
        let listener = self.bind().await?;
        output::success(&format!(
            "Lookup server listening on :{} ({} records)",
            listener.local_addr()?.port(),
            self.store.len()
        ));
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

async fn lookup_handler(
    State(store): State<Arc<RecordStore>>,
    Query(query): Query<LookupQuery>,
) -> Response {
    match store.find_by_name(&query.name) {
        Some(record) => {
            output::status(&format!("GET /ipo {:?} -> {}", query.name, record.ipo_name));
            Json(record.clone()).into_response()
        }
        None => {
            output::warn(&format!("GET /ipo {:?} -> not found", query.name));
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    detail: NOT_FOUND_DETAIL,
                }),
            )
                .into_response()
        }
    }
}

async fn list_handler(State(store): State<Arc<RecordStore>>) -> Json<Vec<IpoRecord>> {
    Json(store.all().to_vec())
}

async fn stats_handler(State(store): State<Arc<RecordStore>>) -> Json<StoreStats> {
    Json(store.stats())
}

async fn health_handler() -> &'static str {
    "ok"
}
