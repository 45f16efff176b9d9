#![allow(dead_code)]

use axum::Router;
use ipo_lookup::view::ViewModel;
use ipo_lookup::widget::Surface;
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Notify(String),
    Loading(bool),
    Results(bool),
    Apply(ViewModel),
}

/// Surface that records every call and tracks the resulting visible state.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<Event>,
    pub loading: bool,
    pub results_visible: bool,
    pub view: Option<ViewModel>,
}

impl RecordingSurface {
    pub fn notifications(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Notify(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn notify(&mut self, message: &str) {
        self.events.push(Event::Notify(message.to_string()));
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        self.events.push(Event::Loading(visible));
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible;
        self.events.push(Event::Results(visible));
    }

    fn apply(&mut self, view: &ViewModel) {
        self.view = Some(view.clone());
        self.events.push(Event::Apply(view.clone()));
    }
}

/// Serves `app` on a free local port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind a local port");
    let addr = listener.local_addr().expect("Should have a local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server should run");
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind a local port");
    let addr = listener.local_addr().expect("Should have a local address");
    drop(listener);
    format!("http://{}", addr)
}
