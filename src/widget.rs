//! The search widget: turns one line of user input into one lookup and
//! projects the answer onto a [`Surface`].
//!
//! Submissions may overlap. Each accepted submission takes the next sequence
//! number, and only the response for the latest number is allowed to touch
//! the surface. Older responses are dropped without side effects.

use crate::client::{IpoClient, LookupError};
use crate::view::{render, ViewModel};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

pub const NOT_FOUND_MESSAGE: &str = "IPO not found in database. Please try another name.";

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Please enter an IPO name")]
    EmptyInput,
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl SubmitError {
    /// Message shown to the user. Every lookup failure reads as "not found".
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::EmptyInput => self.to_string(),
            SubmitError::Lookup(_) => NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

/// Where the widget shows its state: loading indicator, results panel and
/// blocking notifications.
pub trait Surface: Send {
    fn notify(&mut self, message: &str);
    fn set_loading(&mut self, visible: bool);
    fn set_results_visible(&mut self, visible: bool);
    fn apply(&mut self, view: &ViewModel);
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Displayed(ViewModel),
    Failed(SubmitError),
    /// A newer submission was issued before this one settled.
    Superseded { sequence: u64 },
}

pub struct SearchWidget<S> {
    client: IpoClient,
    surface: Arc<Mutex<S>>,
    sequence: Arc<AtomicU64>,
}

impl<S> Clone for SearchWidget<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            surface: self.surface.clone(),
            sequence: self.sequence.clone(),
        }
    }
}

impl<S: Surface> SearchWidget<S> {
    pub fn new(client: IpoClient, surface: S) -> Self {
        Self {
            client,
            surface: Arc::new(Mutex::new(surface)),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn surface(&self) -> Arc<Mutex<S>> {
        self.surface.clone()
    }

    /// Sequence number of the most recently accepted submission.
    pub fn latest_sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let name = input.trim();
        if name.is_empty() {
            let error = SubmitError::EmptyInput;
            self.surface.lock().await.notify(&error.user_message());
            return SubmitOutcome::Failed(error);
        }

        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut surface = self.surface.lock().await;
            surface.set_loading(true);
            surface.set_results_visible(false);
        }

        let result = self.client.lookup(name).await;

        let mut surface = self.surface.lock().await;
        if self.sequence.load(Ordering::SeqCst) != sequence {
            return SubmitOutcome::Superseded { sequence };
        }

        let outcome = match result {
            Ok(record) => {
                let view = render(&record);
                surface.apply(&view);
                surface.set_results_visible(true);
                SubmitOutcome::Displayed(view)
            }
            Err(e) => {
                let error = SubmitError::from(e);
                surface.notify(&error.user_message());
                SubmitOutcome::Failed(error)
            }
        };
        surface.set_loading(false);

        outcome
    }
}
