//! Application state and core logic

use crate::backend::{BackendError, ConsignmentBackend, ConsignmentReceipt};
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{AppState, LocationCatalog};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Completion of a boundary call, delivered back to the event loop
#[derive(Debug)]
pub enum BackendEvent {
    CatalogLoaded(Result<LocationCatalog, BackendError>),
    SubmissionFinished(Result<ConsignmentReceipt, BackendError>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Location catalog and submission sink
    backend: Arc<dyn ConsignmentBackend>,
    events_tx: mpsc::UnboundedSender<BackendEvent>,
    events_rx: mpsc::UnboundedReceiver<BackendEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(backend: Arc<dyn ConsignmentBackend>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            backend,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Start the one-shot catalog fetch
    pub fn load_locations(&mut self) {
        self.state.begin_catalog_fetch();
        tracing::info!("Fetching locations");

        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = backend.fetch_locations().await;
            // Receiver only goes away on shutdown
            let _ = tx.send(BackendEvent::CatalogLoaded(result));
        });
    }

    /// Submit the current snapshot if the form allows it
    pub fn submit(&mut self) {
        let Some(payload) = self.state.begin_submission() else {
            return;
        };
        tracing::info!(
            source = %payload.source,
            destination = %payload.destination,
            "Submitting consignment"
        );

        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = backend.submit_consignment(&payload).await;
            let _ = tx.send(BackendEvent::SubmissionFinished(result));
        });
    }

    /// Apply every completed boundary call. Returns true if anything changed.
    pub fn poll_backend_events(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
            applied = true;
        }
        applied
    }

    pub fn apply_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::CatalogLoaded(result) => self.state.finish_catalog_fetch(result),
            BackendEvent::SubmissionFinished(result) => self.state.finish_submission(result),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let shortcut = key.modifiers.contains(SHORTCUT_MODIFIER);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('r') if shortcut => self.load_locations(),
            KeyCode::Tab | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            KeyCode::Enter if self.state.is_submit_focused() => self.submit(),
            KeyCode::Enter => self.state.next_field(),
            KeyCode::Right => self.state.cycle_choice(true),
            KeyCode::Left => self.state.cycle_choice(false),
            KeyCode::Char(' ') if !self.state.is_submit_focused() => {
                self.state.cycle_choice(true)
            }
            KeyCode::Char(' ') => self.submit(),
            KeyCode::Char(c) => self.state.input_char(c),
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }
    }
}
