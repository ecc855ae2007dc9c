use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use catalog_core::{ProductQuery, RequestId};
use catalog_logging::{catalog_debug, catalog_warn};

use crate::fetch::{FetchSettings, ProductFetcher, ReqwestFetcher};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    FetchPage {
        request_id: RequestId,
        query: ProductQuery,
    },
}

/// Runs fetches on a background tokio runtime and reports completions.
///
/// Requests are never cancelled: every accepted command produces exactly one
/// [`EngineEvent::FetchCompleted`], in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn ProductFetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            catalog_debug!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn fetch_page(&self, request_id: RequestId, query: ProductQuery) {
        if self
            .cmd_tx
            .send(EngineCommand::FetchPage { request_id, query })
            .is_err()
        {
            catalog_warn!("Engine stopped; dropping fetch request_id={}", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn ProductFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { request_id, query } => {
            let result = fetcher.fetch_page(&query).await;
            if let Err(err) = &result {
                catalog_warn!("Fetch request_id={} failed ({}): {}", request_id, err.kind, err);
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
