use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use catalog_core::{Effect, Msg};
use catalog_engine::{EngineEvent, EngineHandle};
use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

use super::app::AppEvent;
use super::location::AddressBar;

/// How long the forwarding thread blocks on the engine before rechecking shutdown.
const EVENT_POLL: Duration = Duration::from_millis(100);

pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    address: AddressBar,
    shutdown: Arc<AtomicBool>,
    forwarder: Option<JoinHandle<()>>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        address: AddressBar,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        let mut runner = Self {
            engine: Arc::new(engine),
            address,
            shutdown: Arc::new(AtomicBool::new(false)),
            forwarder: None,
        };
        runner.forwarder = Some(runner.spawn_event_loop(event_tx));
        runner
    }

    pub fn address(&self) -> &AddressBar {
        &self.address
    }

    /// Replaces the whole address, as when a link is opened.
    pub fn navigate(&mut self, address: AddressBar) {
        catalog_info!("Navigate path={} query={:?}", address.path(), address.query());
        self.address = address;
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchProducts { request_id, query } => {
                    catalog_info!(
                        "FetchProducts request_id={} category={:?} skip={} limit={}",
                        request_id,
                        query.category.slug(),
                        query.offset(),
                        query.limit()
                    );
                    self.engine.fetch_page(request_id, query);
                }
                Effect::WriteQuery { query } => {
                    catalog_debug!("WriteQuery {:?}", query);
                    self.address.replace_query(&query);
                }
            }
        }
    }

    /// Stops forwarding engine events and waits for the forwarding thread.
    pub fn shutdown(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(forwarder) = self.forwarder.take() {
            if forwarder.join().is_err() {
                catalog_warn!("Engine event forwarder panicked");
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) -> JoinHandle<()> {
        let engine = self.engine.clone();
        let shutdown = self.shutdown.clone();
        thread::spawn(move || {
            while !shutdown.load(Ordering::Relaxed) {
                let Some(event) = engine.recv_timeout(EVENT_POLL) else {
                    continue;
                };
                if event_tx.send(AppEvent::Engine(map_event(event))).is_err() {
                    break;
                }
            }
            catalog_debug!("Engine event forwarder stopped");
        })
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        self.shutdown();
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { request_id, result } => match result {
            Ok(page) => Msg::ProductsFetched {
                request_id,
                products: page.products,
            },
            Err(err) => Msg::FetchFailed {
                request_id,
                message: err.message,
            },
        },
    }
}
