use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::engine_info;

use crate::loader::fetch_page;
use crate::{EngineEvent, Fetcher};

enum EngineCommand {
    FetchPage { page: u32 },
}

/// Runs fetches on a background tokio runtime for callers with a synchronous
/// event loop. Completions come back as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new<F: Fetcher + 'static>(fetcher: F) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher: Arc<dyn Fetcher> = Arc::new(fetcher);
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            engine_info!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, page: u32) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage { page });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { page } => {
            let result = fetch_page(fetcher, page).await;
            let _ = event_tx.send(EngineEvent::PageFetched { page, result });
        }
    }
}
