use engine_logging::engine_info;
use joblist_core::{Effect, Msg};
use joblist_engine::{completion_msg, EngineEvent, EngineHandle, Fetcher};

/// Executes state-machine effects on the engine and turns engine events back
/// into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new<F: Fetcher + 'static>(fetcher: F) -> std::io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(fetcher)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { page } => {
                    engine_info!("FetchPage page={}", page);
                    self.engine.fetch_page(page);
                }
            }
        }
    }

    /// Drains completed fetches without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::PageFetched { page, result } => {
                    inbox.push(completion_msg(page, result));
                }
            }
        }
        inbox
    }
}
