pub mod api;
pub mod app;
pub mod clock;
pub mod err;
pub mod init;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

use clock::Clock;
use std::sync::Arc;
use store::TimeLogStore;

/// Dependencies handed to every request handler.
#[derive(Clone)]
pub struct SharedState {
    pub store: Arc<dyn TimeLogStore>,
    pub clock: Arc<dyn Clock>,
}

impl SharedState {
    pub fn new(store: impl TimeLogStore + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            store: Arc::new(store),
            clock: Arc::new(clock),
        }
    }
}
