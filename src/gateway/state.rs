use std::sync::Arc;

use crate::clock::Clock;

/// Shared gateway state.
///
/// There is no shared mutable state between requests; the clock is the only
/// ambient dependency the generators read.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}
