use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `tracing`-backed adapter for the domain [`Logger`] port.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "produtos_api", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "produtos_api", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "produtos_api", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "produtos_api", "{}", message);
    }
}
