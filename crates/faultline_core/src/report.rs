//! Emitting structured errors as `tracing` events.

use crate::{Severity, StructuredError};
use tracing::Level;

macro_rules! emit {
    ($level:expr, $err:expr, $params:expr) => {
        tracing::event!(
            $level,
            severity = %$err.severity(),
            code = $err.code(),
            params = %$params,
            "{}",
            $err
        )
    };
}

impl StructuredError {
    /// Emits one `tracing` event for this error.
    ///
    /// The event level follows [`Severity::tracing_level`]. The message is the
    /// plain chain text; severity, code and parameters (as JSON) are attached
    /// as fields.
    pub fn report(&self) {
        let params = self
            .params()
            .and_then(|params| serde_json::to_string(params).ok())
            .unwrap_or_default();

        // `event!` needs a constant level, so this mirrors
        // `Severity::tracing_level` arm for arm.
        match self.severity() {
            Severity::Ignorable => emit!(Level::DEBUG, self, params),
            Severity::Info | Severity::Notice => emit!(Level::INFO, self, params),
            Severity::Warning => emit!(Level::WARN, self, params),
            Severity::Error | Severity::Critical | Severity::Fatal | Severity::Panic => {
                emit!(Level::ERROR, self, params)
            }
        }
    }
}
