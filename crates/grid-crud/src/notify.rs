//! Host surfaces the orchestrator talks to.

use grid_model::RowId;

/// Confirmation and dialog surface provided by the embedding UI.
pub trait ModalHost {
    /// Ask the user to confirm a destructive operation.
    fn confirm(&mut self, message: &str) -> bool;
    /// Open a caller-managed dialog for an action with modal behavior.
    fn open_modal(&mut self, modal_id: &str, row_id: RowId);
}

/// Outcome notifications (toasts, status lines).
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// No-op host for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentHost;

impl ModalHost for SilentHost {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }

    fn open_modal(&mut self, _modal_id: &str, _row_id: RowId) {}
}

impl Notifier for SilentHost {
    fn success(&mut self, message: &str) {
        tracing::info!(message, "ok");
    }

    fn error(&mut self, message: &str) {
        tracing::warn!(message, "failed");
    }
}
