use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::extensions::{CursorContext, CursorEvent, CursorListener};
use crate::interaction::{Cursor, CursorGeometry};

impl<G: CursorGeometry> Cursor<G> {
    /// Registers a listener. Ids must be unique per cursor.
    pub fn register_listener(&mut self, listener: Box<dyn CursorListener>) -> ChartResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            warn!(id = %listener_id, "duplicate cursor listener rejected");
            return Err(ChartError::DuplicateListener { id: listener_id });
        }
        self.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }

    #[must_use]
    pub fn context(&self) -> CursorContext {
        CursorContext {
            point: self.state.point,
            down_point: self.state.down_point,
            x_position: self.state.x_position,
            y_position: self.state.y_position,
            x_range: self.state.x_range,
            y_range: self.state.y_range,
            behavior: self.state.behavior,
            visible: self.state.visible,
        }
    }

    pub(super) fn emit(&mut self, event: CursorEvent) {
        let context = self.context();
        for listener in &mut self.listeners {
            listener.on_event(event, context);
        }
    }
}
