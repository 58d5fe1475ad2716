//! Token handlers.
//!
//! - style: SGR (Select Graphic Rendition) for colors and attributes
//!
//! Everything else the tokenizer reports is a no-op for rendering and is
//! only traced.

pub mod style;

use tracing::trace;

/// Log a control sequence that does not affect styling.
pub fn log_unhandled_csi(command: char, params: &[Option<u16>]) {
    trace!(
        command = %command,
        params = ?params,
        "Ignoring non-SGR control sequence"
    );
}

/// Log a non-CSI escape or control event.
pub fn log_unhandled_other() {
    trace!("Ignoring escape or control event");
}
