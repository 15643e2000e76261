//! Console logging for the content script.

use tracing::Level;
use tracing::subscriber::set_global_default;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

/// Send `tracing` events to the browser console.
///
/// Debug builds log at DEBUG, release builds at INFO. Calling this more
/// than once keeps the first subscriber.
pub fn init_logging() {
    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let reg = Registry::default().with(wasm_layer);
    let _ = set_global_default(reg);
}
