use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::*;

/// Installs the panic hook and console logger when their features are on.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    set_panic_hook();
    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_ok() {
            log::info!("wavepath-wasm initialized");
        }
    }
}
