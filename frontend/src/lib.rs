mod api;
mod components;
pub mod config;
mod pages;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting portal frontend");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__PORTAL_ENV is present (env.js), it takes precedence.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
    });

    router::mount_app();
}
