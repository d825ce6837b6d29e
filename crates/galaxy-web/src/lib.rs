pub mod canvas;
pub mod host;
pub mod runner;

pub use canvas::Canvas2dRenderer;
pub use host::GalaxyHost;
pub use runner::GalaxyRunner;

use std::cell::RefCell;

use galaxy_engine::{parse_tasks, GalaxyConfig, InputEvent, ThemeName};
use wasm_bindgen::prelude::*;

// wasm-bindgen exports free functions only, so the page's single host lives here.
thread_local! {
    static HOST: RefCell<Option<GalaxyHost>> = RefCell::new(None);
}

/// Run `f` against the attached host. Calls before `galaxy_init` are logged and dropped.
fn with_host<R>(f: impl FnOnce(&mut GalaxyHost) -> R) -> Option<R> {
    HOST.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(host) => Some(f(host)),
            None => {
                log::warn!("galaxy: not initialized, call galaxy_init() first");
                None
            }
        }
    })
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn start(config: GalaxyConfig) -> Result<(), JsValue> {
    if HOST.with(|cell| cell.borrow().is_some()) {
        log::warn!("galaxy: already initialized");
        return Ok(());
    }
    let host = GalaxyHost::attach(config)?;
    HOST.with(|cell| {
        *cell.borrow_mut() = Some(host);
    });
    log::info!("galaxy-web: initialized");
    Ok(())
}

/// Attach the galaxy canvas with default settings and start animating.
#[wasm_bindgen]
pub fn galaxy_init() -> Result<(), JsValue> {
    init_logging();
    start(GalaxyConfig::default())
}

/// Like `galaxy_init`, with a JSON object overriding any configuration fields.
/// An unreadable document falls back to the defaults.
#[wasm_bindgen]
pub fn galaxy_init_with_config(config_json: &str) -> Result<(), JsValue> {
    init_logging();
    let config = GalaxyConfig::from_json(config_json).unwrap_or_else(|err| {
        log::warn!("galaxy: ignoring invalid config: {err}");
        GalaxyConfig::default()
    });
    start(config)
}

/// Rebuild orbs and stars from a JSON array of `{ id, completed }` records.
/// Invalid JSON leaves the scene unchanged.
#[wasm_bindgen]
pub fn galaxy_sync(tasks_json: &str) {
    match parse_tasks(tasks_json) {
        Ok(tasks) => {
            with_host(|h| h.with_runner(|r| r.sync(&tasks)));
        }
        Err(err) => log::warn!("galaxy: ignoring unreadable task list: {err}"),
    }
}

#[wasm_bindgen]
pub fn galaxy_add_task() {
    with_host(|h| h.with_runner(|r| r.add_task_visual()));
}

#[wasm_bindgen]
pub fn galaxy_complete_task() {
    with_host(|h| h.with_runner(|r| r.complete_task_visual()));
}

#[wasm_bindgen]
pub fn galaxy_set_theme(name: &str) {
    let theme = ThemeName::parse(name);
    with_host(|h| h.with_runner(|r| r.push_input(InputEvent::Theme(theme))));
}

/// Forward a pointer position from a host that tracks input itself.
#[wasm_bindgen]
pub fn galaxy_set_pointer(x: f32, y: f32) {
    with_host(|h| h.with_runner(|r| r.push_input(InputEvent::PointerMove { x, y })));
}

#[wasm_bindgen]
pub fn galaxy_resize() {
    with_host(|h| h.resize());
}

/// Stop the loop, remove listeners and the canvas. `galaxy_init` may be called again afterwards.
#[wasm_bindgen]
pub fn galaxy_shutdown() {
    let host = HOST.with(|cell| cell.borrow_mut().take());
    match host {
        Some(mut host) => host.shutdown(),
        None => log::warn!("galaxy: shutdown without a running galaxy"),
    }
}

// ---- Introspection ----

#[wasm_bindgen]
pub fn galaxy_orb_count() -> u32 {
    with_host(|h| h.with_runner(|r| r.galaxy().orb_count() as u32)).unwrap_or(0)
}

#[wasm_bindgen]
pub fn galaxy_star_count() -> u32 {
    with_host(|h| h.with_runner(|r| r.galaxy().star_count() as u32)).unwrap_or(0)
}

#[wasm_bindgen]
pub fn galaxy_particle_count() -> u32 {
    with_host(|h| h.with_runner(|r| r.galaxy().particle_count() as u32)).unwrap_or(0)
}
