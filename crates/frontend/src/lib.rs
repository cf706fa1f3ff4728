//! Client-side access layer of the sales-management app.
//!
//! UI code calls a service facade (`domain::*::api`, `system::*::api`), the
//! facade goes through [`shared::http::ApiClient`] and maps the wire DTOs
//! from `contracts` into the view-models defined next to each facade.

pub mod domain;
pub mod shared;
pub mod system;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
