use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod session;
pub mod telemetry;
pub mod types;
pub mod view;

#[cfg(test)]
mod test_support;

use app::{App, AppProps};
use config::ClientConfig;

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    let config = ClientConfig::from_build_env();
    telemetry::init_tracing(&config);
    tracing::info!(api_url = %config.api_url, "starting quiz client");

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("document not available")?;
    let root = document
        .get_element_by_id("root")
        .ok_or("#root element missing")?;
    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
    Ok(())
}
