// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use app::App;
use config::ClientConfig;
use sycamore::prelude::*;

mod api;
mod app;
mod color_utils;
mod components;
mod config;
mod errors;
mod inventory;
mod login;
mod navigation;
mod page_utils;
mod pages;
mod registration;
mod session;
mod state_cell;
mod validation;

fn main() {
	console_error_panic_hook::set_once();

	let config = ClientConfig::from_build_env();
	wasm_logger::init(wasm_logger::Config::new(config.log_level));
	log::info!("Starting car inventory client; API at {}", config.api_base);

	sycamore::render(|ctx| {
		provide_context(ctx, config);
		view! { ctx, App }
	});
}
