// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use wasm_bindgen::JsCast;
use web_sys::{window, Event as WebEvent, HtmlInputElement, HtmlSelectElement};

const APPLICATION_NAME: &str = "Car Inventory";

pub fn set_page_title(page_title: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			document.set_title(&format!("{} | {}", page_title, APPLICATION_NAME));
		}
	}
}

/// Gets the current value of the input or select element that fired an event.
pub fn event_target_value(event: &WebEvent) -> Option<String> {
	let target = event.target()?;
	if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
		return Some(input.value());
	}
	target.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
}
