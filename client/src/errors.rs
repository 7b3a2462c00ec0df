// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// An error shown in the page's error list until the user dismisses it
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorData {
	message: &'static str,
	error: Option<String>,
}

impl ErrorData {
	/// Creates a new data object with an error object to render
	pub fn new_with_error(message: &'static str, error: impl Display) -> Self {
		let error = Some(format!("{error}"));
		Self { message, error }
	}

	pub fn to_view<'a, G: Html>(&self, ctx: Scope<'a>, dismiss_handler: impl Fn(WebEvent) + 'a) -> View<G> {
		let message = self.message;
		let details = self.error.clone();
		view! {
			ctx,
			li(class="page_error_entry") {
				span(class="page_error_entry_text") { (message) }
				(if let Some(error_details) = details.clone() {
					view! {
						ctx,
						span(class="page_error_entry_details") { (error_details) }
					}
				} else {
					view! { ctx, }
				})
				span(class="page_error_entry_dismiss") {
					a(class="click", on:click=dismiss_handler) { "[X]" }
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_error_details() {
		let error = ErrorData::new_with_error("Couldn't load cars.", "Request failed with status code 500");
		assert_eq!(error.error.as_deref(), Some("Request failed with status code 500"));
		assert_eq!(error.message, "Couldn't load cars.");
	}
}
