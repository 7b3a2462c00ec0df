// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::errors::ErrorData;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn ErrorDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
	let error_list = create_memo(ctx, || (*errors.get()).clone());

	view! {
		ctx,
		ul(id="page_errors") {
			Indexed(
				iterable=error_list,
				view=|ctx, error| {
					let dismiss_handler = {
						let error = error.clone();
						move |_event: WebEvent| {
							let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
							let index = errors.get().iter().position(|check_error| error == *check_error);
							if let Some(index) = index {
								errors.modify().remove(index);
							}
						}
					};
					error.to_view(ctx, dismiss_handler)
				}
			)
		}
	}
}
