// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::navigation::LOGIN_PATH;
use crate::session::{AuthStore, SessionStore};
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

#[component]
pub fn NavBar<G: Html>(ctx: Scope<'_>) -> View<G> {
	let session: &SessionStore = use_context(ctx);
	let logged_in = create_memo(ctx, || session.token_signal().get().is_some());

	let logout_handler = move |_event: WebEvent| {
		let session: &SessionStore = use_context(ctx);
		log::info!("Logging out");
		session.logout();
		navigate(LOGIN_PATH);
	};

	view! {
		ctx,
		nav(id="nav_bar") {
			div(id="home_link") {
				a(href="/") {
					"Car Inventory"
				}
			}
			(if *logged_in.get() {
				view! {
					ctx,
					ul(id="nav_links", class="nav_menu") {
						li {
							a(href="/") {
								"Cars"
							}
						}
						li {
							a(class="click", on:click=logout_handler) {
								"Log out"
							}
						}
					}
				}
			} else {
				view! {
					ctx,
					ul(id="nav_links", class="nav_menu") {
						li {
							a(href="/login") {
								"Log in"
							}
						}
						li {
							a(href="/register") {
								"Register"
							}
						}
					}
				}
			})
		}
	}
}
