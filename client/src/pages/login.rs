// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ApiClient;
use crate::login::{submit_login, LoginField, LoginForm};
use crate::navigation::{RouterNavigator, HOME_PATH};
use crate::page_utils::{event_target_value, set_page_title};
use crate::session::SessionStore;
use crate::state_cell::StateCell;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

#[component]
pub fn LoginView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating login page");
	set_page_title("Log In");

	{
		let session: &SessionStore = use_context(ctx);
		if session.is_logged_in() {
			spawn_local_scoped(ctx, async {
				navigate(HOME_PATH);
			});
			return view! { ctx, };
		}
	}

	let form_signal = create_signal(ctx, LoginForm::new());
	let loading_signal = create_memo(ctx, || form_signal.get().is_loading());
	let error_signal = create_memo(ctx, || form_signal.get().error().to_string());

	let change_handler = move |field: LoginField| {
		move |event: WebEvent| {
			if let Some(value) = event_target_value(&event) {
				form_signal.update(|form| form.change(field, value));
			}
		}
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		spawn_local_scoped(ctx, async move {
			let api: &ApiClient = use_context(ctx);
			let session: &SessionStore = use_context(ctx);
			submit_login(form_signal, api, session, &RouterNavigator).await;
		});
	};

	view! {
		ctx,
		section(id="login") {
			form(id="login_form", class=if *loading_signal.get() { "login_box loading" } else { "login_box" }, on:submit=form_submission_handler, novalidate=true) {
				div(class="login_header") {
					h1 { "Welcome" }
					p { "Log in to your account to continue." }
				}
				div(class="login_field") {
					label(for="login_email") { "Email" }
					input(id="login_email", name="email", type="email", placeholder="you@example.com", class="login_input", disabled=*loading_signal.get(), on:input=change_handler(LoginField::Email))
				}
				div(class="login_field") {
					label(for="login_password") { "Password" }
					input(id="login_password", name="password", type="password", placeholder="••••••••", class="login_input", disabled=*loading_signal.get(), on:input=change_handler(LoginField::Password))
				}
				(if error_signal.get().is_empty() {
					view! { ctx, }
				} else {
					let error = (*error_signal.get()).clone();
					view! { ctx, div(class="login_error", role="alert") { (error) } }
				})
				button(type="submit", disabled=*loading_signal.get()) {
					(if *loading_signal.get() { "Logging in..." } else { "Log in to my account" })
				}
				div(class="login_footer") {
					a(href="/register") { "Don't have an account? Register here" }
				}
			}
		}
	}
}
