// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ApiClient;
use crate::components::password_requirements::PasswordRequirementsList;
use crate::navigation::{RouterNavigator, HOME_PATH};
use crate::page_utils::{event_target_value, set_page_title};
use crate::registration::{submit_registration, RegistrationForm};
use crate::session::SessionStore;
use crate::state_cell::StateCell;
use crate::validation::RegistrationField;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

fn field_error_view<'a, G: Html>(
	ctx: Scope<'a>,
	form: &'a ReadSignal<RegistrationForm>,
	field: RegistrationField,
) -> View<G> {
	view! {
		ctx,
		(match form.get().error_message(field) {
			Some(message) => view! { ctx, span(class="input_error") { (message) } },
			None => view! { ctx, },
		})
	}
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating registration page");
	set_page_title("Create Account");

	{
		let session: &SessionStore = use_context(ctx);
		if session.is_logged_in() {
			spawn_local_scoped(ctx, async {
				navigate(HOME_PATH);
			});
			return view! { ctx, };
		}
	}

	let form_signal = create_signal(ctx, RegistrationForm::new());
	let password_requirements_signal = create_memo(ctx, || form_signal.get().password_requirements());
	let status_signal = create_memo(ctx, || form_signal.get().status().clone());
	let loading_signal = create_memo(ctx, || form_signal.get().is_loading());
	let password_entered_signal =
		create_memo(ctx, || !form_signal.get().value(RegistrationField::Password).is_empty());

	let change_handler = move |field: RegistrationField| {
		move |event: WebEvent| {
			if let Some(value) = event_target_value(&event) {
				form_signal.update(|form| form.change(field, value));
			}
		}
	};
	let blur_handler = move |field: RegistrationField| {
		move |_event: WebEvent| {
			form_signal.update(|form| form.blur(field));
		}
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		spawn_local_scoped(ctx, async move {
			let api: &ApiClient = use_context(ctx);
			let session: &SessionStore = use_context(ctx);
			let outcome = submit_registration(form_signal, api, session, &RouterNavigator).await;
			log::debug!(
				"Registration attempt finished: {:?} ({:?})",
				outcome,
				form_signal.get().phase()
			);
		});
	};

	view! {
		ctx,
		section(id="register") {
			form(id="register_form", class=if *loading_signal.get() { "register_box loading" } else { "register_box" }, on:submit=form_submission_handler, novalidate=true) {
				div(class="register_header") {
					h1 { "Create an Account" }
					p { "Join to start managing your car inventory." }
				}
				div(class="register_field") {
					label(for="register_username") {
						"Username"
						span { "3+ characters" }
					}
					input(id="register_username", name="username", type="text", placeholder="your_username", class=form_signal.get().input_class(RegistrationField::Username), disabled=*loading_signal.get(), on:input=change_handler(RegistrationField::Username), on:blur=blur_handler(RegistrationField::Username))
					(field_error_view(ctx, form_signal, RegistrationField::Username))
				}
				div(class="register_field") {
					label(for="register_email") { "Email" }
					input(id="register_email", name="email", type="email", placeholder="you@example.com", class=form_signal.get().input_class(RegistrationField::Email), disabled=*loading_signal.get(), on:input=change_handler(RegistrationField::Email), on:blur=blur_handler(RegistrationField::Email))
					(field_error_view(ctx, form_signal, RegistrationField::Email))
				}
				div(class="register_field") {
					label(for="register_password") {
						"Password"
						span { "8+ characters" }
					}
					input(id="register_password", name="password", type="password", placeholder="••••••••", class=form_signal.get().input_class(RegistrationField::Password), disabled=*loading_signal.get(), on:input=change_handler(RegistrationField::Password), on:blur=blur_handler(RegistrationField::Password))
					(field_error_view(ctx, form_signal, RegistrationField::Password))
					(if *password_entered_signal.get() {
						view! { ctx, PasswordRequirementsList(requirements=password_requirements_signal) }
					} else {
						view! { ctx, }
					})
				}
				(if status_signal.get().message.is_empty() {
					view! { ctx, }
				} else {
					let status = status_signal.get();
					let message_class = if status.is_success { "register_success" } else { "register_error" };
					let message = status.message.clone();
					view! { ctx, div(class=message_class) { (message) } }
				})
				button(type="submit", disabled=*loading_signal.get()) {
					(if *loading_signal.get() { "Creating account..." } else { "Create my account" })
				}
				div(class="register_footer") {
					a(href="/login") { "Already have an account? Log in here" }
				}
			}
		}
	}
}
