// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ApiClient;
use crate::components::error_display::ErrorDisplay;
use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::errors::ErrorData;
use crate::pages::cars::CarsView;
use crate::pages::login::LoginView;
use crate::pages::not_found::NotFoundView;
use crate::pages::register::RegistrationView;
use crate::session::SessionStore;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

#[derive(Route)]
pub enum AppRoute {
	#[to("/")]
	Cars,
	#[to("/login")]
	Login,
	#[to("/register")]
	Register,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	let config: &ClientConfig = use_context(ctx);
	let session = SessionStore::restore();
	provide_context(ctx, ApiClient::new(config.clone(), session.clone()));
	provide_context(ctx, session);
	let errors: &Signal<Vec<ErrorData>> = create_signal(ctx, Vec::new());
	provide_context_ref(ctx, errors);

	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoute>| {
				view! {
					ctx,
					NavBar
					ErrorDisplay
					div(id="page") {
						(match route.get().as_ref() {
							AppRoute::Cars => view! { ctx, CarsView },
							AppRoute::Login => view! { ctx, LoginView },
							AppRoute::Register => view! { ctx, RegistrationView },
							AppRoute::NotFound => view! { ctx, NotFoundView },
						})
					}
				}
			}
		)
	}
}
