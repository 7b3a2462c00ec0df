// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::{ApiClient, ApiError};
use crate::components::car_card::CarCard;
use crate::components::car_form::CarForm;
use crate::errors::ErrorData;
use crate::navigation::LOGIN_PATH;
use crate::page_utils::set_page_title;
use crate::session::{AuthStore, SessionStore};
use car_inventory_shared::messages::cars::Car;
use chrono::{Datelike, Local};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore::suspense::Suspense;
use sycamore_router::navigate;
use web_sys::Event as WebEvent;

/// What the car form is currently open for
#[derive(Clone)]
enum FormTarget {
	NewCar,
	Existing(Car),
}

/// Surfaces a failed API call. A rejected session sends the user back to log in.
fn report_api_error(ctx: Scope<'_>, message: &'static str, error: ApiError) {
	if error.is_unauthorized() {
		log::warn!("Session was rejected by the server; logging out");
		let session: &SessionStore = use_context(ctx);
		session.logout();
		navigate(LOGIN_PATH);
		return;
	}
	log::error!("{} {}", message, error);
	let errors: &Signal<Vec<ErrorData>> = use_context(ctx);
	errors.modify().push(ErrorData::new_with_error(message, error));
}

#[component]
async fn CarsLoadedView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let api: &ApiClient = use_context(ctx);
	let cars = match api.list_cars().await {
		Ok(cars) => cars,
		Err(error) => {
			report_api_error(ctx, "Couldn't load the car list.", error);
			Vec::new()
		}
	};

	let current_year = Local::now().year();
	let cars_signal = create_signal(ctx, cars);
	let form_target_signal: &Signal<Option<FormTarget>> = create_signal(ctx, None);
	let new_car_id_signal: &Signal<Option<String>> = create_signal(ctx, None);
	let no_cars_signal = create_memo(ctx, || cars_signal.get().is_empty());

	let save_car = move |car: Car| {
		form_target_signal.set(None);
		spawn_local_scoped(ctx, async move {
			let api: &ApiClient = use_context(ctx);
			if car.id.is_empty() {
				match api.create_car(&car).await {
					Ok(created) => {
						log::info!("Added car {}", created.id);
						new_car_id_signal.set(Some(created.id.clone()));
						cars_signal.modify().push(created);
					}
					Err(error) => report_api_error(ctx, "Couldn't add the car.", error),
				}
			} else {
				match api.update_car(&car).await {
					Ok(updated) => {
						let mut cars = cars_signal.modify();
						if let Some(existing) = cars.iter_mut().find(|existing| existing.id == updated.id) {
							*existing = updated;
						}
					}
					Err(error) => report_api_error(ctx, "Couldn't update the car.", error),
				}
			}
		});
	};

	let delete_car = move |id: String| {
		spawn_local_scoped(ctx, async move {
			let api: &ApiClient = use_context(ctx);
			match api.delete_car(&id).await {
				Ok(()) => {
					log::info!("Deleted car {}", id);
					cars_signal.modify().retain(|car| car.id != id);
					let editing_deleted_car =
						matches!(form_target_signal.get().as_ref(), Some(FormTarget::Existing(car)) if car.id == id);
					if editing_deleted_car {
						form_target_signal.set(None);
					}
				}
				Err(error) => report_api_error(ctx, "Couldn't delete the car.", error),
			}
		});
	};

	let new_car_handler = move |_event: WebEvent| {
		form_target_signal.set(Some(FormTarget::NewCar));
	};

	view! {
		ctx,
		div(id="cars_controls") {
			button(id="cars_new", on:click=new_car_handler) { "New car" }
		}
		(match form_target_signal.get().as_ref().clone() {
			Some(target) => {
				let initial = match target {
					FormTarget::NewCar => None,
					FormTarget::Existing(car) => Some(car),
				};
				view! {
					ctx,
					CarForm(
						initial=initial,
						on_submit=Box::new(save_car),
						on_cancel=Box::new(move || form_target_signal.set(None))
					)
				}
			}
			None => view! { ctx, },
		})
		(if *no_cars_signal.get() {
			view! { ctx, p(id="cars_empty") { "No cars in the inventory yet." } }
		} else {
			view! { ctx, }
		})
		div(id="cars_list") {
			Keyed(
				iterable=cars_signal,
				key=|car| car.id.clone(),
				view=move |ctx, car| {
					let featured = car.year == current_year;
					let is_new = new_car_id_signal.get().as_deref() == Some(car.id.as_str());
					let edit_target = car.clone();
					let delete_id = car.id.clone();
					view! {
						ctx,
						CarCard(
							car=car,
							featured=featured,
							is_new=is_new,
							on_edit=Box::new(move || form_target_signal.set(Some(FormTarget::Existing(edit_target.clone())))),
							on_delete=Box::new(move || delete_car(delete_id.clone()))
						)
					}
				}
			)
		}
	}
}

#[component]
pub fn CarsView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating car list page");
	set_page_title("Cars");

	let session: &SessionStore = use_context(ctx);
	if !session.is_logged_in() {
		spawn_local_scoped(ctx, async {
			navigate(LOGIN_PATH);
		});
		return view! { ctx, };
	}

	view! {
		ctx,
		h1 { "Inventory" }
		Suspense(fallback=view! { ctx, "Loading cars..." }) {
			CarsLoadedView
		}
	}
}
