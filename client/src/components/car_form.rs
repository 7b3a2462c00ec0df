// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::inventory::{CarDraft, CarField, CarFormErrors, BRAND_OPTIONS, COLOR_OPTIONS, MIN_YEAR};
use car_inventory_shared::messages::cars::Car;
use chrono::{Datelike, Local};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct CarFormProps<'a> {
	initial: Option<Car>,
	on_submit: Box<dyn Fn(Car) + 'a>,
	on_cancel: Box<dyn Fn() + 'a>,
}

fn input_class(errors: &ReadSignal<CarFormErrors>, field: CarField) -> &'static str {
	if errors.get().contains_key(&field) {
		"car_form_input error"
	} else {
		"car_form_input"
	}
}

fn field_error_view<'a, G: Html>(ctx: Scope<'a>, errors: &'a ReadSignal<CarFormErrors>, field: CarField) -> View<G> {
	view! {
		ctx,
		(match errors.get().get(&field).cloned() {
			Some(message) => view! { ctx, span(class="car_form_error") { (message) } },
			None => view! { ctx, },
		})
	}
}

/// Form for adding a new car or editing an existing one
#[component]
pub fn CarForm<'a, G: Html>(ctx: Scope<'a>, props: CarFormProps<'a>) -> View<G> {
	let CarFormProps {
		initial,
		on_submit,
		on_cancel,
	} = props;

	let current_year = Local::now().year();
	let draft = match initial.as_ref() {
		Some(car) => CarDraft::from_car(car),
		None => CarDraft::new(current_year),
	};
	let is_edit = initial.is_some();
	let initial = create_ref(ctx, initial);

	let brand_signal = create_signal(ctx, draft.brand);
	let model_signal = create_signal(ctx, draft.model);
	let year_signal = create_signal(ctx, draft.year);
	let plate_signal = create_signal(ctx, draft.plate);
	let color_signal = create_signal(ctx, draft.color);
	let errors_signal = create_signal(ctx, CarFormErrors::new());

	let clear_error = move |field: CarField| {
		move |_event: WebEvent| {
			if errors_signal.get().contains_key(&field) {
				errors_signal.modify().remove(&field);
			}
		}
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let draft = CarDraft {
			brand: (*brand_signal.get()).clone(),
			model: (*model_signal.get()).clone(),
			year: (*year_signal.get()).clone(),
			plate: (*plate_signal.get()).clone(),
			color: (*color_signal.get()).clone(),
		};
		match draft.to_car(initial.as_ref(), current_year) {
			Ok(car) => {
				errors_signal.set(CarFormErrors::new());
				on_submit(car);
			}
			Err(errors) => errors_signal.set(errors),
		}
	};
	let cancel_handler = move |_event: WebEvent| on_cancel();

	let brand_options = View::new_fragment(
		BRAND_OPTIONS
			.iter()
			.map(|brand| view! { ctx, option(value=*brand) })
			.collect(),
	);
	let color_options = View::new_fragment(
		COLOR_OPTIONS
			.iter()
			.map(|color| view! { ctx, option(value=*color) { (*color) } })
			.collect(),
	);
	let max_year = (current_year + 1).to_string();
	let min_year = MIN_YEAR.to_string();

	let (form_title, form_subtitle, submit_label) = if is_edit {
		("Edit Vehicle", "Update the vehicle's information", "Update")
	} else {
		("New Vehicle", "Fill in the vehicle's information", "Create")
	};

	view! {
		ctx,
		form(class="car_form", on:submit=form_submission_handler, novalidate=true) {
			div(class="car_form_header") {
				h3(class="car_form_title") { (form_title) }
				p(class="car_form_subtitle") { (form_subtitle) }
			}
			div(class="car_form_fields") {
				div(class="car_form_field") {
					label(for="car_form_brand") { "Brand" }
					input(id="car_form_brand", list="car_form_brand_options", placeholder="e.g. Toyota", class=input_class(errors_signal, CarField::Brand), bind:value=brand_signal, on:input=clear_error(CarField::Brand))
					datalist(id="car_form_brand_options") {
						(brand_options)
					}
					(field_error_view(ctx, errors_signal, CarField::Brand))
				}
				div(class="car_form_field") {
					label(for="car_form_model") { "Model" }
					input(id="car_form_model", placeholder="e.g. Corolla", class=input_class(errors_signal, CarField::Model), bind:value=model_signal, on:input=clear_error(CarField::Model))
					(field_error_view(ctx, errors_signal, CarField::Model))
				}
				div(class="car_form_row") {
					div(class="car_form_field") {
						label(for="car_form_year") { "Year" }
						input(id="car_form_year", type="number", min=min_year, max=max_year, class=input_class(errors_signal, CarField::Year), bind:value=year_signal, on:input=clear_error(CarField::Year))
						(field_error_view(ctx, errors_signal, CarField::Year))
					}
					div(class="car_form_field") {
						label(for="car_form_color") { "Color" }
						select(id="car_form_color", class=input_class(errors_signal, CarField::Color), bind:value=color_signal, on:input=clear_error(CarField::Color)) {
							option(value="") { "Select a color" }
							(color_options)
						}
						(field_error_view(ctx, errors_signal, CarField::Color))
					}
				}
				div(class="car_form_field") {
					label(for="car_form_plate") { "Plate" }
					input(id="car_form_plate", placeholder="e.g. ABC123", class=input_class(errors_signal, CarField::Plate), bind:value=plate_signal, on:input=clear_error(CarField::Plate))
					(field_error_view(ctx, errors_signal, CarField::Plate))
					span(class="car_form_hint") { "Letters and numbers only" }
				}
			}
			div(class="car_form_actions") {
				button(type="button", class="car_form_cancel", on:click=cancel_handler) { "Cancel" }
				button(type="submit") { (submit_label) }
			}
		}
	}
}
