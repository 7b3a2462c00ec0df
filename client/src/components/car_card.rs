// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color_utils::{car_color, rgb_str_from_color, use_white_foreground};
use crate::inventory::format_kilometers;
use car_inventory_shared::messages::cars::Car;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct CarCardProps<'a> {
	car: Car,
	featured: bool,
	is_new: bool,
	on_edit: Box<dyn Fn() + 'a>,
	on_delete: Box<dyn Fn() + 'a>,
}

#[component]
pub fn CarCard<'a, G: Html>(ctx: Scope<'a>, props: CarCardProps<'a>) -> View<G> {
	let CarCardProps {
		car,
		featured,
		is_new,
		on_edit,
		on_delete,
	} = props;

	let mut card_class = String::from("car_card");
	if featured {
		card_class.push_str(" car_card_featured");
	}
	if is_new {
		card_class.push_str(" car_card_new");
	}

	let color = car_color(&car.color);
	let foreground = if use_white_foreground(&color) { "#fff" } else { "#000" };
	let color_style = format!("background: {}; color: {}", rgb_str_from_color(color), foreground);

	let title = format!("{} {}", car.brand, car.model);
	let plate = car.plate.clone();
	let year = car.year.to_string();
	let color_name = car.color.clone();
	let color_title = car.color.clone();

	let kilometers_view = match car.kilometers {
		Some(kilometers) => {
			let distance = format_kilometers(kilometers);
			view! {
				ctx,
				div(class="car_card_detail") {
					span(class="car_card_label") { "Kilometers" }
					span(class="car_card_value") { (distance) }
				}
			}
		}
		None => view! { ctx, },
	};
	let fuel_type_view = match car.fuel_type.clone() {
		Some(fuel_type) => view! {
			ctx,
			div(class="car_card_detail") {
				span(class="car_card_label") { "Fuel" }
				span(class="car_card_value") { (fuel_type) }
			}
		},
		None => view! { ctx, },
	};

	let edit_handler = move |_event: WebEvent| on_edit();
	let delete_handler = move |_event: WebEvent| on_delete();

	view! {
		ctx,
		article(class=card_class) {
			header(class="car_card_header") {
				h3(class="car_card_title") { (title) }
				span(class="car_card_plate") { (plate) }
			}
			div(class="car_card_details") {
				div(class="car_card_detail") {
					span(class="car_card_label") { "Year" }
					span(class="car_card_value car_card_year") { (year) }
				}
				div(class="car_card_detail") {
					span(class="car_card_label") { "Color" }
					span(class="car_card_value car_card_color", style=color_style, title=color_title) { (color_name) }
				}
				(kilometers_view)
				(fuel_type_view)
			}
			footer(class="car_card_actions") {
				button(class="car_card_edit", on:click=edit_handler) { "Edit" }
				button(class="car_card_delete", on:click=delete_handler) { "Delete" }
			}
		}
	}
}
