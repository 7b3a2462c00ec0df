// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::validation::PasswordRequirements;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct PasswordRequirementsProps<'a> {
	requirements: &'a ReadSignal<PasswordRequirements>,
}

fn requirement_class(met: bool) -> &'static str {
	if met {
		"register_requirement valid"
	} else {
		"register_requirement invalid"
	}
}

/// Live checklist of the password strength rules
#[component]
pub fn PasswordRequirementsList<'a, G: Html>(ctx: Scope<'a>, props: PasswordRequirementsProps<'a>) -> View<G> {
	let requirements = props.requirements;

	view! {
		ctx,
		div(class="register_requirements") {
			h4 { "Your password should contain:" }
			div(class=requirement_class(requirements.get().has_min_length)) { "• At least 8 characters" }
			div(class=requirement_class(requirements.get().has_uppercase)) { "• An uppercase letter" }
			div(class=requirement_class(requirements.get().has_lowercase)) { "• A lowercase letter" }
			div(class=requirement_class(requirements.get().has_number)) { "• A number" }
			div(class=requirement_class(requirements.get().has_special_char)) { "• A symbol (recommended)" }
		}
	}
}
