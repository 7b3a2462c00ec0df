// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// A car record as stored by the inventory API
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
	/// Assigned by the server; empty for a car that hasn't been created yet.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub id: String,
	pub brand: String,
	pub model: String,
	pub year: i32,
	pub plate: String,
	pub color: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub kilometers: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fuel_type: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_camel_case_optional_fields() {
		let json = r#"{"id":"c1","brand":"Toyota","model":"Corolla","year":2020,"plate":"ABC123","color":"Rojo","kilometers":45000,"fuelType":"Gasolina"}"#;
		let car: Car = serde_json::from_str(json).unwrap();
		assert_eq!(car.id, "c1");
		assert_eq!(car.kilometers, Some(45000));
		assert_eq!(car.fuel_type.as_deref(), Some("Gasolina"));
	}

	#[test]
	fn new_car_omits_id_and_missing_details() {
		let car = Car {
			id: String::new(),
			brand: String::from("Kia"),
			model: String::from("Rio"),
			year: 2024,
			plate: String::from("XYZ987"),
			color: String::from("Azul"),
			kilometers: None,
			fuel_type: None,
		};
		let json = serde_json::to_value(&car).unwrap();
		assert!(json.get("id").is_none());
		assert!(json.get("kilometers").is_none());
		assert!(json.get("fuelType").is_none());
		assert_eq!(json["plate"], "XYZ987");
	}
}
