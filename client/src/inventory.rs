// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use car_inventory_shared::messages::cars::Car;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

pub const MIN_YEAR: i32 = 1900;

pub const BRAND_OPTIONS: [&str; 12] = [
	"Toyota",
	"Honda",
	"Ford",
	"Chevrolet",
	"Volkswagen",
	"Nissan",
	"BMW",
	"Mercedes-Benz",
	"Audi",
	"Hyundai",
	"Kia",
	"Mazda",
];

pub const COLOR_OPTIONS: [&str; 10] = [
	"Rojo", "Azul", "Verde", "Negro", "Blanco", "Gris", "Plateado", "Amarillo", "Naranja", "Morado",
];

static PLATE_SHAPE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9]{3,10}$").expect("plate pattern is valid"));

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CarField {
	Brand,
	Model,
	Year,
	Plate,
	Color,
}

pub type CarFormErrors = HashMap<CarField, String>;

/// The text of the car form as the user has entered it
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CarDraft {
	pub brand: String,
	pub model: String,
	pub year: String,
	pub plate: String,
	pub color: String,
}

impl CarDraft {
	/// An empty draft for a new car, starting at this year's model
	pub fn new(current_year: i32) -> Self {
		Self {
			brand: String::new(),
			model: String::new(),
			year: current_year.to_string(),
			plate: String::new(),
			color: String::new(),
		}
	}

	pub fn from_car(car: &Car) -> Self {
		Self {
			brand: car.brand.clone(),
			model: car.model.clone(),
			year: car.year.to_string(),
			plate: car.plate.clone(),
			color: car.color.clone(),
		}
	}

	fn value(&self, field: CarField) -> &str {
		match field {
			CarField::Brand => &self.brand,
			CarField::Model => &self.model,
			CarField::Year => &self.year,
			CarField::Plate => &self.plate,
			CarField::Color => &self.color,
		}
	}

	/// Checks the draft, returning an error message for each field that needs fixing.
	pub fn validate(&self, current_year: i32) -> CarFormErrors {
		let mut errors = CarFormErrors::new();

		if !self.plate.is_empty() && !PLATE_SHAPE.is_match(&self.plate) {
			errors.insert(
				CarField::Plate,
				String::from("Plate: letters and numbers only (3-10 characters)"),
			);
		}

		let max_year = current_year + 1;
		match self.year.trim().parse::<i32>() {
			Ok(year) if (MIN_YEAR..=max_year).contains(&year) => (),
			_ => {
				errors.insert(
					CarField::Year,
					format!("Year must be between {} and {}", MIN_YEAR, max_year),
				);
			}
		}

		for field in [CarField::Brand, CarField::Model, CarField::Plate, CarField::Color] {
			if self.value(field).trim().is_empty() {
				errors.insert(field, String::from("Required field"));
			}
		}

		errors
	}

	/// Builds the car to send to the server, keeping the ID and extra details of the car being edited.
	///
	/// Returns the validation errors instead if the draft isn't acceptable.
	pub fn to_car(&self, base: Option<&Car>, current_year: i32) -> Result<Car, CarFormErrors> {
		let errors = self.validate(current_year);
		if !errors.is_empty() {
			return Err(errors);
		}
		let year = self.year.trim().parse().map_err(|_| errors.clone())?;
		Ok(Car {
			id: base.map(|car| car.id.clone()).unwrap_or_default(),
			brand: self.brand.trim().to_string(),
			model: self.model.trim().to_string(),
			year,
			plate: self.plate.trim().to_string(),
			color: self.color.clone(),
			kilometers: base.and_then(|car| car.kilometers),
			fuel_type: base.and_then(|car| car.fuel_type.clone()),
		})
	}
}

/// Formats a distance with thousands separators, e.g. `12,345 km`.
pub fn format_kilometers(kilometers: u32) -> String {
	let digits = kilometers.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, digit) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(digit);
	}
	format!("{} km", grouped)
}

#[cfg(test)]
mod tests {
	use super::*;

	const THIS_YEAR: i32 = 2026;

	fn draft(brand: &str, model: &str, year: &str, plate: &str, color: &str) -> CarDraft {
		CarDraft {
			brand: brand.to_string(),
			model: model.to_string(),
			year: year.to_string(),
			plate: plate.to_string(),
			color: color.to_string(),
		}
	}

	#[test]
	fn complete_draft_is_valid() {
		let errors = draft("Toyota", "Corolla", "2020", "abc123", "Rojo").validate(THIS_YEAR);
		assert!(errors.is_empty());
	}

	#[test]
	fn new_draft_needs_required_fields() {
		let errors = CarDraft::new(THIS_YEAR).validate(THIS_YEAR);
		assert_eq!(errors.len(), 4);
		assert!(!errors.contains_key(&CarField::Year));
		assert_eq!(errors[&CarField::Plate], "Required field");
	}

	#[test]
	fn plate_shape() {
		let long = draft("Ford", "Focus", "2019", "ABCDEFGHIJK", "Azul").validate(THIS_YEAR);
		assert!(long.contains_key(&CarField::Plate));
		let dashed = draft("Ford", "Focus", "2019", "AB-123", "Azul").validate(THIS_YEAR);
		assert!(dashed.contains_key(&CarField::Plate));
		let short = draft("Ford", "Focus", "2019", "AB", "Azul").validate(THIS_YEAR);
		assert!(short.contains_key(&CarField::Plate));
		let blank = draft("Ford", "Focus", "2019", "   ", "Azul").validate(THIS_YEAR);
		assert_eq!(blank[&CarField::Plate], "Required field");
	}

	#[test]
	fn year_range_tracks_current_year() {
		let next = draft("Kia", "Rio", "2027", "KIA001", "Gris").validate(THIS_YEAR);
		assert!(next.is_empty());
		let too_new = draft("Kia", "Rio", "2028", "KIA001", "Gris").validate(THIS_YEAR);
		assert_eq!(too_new[&CarField::Year], "Year must be between 1900 and 2027");
		let too_old = draft("Kia", "Rio", "1899", "KIA001", "Gris").validate(THIS_YEAR);
		assert!(too_old.contains_key(&CarField::Year));
		let not_a_number = draft("Kia", "Rio", "soon", "KIA001", "Gris").validate(THIS_YEAR);
		assert!(not_a_number.contains_key(&CarField::Year));
	}

	#[test]
	fn editing_keeps_identity_and_details() {
		let existing = Car {
			id: String::from("car-7"),
			brand: String::from("Mazda"),
			model: String::from("3"),
			year: 2018,
			plate: String::from("MZD333"),
			color: String::from("Rojo"),
			kilometers: Some(64000),
			fuel_type: Some(String::from("Gasolina")),
		};
		let mut edited = CarDraft::from_car(&existing);
		edited.color = String::from("Azul");
		let car = edited.to_car(Some(&existing), THIS_YEAR).unwrap();
		assert_eq!(car.id, "car-7");
		assert_eq!(car.color, "Azul");
		assert_eq!(car.kilometers, Some(64000));
		assert_eq!(car.fuel_type.as_deref(), Some("Gasolina"));
	}

	#[test]
	fn invalid_draft_does_not_build() {
		let result = draft("", "Civic", "2020", "HND123", "Negro").to_car(None, THIS_YEAR);
		let errors = result.unwrap_err();
		assert_eq!(errors.len(), 1);
		assert!(errors.contains_key(&CarField::Brand));
	}

	#[test]
	fn kilometers_grouping() {
		assert_eq!(format_kilometers(0), "0 km");
		assert_eq!(format_kilometers(999), "999 km");
		assert_eq!(format_kilometers(1000), "1,000 km");
		assert_eq!(format_kilometers(45000), "45,000 km");
		assert_eq!(format_kilometers(1234567), "1,234,567 km");
	}
}
