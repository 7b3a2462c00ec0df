// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use regex::Regex;
use std::sync::LazyLock;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Characters that count toward the special character password requirement
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

static USERNAME_CHARACTERS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern is valid"));
static EMAIL_SHAPE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// The fields of the registration form
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RegistrationField {
	Username,
	Email,
	Password,
}

impl RegistrationField {
	pub const ALL: [Self; 3] = [Self::Username, Self::Email, Self::Password];
}

/// One value per registration field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldSet<T> {
	pub username: T,
	pub email: T,
	pub password: T,
}

impl<T> FieldSet<T> {
	pub fn get(&self, field: RegistrationField) -> &T {
		match field {
			RegistrationField::Username => &self.username,
			RegistrationField::Email => &self.email,
			RegistrationField::Password => &self.password,
		}
	}

	pub fn get_mut(&mut self, field: RegistrationField) -> &mut T {
		match field {
			RegistrationField::Username => &mut self.username,
			RegistrationField::Email => &mut self.email,
			RegistrationField::Password => &mut self.password,
		}
	}
}

/// Reasons a single field fails validation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldError {
	Empty,
	TooShort,
	InvalidCharacters,
	InvalidFormat,
	MissingUppercase,
	MissingLowercase,
	MissingDigit,
}

impl FieldError {
	/// The message shown under the given field
	pub fn message(&self, field: RegistrationField) -> &'static str {
		match (field, self) {
			(RegistrationField::Username, Self::Empty) => "A username is required.",
			(RegistrationField::Username, Self::TooShort) => "Usernames need at least 3 characters.",
			(RegistrationField::Email, Self::Empty) => "An email address is required.",
			(RegistrationField::Email, Self::InvalidFormat) => "This email address isn't valid.",
			(RegistrationField::Password, Self::Empty) => "A password is required.",
			(RegistrationField::Password, Self::TooShort) => "Passwords need at least 8 characters.",
			(_, Self::InvalidCharacters) => "Only letters, numbers, and _ are allowed.",
			(_, Self::MissingUppercase) => "Include an uppercase letter.",
			(_, Self::MissingLowercase) => "Include a lowercase letter.",
			(_, Self::MissingDigit) => "Include a number.",
			(_, Self::Empty) => "This field is required.",
			(_, Self::TooShort) => "This value is too short.",
			(_, Self::InvalidFormat) => "This value isn't valid.",
		}
	}
}

/// Live breakdown of how a password measures up against each strength rule
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PasswordRequirements {
	pub has_min_length: bool,
	pub has_uppercase: bool,
	pub has_lowercase: bool,
	pub has_number: bool,
	pub has_special_char: bool,
}

impl PasswordRequirements {
	pub fn from_password(password: &str) -> Self {
		Self {
			has_min_length: password.chars().count() >= PASSWORD_MIN_LENGTH,
			has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
			has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
			has_number: password.chars().any(|c| c.is_ascii_digit()),
			has_special_char: password.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c)),
		}
	}
}

/// Checks one registration field in isolation.
pub fn validate_field(field: RegistrationField, value: &str) -> Option<FieldError> {
	match field {
		RegistrationField::Username => validate_username(value),
		RegistrationField::Email => validate_email(value),
		RegistrationField::Password => validate_password(value),
	}
}

fn validate_username(value: &str) -> Option<FieldError> {
	if value.trim().is_empty() {
		return Some(FieldError::Empty);
	}
	if value.chars().count() < USERNAME_MIN_LENGTH {
		return Some(FieldError::TooShort);
	}
	if !USERNAME_CHARACTERS.is_match(value) {
		return Some(FieldError::InvalidCharacters);
	}
	None
}

fn validate_email(value: &str) -> Option<FieldError> {
	if value.trim().is_empty() {
		return Some(FieldError::Empty);
	}
	if !EMAIL_SHAPE.is_match(value) {
		return Some(FieldError::InvalidFormat);
	}
	None
}

fn validate_password(value: &str) -> Option<FieldError> {
	if value.is_empty() {
		return Some(FieldError::Empty);
	}
	let requirements = PasswordRequirements::from_password(value);
	if !requirements.has_min_length {
		return Some(FieldError::TooShort);
	}
	// The special character rule is only advisory
	if !requirements.has_uppercase {
		Some(FieldError::MissingUppercase)
	} else if !requirements.has_lowercase {
		Some(FieldError::MissingLowercase)
	} else if !requirements.has_number {
		Some(FieldError::MissingDigit)
	} else {
		None
	}
}
