// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::validation::{validate_field, FieldError, FieldSet, PasswordRequirements, RegistrationField};
use car_inventory_shared::messages::auth::{LoginRequest, RegisterRequest};

mod submit;
pub use submit::{submit_registration, SubmitOutcome};

pub const FIX_FORM_MESSAGE: &str = "Please correct the errors in the form.";
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created! Redirecting...";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Couldn't create the account. Please try again.";

/// Where the submit flow currently stands
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmitPhase {
	#[default]
	Idle,
	Validating,
	Submitting,
	RegisterOk,
	LoggingIn,
	Done,
	Failed,
}

/// The in-flight remote operation and its outcome, as shown to the user
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubmissionStatus {
	pub is_loading: bool,
	pub is_success: bool,
	pub message: String,
}

/// Why a submit attempt didn't reach the server
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitRejection {
	/// A submission is already running.
	InFlight,
	/// At least one field failed validation.
	Invalid,
}

/// State of the registration form for as long as the page is mounted
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistrationForm {
	values: FieldSet<String>,
	touched: FieldSet<bool>,
	errors: FieldSet<Option<FieldError>>,
	password_requirements: PasswordRequirements,
	status: SubmissionStatus,
	phase: SubmitPhase,
}

impl RegistrationForm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn value(&self, field: RegistrationField) -> &str {
		self.values.get(field)
	}

	pub fn is_touched(&self, field: RegistrationField) -> bool {
		*self.touched.get(field)
	}

	pub fn error(&self, field: RegistrationField) -> Option<FieldError> {
		*self.errors.get(field)
	}

	pub fn error_message(&self, field: RegistrationField) -> Option<&'static str> {
		self.error(field).map(|error| error.message(field))
	}

	pub fn password_requirements(&self) -> PasswordRequirements {
		self.password_requirements
	}

	pub fn status(&self) -> &SubmissionStatus {
		&self.status
	}

	pub fn phase(&self) -> SubmitPhase {
		self.phase
	}

	pub fn is_loading(&self) -> bool {
		self.status.is_loading
	}

	/// Handles an edit to a field. Validation only runs for fields the user has already left once.
	pub fn change(&mut self, field: RegistrationField, value: String) {
		if self.status.is_loading {
			return;
		}

		if field == RegistrationField::Password {
			self.password_requirements = PasswordRequirements::from_password(&value);
		}
		if self.is_touched(field) {
			*self.errors.get_mut(field) = validate_field(field, &value);
		}
		*self.values.get_mut(field) = value;

		if !self.status.message.is_empty() {
			self.status.message.clear();
		}
		if self.phase == SubmitPhase::Failed {
			self.phase = SubmitPhase::Idle;
		}
	}

	/// Handles a field losing focus.
	pub fn blur(&mut self, field: RegistrationField) {
		if self.status.is_loading {
			return;
		}
		*self.touched.get_mut(field) = true;
		*self.errors.get_mut(field) = validate_field(field, self.values.get(field));
	}

	/// Validates everything and, if the form is clean, moves to submitting.
	pub fn begin_submit(&mut self) -> Result<RegisterRequest, SubmitRejection> {
		if self.status.is_loading {
			return Err(SubmitRejection::InFlight);
		}

		self.phase = SubmitPhase::Validating;
		let mut valid = true;
		for field in RegistrationField::ALL {
			*self.touched.get_mut(field) = true;
			let error = validate_field(field, self.values.get(field));
			valid &= error.is_none();
			*self.errors.get_mut(field) = error;
		}

		if !valid {
			self.phase = SubmitPhase::Failed;
			self.status.is_success = false;
			self.status.message = String::from(FIX_FORM_MESSAGE);
			return Err(SubmitRejection::Invalid);
		}

		self.phase = SubmitPhase::Submitting;
		self.status.is_loading = true;
		self.status.is_success = false;
		self.status.message.clear();

		Ok(RegisterRequest {
			username: self.values.username.trim().to_string(),
			email: self.normalized_email(),
			password: self.values.password.clone(),
		})
	}

	pub fn register_succeeded(&mut self) {
		self.phase = SubmitPhase::RegisterOk;
		self.status.is_success = true;
		self.status.message = String::from(ACCOUNT_CREATED_MESSAGE);
	}

	/// Moves on to opening a session for the account that was just created.
	pub fn begin_login(&mut self) -> LoginRequest {
		self.phase = SubmitPhase::LoggingIn;
		LoginRequest {
			email: self.normalized_email(),
			password: self.values.password.clone(),
		}
	}

	pub fn login_succeeded(&mut self) {
		self.phase = SubmitPhase::Done;
		self.status.is_loading = false;
	}

	/// Records a failed register or login call. An empty reason falls back to a generic message.
	pub fn remote_failed(&mut self, reason: &str) {
		let reason = reason.trim();
		self.phase = SubmitPhase::Failed;
		self.status.is_loading = false;
		self.status.is_success = false;
		self.status.message = if reason.is_empty() {
			String::from(REGISTRATION_FAILED_MESSAGE)
		} else {
			reason.to_string()
		};
	}

	/// The class for a field's input element, reflecting its validation state once touched
	pub fn input_class(&self, field: RegistrationField) -> &'static str {
		if !self.is_touched(field) {
			"register_input"
		} else if self.error(field).is_some() {
			"register_input error"
		} else if !self.value(field).is_empty() {
			"register_input valid"
		} else {
			"register_input"
		}
	}

	fn normalized_email(&self) -> String {
		self.values.email.trim().to_lowercase()
	}
}
