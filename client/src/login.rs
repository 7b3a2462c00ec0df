// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::AuthClient;
use crate::navigation::{Navigator, HOME_PATH};
use crate::session::AuthStore;
use crate::state_cell::StateCell;
use car_inventory_shared::messages::auth::LoginRequest;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials. Please try again.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoginField {
	Email,
	Password,
}

/// State of the login form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoginForm {
	email: String,
	password: String,
	error: String,
	is_loading: bool,
}

impl LoginForm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn error(&self) -> &str {
		&self.error
	}

	pub fn is_loading(&self) -> bool {
		self.is_loading
	}

	pub fn change(&mut self, field: LoginField, value: String) {
		if self.is_loading {
			return;
		}
		match field {
			LoginField::Email => self.email = value,
			LoginField::Password => self.password = value,
		}
		self.error.clear();
	}

	/// Starts a login attempt, or explains why one can't start. `None` means a login is already running.
	pub fn begin_submit(&mut self) -> Option<LoginRequest> {
		if self.is_loading {
			return None;
		}
		if self.email.is_empty() || self.password.is_empty() {
			self.error = String::from(MISSING_FIELDS_MESSAGE);
			return None;
		}
		self.is_loading = true;
		self.error.clear();
		Some(LoginRequest {
			email: self.email.trim().to_lowercase(),
			password: self.password.clone(),
		})
	}

	pub fn failed(&mut self, reason: &str) {
		let reason = reason.trim();
		self.is_loading = false;
		self.error = if reason.is_empty() {
			String::from(LOGIN_FAILED_MESSAGE)
		} else {
			reason.to_string()
		};
	}

	pub fn succeeded(&mut self) {
		self.is_loading = false;
	}
}

/// Logs in with the form's credentials and goes straight to the home page on success.
///
/// Returns whether a session was opened.
pub async fn submit_login<F, C, S, N>(form: &F, client: &C, store: &S, navigator: &N) -> bool
where
	F: StateCell<LoginForm>,
	C: AuthClient,
	S: AuthStore,
	N: Navigator,
{
	let Some(request) = form.update(|form| form.begin_submit()) else {
		return false;
	};

	match client.login(request).await {
		Ok(session) => {
			store.login(session.token);
			form.update(|form| form.succeeded());
			navigator.replace(HOME_PATH);
			true
		}
		Err(error) => {
			log::warn!("Login failed: {}", error);
			let reason = error.to_string();
			form.update(|form| form.failed(&reason));
			false
		}
	}
}
