// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::Storage;

/// The local storage key under which the session token is kept
pub const SESSION_STORAGE_KEY: &str = "car_inventory_token";

/// Holder of the current session token.
pub trait AuthStore {
	/// Activates a session. Storing the same token again has no further effect.
	fn login(&self, token: String);

	/// Ends the current session, if any.
	fn logout(&self);

	fn token(&self) -> Option<String>;
}

/// The browser session, kept in a signal for the views and mirrored into local storage so it survives reloads
#[derive(Clone)]
pub struct SessionStore {
	token: RcSignal<Option<String>>,
}

impl SessionStore {
	/// Loads any session saved by a previous visit.
	pub fn restore() -> Self {
		let token = local_storage().and_then(|storage| storage.get_item(SESSION_STORAGE_KEY).ok().flatten());
		if token.is_some() {
			log::debug!("Restored saved session");
		}
		Self {
			token: create_rc_signal(token),
		}
	}

	pub fn token_signal(&self) -> &RcSignal<Option<String>> {
		&self.token
	}

	pub fn is_logged_in(&self) -> bool {
		self.token.get().is_some()
	}
}

impl AuthStore for SessionStore {
	fn login(&self, token: String) {
		if self.token.get().as_deref() == Some(token.as_str()) {
			return;
		}
		if let Some(storage) = local_storage() {
			if storage.set_item(SESSION_STORAGE_KEY, &token).is_err() {
				log::warn!("Couldn't save the session; it will end when the page is closed");
			}
		}
		self.token.set(Some(token));
	}

	fn logout(&self) {
		if let Some(storage) = local_storage() {
			let _ = storage.remove_item(SESSION_STORAGE_KEY);
		}
		self.token.set(None);
	}

	fn token(&self) -> Option<String> {
		(*self.token.get()).clone()
	}
}

fn local_storage() -> Option<Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}
