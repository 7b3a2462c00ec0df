// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Moves the application between pages.
#[allow(async_fn_in_trait)]
pub trait Navigator {
	/// Navigates to `path`, replacing the current history entry.
	fn replace(&self, path: &str);

	/// Waits for `duration` before the caller continues.
	async fn delay(&self, duration: Duration);
}

/// Navigation through the application router
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
	fn replace(&self, path: &str) {
		log::debug!("Navigating to {}", path);
		sycamore_router::navigate_replace(path);
	}

	async fn delay(&self, duration: Duration) {
		gloo_timers::future::sleep(duration).await;
	}
}
