// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::str::FromStr;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Settings baked into the client at build time
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
	pub api_base: String,
	pub log_level: log::Level,
}

impl ClientConfig {
	/// Reads `CAR_INVENTORY_API_URL` and `CAR_INVENTORY_LOG_LEVEL` as they were when the client was compiled.
	pub fn from_build_env() -> Self {
		Self::from_values(
			option_env!("CAR_INVENTORY_API_URL"),
			option_env!("CAR_INVENTORY_LOG_LEVEL"),
		)
	}

	pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
		let api_base = match api_base.map(str::trim) {
			Some(base) if !base.is_empty() => base.trim_end_matches('/').to_string(),
			_ => String::from(DEFAULT_API_BASE),
		};
		let log_level = log_level
			.and_then(|level| log::Level::from_str(level.trim()).ok())
			.unwrap_or(DEFAULT_LOG_LEVEL);
		Self { api_base, log_level }
	}

	/// Gets the full address of an API endpoint.
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.api_base, path.trim_start_matches('/'))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_when_unset() {
		let config = ClientConfig::from_values(None, None);
		assert_eq!(config.api_base, "/api");
		assert_eq!(config.log_level, log::Level::Info);
	}

	#[test]
	fn reads_overrides() {
		let config = ClientConfig::from_values(Some("https://cars.example.com/v1/"), Some("debug"));
		assert_eq!(config.api_base, "https://cars.example.com/v1");
		assert_eq!(config.log_level, log::Level::Debug);
	}

	#[test]
	fn bad_values_fall_back() {
		let config = ClientConfig::from_values(Some("  "), Some("loud"));
		assert_eq!(config.api_base, DEFAULT_API_BASE);
		assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
	}

	#[test]
	fn endpoint_joins_with_one_slash() {
		let config = ClientConfig::from_values(Some("http://localhost:3000/"), None);
		assert_eq!(config.endpoint("/cars"), "http://localhost:3000/cars");
		assert_eq!(config.endpoint("auth/login"), "http://localhost:3000/auth/login");
	}
}
