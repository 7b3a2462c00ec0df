// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ClientConfig;
use crate::session::{AuthStore, SessionStore};
use car_inventory_shared::messages::auth::{LoginRequest, LoginResponse, RegisterRequest};
use car_inventory_shared::messages::ErrorResponse;
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt;

pub mod auth;
pub mod cars;

/// The account operations the registration and login forms depend on
#[allow(async_fn_in_trait)]
pub trait AuthClient {
	type Error: fmt::Display;

	async fn register(&self, request: RegisterRequest) -> Result<(), Self::Error>;

	async fn login(&self, request: LoginRequest) -> Result<LoginResponse, Self::Error>;
}

/// Errors that can occur talking to the inventory API
#[derive(Debug)]
pub enum ApiError {
	Request(gloo_net::Error),
	Status { status: u16, message: Option<String> },
}

impl ApiError {
	/// Whether the server rejected the session
	pub fn is_unauthorized(&self) -> bool {
		matches!(self, Self::Status { status: 401, .. })
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Request(error) => write!(f, "{}", error),
			Self::Status {
				message: Some(message), ..
			} => write!(f, "{}", message),
			Self::Status { status, message: None } => write!(f, "Request failed with status code {}", status),
		}
	}
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

/// HTTP client for the inventory API
#[derive(Clone)]
pub struct ApiClient {
	config: ClientConfig,
	session: SessionStore,
}

impl ApiClient {
	pub fn new(config: ClientConfig, session: SessionStore) -> Self {
		Self { config, session }
	}

	fn endpoint(&self, path: &str) -> String {
		self.config.endpoint(path)
	}

	/// Adds the session's bearer token, if there is one.
	fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
		match self.session.token() {
			Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
			None => request,
		}
	}
}

/// Turns a non-success response into an error carrying the server's explanation.
async fn check_response(response: Response) -> Result<Response, ApiError> {
	if response.ok() {
		return Ok(response);
	}
	let status = response.status();
	let body = response.text().await.unwrap_or_default();
	Err(ApiError::Status {
		status,
		message: error_message_from_body(&body),
	})
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
	let response = check_response(response).await?;
	Ok(response.json().await?)
}

fn error_message_from_body(body: &str) -> Option<String> {
	let response: ErrorResponse = serde_json::from_str(body).ok()?;
	response.message.filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_errors_prefer_server_message() {
		let error = ApiError::Status {
			status: 409,
			message: Some(String::from("Email already registered")),
		};
		assert_eq!(error.to_string(), "Email already registered");
		assert!(!error.is_unauthorized());
	}

	#[test]
	fn status_errors_without_message_name_the_status() {
		let error = ApiError::Status {
			status: 401,
			message: None,
		};
		assert_eq!(error.to_string(), "Request failed with status code 401");
		assert!(error.is_unauthorized());
	}

	#[test]
	fn reads_message_from_error_body() {
		assert_eq!(
			error_message_from_body(r#"{"message":"bad credentials"}"#).as_deref(),
			Some("bad credentials")
		);
		assert_eq!(error_message_from_body(r#"{"message":"  "}"#), None);
		assert_eq!(error_message_from_body(r#"{"error":"nope"}"#), None);
		assert_eq!(error_message_from_body("<html>Bad Gateway</html>"), None);
	}
}
