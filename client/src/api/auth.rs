// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{check_response, read_json, ApiClient, ApiError, AuthClient};
use car_inventory_shared::messages::auth::{LoginRequest, LoginResponse, RegisterRequest};
use gloo_net::http::Request;

impl AuthClient for ApiClient {
	type Error = ApiError;

	async fn register(&self, request: RegisterRequest) -> Result<(), ApiError> {
		let response = Request::post(&self.endpoint("auth/register"))
			.json(&request)?
			.send()
			.await?;
		check_response(response).await?;
		Ok(())
	}

	async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
		let response = Request::post(&self.endpoint("auth/login"))
			.json(&request)?
			.send()
			.await?;
		read_json(response).await
	}
}
