// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{check_response, read_json, ApiClient, ApiError};
use car_inventory_shared::messages::cars::Car;
use gloo_net::http::Request;

impl ApiClient {
	pub async fn list_cars(&self) -> Result<Vec<Car>, ApiError> {
		let response = self.authorize(Request::get(&self.endpoint("cars"))).send().await?;
		read_json(response).await
	}

	/// Creates a car, returning the record as stored (with its new ID).
	pub async fn create_car(&self, car: &Car) -> Result<Car, ApiError> {
		let response = self
			.authorize(Request::post(&self.endpoint("cars")))
			.json(car)?
			.send()
			.await?;
		read_json(response).await
	}

	pub async fn update_car(&self, car: &Car) -> Result<Car, ApiError> {
		let path = format!("cars/{}", car.id);
		let response = self
			.authorize(Request::put(&self.endpoint(&path)))
			.json(car)?
			.send()
			.await?;
		read_json(response).await
	}

	pub async fn delete_car(&self, id: &str) -> Result<(), ApiError> {
		let path = format!("cars/{}", id);
		let response = self.authorize(Request::delete(&self.endpoint(&path))).send().await?;
		check_response(response).await?;
		Ok(())
	}
}
