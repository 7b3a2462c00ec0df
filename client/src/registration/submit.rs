// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{RegistrationForm, SubmitRejection};
use crate::api::AuthClient;
use crate::navigation::{Navigator, HOME_PATH};
use crate::session::AuthStore;
use crate::state_cell::StateCell;
use std::time::Duration;

/// How long the success message stays up before moving to the home page
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// How a submit attempt ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	Rejected(SubmitRejection),
	RegisterFailed,
	/// The account exists but no session could be opened for it.
	LoginFailed,
	Completed,
}

/// Runs one submission: validate, register, log in, store the session, then redirect home after a pause.
///
/// Every failure ends up in the form's status message; nothing is returned as an error. Dropping the future (as
/// happens when the page's scope is torn down) drops any pending redirect with it.
pub async fn submit_registration<F, C, S, N>(form: &F, client: &C, store: &S, navigator: &N) -> SubmitOutcome
where
	F: StateCell<RegistrationForm>,
	C: AuthClient,
	S: AuthStore,
	N: Navigator,
{
	let register_request = match form.update(|form| form.begin_submit()) {
		Ok(request) => request,
		Err(rejection) => {
			log::debug!("Registration not submitted: {:?}", rejection);
			return SubmitOutcome::Rejected(rejection);
		}
	};

	if let Err(error) = client.register(register_request).await {
		log::error!("Registration failed: {}", error);
		let reason = error.to_string();
		form.update(|form| form.remote_failed(&reason));
		return SubmitOutcome::RegisterFailed;
	}

	let login_request = form.update(|form| {
		form.register_succeeded();
		form.begin_login()
	});

	let session = match client.login(login_request).await {
		Ok(session) => session,
		Err(error) => {
			log::error!("Account was created but logging in failed: {}", error);
			let reason = error.to_string();
			form.update(|form| form.remote_failed(&reason));
			return SubmitOutcome::LoginFailed;
		}
	};

	store.login(session.token);
	form.update(|form| form.login_succeeded());

	navigator.delay(REDIRECT_DELAY).await;
	navigator.replace(HOME_PATH);
	SubmitOutcome::Completed
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registration::{SubmitPhase, ACCOUNT_CREATED_MESSAGE, FIX_FORM_MESSAGE, REGISTRATION_FAILED_MESSAGE};
	use crate::validation::{FieldError, RegistrationField};
	use car_inventory_shared::messages::auth::{LoginRequest, LoginResponse, RegisterRequest};
	use futures::executor::block_on;
	use std::cell::RefCell;

	struct FakeAuthClient {
		register_result: Result<(), String>,
		login_result: Result<LoginResponse, String>,
		registered: RefCell<Vec<RegisterRequest>>,
		logged_in: RefCell<Vec<LoginRequest>>,
	}

	impl FakeAuthClient {
		fn new(register_result: Result<(), String>, login_result: Result<&str, &str>) -> Self {
			Self {
				register_result,
				login_result: login_result
					.map(|token| LoginResponse {
						token: token.to_string(),
					})
					.map_err(String::from),
				registered: RefCell::new(Vec::new()),
				logged_in: RefCell::new(Vec::new()),
			}
		}

		fn call_count(&self) -> usize {
			self.registered.borrow().len() + self.logged_in.borrow().len()
		}
	}

	impl AuthClient for FakeAuthClient {
		type Error = String;

		async fn register(&self, request: RegisterRequest) -> Result<(), String> {
			self.registered.borrow_mut().push(request);
			self.register_result.clone()
		}

		async fn login(&self, request: LoginRequest) -> Result<LoginResponse, String> {
			self.logged_in.borrow_mut().push(request);
			self.login_result.clone()
		}
	}

	#[derive(Default)]
	struct FakeStore {
		tokens: RefCell<Vec<String>>,
	}

	impl AuthStore for FakeStore {
		fn login(&self, token: String) {
			self.tokens.borrow_mut().push(token);
		}

		fn logout(&self) {
			self.tokens.borrow_mut().clear();
		}

		fn token(&self) -> Option<String> {
			self.tokens.borrow().last().cloned()
		}
	}

	#[derive(Default)]
	struct FakeNavigator {
		delays: RefCell<Vec<Duration>>,
		visited: RefCell<Vec<String>>,
	}

	impl Navigator for FakeNavigator {
		fn replace(&self, path: &str) {
			self.visited.borrow_mut().push(path.to_string());
		}

		async fn delay(&self, duration: Duration) {
			self.delays.borrow_mut().push(duration);
		}
	}

	fn valid_form() -> RefCell<RegistrationForm> {
		let mut form = RegistrationForm::new();
		form.change(RegistrationField::Username, String::from("speed_racer"));
		form.change(RegistrationField::Email, String::from("Racer@Example.com"));
		form.change(RegistrationField::Password, String::from("Mach5Go!"));
		RefCell::new(form)
	}

	#[test]
	fn empty_form_never_reaches_the_server() {
		let form = RefCell::new(RegistrationForm::new());
		let client = FakeAuthClient::new(Ok(()), Ok("tok1"));
		let store = FakeStore::default();
		let navigator = FakeNavigator::default();

		let outcome = block_on(submit_registration(&form, &client, &store, &navigator));

		assert_eq!(outcome, SubmitOutcome::Rejected(SubmitRejection::Invalid));
		assert_eq!(client.call_count(), 0);
		let form = form.borrow();
		for field in RegistrationField::ALL {
			assert!(form.is_touched(field));
			assert_eq!(form.error(field), Some(FieldError::Empty));
		}
		assert_eq!(form.status().message, FIX_FORM_MESSAGE);
	}

	#[test]
	fn successful_flow_stores_token_and_redirects_once() {
		let form = valid_form();
		let client = FakeAuthClient::new(Ok(()), Ok("tok1"));
		let store = FakeStore::default();
		let navigator = FakeNavigator::default();

		let outcome = block_on(submit_registration(&form, &client, &store, &navigator));

		assert_eq!(outcome, SubmitOutcome::Completed);
		assert_eq!(*store.tokens.borrow(), vec![String::from("tok1")]);
		assert_eq!(*navigator.delays.borrow(), vec![REDIRECT_DELAY]);
		assert_eq!(*navigator.visited.borrow(), vec![String::from(HOME_PATH)]);

		let registered = client.registered.borrow();
		assert_eq!(registered.len(), 1);
		assert_eq!(registered[0].username, "speed_racer");
		assert_eq!(registered[0].email, "racer@example.com");
		let logged_in = client.logged_in.borrow();
		assert_eq!(logged_in.len(), 1);
		assert_eq!(logged_in[0].email, "racer@example.com");
		assert_eq!(logged_in[0].password, "Mach5Go!");

		let form = form.borrow();
		assert_eq!(form.phase(), SubmitPhase::Done);
		assert!(form.status().is_success);
		assert!(!form.is_loading());
		assert_eq!(form.status().message, ACCOUNT_CREATED_MESSAGE);
	}

	#[test]
	fn login_failure_after_register_is_surfaced() {
		let form = valid_form();
		let client = FakeAuthClient::new(Ok(()), Err("bad credentials"));
		let store = FakeStore::default();
		let navigator = FakeNavigator::default();

		let outcome = block_on(submit_registration(&form, &client, &store, &navigator));

		assert_eq!(outcome, SubmitOutcome::LoginFailed);
		assert!(store.tokens.borrow().is_empty());
		assert!(navigator.visited.borrow().is_empty());
		let form = form.borrow();
		assert_eq!(form.status().message, "bad credentials");
		assert!(!form.status().is_success);
		assert!(!form.is_loading());
		assert_eq!(form.phase(), SubmitPhase::Failed);
	}

	#[test]
	fn register_failure_skips_login() {
		let form = valid_form();
		let client = FakeAuthClient::new(Err(String::from("Email already registered")), Ok("tok1"));
		let store = FakeStore::default();
		let navigator = FakeNavigator::default();

		let outcome = block_on(submit_registration(&form, &client, &store, &navigator));

		assert_eq!(outcome, SubmitOutcome::RegisterFailed);
		assert!(client.logged_in.borrow().is_empty());
		assert!(store.tokens.borrow().is_empty());
		let form = form.borrow();
		assert_eq!(form.status().message, "Email already registered");
		assert!(!form.is_loading());
		assert_eq!(form.value(RegistrationField::Username), "speed_racer");
	}

	#[test]
	fn register_failure_without_reason_uses_fallback() {
		let form = valid_form();
		let client = FakeAuthClient::new(Err(String::new()), Ok("tok1"));
		let store = FakeStore::default();
		let navigator = FakeNavigator::default();

		block_on(submit_registration(&form, &client, &store, &navigator));

		assert_eq!(form.borrow().status().message, REGISTRATION_FAILED_MESSAGE);
	}

	#[test]
	fn resubmitting_after_register_failure_works() {
		let form = valid_form();
		let failing = FakeAuthClient::new(Err(String::from("Service unavailable")), Ok("tok1"));
		let store = FakeStore::default();
		let navigator = FakeNavigator::default();
		block_on(submit_registration(&form, &failing, &store, &navigator));

		let working = FakeAuthClient::new(Ok(()), Ok("tok2"));
		let outcome = block_on(submit_registration(&form, &working, &store, &navigator));

		assert_eq!(outcome, SubmitOutcome::Completed);
		assert_eq!(store.token().as_deref(), Some("tok2"));
	}

	#[test]
	fn submit_while_loading_is_a_no_op() {
		let form = valid_form();
		form.borrow_mut().begin_submit().unwrap();
		let client = FakeAuthClient::new(Ok(()), Ok("tok1"));
		let store = FakeStore::default();
		let navigator = FakeNavigator::default();

		let outcome = block_on(submit_registration(&form, &client, &store, &navigator));

		assert_eq!(outcome, SubmitOutcome::Rejected(SubmitRejection::InFlight));
		assert_eq!(client.call_count(), 0);
	}
}
