// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::RefCell;
use sycamore::prelude::*;

/// Shared mutable access to form state, so the submit flows can publish each transition as it happens.
///
/// Implementations must not hold a borrow across an `.await`; `update` borrows only for the duration of the closure.
pub trait StateCell<T> {
	fn update<R>(&self, change: impl FnOnce(&mut T) -> R) -> R;
}

impl<T: Clone> StateCell<T> for Signal<T> {
	fn update<R>(&self, change: impl FnOnce(&mut T) -> R) -> R {
		let mut state = self.modify();
		change(&mut *state)
	}
}

impl<T> StateCell<T> for RefCell<T> {
	fn update<R>(&self, change: impl FnOnce(&mut T) -> R) -> R {
		change(&mut *self.borrow_mut())
	}
}
