//! The multicast dispatcher
//!
//! # Rules
//! * Listeners run in registration order, restricted to the ones still registered.
//! * Handle ids are never reused. Removal leaves a tombstone in the handle table.
//! * Invocation never mutates the dispatcher.

use std::sync::Arc;

use crate::{
	error::{Error, Result},
	handle::{DispatcherId, Handle},
	signature::{IntoListener, Signature}
};

/// Entry of the handle table
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Slot {
	/// The listener of this handle is at this position in the listener list
	Live(usize),
	/// The listener of this handle has been unregistered
	Removed
}

/// An ordered list of listeners sharing the signature `F`
///
/// ```rust
/// # use multicast::Multifunction;
/// let mut event: Multifunction<dyn Fn(i32) -> i32> = Multifunction::new();
///
/// event.register(|n: i32| n + 1);
/// let handle = event.register(|n: i32| n * 2);
/// assert_eq!(event.invoke((5,)), Some(10));
///
/// event.unregister(handle).unwrap();
/// assert_eq!(event.invoke((5,)), Some(6));
/// ```
pub struct Multifunction<F: ?Sized> {
	id: DispatcherId,
	listeners: Vec<Arc<F>>,
	/// One slot per handle ever issued, indexed by handle id
	slots: Vec<Slot>,
	/// Dispatchers this one was cloned from, with the number of handles each had issued
	/// at the time of the clone
	ancestors: Vec<(DispatcherId, usize)>
}

impl<F: ?Sized + Signature> Multifunction<F> {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	/// Creates an empty dispatcher with room for `capacity` registrations
	pub fn with_capacity(capacity: usize) -> Self {
		Multifunction {
			id: DispatcherId::gen(),
			listeners: Vec::with_capacity(capacity),
			slots: Vec::with_capacity(capacity),
			ancestors: Vec::new()
		}
	}

	/// Appends `listener` to the end of the list and returns its handle
	pub fn register<L: IntoListener<F>>(&mut self, listener: L) -> Handle {
		self.listeners.push(listener.into_listener());
		self.slots.push(Slot::Live(self.listeners.len() - 1));

		let handle = Handle::new(self.id, self.slots.len() - 1);
		log::trace!(
			"Registered listener {handle} at position {}",
			self.listeners.len() - 1
		);

		handle
	}

	/// Removes the listener identified by `handle`
	///
	/// Returns `Ok(true)` if a listener was removed and `Ok(false)` if the handle
	/// had already been unregistered, so repeated removal is safe.
	///
	/// # Errors
	/// * [`Error::ForeignHandle`] if the handle was issued by another dispatcher, including
	///   the dispatcher this one was cloned from when the handle was issued after the clone
	pub fn unregister(&mut self, handle: Handle) -> Result<bool> {
		let position = match *self.slot(handle)? {
			Slot::Live(position) => position,
			Slot::Removed => {
				log::debug!("Listener {handle} was already unregistered");
				return Ok(false);
			}
		};

		self.listeners.remove(position);

		for slot in self.slots.iter_mut() {
			if let Slot::Live(other) = slot {
				if *other > position {
					*other -= 1;
				}
			}
		}

		self.slots[handle.id] = Slot::Removed;
		log::trace!("Unregistered listener {handle} from position {position}");

		Ok(true)
	}

	/// Unregisters every listener
	///
	/// Outstanding handles stay valid: unregistering them afterwards returns `Ok(false)`.
	pub fn clear(&mut self) {
		let count = self.listeners.len();

		self.listeners.clear();
		self.slots.fill(Slot::Removed);

		log::trace!("Cleared {count} listeners from dispatcher {}", self.id);
	}

	/// Returns true if `handle` belongs to this dispatcher and its listener is still registered
	pub fn is_registered(&self, handle: Handle) -> bool {
		self.accepts(handle) && matches!(self.slots.get(handle.id), Some(Slot::Live(_)))
	}

	/// Number of listeners currently registered
	pub fn len(&self) -> usize {
		self.listeners.len()
	}

	/// Returns true if no listeners are registered
	pub fn is_empty(&self) -> bool {
		self.listeners.is_empty()
	}

	/// Number of handles ever issued, including unregistered ones
	pub fn registrations(&self) -> usize {
		self.slots.len()
	}

	/// Calls every listener in order and returns the value of the last one
	///
	/// Returns `None` if no listeners are registered. Every listener but the last
	/// receives a clone of `args`. A panicking listener unwinds through this call
	/// and the listeners after it are not called.
	pub fn invoke(&self, args: F::Args) -> Option<F::Output>
	where
		F::Args: Clone
	{
		let mut output = None;
		self.invoke_each(args, |value| output = Some(value));
		output
	}

	/// Like [`invoke`](Self::invoke), but returns `F::Output::default()` when no
	/// listeners are registered
	pub fn invoke_or_default(&self, args: F::Args) -> F::Output
	where
		F::Args: Clone,
		F::Output: Default
	{
		self.invoke(args).unwrap_or_default()
	}

	/// Calls every listener in order, passing each return value to `sink`
	pub fn invoke_each<S>(&self, args: F::Args, mut sink: S)
	where
		F::Args: Clone,
		S: FnMut(F::Output)
	{
		if let Some((last, rest)) = self.listeners.split_last() {
			for listener in rest {
				sink(listener.apply(args.clone()));
			}

			sink(last.apply(args));
		}
	}

	/// Returns true if `handle` was issued by this dispatcher, or by an ancestor before
	/// this dispatcher was cloned from it
	fn accepts(&self, handle: Handle) -> bool {
		handle.dispatcher == self.id
			|| self
				.ancestors
				.iter()
				.any(|&(ancestor, issued)| handle.dispatcher == ancestor && handle.id < issued)
	}

	fn slot(&self, handle: Handle) -> Result<&Slot> {
		match self.slots.get(handle.id) {
			Some(slot) if self.accepts(handle) => Ok(slot),
			_ => {
				log::warn!(
					"Rejected handle {handle} presented to dispatcher {}",
					self.id
				);
				Err(Error::ForeignHandle {
					handle: handle.dispatcher,
					dispatcher: self.id
				})
			}
		}
	}
}

impl<F: ?Sized + Signature> Default for Multifunction<F> {
	fn default() -> Self {
		Self::new()
	}
}

/// Clones get a fresh tag and keep accepting the handles issued before the clone
impl<F: ?Sized> Clone for Multifunction<F> {
	fn clone(&self) -> Self {
		let mut ancestors = self.ancestors.clone();
		ancestors.push((self.id, self.slots.len()));

		let clone = Multifunction {
			id: DispatcherId::gen(),
			listeners: self.listeners.clone(),
			slots: self.slots.clone(),
			ancestors
		};
		log::trace!("Cloned dispatcher {} into {}", self.id, clone.id);

		clone
	}
}

impl<F: ?Sized> std::fmt::Debug for Multifunction<F> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Multifunction")
			.field("id", &self.id)
			.field("listeners", &self.listeners.len())
			.field("slots", &self.slots)
			.field("ancestors", &self.ancestors)
			.finish()
	}
}
