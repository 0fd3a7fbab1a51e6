use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter used to generate dispatcher identifiers
static DISPATCHER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Tag shared by a dispatcher and every handle it issues
///
/// Every clone of a dispatcher gets a tag of its own.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct DispatcherId(u64);

impl DispatcherId {
	pub(crate) fn gen() -> Self {
		DispatcherId(DISPATCHER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
	}
}

impl std::fmt::Display for DispatcherId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Uniquely identifies one registration of a listener
///
/// Handles are opaque: they can only be created by
/// [`Multifunction::register`](crate::Multifunction::register) and are only
/// meaningful to the dispatcher that issued them and to clones taken from it
/// after they were issued.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct Handle {
	pub(crate) dispatcher: DispatcherId,
	pub(crate) id: usize
}

impl Handle {
	pub(crate) fn new(dispatcher: DispatcherId, id: usize) -> Self {
		Handle { dispatcher, id }
	}
}

impl std::fmt::Display for Handle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.dispatcher, self.id)
	}
}
