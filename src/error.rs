use thiserror::Error;

use crate::handle::DispatcherId;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned when a handle is presented to a dispatcher that does not accept it
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
	#[error("Handle was issued by dispatcher {handle}, not by dispatcher {dispatcher}")]
	ForeignHandle {
		handle: DispatcherId,
		dispatcher: DispatcherId
	}
}
