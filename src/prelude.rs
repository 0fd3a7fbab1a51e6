pub use crate::{
	dispatcher::Multifunction,
	error::Error,
	handle::Handle,
	signature::{ArgumentType, FirstArgumentType, ReturnType, SecondArgumentType, Signature}
};
