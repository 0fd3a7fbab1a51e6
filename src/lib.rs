#![doc = include_str!("../README.md")]

pub mod dispatcher;
pub mod error;
pub mod handle;
pub mod prelude;
pub mod signature;

pub use crate::{
	dispatcher::Multifunction,
	error::{Error, Result},
	handle::{DispatcherId, Handle},
	signature::Signature
};
