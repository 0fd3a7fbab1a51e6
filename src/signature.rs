//! Call signatures a [`Multifunction`](crate::Multifunction) can be built over
//!
//! A signature is written as a trait object type, `dyn Fn(i32)` or
//! `dyn Fn(u8, u8) -> bool + Send + Sync`. Signatures take up to six arguments.
//! A trailing lifetime (`dyn Fn(i32) + 'a`) allows listeners that borrow from
//! the enclosing scope.

use std::sync::Arc;

/// A call signature shared by every listener of a dispatcher
pub trait Signature {
	/// The arguments of the signature as a tuple, `(i32,)` for `dyn Fn(i32)`
	type Args;
	/// The return type of the signature, `()` for listeners without a return value
	type Output;

	/// Call the listener, spreading the tuple over its parameters
	fn apply(&self, args: Self::Args) -> Self::Output;
}

/// Conversion of a callable into a stored listener of the signature `F`
///
/// Implemented for every function, closure and function pointer matching `F`.
pub trait IntoListener<F: ?Sized> {
	fn into_listener(self) -> Arc<F>;
}

/// Argument tuples with exactly one element
pub trait Unary {
	type Argument;
}

impl<A> Unary for (A,) {
	type Argument = A;
}

/// Argument tuples with exactly two elements
pub trait Binary {
	type First;
	type Second;
}

impl<A, B> Binary for (A, B) {
	type First = A;
	type Second = B;
}

/// The argument type of a single-argument signature
///
/// ```rust
/// # use multicast::signature::ArgumentType;
/// let n: ArgumentType<dyn Fn(i32)> = 3_i32;
/// # assert_eq!(n, 3);
/// ```
pub type ArgumentType<F> = <<F as Signature>::Args as Unary>::Argument;

/// The first argument type of a two-argument signature
pub type FirstArgumentType<F> = <<F as Signature>::Args as Binary>::First;

/// The second argument type of a two-argument signature
pub type SecondArgumentType<F> = <<F as Signature>::Args as Binary>::Second;

/// The return type of a signature
pub type ReturnType<F> = <F as Signature>::Output;

macro_rules! signature_impls {
	($($arg:ident),*) => {
		signature_impls!(@flavor [$($arg),*] []);
		signature_impls!(@flavor [$($arg),*] [+ Send + Sync]);
	};
	(@flavor [$($arg:ident),*] [$($bounds:tt)*]) => {
		impl<'a, R, $($arg),*> Signature for dyn Fn($($arg),*) -> R $($bounds)* + 'a {
			type Args = ($($arg,)*);
			type Output = R;

			#[allow(non_snake_case)]
			fn apply(&self, ($($arg,)*): Self::Args) -> R {
				(self)($($arg),*)
			}
		}

		impl<'a, L, R, $($arg),*> IntoListener<dyn Fn($($arg),*) -> R $($bounds)* + 'a> for L
		where
			L: Fn($($arg),*) -> R $($bounds)* + 'a
		{
			fn into_listener(self) -> Arc<dyn Fn($($arg),*) -> R $($bounds)* + 'a> {
				Arc::new(self)
			}
		}
	};
}

signature_impls!();
signature_impls!(A1);
signature_impls!(A1, A2);
signature_impls!(A1, A2, A3);
signature_impls!(A1, A2, A3, A4);
signature_impls!(A1, A2, A3, A4, A5);
signature_impls!(A1, A2, A3, A4, A5, A6);
