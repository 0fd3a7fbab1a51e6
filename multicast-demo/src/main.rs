use std::{cell::Cell, rc::Rc};

use argh::FromArgs;
use multicast::prelude::*;

/// Walk a dispatcher through registering and removing listeners
#[derive(FromArgs, Debug)]
struct Args {
	/// logger specification, defaults to "info"
	#[argh(option, default = "\"info\".into()")]
	log: String,

	/// argument of the first invocation, incremented for every following one
	#[argh(option, default = "1")]
	start: i32
}

type Event = Multifunction<dyn Fn(i32)>;

const _: fn(ArgumentType<dyn Fn(i32)>) -> i32 = std::convert::identity::<i32>;

fn f(n: i32) {
	println!("f({n})");
}

/// Function object listener
#[derive(Default)]
struct G {
	calls: Cell<u32>
}

impl G {
	fn call(&self, n: i32) {
		self.calls.set(self.calls.get() + 1);
		println!("g::call({n}) #{}", self.calls.get());
	}
}

fn h(n: f64) {
	println!("h({n})");
}

fn error_chain<E: std::error::Error>(error: E) -> String {
	let mut string = error.to_string();

	let mut current = error.source();
	while let Some(cause) = current {
		string.push_str(&format!("\nCaused by:\n\t{cause}"));
		current = cause.source();
	}

	string
}

fn run(start: i32) -> multicast::Result<()> {
	let mut event = Event::new();
	let mut n = start;
	let mut invoke = |event: &Event| {
		event.invoke((n,));
		n += 1;
	};

	println!("Adding f, g, h");
	let f_tok = event.register(f);
	let g_tok = {
		let g = G::default();
		event.register(move |n: i32| g.call(n))
	};
	let h_tok = event.register(|n: i32| h(n.into()));
	invoke(&event);

	println!("\nRemoving g");
	event.unregister(g_tok)?;
	invoke(&event);

	println!("\nRemoving h");
	event.unregister(h_tok)?;
	invoke(&event);

	println!("\nRemoving g (again!)");
	if !event.unregister(g_tok)? {
		log::info!("Handle {g_tok} was already removed");
	}
	invoke(&event);

	println!("\nRemoving f");
	event.unregister(f_tok)?;
	invoke(&event);

	println!("\nOnce more, with closures");
	let prefix = String::from("[move]");
	let shared = Rc::new(Cell::new(0));

	event.register(|n: i32| println!("[]({n})"));
	event.register(move |n: i32| println!("{prefix}({n})"));
	{
		let shared = Rc::clone(&shared);
		event.register(move |n: i32| {
			shared.set(n);
			println!("[shared]({n})");
		});
	}
	invoke(&event);

	log::debug!(
		"{} listeners live, {} handles issued, shared cell holds {}",
		event.len(),
		event.registrations(),
		shared.get()
	);

	Ok(())
}

fn main() {
	let args: Args = argh::from_env();

	let _logger = match flexi_logger::Logger::try_with_str(&args.log)
		.and_then(|logger| logger.log_to_stderr().start())
	{
		Ok(logger) => logger,
		Err(error) => {
			eprintln!("{}", error_chain(error));
			std::process::exit(2);
		}
	};

	if let Err(error) = run(args.start) {
		log::error!("{}", error_chain(error));
		std::process::exit(1);
	}
}
