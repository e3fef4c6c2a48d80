use std::io::Write;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use sphere_viz::Command;

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if std::env::args().len() > 1 {
		cli()
	} else {
		interactive()
	};
}

fn interactive() {
	let mut c = InteractiveCommand::command();
	if let Err(err) = c.print_help() {
		log::error!("{}", err);
		return;
	}

	loop {
		print!("{}", "\n=> ".bold().green());
		if std::io::stdout().flush().is_err() {
			break;
		}

		let mut line = String::from("sphere-viz ");
		match std::io::stdin().read_line(&mut line) {
			Ok(0) | Err(_) => break,
			Ok(_) => {},
		}
		match InteractiveCommand::try_parse_from(line.split_whitespace()) {
			Ok(InteractiveCommand::Command(command)) => {
				if let Err(err) = command.run() {
					println!("Error: {}", err);
				}
			},
			Ok(InteractiveCommand::Quit) => break,
			Err(err) => {
				if let Err(err) = err.print() {
					log::error!("{}", err);
				}
			},
		}
	}
}

fn cli() {
	if let Err(err) = Command::parse().run() {
		println!("Error: {}", err);
		std::process::exit(1);
	}
}

#[derive(clap::Parser)]
#[command(name = "sphere-viz", arg_required_else_help = false)]
enum InteractiveCommand {
	#[command(flatten)]
	Command(Command),
	/// Quit application
	Quit,
}
