use std::{
	io::Write,
	time::{Duration, Instant},
};

const LABEL_WIDTH: usize = 15;
const REDRAW: Duration = Duration::from_millis(100);
const PARTIAL: &[char] = &[' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// Progress bar for a stage with a known number of steps, redrawn in place.
pub struct Progress<'a> {
	name: &'a str,
	start: Instant,
	drawn: Instant,
	current: usize,
	goal: usize,
}

impl<'a> Progress<'a> {
	pub fn new(name: &'a str, goal: usize) -> Self {
		let start = Instant::now();
		let progress = Self { name, start, drawn: start, current: 0, goal };
		progress.draw();
		progress
	}

	pub fn step(&mut self) {
		self.current += 1;
		if self.drawn.elapsed() > REDRAW {
			self.drawn = Instant::now();
			self.draw();
		}
	}

	fn draw(&self) {
		let columns = termsize::get().map_or(80, |size| size.cols as usize);
		let width = if columns > 30 { columns - 30 } else { columns };
		print!(
			"{} █{}█\r",
			header(self.name, self.start),
			bar(self.current, self.goal, width)
		);
		std::io::stdout().flush().ok();
	}

	/// Elapsed seconds.
	pub fn finish(mut self) -> f32 {
		self.current = self.goal;
		self.draw();
		println!();
		self.start.elapsed().as_secs_f32()
	}
}

/// Stage without measurable steps, only the elapsed time is shown.
pub struct Stage<'a> {
	name: &'a str,
	start: Instant,
}

impl<'a> Stage<'a> {
	pub fn new(name: &'a str) -> Self {
		let start = Instant::now();
		print!("{} ...\r", header(name, start));
		std::io::stdout().flush().ok();
		Self { name, start }
	}

	/// Elapsed seconds.
	pub fn finish(self) -> f32 {
		println!("{} ...", header(self.name, self.start));
		self.start.elapsed().as_secs_f32()
	}
}

fn header(name: &str, start: Instant) -> String {
	format!(
		"{}:{: <pad$} [{}]",
		name,
		"",
		clock(start.elapsed().as_secs()),
		pad = LABEL_WIDTH.saturating_sub(name.len())
	)
}

/// `hh:mm:ss`
fn clock(seconds: u64) -> String {
	format!("{:0>2}:{:0>2}:{:0>2}", seconds / 3600, seconds / 60 % 60, seconds % 60)
}

/// Bar of `width` characters, filled in eighths.
fn bar(current: usize, goal: usize, width: usize) -> String {
	let eighths = match goal {
		0 => width * PARTIAL.len(),
		goal => current.min(goal) * width * PARTIAL.len() / goal,
	};
	let full = eighths / PARTIAL.len();
	if full >= width {
		return "█".repeat(width);
	}
	let mut bar = "█".repeat(full);
	bar.push(PARTIAL[eighths % PARTIAL.len()]);
	bar.push_str(&" ".repeat(width - full - 1));
	bar
}
