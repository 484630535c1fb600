use log::LevelFilter;

/// Installs the process-wide logger. Fails if one is already installed.
#[cfg(not(target_family = "wasm"))]
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
	use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
	let config = ConfigBuilder::new()
		.set_target_level(LevelFilter::Error)
		.set_time_level(LevelFilter::Off)
		.build();
	TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

#[cfg(target_family = "wasm")]
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
	log::set_logger(&ConsoleLogger)?;
	log::set_max_level(level);
	Ok(())
}

/// Forwards records to the browser's devtools console.
#[cfg(target_family = "wasm")]
struct ConsoleLogger;

#[cfg(target_family = "wasm")]
impl log::Log for ConsoleLogger {
	fn enabled(&self, metadata: &log::Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &log::Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let line = wasm_bindgen::JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
		match record.level() {
			log::Level::Error => web_sys::console::error_1(&line),
			log::Level::Warn => web_sys::console::warn_1(&line),
			log::Level::Info => web_sys::console::info_1(&line),
			log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
		}
	}

	fn flush(&self) {}
}

#[cfg(all(test, not(target_family = "wasm")))]
mod tests {
	use super::*;

	#[test]
	fn second_init_fails() {
		// Another test may have installed the logger first.
		let _ = init(LevelFilter::Debug);
		assert!(init(LevelFilter::Debug).is_err());
	}
}
