//! Logger setup for the binary. Library code only uses the `log` macros.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level for a `-v` count: 0 warn, 1 info, 2 debug, 3+ trace
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a stderr logger. `RUST_LOG` wins when it is set.
pub fn init(verbose: u8) {
    let default_level = level_for_verbosity(verbose).to_string().to_lowercase();

    Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}
