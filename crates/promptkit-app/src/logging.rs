//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` is honored; `directive` is layered on top of it.
pub fn init(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    match directive.parse::<Directive>() {
        Ok(d) => filter = filter.add_directive(d),
        Err(e) => eprintln!("ignoring invalid log directive {directive:?}: {e}"),
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
