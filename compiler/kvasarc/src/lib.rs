//! Kvasar lexer driver.
//!
//! Library half of the `kvasar` binary. Each command lives in
//! [`commands`]; the binary only parses the command word and reports
//! [`CliError`]s.
//!
//! ```text
//! file.kv ──► read_file ──► SourceBuffer ──► lex_with ──► LexOutput
//!                                                           │
//!                                            render_tokens ◄┴► render_check
//! ```

use std::sync::Once;

mod cli_error;
pub mod commands;

pub use cli_error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay no logging
/// cost. Logs go to stderr to keep token dumps on stdout clean. Safe to call
/// more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
