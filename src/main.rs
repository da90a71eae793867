use anyhow::Result;
use rentrack::commands::Cli;
use rentrack::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging is only wired up when the user asked for it; the
    // message macros fall back to plain console output otherwise.
    if is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu()
}
