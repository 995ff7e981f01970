use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
    init_tracing();

    let args: Vec<String> = env::args().collect();
    ExitCode::from(cli::run(args))
}

/// Diagnostics go to stderr so stdout stays password-only.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("PASSGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
