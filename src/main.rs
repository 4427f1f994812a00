//! Binary entrypoint for the `atrium` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env is fine; tool paths may come from atrium.yaml instead.
    let _ = dotenvy::dotenv();
    match atrium::run(std::env::args()) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
