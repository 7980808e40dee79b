//! Binary entry point. All terminal concerns live in `cli/`; this file only
//! runs it and turns an error into a message and a failing exit status.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
