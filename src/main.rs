mod cli;
mod render;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(if err.is_user_error() { 2 } else { 1 });
    }
}
