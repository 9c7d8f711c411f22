fn main() {
    if let Err(e) = immutagen_cli::run() {
        eprintln!("{}", immutagen_cli::error_report(&e));
        std::process::exit(1);
    }
}
