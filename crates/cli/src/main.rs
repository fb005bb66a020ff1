fn main() {
    if let Err(e) = tagdex_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
