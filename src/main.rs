fn main() {
    if let Err(err) = gemchat::cli::main() {
        eprintln!("❌ Error: {err}");
        std::process::exit(1);
    }
}
