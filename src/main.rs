fn main() {
    // Run the CLI
    std::process::exit(wikitoc::cli::run());
}
