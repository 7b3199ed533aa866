fn main() -> Result<(), Box<dyn std::error::Error>> {
    sigdoc_cli::run()
}
