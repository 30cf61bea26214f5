fn main() -> Result<(), Box<dyn std::error::Error>> {
    pdfchat::cli::main()
}
