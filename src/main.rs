fn main() {
    wsdgen::app::cli::run();
}
