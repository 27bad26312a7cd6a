fn main() {
    studiogen::app::cli::run();
}
