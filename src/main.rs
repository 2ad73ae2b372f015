fn main() {
    utilcfg::app::cli::run();
}
