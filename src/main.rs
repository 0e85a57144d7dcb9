fn main() {
    env_logger::init();
    func_ci::app::cli::run();
}
