fn main() {
    env_logger::init();
    if let Err(err) = pane_nav::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
