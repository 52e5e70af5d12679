fn main() {
    flip7_cli::logging::init_logging();
    let code = flip7_cli::run(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
