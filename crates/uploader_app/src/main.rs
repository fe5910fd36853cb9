mod effects;
mod file_select;
mod logging;
mod shell;

fn main() {
    logging::initialize(logging::LogDestination::File);
    if let Err(err) = shell::run() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
