use std::io;

fn main() {
    sixmax_cli::logging::init_logging();
    let code = sixmax_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
