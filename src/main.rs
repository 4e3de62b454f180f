use ip_filter::run;
use std::io::{self, BufWriter};
use std::process;

fn main() {
    env_logger::init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(stdin.lock(), BufWriter::new(stdout.lock())) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
