use std::io;
use std::process::exit;

pub const HELP: &str = "svg2expressions

USAGE:
    svg2expressions [OPTIONS] <INPUT>

OPTIONS:
    -h, --help\t\tPrint this message

Prints one LaTeX expression per line for every ellipse and path
segment found in the SVG file INPUT.";

fn main() {
    // Logging
    env_logger::init();

    fn inner(input: &str) -> Result<(), svg2expressions::Error> {
        let root = svg2expressions::parse_file(input)?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        svg2expressions::write_expressions(&root, &mut out)
    }

    // Argument parsing
    let mut input = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", HELP);
                return;
            }
            _ => {
                input = Some(arg);
            }
        }
    }

    let input = if let Some(input) = input {
        input
    } else {
        eprintln!("{}", HELP);
        exit(1);
    };

    if let Err(e) = inner(&input) {
        eprintln!("Error: {}", e);
        exit(2);
    }
}
