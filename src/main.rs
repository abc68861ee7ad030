use std::path::Path;

use clap::error::ErrorKind;
use clap::{Arg, Command};
use owo_colors::OwoColorize;

use limn::formatting::Canonical;
use limn::language::Keywords;
use limn::lexing::Scanner;
use limn::rendering::Theme;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let result = Command::new("limn")
        .version(VERSION)
        .about("Render source code as syntax-highlighted HTML.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("style")
                .long("style")
                .default_value("default")
                .help("Formatting style preset to apply before highlighting."),
        )
        .arg(
            Arg::new("filename")
                .required(true)
                .help("The file containing the source code you want rendered."),
        )
        .try_get_matches();

    let matches = match result {
        Ok(matches) => matches,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{}", error);
                std::process::exit(0);
            }
            _ => {
                eprint!("{}", error);
                std::process::exit(1);
            }
        },
    };

    let Some(filename) = matches.get_one::<String>("filename") else {
        eprintln!("usage: limn <filename>");
        std::process::exit(1);
    };
    let Some(style) = matches.get_one::<String>("style") else {
        eprintln!("usage: limn [--style <name>] <filename>");
        std::process::exit(1);
    };

    let filename = Path::new(filename);
    let content = match limn::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!(
                "{}: {}: {}",
                "error".bright_red(),
                filename.display(),
                error
            );
            std::process::exit(1);
        }
    };

    let keywords = Keywords::new();
    let theme = Theme::default();

    match limn::highlight(&content, style, &Canonical, &Scanner, &keywords, &theme) {
        Ok(rendered) => {
            println!("{}", rendered.formatted);
            print!("{}", rendered.html);
        }
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}
