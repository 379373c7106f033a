//! Kvasar lexer CLI.

use kvasarc::commands::{check_file, lex_file, parse_check_args, parse_lex_args, LexCommandConfig};
use kvasarc::CliError;

fn main() {
    kvasarc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => parse_lex_args(&args[2..]).and_then(|(path, config)| lex_file(path, config)),
        "check" => match parse_check_args(&args[2..]).and_then(check_file) {
            Ok(true) => Ok(()),
            Ok(false) => std::process::exit(1),
            Err(err) => Err(err),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("Kvasar lexer {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            // A bare source path is shorthand for `lex <path>`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("kv"))
            {
                lex_file(command, LexCommandConfig::default())
            } else {
                Err(CliError::UnknownCommand(command.clone()))
            }
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if err.wants_usage() {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Kvasar lexer");
    println!();
    println!("Usage: kvasar <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.kv>        Tokenize and display tokens");
    println!("  check <file.kv>      Report lexical errors (exit 1 if any)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --offsets              Show each token's byte range");
    println!("  --stop-at-first-error  Stop scanning at the first error");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>    Enable logging to stderr (e.g. RUST_LOG=kvasar_lexer=trace)");
    println!();
    println!("Examples:");
    println!("  kvasar lex main.kv");
    println!("  kvasar lex main.kv --offsets");
    println!("  kvasar main.kv                  # Same as `kvasar lex main.kv`");
    println!("  kvasar check main.kv");
}
