//! `plgen` CLI
//!
//! Generates PL/Python routine definitions and shared-namespace installers
//! from Python source files.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use plgenc::commands::{flush_file, install_sql, parse_options, routine_sql, Options};
use plgenc::{init_tracing, Error};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let (positional, options) = match parse_options(&args[2..]) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    };

    let result = match command.as_str() {
        "routine" => {
            if positional.len() != 2 {
                eprintln!("Usage: plgen routine <file.py> <name> [--arg-types=t1,t2] [--returns=t]");
                std::process::exit(1);
            }
            routine_sql(Path::new(&positional[0]), &positional[1], &options)
                .and_then(|sql| write_output(&sql, &options))
        }
        "install" => {
            if positional.len() < 2 {
                eprintln!("Usage: plgen install <file.py> <name>...");
                std::process::exit(1);
            }
            install_sql(Path::new(&positional[0]), &positional[1..], &options)
                .and_then(|sql| write_output(&sql, &options))
        }
        "flush" => {
            if positional.len() != 1 {
                eprintln!("Usage: plgen flush <file.py> [--share=a,b] [--defer=c,d] [-o <out.sql>]");
                std::process::exit(1);
            }
            run_flush(Path::new(&positional[0]), &options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("plgen {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_flush(path: &Path, options: &Options) -> Result<(), Error> {
    let report = match &options.output {
        Some(out) => {
            let file = File::create(out).map_err(|source| Error::Output {
                path: out.clone(),
                source,
            })?;
            flush_file(path, options, BufWriter::new(file))?
        }
        None => flush_file(path, options, io::stdout().lock())?,
    };
    if options.output.is_some() {
        println!(
            "installed {} shared object(s), created {} routine(s)",
            report.installed.len(),
            report.routines.len()
        );
    }
    Ok(())
}

fn write_output(sql: &str, options: &Options) -> Result<(), Error> {
    match &options.output {
        Some(out) => std::fs::write(out, sql).map_err(|source| Error::Output {
            path: out.clone(),
            source,
        }),
        None => {
            print!("{sql}");
            Ok(())
        }
    }
}

fn print_usage() {
    println!("plgen: PL/Python code generation from Python source");
    println!();
    println!("Usage: plgen <command> [options]");
    println!();
    println!("Commands:");
    println!("  routine <file.py> <name>     Print the routine definition for one function");
    println!("  install <file.py> <name>...  Print the shared-namespace installer");
    println!("  flush <file.py>              Print installer and routines as one script");
    println!("  help                         Show this help message");
    println!("  version                      Show version information");
    println!();
    println!("Routine options:");
    println!("  --arg-types=<t1,t2>          Parameter types instead of annotations");
    println!("  --returns=<type>             Return type instead of the annotation");
    println!("                               (empty for no RETURNS clause)");
    println!();
    println!("Flush options:");
    println!("  --share=<a,b>                Objects for the shared namespace");
    println!("  --defer=<c,d>                Functions to create as routines");
    println!("                               (neither: share every top-level object)");
    println!();
    println!("Common options:");
    println!("  -o <path>                    Write SQL to a file");
    println!("  --language=<lang>            Routine language (default: plpython3u)");
    println!("  --namespace=<name>           Shared dictionary (default: GD)");
    println!("  --install-routine=<name>     Installer routine (default: _add_to_gd)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=plgenc=debug) for tracing output.");
}
