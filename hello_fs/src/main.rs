//! # Hello Filesystem
//!
//! Lists the hello filesystem's root directory through the native fill ABI,
//! one `readdir` call's worth.

use dir_listing::{collect_entry, CollectingFiller, FillOutcome};
use fill_abi::RawFiller;
use hello_fs::{HelloConfig, HelloFs, ROOT_INO};
use libc::off_t;
use std::env;
use std::process;

#[derive(Debug, Default)]
struct Options {
    config: HelloConfig,
    offset: off_t,
    capacity: Option<usize>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let options = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let fs = HelloFs::new(options.config).unwrap_or_else(|e| {
        eprintln!("Failed to build filesystem: {}", e);
        process::exit(1);
    });

    let mut collector = match options.capacity {
        Some(capacity) => CollectingFiller::bounded(capacity),
        None => CollectingFiller::new(),
    };
    let buffer = collector.as_buffer();
    // SAFETY: `collect_entry` only ever receives `buffer`, which points at
    // `collector` for the whole readdir call.
    let mut filler = unsafe { RawFiller::new(collect_entry) };

    let outcome = fs
        .readdir(ROOT_INO, options.offset, &mut filler, buffer)
        .unwrap_or_else(|e| {
            eprintln!("readdir failed: {} (errno {})", e, e.errno());
            process::exit(1);
        });

    for entry in collector.entries() {
        println!("{}\t{}", entry.offset, entry.name);
    }
    if let FillOutcome::BufferFull { resume_offset, .. } = outcome {
        println!("resume at {}", resume_offset);
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                options.config = HelloConfig::load_from_path(&args[i])
                    .map_err(|e| format!("Failed to load config: {}", e))?;
            }
            "--offset" | "-o" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --offset".to_string());
                }
                options.offset = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid offset value: {}", args[i]))?;
            }
            "--capacity" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --capacity".to_string());
                }
                let capacity = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid capacity value: {}", args[i]))?;
                options.capacity = Some(capacity);
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>      JSON config (file_name, contents, timeouts)");
    eprintln!("  -o, --offset <N>         Resume offset for the listing (default 0)");
    eprintln!("  --capacity <N>           Entries the reply buffer can hold");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --offset 1", program);
    eprintln!("  {} --config hello_fs.json --capacity 2", program);
}
