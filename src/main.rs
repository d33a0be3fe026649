//! discoaid binary entry point.
//!
//! Validates a Discohook link, resolves share links to their data link,
//! decodes the embedded payload, and prints one JSON document per message.

use std::io::Read;
use std::time::Duration;

use clap::Parser;

use discoaid::cli::Args;
use discoaid::config::Config;
use discoaid::decode::decode_payload;
use discoaid::link::{self, DiscohookLink};
use discoaid::render::{render_messages, Layout};
use discoaid::resolve::Resolver;

fn main() {
    // Load .env before anything else; a missing file is fine
    let _ = dotenv::dotenv();

    let args = Args::parse();

    // Load config file
    // If --config is specified, require the file to exist
    // Otherwise, fall back to defaults if default config not found
    let cfg = if let Some(ref path) = args.config {
        match Config::load_from_explicit(path.clone()) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::load() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Config::default()
            }
        }
    };

    if let Err(e) = run(&args, &cfg) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, cfg: &Config) -> Result<(), String> {
    let input = match &args.link {
        Some(link) => link.clone(),
        None => read_stdin()?,
    };

    let data_link = match link::classify(&input) {
        Some(DiscohookLink::Data { .. }) => input.trim().to_string(),
        Some(DiscohookLink::Share { .. }) => {
            if args.no_resolve {
                return Err(
                    "Share links need network resolution. Rerun without --no-resolve, \
                     or visit the link and paste the full data link it redirects to."
                        .to_string(),
                );
            }
            resolve_share(&input, args, cfg)?
        }
        None => {
            return Err(
                "Not a Discohook link. Expected https://discohook.org/?data=... \
                 or https://share.discohook.app/go/... (make sure the entire link was copied)."
                    .to_string(),
            );
        }
    };

    let payload = link::extract_payload(&data_link).map_err(|e| e.to_string())?;
    let state =
        decode_payload(&payload).map_err(|e| format!("Failed to decode link data: {}", e))?;

    let layout = if args.jsonl || !cfg.output.pretty {
        Layout::Compact
    } else {
        Layout::Pretty
    };
    let docs = render_messages(state, args.raw, layout)
        .map_err(|e| format!("Failed to serialize message: {}", e))?;

    if docs.is_empty() {
        eprintln!("Link decoded successfully but contains no messages.");
        return Ok(());
    }

    for (i, doc) in docs.iter().enumerate() {
        if i > 0 && !args.jsonl {
            println!();
        }
        println!("{}", doc);
    }

    Ok(())
}

/// Resolve a share link to its data link on a fresh tokio runtime.
fn resolve_share(share_link: &str, args: &Args, cfg: &Config) -> Result<String, String> {
    let timeout = Duration::from_secs(args.timeout.unwrap_or(cfg.http.timeout_secs));
    let connect_timeout = Duration::from_secs(cfg.http.connect_timeout_secs);

    let resolver = Resolver::with_timeouts(timeout, connect_timeout)
        .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    rt.block_on(async { resolver.resolve(share_link).await })
        .map_err(|e| format!("Failed to resolve share link: {}", e))
}

fn read_stdin() -> Result<String, String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("Failed to read from stdin: {}", e))?;
    if input.trim().is_empty() {
        return Err("No link provided (pass it as an argument or on stdin).".to_string());
    }
    Ok(input)
}
