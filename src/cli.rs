//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Recover message JSON from Discohook links
#[derive(Parser, Debug)]
#[command(name = "discoaid")]
#[command(version, about = "Decode Discohook data and share links into per-message JSON", long_about = None)]
pub struct Args {
    /// Discohook link: https://discohook.org/?data=... or
    /// https://share.discohook.app/go/... (reads stdin when omitted)
    pub link: Option<String>,

    /// Skip field trimming and print messages exactly as stored in the link
    #[arg(long)]
    pub raw: bool,

    /// Print one compact JSON document per line instead of pretty blocks
    #[arg(long)]
    pub jsonl: bool,

    /// Never touch the network; share links become an error
    #[arg(long)]
    pub no_resolve: bool,

    /// HTTP timeout in seconds for share-link resolution
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link_positional() {
        let args = Args::try_parse_from(["discoaid", "https://discohook.org/?data=abc"]).unwrap();
        assert_eq!(args.link.as_deref(), Some("https://discohook.org/?data=abc"));
        assert!(!args.raw);
        assert!(!args.jsonl);
        assert!(!args.no_resolve);
        assert!(args.timeout.is_none());
    }

    #[test]
    fn test_parse_no_link_reads_stdin_later() {
        let args = Args::try_parse_from(["discoaid"]).unwrap();
        assert!(args.link.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "discoaid",
            "--raw",
            "--jsonl",
            "--no-resolve",
            "--timeout",
            "3",
            "https://discohook.org/?data=abc",
        ])
        .unwrap();
        assert!(args.raw);
        assert!(args.jsonl);
        assert!(args.no_resolve);
        assert_eq!(args.timeout, Some(3));
    }

    #[test]
    fn test_parse_config_path() {
        let args =
            Args::try_parse_from(["discoaid", "-c", "/tmp/discoaid.toml", "x"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/discoaid.toml")));
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        assert!(Args::try_parse_from(["discoaid", "--frobnicate"]).is_err());
    }
}
