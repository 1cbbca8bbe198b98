use cipherlab::cipher::{Cipher, Direction};
use cipherlab::cli::{resolve_input, run_cipher, show_analysis, show_digests, CipherOptions};
use cipherlab::digest::DigestAlgorithm;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CIPHERLAB_VERSION");
const PROFILE: &str = env!("CIPHERLAB_PROFILE");
const GIT_HASH: &str = env!("CIPHERLAB_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "cipherlab")]
#[command(author, about = "Classical ciphers, password entropy and digests for teaching", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode or decode text with a classical cipher
    #[command(alias = "c")]
    Cipher {
        /// Cipher to apply
        #[arg(long, default_value = "caesar", value_parser = parse_cipher)]
        cipher: Cipher,

        /// Caesar shift (1-25)
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        shift: i64,

        /// Decode instead of encode
        #[arg(short, long)]
        decode: bool,

        /// Emit JSON
        #[arg(long)]
        json: bool,

        /// Input text (read from stdin when omitted)
        text: Option<String>,
    },

    /// Estimate password entropy and strength
    #[command(alias = "a")]
    Analyze {
        /// Emit JSON
        #[arg(long)]
        json: bool,

        /// Password (read from stdin when omitted)
        password: Option<String>,
    },

    /// Compute digests of text
    #[command(alias = "d")]
    Digest {
        /// Only compute this algorithm
        #[arg(long, value_parser = parse_digest)]
        algorithm: Option<DigestAlgorithm>,

        /// Emit JSON
        #[arg(long)]
        json: bool,

        /// Input text (read from stdin when omitted)
        text: Option<String>,
    },
}

fn parse_cipher(s: &str) -> Result<Cipher, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_digest(s: &str) -> Result<DigestAlgorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_target(true)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.version {
        println!("cipherlab {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let stdin = std::io::stdin();
    let result = match command {
        Commands::Cipher {
            cipher,
            shift,
            decode,
            json,
            text,
        } => {
            let options = CipherOptions {
                cipher,
                shift,
                direction: if decode { Direction::Decode } else { Direction::Encode },
                json,
            };
            resolve_input(text, stdin.lock()).and_then(|text| run_cipher(&text, &options))
        }

        Commands::Analyze { json, password } => {
            resolve_input(password, stdin.lock()).and_then(|password| show_analysis(&password, json))
        }

        Commands::Digest {
            algorithm,
            json,
            text,
        } => resolve_input(text, stdin.lock()).and_then(|text| show_digests(&text, algorithm, json)),
    };

    match result {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
