//! slotcodec CLI
//!
//! Inspects raw slot payloads with the built-in codecs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use slotcodec::codec::{decode_value, encode_value, AdapterContext, CodecKind, ComplexValue};
use slotcodec::inspect::{read_payload, write_payload};
use tracing_subscriber::{fmt, EnvFilter};

/// slotcodec CLI
#[derive(Parser, Debug)]
#[command(name = "slotcodec-cli")]
#[command(about = "Inspect persistent slot payloads")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the built-in codecs
    Codecs,

    /// Decode a payload file and print the value
    Decode {
        /// Codec to decode with (see `codecs` for names)
        #[arg(short, long)]
        codec: CodecKind,

        /// Payload file (raw bytes, or whitespace-separated words for locations)
        file: PathBuf,
    },

    /// Write a string list payload file
    EncodeStrings {
        /// Output file
        file: PathBuf,

        /// Strings to store, in order
        values: Vec<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,slotcodec=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let ctx = AdapterContext::detached();

    let result = match args.command {
        Commands::Codecs => {
            for kind in CodecKind::ALL {
                println!("{:<16} {:<6} {}", kind, kind.primitive_type(), kind.complex_type());
            }
            Ok(())
        }
        Commands::Decode { codec, file } => {
            read_payload(&file, codec.primitive_type())
                .and_then(|payload| decode_value(codec, &payload, &ctx))
                .map(|value| println!("{:#?}", value))
        }
        Commands::EncodeStrings { file, values } => {
            let payload = encode_value(&ComplexValue::Strings(values), &ctx);
            write_payload(&file, &payload)
                .map(|()| tracing::info!(path = %file.display(), bytes = payload.size(), "Wrote payload"))
        }
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
