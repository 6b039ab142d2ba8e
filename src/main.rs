//! Keccak-256 / Ethereum address CLI
//!
//! Usage:
//!   eth_keccak hash "Hello, Ethereum!"     # Hash a text message
//!   eth_keccak hash-hex 0x1234567890abcdef # Hash raw bytes
//!   eth_keccak address 04<128 hex digits>  # Derive an address
//!   eth_keccak sign -s <secret> "gm"      # Sign a message
//!   eth_keccak demo                        # Print sample output

use std::fs::File;
use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use eth_keccak::config::Command;
use eth_keccak::{encoding, Address, BatchHasher, Config, Keccak256, Keypair};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    let config = Config::parse();

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    init_logging(&config.log_level);

    if let Err(e) = run(&config) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &Config) -> CliResult {
    match &config.command {
        Command::Hash { message } => {
            println!("{}", eth_keccak::hash_message(message));
        }
        Command::HashHex { data } => {
            println!("{}", eth_keccak::keccak256_hex(data)?);
        }
        Command::HashFile { path } => {
            let mut file = File::open(path)?;
            let mut hasher = Keccak256::new();
            let read = io::copy(&mut file, &mut hasher)?;
            tracing::debug!(path = %path.display(), bytes = read, "hashed file");
            println!("{}", encoding::encode_prefixed(hasher.finalize()));
        }
        Command::Address { public_key } => {
            println!("{}", eth_keccak::public_key_to_address(public_key)?);
        }
        Command::Checksum { address } => {
            let address: Address = address.parse()?;
            println!("{}", address.to_checksum());
        }
        Command::Keygen { secret } => {
            let keypair = match secret {
                Some(secret) => Keypair::from_secret_key_hex(secret)?,
                None => Keypair::generate(),
            };
            print_keypair(&keypair);
        }
        Command::Sign { secret, message } => {
            let keypair = Keypair::from_secret_key_hex(secret)?;
            let signature = eth_keccak::sign_message(&keypair, message);
            println!("Signer:    {}", keypair.address());
            println!("Signature: {}", encoding::encode_prefixed(signature));
        }
        Command::Verify {
            address,
            message,
            signature,
        } => {
            let address: Address = address.parse()?;
            let signature = encoding::decode(signature)?;
            println!("{}", eth_keccak::verify(&address, message, &signature)?);
        }
        Command::Recover { message, signature } => {
            let signature = encoding::decode(signature)?;
            println!("{}", eth_keccak::recover_address(message, &signature)?);
        }
        Command::Batch { inputs } => {
            let decoded = inputs
                .iter()
                .map(|input| encoding::decode(input))
                .collect::<Result<Vec<_>, _>>()?;

            let hasher = BatchHasher::new(config.thread_count())?;
            for (input, digest) in inputs.iter().zip(hasher.digest_all(&decoded)) {
                println!("{}  {}", encoding::encode_prefixed(digest), input);
            }
        }
        Command::Demo => run_demo()?,
    }

    Ok(())
}

fn print_keypair(keypair: &Keypair) {
    println!("Address:     {}", keypair.address());
    println!("Public Key:  0x{}", keypair.public_key_hex());
    println!("Private Key: 0x{}", keypair.private_key_hex());
}

fn run_demo() -> CliResult {
    println!("Keccak-256 Cryptographic Utilities");
    println!("==================================");
    println!();

    println!("1. Hashing message");
    let message = "Hello, Ethereum!";
    println!("   Message: {}", message);
    println!("   Hash:    {}", eth_keccak::hash_message(message));
    println!();

    println!("2. Hashing hex data");
    let hex_data = "0x1234567890abcdef";
    println!("   Data:    {}", hex_data);
    println!("   Hash:    {}", eth_keccak::keccak256_hex(hex_data)?);
    println!();

    println!("3. Deriving address from public key");
    let keypair = Keypair::from_secret_key_hex(&format!("{:0>64}", "1"))?;
    let public_key = keypair.public_key_hex();
    println!("   Public Key: {}...", &public_key[..20]);
    println!(
        "   Address:    {}",
        eth_keccak::public_key_to_address(&public_key)?
    );
    println!("   Checksum:   {}", keypair.address());
    println!();

    println!("4. Signing and recovering");
    let signature = eth_keccak::sign_message(&keypair, message);
    println!("   Signature: {}", encoding::encode_prefixed(signature));
    println!(
        "   Signer:    {}",
        eth_keccak::recover_address(message, &signature)?
    );
    println!();

    println!("All operations complete.");
    Ok(())
}
