//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Keccak-256 and Ethereum address utilities
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,

    /// Number of worker threads for batch hashing (default: number of CPU cores)
    #[arg(short = 'w', long, global = true)]
    pub threads: Option<usize>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Hash a UTF-8 text message
    Hash {
        message: String,
    },

    /// Hash hex-encoded bytes (0x optional)
    HashHex {
        data: String,
    },

    /// Hash the contents of a file
    HashFile {
        path: PathBuf,
    },

    /// Derive the address of an uncompressed public key (0x and 04 optional)
    Address {
        public_key: String,
    },

    /// Print the EIP-55 checksummed form of an address
    Checksum {
        address: String,
    },

    /// Generate a keypair, or derive one from --secret
    Keygen {
        /// 32-byte secret key in hex
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Sign the Keccak-256 digest of a message
    Sign {
        /// 32-byte secret key in hex
        #[arg(short, long)]
        secret: String,
        message: String,
    },

    /// Check that a signature over a message came from an address
    Verify {
        address: String,
        message: String,
        /// 65-byte r || s || v signature in hex
        signature: String,
    },

    /// Recover the signer address of a message
    Recover {
        message: String,
        /// 65-byte r || s || v signature in hex
        signature: String,
    },

    /// Hash several hex inputs in parallel
    Batch {
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Print sample hashes and an address derivation
    Demo,
}

impl Config {
    /// Returns the number of worker threads, defaulting to CPU count
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidThreads);
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Thread count must be at least 1")]
    InvalidThreads,

    #[error("Invalid log level: {0:?}")]
    InvalidLogLevel(String),
}
