//! Command-line interface for `wordaes`.

#![forbid(unsafe_code)]

mod logger;

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use wordaes_core::{apply, expand_key, Cipher, Key, KeySize, State};
use wordaes_io::{
    format_round_key, format_schedule, format_state, format_words, load_block, load_key,
};

/// FIPS-197 Appendix C plaintext shared by all three demo keys.
const DEMO_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

/// FIPS-197 Appendix C keys with their published ciphertexts.
const DEMO_VECTORS: [(&str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

/// Word-oriented AES CLI.
#[derive(Parser)]
#[command(
    name = "wordaes",
    version,
    author,
    about = "AES-128/192/256 single-block cipher with state inspection"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv per-round trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the FIPS-197 Appendix C keys through encryption and decryption.
    Demo,
    /// Encrypt one block.
    Enc {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one block.
    Dec {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the expanded round keys for a key.
    Expand {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Print the derived decryption schedule instead.
        #[arg(long, default_value_t = false)]
        inverse: bool,
    },
    /// Verify encrypt/decrypt round trips on random keys and blocks.
    Check {
        /// Number of random samples per key size.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Demo => cmd_demo(&mut out),
        Commands::Enc { key_hex, block_hex } => cmd_enc(&mut out, &key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&mut out, &key_hex, &block_hex),
        Commands::Expand { key_hex, inverse } => cmd_expand(&mut out, &key_hex, inverse),
        Commands::Check { samples, seed } => cmd_check(&mut out, samples, seed),
    }
}

fn cmd_demo(out: &mut impl Write) -> Result<()> {
    let plaintext = load_block(DEMO_PLAINTEXT).context("load demo plaintext")?;
    for (key_hex, expected_hex) in DEMO_VECTORS {
        let key = load_key(key_hex).context("load demo key")?;
        let size = key.size();
        writeln!(out, "Running AES {}\n", size.bits())?;
        writeln!(out, "Key: {}\n", format_words(key.words()))?;

        let mut state = plaintext;
        print_state(out, "Input State", &state)?;

        let schedule = expand_key(&key);
        apply(&mut state, &schedule);
        print_state(out, "Ciphered State", &state)?;
        if format_words(state.words()) != expected_hex {
            bail!("AES-{} ciphertext does not match FIPS-197", size.bits());
        }

        let inverse = schedule.inverse();
        apply(&mut state, &inverse);
        print_state(out, "Deciphered State", &state)?;
        if state != plaintext {
            bail!("AES-{} round trip failed", size.bits());
        }
    }
    Ok(())
}

fn cmd_enc(out: &mut impl Write, key_hex: &str, block_hex: &str) -> Result<()> {
    let key = load_key(key_hex).context("parse key hex")?;
    let mut state = load_block(block_hex).context("parse block hex")?;
    apply(&mut state, &expand_key(&key));
    writeln!(out, "{}", format_words(state.words()))?;
    Ok(())
}

fn cmd_dec(out: &mut impl Write, key_hex: &str, block_hex: &str) -> Result<()> {
    let key = load_key(key_hex).context("parse key hex")?;
    let mut state = load_block(block_hex).context("parse block hex")?;
    apply(&mut state, &expand_key(&key).inverse());
    writeln!(out, "{}", format_words(state.words()))?;
    Ok(())
}

fn cmd_expand(out: &mut impl Write, key_hex: &str, inverse: bool) -> Result<()> {
    let key = load_key(key_hex).context("parse key hex")?;
    let forward = expand_key(&key);
    if inverse {
        let schedule = forward.inverse();
        write!(out, "{}", format_schedule(schedule.round_keys()))?;
        write!(out, "\n{}", format_round_key(schedule.round_keys(), 0))?;
    } else {
        write!(out, "{}", format_schedule(forward.round_keys()))?;
        write!(out, "\n{}", format_round_key(forward.round_keys(), 0))?;
    }
    Ok(())
}

fn cmd_check(out: &mut impl Write, samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for size in KeySize::ALL {
        for _ in 0..samples {
            let mut key_bytes = vec![0u8; size.nk() * 4];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Key::from_bytes(&key_bytes).context("build random key")?;
            let cipher = Cipher::new(&key);

            let mut data = block;
            cipher.encrypt_in_place(&mut data);
            cipher.decrypt_in_place(&mut data);
            if data != block {
                bail!(
                    "round trip mismatch for key {} block {}",
                    hex::encode(&key_bytes),
                    hex::encode(block)
                );
            }
        }
        debug!("AES-{}: {} samples ok", size.bits(), samples);
    }
    info!("checked {} samples", samples * KeySize::ALL.len());
    writeln!(out, "ok: {} round trips per key size", samples)?;
    Ok(())
}

fn print_state(out: &mut impl Write, label: &str, state: &State) -> Result<()> {
    writeln!(out, "{label}:")?;
    writeln!(out, "Output: {}", format_words(state.words()))?;
    writeln!(out, "{}", format_state(state))?;
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}
