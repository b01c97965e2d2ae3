use std::error::Error;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use colored::Colorize;
use indoc::indoc;
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;

use bc_script::bcscript::{parse_script, MockCrypto, Registry, Validator, Verdict};

// P2PKH demo
const DEMO_UNLOCKING: &str = "SIG_OK PUBKEY_ABC";
const DEMO_LOCKING: &str = "OP_DUP OP_HASH160 PUBKEYHASH_ABC OP_EQUALVERIFY OP_CHECKSIG";

const AFTER_HELP: &str = indoc! {"
    Scripts are whitespace separated tokens. Tokens starting with OP_ are opcodes
    (OP_0..OP_16, OP_FALSE, OP_DUP, OP_DROP, OP_EQUAL, OP_EQUALVERIFY, OP_HASH160,
    OP_CHECKSIG), anything else is pushed as data.

    Log level can also be set through RUST_LOG.
"};

#[derive(Parser, Debug)]
#[command(name = "bc-script", version)]
#[command(about = "Runs an unlocking and a locking script and reports whether they validate")]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Print the stack after every executed element
    #[arg(long)]
    trace: bool,

    /// Print the verdict as JSON
    #[arg(long)]
    json: bool,

    /// List the registered opcodes and exit
    #[arg(long)]
    opcodes: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Unlocking script (scriptSig)
    #[arg(long, default_value = DEMO_UNLOCKING)]
    unlocking: String,

    /// Locking script (scriptPubKey)
    #[arg(long, default_value = DEMO_LOCKING)]
    locking: String,
}

#[derive(Serialize)]
struct Report<'a> {
    unlocking: &'a str,
    locking: &'a str,
    #[serde(flatten)]
    verdict: Verdict,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    SimpleLogger::new().with_level(log_level(cli.verbose)).env().init()?;

    if cli.opcodes {
        let registry = Registry::with_builtins(Arc::new(MockCrypto));
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let unlocking = parse_script(&cli.unlocking);
    let locking = parse_script(&cli.locking);
    info!("unlocking: {:?}", unlocking);
    info!("locking: {:?}", locking);

    let verdict = Validator::new(cli.trace).run(&unlocking, &locking);

    if cli.json {
        let report = Report { unlocking: &cli.unlocking, locking: &cli.locking, verdict };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let result = match verdict.valid {
        true => "VALID".green().bold(),
        false => "INVALID".red().bold(),
    };
    println!();
    println!("scriptSig:    {}", cli.unlocking);
    println!("scriptPubKey: {}", cli.locking);
    println!("Result: {}", result);
    Ok(())
}
