use anyhow::Result;
use clap::Parser;
use std::io;

use banco_terminal::{App, BankConfig};

/// Interactive retail-bank branch console.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Branch code used as the prefix of every account number
    #[arg(long, default_value = BankConfig::DEFAULT_AGENCY_CODE)]
    agency_code: String,

    /// Maximum number of deposits + withdrawals per account
    #[arg(long, default_value_t = BankConfig::DEFAULT_TRANSACTION_LIMIT)]
    transaction_limit: u32,

    /// Maximum amount a single withdrawal may move
    #[arg(long, default_value_t = BankConfig::DEFAULT_WITHDRAWAL_LIMIT)]
    withdrawal_limit: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = BankConfig {
        agency_code: args.agency_code,
        transaction_limit: args.transaction_limit,
        withdrawal_limit: args.withdrawal_limit,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(config, stdin.lock(), stdout.lock());
    app.run()
}
