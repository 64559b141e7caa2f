use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;
use num_bigint::BigUint;

use fibonacci::Method;

/// Fibonacci calculator
#[derive(Parser)]
#[command(name = "fib", version)]
struct Args {
    /// Index of the Fibonacci number to compute (fib(0) = 0, fib(1) = 1)
    #[arg(
        short = 'n',
        long = "number",
        value_name = "N",
        default_value = "5",
        value_parser = parse_index,
        allow_hyphen_values = true
    )]
    n: u32,

    /// Algorithm to use: recursive or iterative
    #[arg(short, long, default_value = "iterative", value_parser = str::parse::<Method>)]
    function: Method,
}

fn parse_index(s: &str) -> Result<u32, String> {
    let n: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not an integer"))?;
    if n < 0 {
        return Err("N cannot be negative".to_string());
    }
    u32::try_from(n).map_err(|_| format!("{n} is too large"))
}

fn compute(args: &Args) -> BigUint {
    debug!("computing fib({}) with {}", args.n, args.function);
    fibonacci::fibonacci(args.n, args.function)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    println!("{}", compute(&args));
    Ok(())
}
