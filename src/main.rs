use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use radixmul::{Algorithm, Base, BigNat, KARATSUBA_THRESHOLD};

const DIVISION_PLACEHOLDER: &str = "unimplemented";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Schoolbook,
    Karatsuba,
}

/// Add and multiply two natural numbers in an arbitrary base.
#[derive(Debug, Parser)]
#[command(name = "radixmul")]
struct Args {
    /// Left operand; read from stdin together with RIGHT and BASE if omitted
    left: Option<String>,
    right: Option<String>,
    base: Option<u64>,

    /// Treat operands as digit strings in BASE instead of decimal integers
    #[arg(long)]
    digits: bool,

    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Karatsuba)]
    algorithm: AlgorithmArg,

    /// Operand length below which Karatsuba falls back to schoolbook multiplication
    #[arg(short, long, default_value_t = KARATSUBA_THRESHOLD as u64, value_parser = clap::value_parser!(u64).range(1..))]
    threshold: u64,
}

fn parse_operand_line(line: &str) -> Result<(String, String, u64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        bail!("expected 3 values, got {}", fields.len());
    }
    let base = fields[2]
        .parse()
        .with_context(|| format!("invalid base '{}'", fields[2]))?;
    Ok((fields[0].to_owned(), fields[1].to_owned(), base))
}

/// Takes operands from the command line, or prompts for all three on `input` if none were given.
fn resolve_operands<R: BufRead>(
    left: Option<String>,
    right: Option<String>,
    base: Option<u64>,
    mut input: R,
) -> Result<(String, String, u64)> {
    match (left, right, base) {
        (Some(left), Some(right), Some(base)) => Ok((left, right, base)),
        (None, None, None) => {
            print!("Enter two integers and a base separated by spaces: ");
            io::stdout().flush()?;
            let mut line = String::new();
            input
                .read_line(&mut line)
                .context("Failed to read operands from stdin")?;
            parse_operand_line(&line)
        }
        _ => bail!("LEFT, RIGHT and BASE must be given together"),
    }
}

fn parse_operand(text: &str, base: Base, digits: bool) -> Result<BigNat> {
    if digits {
        return BigNat::from_digit_str(text, base)
            .with_context(|| format!("invalid operand '{}'", text));
    }
    let x: u64 = text
        .parse()
        .with_context(|| format!("invalid integer '{}'", text))?;
    Ok(BigNat::from_u64(x, base))
}

fn run(l: &BigNat, r: &BigNat, algorithm: Algorithm) -> Result<Vec<String>> {
    let sum = l.checked_add(r)?;
    let product = l.mul_with(r, algorithm)?;
    log::debug!("sum digits = {:?}, product digits = {:?}", sum.digits(), product.digits());

    let product_label = match algorithm {
        Algorithm::Schoolbook => "School Multiplication",
        Algorithm::Karatsuba { .. } => "Karatsuba Multiplication",
    };
    Ok(vec![
        format!("School Addition: {}", sum),
        format!("{}: {}", product_label, product),
        format!("Division: {}", DIVISION_PLACEHOLDER),
    ])
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (left, right, radix) =
        resolve_operands(args.left, args.right, args.base, io::stdin().lock())?;
    let base = Base::new(radix)?;
    let l = parse_operand(&left, base, args.digits)?;
    let r = parse_operand(&right, base, args.digits)?;
    log::debug!("base {}: left = {:?}, right = {:?}", radix, l, r);

    let algorithm = match args.algorithm {
        AlgorithmArg::Schoolbook => Algorithm::Schoolbook,
        AlgorithmArg::Karatsuba => Algorithm::Karatsuba {
            threshold: args.threshold as usize,
        },
    };
    log::debug!("multiplying with {:?}", algorithm);

    for line in run(&l, &r, algorithm)? {
        println!("{}", line);
    }
    Ok(())
}
