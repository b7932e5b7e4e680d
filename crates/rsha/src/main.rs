//! File and stdin hashing CLI.
//!
//! The first argument selects the algorithm (`1`, `224`, `256`, `384`, or
//! `512`); remaining arguments name files to hash, with `-` standing for
//! stdin. With no file arguments, stdin is hashed. One `<hex>  <name>` line
//! is printed per input; failures go to stderr and flip the exit code
//! without stopping the remaining inputs.

use std::{
  env, io,
  process::ExitCode,
};

use rsha::{Algorithm, digest_file, digest_stream};

#[derive(Clone, Debug)]
struct Args {
  algorithm: Algorithm,
  inputs: Vec<String>,
}

fn parse_args() -> Result<Args, String> {
  let mut it = env::args().skip(1);

  let Some(selector) = it.next() else {
    print_usage();
    return Err("rsha: missing algorithm selector".to_owned());
  };
  if selector == "--help" || selector == "-h" {
    print_usage();
    return Err(String::new());
  }

  let algorithm = Algorithm::from_selector(&selector).map_err(|_| {
    print_usage();
    format!("rsha: unsupported algorithm: {selector} (expected 1, 224, 256, 384, or 512)")
  })?;

  Ok(Args {
    algorithm,
    inputs: it.collect(),
  })
}

fn print_usage() {
  eprintln!(
    "\
rsha: print SHA-1/SHA-2 digests of files

USAGE:
  rsha <1|224|256|384|512> [FILE]...

With no FILE, or when FILE is -, read standard input.
"
  );
}

fn main() -> ExitCode {
  let args = match parse_args() {
    Ok(args) => args,
    Err(msg) => {
      if msg.is_empty() {
        return ExitCode::SUCCESS;
      }
      eprintln!("{msg}");
      return ExitCode::FAILURE;
    }
  };

  let inputs = if args.inputs.is_empty() {
    vec!["-".to_owned()]
  } else {
    args.inputs
  };

  let mut failed = false;
  for input in &inputs {
    let result = if input == "-" {
      digest_stream(args.algorithm, io::stdin().lock())
    } else {
      digest_file(args.algorithm, input)
    };
    match result {
      Ok(hex) => println!("{hex}  {input}"),
      Err(err) => {
        eprintln!("rsha: {input}: {err}");
        failed = true;
      }
    }
  }

  if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
