//! Prints the pad-and-pear fractal as a list of circles, one per line:
//! `kind x y width height color`.
//!
//! Usage: `fractal-pads [depth] [ratio%] [pad color] [pear color]`
//! Missing arguments take the drawing's initial values. Set `RUST_LOG=debug` for timings.

use {
  fractal_pads::{
    generator::{FractalGenerator, Listener, Params, Subject, DEPTH_RANGE, PERCENT_RANGE},
    geometry::Color
  },
  anyhow::{bail, Context, Result},
  std::rc::Rc
};

const USAGE: &str = "usage: fractal-pads [depth] [ratio%] [pad color] [pear color]";

/// Writes the shape list to stdout on every update.
struct Printer;

impl Listener for Printer {
  fn update(&self, subject: &dyn Subject) {
    for shape in &subject.shapes() {
      println!("{}", shape);
    }
  }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Params> {
  let args = args.into_iter().collect::<Vec<_>>();
  if args.len() > 4 {
    bail!("too many arguments\n{}", USAGE);
  }
  let defaults = Params::default();
  let arg = |i: usize| args.get(i).map(String::as_str);

  let depth = match arg(0) {
    Some(s) => s.parse().with_context(|| format!("depth: {:?}", s))?,
    None => defaults.depth
  };
  let percent = match arg(1) {
    Some(s) => s.trim_end_matches('%').parse()
      .with_context(|| format!("ratio: {:?}", s))?,
    None => defaults.ratio * 100.0
  };
  let pad = match arg(2) {
    Some(s) => s.parse::<Color>()?,
    None => defaults.pad
  };
  let pear = match arg(3) {
    Some(s) => s.parse::<Color>()?,
    None => defaults.pear
  };
  Ok(Params::from_percent(depth, percent, pad, pear))
}

fn main() -> Result<()> {
  env_logger::init();

  let args = std::env::args().skip(1).collect::<Vec<_>>();
  if args.iter().any(|arg| arg == "-h" || arg == "--help") {
    println!("{}", USAGE);
    return Ok(());
  }
  let params = parse_args(args)?;
  if !DEPTH_RANGE.contains(&params.depth) {
    log::warn!("depth {} is outside the usual {:?}", params.depth, DEPTH_RANGE);
  }
  let percent = params.ratio * 100.0;
  if percent < *PERCENT_RANGE.start() as f64 || percent > *PERCENT_RANGE.end() as f64 {
    log::warn!("ratio {}% is outside the usual {:?}", percent, PERCENT_RANGE);
  }

  let mut generator = FractalGenerator::new();
  generator.attach(Rc::new(Printer));
  generator.replace_params(params)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
  }

  #[test] fn defaults() -> Result<()> {
    assert_eq!(parse_args(args(&[]))?, Params::default());
    Ok(())
  }

  #[test] fn all_arguments() -> Result<()> {
    let params = parse_args(args(&["6", "65%", "green", "#ff00ff"]))?;
    assert_eq!(params, Params::from_percent(6, 65.0, Color::GREEN, Color::MAGENTA));
    Ok(())
  }

  #[test] fn partial_arguments() -> Result<()> {
    let params = parse_args(args(&["3", "40"]))?;
    assert_eq!(params.depth, 3);
    assert_eq!(params.ratio, 0.4);
    assert_eq!(params.pad, Color::PAD);
    assert_eq!(params.pear, Color::PEAR);
    Ok(())
  }

  #[test] fn rejects_bad_input() {
    assert!(parse_args(args(&["-1"])).is_err());
    assert!(parse_args(args(&["4", "half"])).is_err());
    assert!(parse_args(args(&["4", "50", "blue"])).is_err());
    assert!(parse_args(args(&["4", "50", "red", "red", "red"])).is_err());
  }
}
