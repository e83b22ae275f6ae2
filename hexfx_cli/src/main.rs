//! Entry point for HexFX's CLI tool.

use std::io::{BufRead, Write};

use clap::Parser;

use hexfx_core::{HexDecodeError, HexfxError};

#[derive(Parser)]
#[command(
  name = "hexfx",
  bin_name = "hexfx",
  version = env!("CARGO_PKG_VERSION"),
  about = "HexFX is a CLI app for decoding hex-encoded text",
  max_term_width = 80
)]
struct Cli {
  #[arg(
    long,
    default_value_t = false,
    help = "Write timing and memory stats to stderr on exit"
  )]
  print_stats: bool,
}

fn main() -> Result<(), ()> {
  let cli = Cli::parse();

  let started_at = std::time::Instant::now();

  let r = match perform_convert() {
    Ok(()) => Ok(()),
    Err(e) => {
      e.print("converting hex data read from stdin");
      Err(())
    }
  };

  if cli.print_stats {
    #[cfg(not(windows))]
    let peak_memory_mb = get_peak_memory_usage() as f64 / (1024.0 * 1024.0);

    eprintln!();
    eprintln!("-----");
    eprintln!(
      "Time elapsed:      {:.2} seconds",
      started_at.elapsed().as_secs_f64()
    );

    #[cfg(not(windows))]
    eprintln!("Peak memory usage: {:.0} MiB", peak_memory_mb);
  }

  r
}

/// An error that occurred when running the hex conversion.
///
enum ConvertError {
  /// Reading from stdin or writing to stdout failed.
  IoError { when: String, details: String },

  /// The line read from stdin was not a valid hexadecimal string.
  HexDecodeError(HexDecodeError),
}

impl HexfxError for ConvertError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    match self {
      ConvertError::IoError { when, details } => vec![
        format!("I/O error {}", task_description),
        "".to_string(),
        format!("  When: {}", when),
        format!("  Details: {}", details),
      ],

      ConvertError::HexDecodeError(error) => error.to_lines(task_description),
    }
  }
}

/// Prompts for a line of hex data on stdin, converts it, and prints the
/// decoded text to stdout following the `Decoded string:` label line.
///
fn perform_convert() -> Result<(), ConvertError> {
  let hex_input = read_hex_input()?;

  let text = match hexfx_core::convert(&hex_input) {
    Ok(text) => text,
    Err(e) => return Err(ConvertError::HexDecodeError(e)),
  };

  let mut stdout = std::io::stdout();

  writeln!(stdout, "Decoded string:\n{}", text).map_err(|e| {
    ConvertError::IoError {
      when: "Writing to stdout".to_string(),
      details: e.to_string(),
    }
  })
}

/// Writes the `Enter hex data: ` prompt and reads one line from stdin. The
/// line terminator is not part of the hex data and is removed. When stdin has
/// no line to give, the hex data is empty.
///
fn read_hex_input() -> Result<String, ConvertError> {
  let mut stdout = std::io::stdout();

  let prompt_result = stdout
    .write_all(b"Enter hex data: ")
    .and_then(|_| stdout.flush());

  if let Err(e) = prompt_result {
    return Err(ConvertError::IoError {
      when: "Writing prompt to stdout".to_string(),
      details: e.to_string(),
    });
  }

  let mut line = String::new();

  std::io::stdin().lock().read_line(&mut line).map_err(|e| {
    ConvertError::IoError {
      when: "Reading from stdin".to_string(),
      details: e.to_string(),
    }
  })?;

  if line.ends_with('\n') {
    line.pop();

    if line.ends_with('\r') {
      line.pop();
    }
  }

  Ok(line)
}

#[cfg(not(windows))]
fn get_peak_memory_usage() -> i64 {
  let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
  unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };

  let mut max = usage.ru_maxrss;

  // On Linux, ru_maxrss is in KiB
  if std::env::consts::OS == "linux" {
    max *= 1024;
  }

  max
}
