//! Command-line front end: dump a captured header as a table.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use bitgrid::{print_table, schema, table::TableStyle};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a binary protocol header as a table of its bit fields")]
struct Args {
    /// Header bytes as hex; whitespace and `:` separators are ignored
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    hex: Option<String>,

    /// Read raw header bytes from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Header layout to use
    #[arg(short, long, default_value = "ipv4")]
    protocol: String,

    /// Length the header claims to have; defaults to all input bytes
    #[arg(short, long)]
    length: Option<usize>,

    /// Glyphs used to draw the table
    #[arg(short, long, value_enum, default_value_t = Style::Ascii)]
    style: Style,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Style {
    Ascii,
    Unicode,
}

impl From<Style> for TableStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Ascii => TableStyle::Ascii,
            Style::Unicode => TableStyle::Unicode,
        }
    }
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(&digits);

    hex::decode(digits).with_context(|| format!("invalid hex input {text:?}"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let Some(layout) = schema::builtin(&args.protocol) else {
        let known: Vec<&str> = schema::BUILTIN.iter().map(|s| s.name).collect();
        bail!("unknown protocol {:?}, expected one of {}", args.protocol, known.join(", "));
    };
    layout.validate()?;

    let data = match (&args.hex, &args.file) {
        (_, Some(path)) => {
            fs::read(path).with_context(|| format!("cannot read {}", path.display()))?
        }
        (Some(hex), None) => parse_hex(hex)?,
        (None, None) => bail!("no input given"),
    };

    let requested = args.length.unwrap_or(data.len());
    info!(protocol = layout.name, captured = data.len(), requested, "rendering header");
    if requested > data.len() {
        debug!(missing = requested - data.len(), "input shorter than requested length");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print_table(&mut out, layout, &data, requested, args.style.into())
        .context("cannot write table")?;
    out.flush().context("cannot write table")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("45 00 00 3c").unwrap(), vec![0x45, 0x00, 0x00, 0x3C]);
        assert_eq!(parse_hex("0x4500").unwrap(), vec![0x45, 0x00]);
        assert_eq!(parse_hex("de:ad:be:ef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["bitgrid", "-p", "udp", "--style", "unicode", "0035"])
            .unwrap();
        assert_eq!(args.protocol, "udp");
        assert!(matches!(args.style, Style::Unicode));
        assert_eq!(args.hex.as_deref(), Some("0035"));

        assert!(Args::try_parse_from(["bitgrid"]).is_err());
    }
}
