use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use libgencrc::engine::table::LookupTable;
use libgencrc::io::{compute_reader, DEFAULT_CHUNK_SIZE};
use libgencrc::word::{parse_hex, to_hex};
use libgencrc::{
    BitwiseCrc, CrcEngine, CrcWord, Direction, ShiftLeft, ShiftRight, Shifter, TableCrc, Width,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    /// One bit at a time, no table
    Bitwise,
    /// 256 entry lookup table, one byte at a time
    Table,
}

#[derive(Parser, Debug)]
#[command(
    name = "crcsum",
    about = "Compute the CRC of a file for any width, polynomial and bit order"
)]
struct Args {
    /// File to checksum
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Register width in bits (8, 16, 32 or 64)
    #[arg(
        short,
        long,
        value_name = "BITS",
        env = "CRCSUM_WIDTH",
        default_value = "16"
    )]
    width: Width,

    /// Bit order: msb (shift left) or lsb (shift right)
    #[arg(short, long, env = "CRCSUM_DIRECTION", default_value = "lsb")]
    direction: Direction,

    /// Polynomial in hex, MSB-first notation
    #[arg(
        short,
        long,
        value_name = "HEX",
        env = "CRCSUM_POLY",
        default_value = "1021"
    )]
    poly: String,

    /// Initial register value in hex
    #[arg(short, long, value_name = "HEX", env = "CRCSUM_SEED", default_value = "0")]
    seed: String,

    #[arg(
        short,
        long,
        value_enum,
        env = "CRCSUM_ENGINE",
        default_value_t = EngineKind::Bitwise
    )]
    engine: EngineKind,

    /// Bytes read per chunk
    #[arg(
        long,
        value_name = "BYTES",
        env = "CRCSUM_CHUNK_SIZE",
        default_value_t = DEFAULT_CHUNK_SIZE
    )]
    chunk_size: usize,

    /// Print the lookup table after the result (table engine only)
    #[arg(long)]
    dump_table: bool,

    /// More log output on stderr, repeat for more detail. CRCSUM_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn setup_log(output: impl Into<fern::Output>, level: LevelFilter) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}: {message}",
                record.level().as_str().to_lowercase()
            ));
        })
        .level(level)
        .chain(output)
        .apply()
        .expect("failed to setup fern");
}

/// Level from `CRCSUM_LOG` when set, otherwise from `-v` repetitions.
///
/// An unparsable `CRCSUM_LOG` falls back to `warn` and is handed back so it
/// can be reported once logging is up.
fn log_level(verbose: u8, env_level: Option<&str>) -> (LevelFilter, Option<String>) {
    let (level, invalid) = match env_level {
        Some(text) => match text.parse() {
            Ok(level) => (level, None),
            Err(_) => (LevelFilter::Warn, Some(text.to_owned())),
        },
        None => match verbose {
            0 => (LevelFilter::Warn, None),
            1 => (LevelFilter::Info, None),
            2 => (LevelFilter::Debug, None),
            _ => (LevelFilter::Trace, None),
        },
    };
    // errors always reach stderr
    (level.max(LevelFilter::Error), invalid)
}

fn main() {
    let args = Args::parse();
    let env_level = std::env::var("CRCSUM_LOG").ok();
    let (level, invalid) = log_level(args.verbose, env_level.as_deref());
    setup_log(io::stderr(), level);
    if let Some(invalid) = invalid {
        log::warn!("ignoring CRCSUM_LOG={invalid:?}, expected off, error, warn, info, debug or trace");
    }

    if let Err(e) = try_main(&args, &mut io::stdout().lock()) {
        log::error!("{e:#}");
        process::exit(1);
    }
}

fn try_main<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    match args.width {
        Width::W8 => run::<u8, W>(args, out),
        Width::W16 => run::<u16, W>(args, out),
        Width::W32 => run::<u32, W>(args, out),
        Width::W64 => run::<u64, W>(args, out),
    }
}

fn run<T: CrcWord, W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let polynomial: T = parse_hex(&args.poly).context("invalid polynomial")?;
    let seed: T = parse_hex(&args.seed).context("invalid seed")?;

    match args.direction {
        Direction::MsbFirst => run_with::<T, ShiftLeft, W>(args, polynomial, seed, out),
        Direction::LsbFirst => run_with::<T, ShiftRight, W>(args, polynomial, seed, out),
    }
}

fn run_with<T: CrcWord, S: Shifter, W: Write>(
    args: &Args,
    polynomial: T,
    seed: T,
    out: &mut W,
) -> Result<()> {
    let bitwise = BitwiseCrc::<T, S>::new(polynomial);
    match args.engine {
        EngineKind::Bitwise => {
            if args.dump_table {
                log::warn!("--dump-table has no effect with the bitwise engine");
            }
            checksum_file(args, &bitwise, seed, out)
        }
        EngineKind::Table => {
            let table = TableCrc::from_bitwise(bitwise);
            checksum_file(args, &table, seed, out)?;
            if args.dump_table {
                print_table(table.lookup_table(), out)?;
            }
            Ok(())
        }
    }
}

fn checksum_file<T: CrcWord, W: Write>(
    args: &Args,
    engine: &dyn CrcEngine<T>,
    seed: T,
    out: &mut W,
) -> Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("Error opening file {}", args.file.display()))?;

    let (crc, total) = compute_reader(engine, file, seed, args.chunk_size)
        .with_context(|| format!("Error reading file {}", args.file.display()))?;
    log::info!(
        "{} bytes through the {} engine, {}",
        total,
        engine.name(),
        engine.direction()
    );

    writeln!(out, "File      : {}", args.file.display())?;
    writeln!(out, "Algorithm : CRC{}", T::BITS)?;
    writeln!(out, "Polynomial: {}", to_hex(engine.polynomial()))?;
    writeln!(out, "Seed      : {}", to_hex(seed))?;
    writeln!(out, "CRC       : {}", to_hex(crc))?;
    Ok(())
}

fn print_table<T: CrcWord, W: Write>(table: &LookupTable<T>, out: &mut W) -> Result<()> {
    for row in table.chunks(8) {
        let line = row
            .iter()
            .map(|&entry| format!("0x{}", to_hex(entry)))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{line},")?;
    }
    Ok(())
}
