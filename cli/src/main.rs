use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use argline::{ParseOptions, ParsedArguments, StaticArgs};
use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "argline",
    version,
    about = "Parse a command line into JSON",
    after_help = "Arguments after `--` are joined with single spaces and parsed as one line."
)]
struct Args {
    /// Command line to parse verbatim instead of the trailing arguments.
    #[arg(
        short,
        long,
        value_name = "text",
        conflicts_with = "input",
        allow_hyphen_values = true
    )]
    line: Option<String>,

    /// Read the command line from a file. Use '-' for stdin.
    #[arg(short, long, value_name = "file")]
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Print only the value of this option (or `_` / `__`).
    #[arg(long, value_name = "name")]
    get: Option<String>,

    /// Indentation size; 0 prints compact JSON.
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Marker that starts the raw trailing-data segment.
    #[arg(long, value_name = "text", default_value = argline::DEFAULT_DATA_DELIMITER)]
    delimiter: String,

    /// Do not capture trailing data.
    #[arg(long = "no-data")]
    no_data: bool,

    /// Keep relaxed object literals (bare keys, single quotes) as text.
    #[arg(long = "strict-json")]
    strict_json: bool,

    /// Log parser decisions to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Command line arguments to parse.
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let options = parse_options(args);
    let text = read_line(args)?;
    let source = StaticArgs::new(args.args.iter().cloned());
    debug!(explicit = text.is_some(), "parsing command line");

    let parsed = argline::parse_command_line_with(text.as_deref(), &source, &options);
    let value = select(parsed, args.get.as_deref())?;

    with_output_writer(args.output.as_deref(), |writer| {
        write_json(writer, &value, args.indent)?;
        writer.write_all(b"\n")?;
        Ok(())
    })
}

fn parse_options(args: &Args) -> ParseOptions {
    let options = ParseOptions::new().with_relaxed(!args.strict_json);
    if args.no_data {
        options.without_data_delimiter()
    } else {
        options.with_data_delimiter(args.delimiter.as_str())
    }
}

fn read_line(args: &Args) -> Result<Option<String>, Box<dyn Error>> {
    if let Some(line) = &args.line {
        return Ok(Some(line.clone()));
    }
    let buf = match args.input.as_deref() {
        None => return Ok(None),
        Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => fs::read_to_string(path)?,
    };
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn select(parsed: ParsedArguments, name: Option<&str>) -> Result<Value, Box<dyn Error>> {
    let Some(name) = name else {
        return Ok(parsed.into_value());
    };
    match parsed.into_map().remove(name) {
        Some(value) => Ok(value),
        None => Err(format!("argument `{name}` not found").into()),
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json(writer: &mut dyn Write, value: &Value, indent: usize) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}
