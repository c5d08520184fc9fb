//! tldgen - generate TLD corpus and regex source from the IANA list

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::info;

use tld_regex::{
    CompileOptions, EmitOptions, Emitter, FileSource, Generator, HttpSource, LineSource,
    OutputFormat, DEFAULT_SOURCE_URL,
};

#[derive(Parser)]
#[command(name = "tldgen")]
#[command(about = "Compile the TLD list into a sorted corpus and prefix-factored regex")]
#[command(version)]
struct Cli {
    /// URL of the TLD list
    #[arg(long, env = "TLDGEN_URL", default_value = DEFAULT_SOURCE_URL)]
    url: String,

    /// Read the list from a local file instead of downloading it
    #[arg(long, short = 'i', value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output path
    #[arg(long, short = 'o', default_value = "tlds.go")]
    output: PathBuf,

    /// Output format: go or json (detected from the output extension by default)
    #[arg(long)]
    format: Option<String>,

    /// Go package name
    #[arg(long, default_value = "urlx")]
    package: String,

    /// Emit reluctant `??` quantifiers
    #[arg(long, default_value = "false")]
    lazy: bool,

    /// Emit capturing groups
    #[arg(long, default_value = "false")]
    capture: bool,

    /// Download timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Skip checking each pattern against its corpus
    #[arg(long, default_value = "false")]
    no_verify: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let format = match cli.format.as_deref() {
        Some(name) => {
            OutputFormat::from_name(name).ok_or_else(|| anyhow!("unknown format: {}", name))?
        }
        None => OutputFormat::detect(&cli.output).unwrap_or(OutputFormat::Go),
    };

    let lines = match &cli.input {
        Some(path) => FileSource::new(path).load_lines(),
        None => HttpSource::new()
            .with_url(&cli.url)
            .with_timeout(Duration::from_secs(cli.timeout))
            .load_lines(),
    }
    .context("failed to load TLD list")?;

    let compile_options = CompileOptions::new()
        .with_greedy(!cli.lazy)
        .with_capture(cli.capture);
    let corpora = Generator::new()
        .with_compile_options(compile_options)
        .with_verify(!cli.no_verify)
        .compile_all(&lines)
        .context("failed to compile TLD list")?;

    let emitter = Emitter::new(
        EmitOptions::new()
            .with_format(format)
            .with_package(cli.package),
    );
    emitter
        .write_to(&corpora, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!("Done");
    Ok(())
}
