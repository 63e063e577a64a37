// ABOUTME: CLI binary for the pagegist content extractor.
// ABOUTME: Reads an HTML file, picks selectors from flags or the site registry, and prints the capture.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use pagegist::{
    extract_content, load_builtin_registry, ExtractionResult, HtmlPage, SelectorRegistry,
    SelectorSpec,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagegist")]
#[command(about = "Capture page content from highlighted text or configured selectors")]
struct Args {
    /// HTML file to read ("-" for stdin)
    #[arg(long = "html")]
    html: PathBuf,

    /// Page URL, used to pick site selectors from the registry
    #[arg(long = "url")]
    url: Option<String>,

    /// Site registry JSON replacing the builtin one
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// CSS selector applied to its first match (repeatable)
    #[arg(short = 's', long = "selector")]
    selectors: Vec<String>,

    /// CSS selector applied to every match (repeatable)
    #[arg(short = 'a', long = "selector-all")]
    selectors_all: Vec<String>,

    /// Text the user has highlighted on the page
    #[arg(long = "selection")]
    selection: Option<String>,

    /// Extra context appended after the captured content
    #[arg(long = "context")]
    context: Option<String>,

    /// Print the full result as JSON instead of the content only
    #[arg(long = "json")]
    json_output: bool,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pagegist=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_html(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("error reading HTML from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("error reading file {:?}", path))
}

/// Explicit flags win; otherwise the registry entry for `--url` (or the fallback).
fn resolve_selectors(args: &Args) -> Result<(Vec<SelectorSpec>, Vec<SelectorSpec>)> {
    if !args.selectors.is_empty() || !args.selectors_all.is_empty() {
        return Ok((
            args.selectors.iter().map(|s| SelectorSpec::new(s.as_str())).collect(),
            args.selectors_all.iter().map(|s| SelectorSpec::new(s.as_str())).collect(),
        ));
    }

    let registry = match &args.config {
        Some(path) => SelectorRegistry::from_path(path)?,
        None => load_builtin_registry(),
    };
    let url = args.url.as_deref().unwrap_or_default();
    let site = match url {
        "" => registry.fallback(),
        url => registry.for_url(url),
    }
    .ok_or_else(|| {
        anyhow!(
            "no selectors configured for {}",
            if url.is_empty() { "<no url>" } else { url }
        )
    })?;
    debug!(domain = %site.domain, "using site selectors");
    Ok((site.selectors.clone(), site.selectors_all.clone()))
}

fn format_output(result: &ExtractionResult, json_output: bool) -> Result<String> {
    if json_output {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.content.clone())
    }
}

fn run(args: &Args) -> Result<()> {
    let start = Instant::now();

    let html = read_html(&args.html)?;
    let mut page = HtmlPage::parse(&html);
    if let Some(selection) = &args.selection {
        page = page.with_selection(selection.as_str());
    }

    let (selectors, selectors_all) = resolve_selectors(args)?;
    let result = extract_content(&page, &selectors, &selectors_all, args.context.as_deref())
        .context("error extracting content")?;
    let elapsed = start.elapsed();

    let output = format_output(&result, args.json_output)?;
    match &args.output {
        Some(path) => fs::write(path, &output)
            .with_context(|| format!("error writing to {:?}", path))?,
        None => println!("{}", output),
    }

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
