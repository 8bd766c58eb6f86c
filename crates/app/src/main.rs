use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use fit_core::mapping::Viewport;
use fit_core::stats::SOLUTION_HEADERS;
use services::{Catalog, SessionService};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidQuestion { raw: String },
    InvalidNumber { flag: &'static str, raw: String },
    InvalidFormat { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidQuestion { raw } => {
                write!(f, "invalid --question value: {raw} (expected 1, 2, ...)")
            }
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidFormat { raw } => {
                write!(f, "invalid --format value: {raw} (expected html, svg or json)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  mse-explorer export  [options] [--format html|svg|json] [--out <path>]");
    eprintln!("  mse-explorer summary [options]");
    eprintln!("  mse-explorer ui      [options]   # requires the `desktop` feature");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --catalog <path>     JSON question catalog (default: builtin)");
    eprintln!("  --question <n>       1-based question number (default: 1)");
    eprintln!("  --width <w>          view width (default: 600)");
    eprintln!("  --height <h>         view height (default: 400)");
    eprintln!("  --padding <p>        view padding (default: 40)");
    eprintln!("  --reveal             show the worked solution");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FIT_CATALOG, FIT_QUESTION, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Export,
    Summary,
    Ui,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "export" => Some(Self::Export),
            "summary" => Some(Self::Summary),
            "ui" => Some(Self::Ui),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Html,
    Svg,
    Json,
}

impl ExportFormat {
    fn parse(raw: &str) -> Result<Self, ArgsError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(ArgsError::InvalidFormat {
                raw: raw.to_string(),
            }),
        }
    }
}

struct Args {
    catalog: Option<PathBuf>,
    question: usize,
    viewport: Viewport,
    reveal: bool,
    format: ExportFormat,
    out: Option<PathBuf>,
}

fn parse_question(raw: &str) -> Result<usize, ArgsError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| ArgsError::InvalidQuestion {
            raw: raw.to_string(),
        })
}

fn parse_number(args: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<f64, ArgsError> {
    let value = require_value(args, flag)?;
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ArgsError::InvalidNumber { flag, raw: value })
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut catalog = std::env::var("FIT_CATALOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut question = match std::env::var("FIT_QUESTION") {
            Ok(raw) => parse_question(&raw)?,
            Err(_) => 0,
        };
        let mut viewport = Viewport::default();
        let mut reveal = false;
        let mut format = ExportFormat::Html;
        let mut out = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => catalog = Some(PathBuf::from(require_value(args, "--catalog")?)),
                "--question" => question = parse_question(&require_value(args, "--question")?)?,
                "--width" => viewport.width = parse_number(args, "--width")?,
                "--height" => viewport.height = parse_number(args, "--height")?,
                "--padding" => viewport.padding = parse_number(args, "--padding")?,
                "--reveal" => reveal = true,
                "--format" => format = ExportFormat::parse(&require_value(args, "--format")?)?,
                "--out" => out = Some(PathBuf::from(require_value(args, "--out")?)),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            catalog,
            question,
            viewport,
            reveal,
            format,
            out,
        })
    }

    fn load_catalog(&self) -> Result<Catalog, Box<dyn std::error::Error>> {
        let catalog = match &self.catalog {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };
        Ok(catalog)
    }

    fn start_session(&self) -> Result<SessionService, Box<dyn std::error::Error>> {
        let mut session = SessionService::with_viewport(self.load_catalog()?, self.viewport)?;
        session.select_question(self.question);
        if self.reveal {
            session.toggle_reveal();
        }
        Ok(session)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn write_output(out: Option<&PathBuf>, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    match out {
        Some(path) => {
            std::fs::write(path, contents)?;
            info!(path = %path.display(), bytes = contents.len(), "export written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn export(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let session = args.start_session()?;
    let frame = session.frame();
    let contents = match args.format {
        ExportFormat::Html => ui::render_page(&session),
        ExportFormat::Svg => ui::render_plot(&frame.plot),
        ExportFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "question": frame.question_id,
            "title": frame.title,
            "equation": frame.equation,
            "plot": frame.plot,
            "solution": frame.solution,
        }))?,
    };
    write_output(args.out.as_ref(), &contents)
}

fn summary(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let session = args.start_session()?;
    let frame = session.frame();

    let mut text = format!(
        "{} ({}/{})\n{}\nModel: {}\n\n",
        frame.title,
        frame.index + 1,
        frame.question_count,
        frame.prompt,
        frame.equation
    );
    for control in &frame.controls {
        text.push_str(&format!(
            "{}: ({}, {})\n",
            control.label(),
            control.x_text(),
            control.y_text()
        ));
    }

    if let Some(solution) = &frame.solution {
        text.push('\n');
        text.push_str(&SOLUTION_HEADERS.join("\t"));
        text.push('\n');
        for row in &solution.rows {
            text.push_str(&row.cells().join("\t"));
            text.push('\n');
        }
        text.push_str(&format!(
            "\n{}\n{}\n{}\n",
            solution.sum_line(),
            solution.n_line(),
            solution.mse_line()
        ));
    } else {
        text.push_str("\nSolution hidden; rerun with --reveal to show it.\n");
    }

    write_output(args.out.as_ref(), &text)
}

#[cfg(feature = "desktop")]
fn launch_ui(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    use dioxus::LaunchBuilder;
    use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
    use ui::{App, AppContext};

    let context = AppContext::new(args.load_catalog()?, args.viewport).with_start_index(args.question);
    // Fail before opening a window if the configuration is unusable.
    context.start_session()?;

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("MSE Explorer")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn launch_ui(_args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    Err("this binary was built without the `desktop` feature".into())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: export when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Export,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Export,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownCommand(first.to_string())
        })?,
    };

    if argv.first().is_some_and(|first| !first.starts_with("--")) {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let args = Args::parse(&mut iter).inspect_err(|_| print_usage())?;

    match cmd {
        Command::Export => export(&args),
        Command::Summary => summary(&args),
        Command::Ui => launch_ui(&args),
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
