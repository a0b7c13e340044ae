//! styled-text - print styled text fragments
//!
//! Without arguments a set of sample fragments is printed, showing colors,
//! styles, composition and attribute inheritance. With text arguments the
//! text is printed once with the requested attributes.
//!
//! # Quick Start
//!
//! ```text
//! styled-text                               # Sample set, mode from config
//! styled-text --ansi                        # Force escape sequences
//! styled-text -c orange -s bold,underline hello world
//! styled-text --ansi --write-config         # Save ansi as the default mode
//! ```

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::tty::IsTty;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use styled_text::{
    set_default_render_mode, Attrs, Color, Config, ConfigError, Fragment, RenderMode,
    RenderSetting, Style,
};

/// Command line options
#[derive(Default)]
struct Options {
    /// Render mode forced on the command line
    mode: Option<RenderMode>,
    /// Explicit config file
    config: Option<PathBuf>,
    /// Save the effective config and exit
    write_config: bool,
    /// Attributes for the text arguments
    attrs: Attrs,
    /// Text to print instead of the sample set
    words: Vec<String>,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("styled-text {}", VERSION);
}

fn print_help() {
    eprintln!("styled-text {} - print styled text fragments", VERSION);
    eprintln!();
    eprintln!("Usage: styled-text [OPTIONS] [TEXT]...");
    eprintln!();
    eprintln!("Render options:");
    eprintln!("  (default)               From config.toml, else plain");
    eprintln!("  -p, --plain             Plain text");
    eprintln!("  -a, --ansi              ISO 6429 escape sequences");
    eprintln!("      --config <PATH>     Use this config file");
    eprintln!("      --write-config      Save the render mode to the config file and exit");
    eprintln!();
    eprintln!("Text options:");
    eprintln!("  -c, --color <NAME>      Foreground color");
    eprintln!("  -b, --background <NAME> Background color");
    eprintln!("  -s, --style <NAMES>     Styles, e.g. bold|underline");
    eprintln!();
    eprintln!("Other options:");
    eprintln!("  -v, --version           Show version");
    eprintln!("  -h, --help              Show this help");
    eprintln!();
    eprintln!("Colors: black red green yellow blue magenta cyan white grey");
    eprintln!("        deep_blue mid_blue orange pink brown");
    eprintln!("Styles: bold italic blink underline crossed inverted");
    eprintln!();
    eprintln!("Configuration: ~/.styled-text/config.toml");
    eprintln!("Logging: STYLED_TEXT_LOG=debug");
}

/// Parse command line arguments
fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();
    let mut options = Options::default();
    let mut i = 1;

    fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
        args.get(i)
            .map(String::as_str)
            .ok_or_else(|| format!("Missing argument for {}", flag))
    }

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-p" | "--plain" => {
                options.mode = Some(RenderMode::Plain);
            }
            "-a" | "--ansi" => {
                options.mode = Some(RenderMode::Iso6429);
            }
            "--config" => {
                i += 1;
                options.config = Some(PathBuf::from(value(&args, i, "--config")?));
            }
            "-c" | "--color" => {
                i += 1;
                let color: Color = value(&args, i, "--color")?
                    .parse()
                    .map_err(|e| format!("{}", e))?;
                options.attrs.color = color;
            }
            "-b" | "--background" => {
                i += 1;
                let color: Color = value(&args, i, "--background")?
                    .parse()
                    .map_err(|e| format!("{}", e))?;
                options.attrs.background = color;
            }
            "-s" | "--style" => {
                i += 1;
                let style: Style = value(&args, i, "--style")?
                    .parse()
                    .map_err(|e| format!("{}", e))?;
                options.attrs.style = style;
            }
            "--write-config" => {
                options.write_config = true;
            }
            "--" => {
                options.words.extend(args[i + 1..].iter().cloned());
                break;
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("Unknown option: {}", arg));
            }
            word => options.words.push(word.to_string()),
        }
        i += 1;
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("STYLED_TEXT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> anyhow::Result<()> {
    let options = match parse_args() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging();
    info!("styled-text starting...");

    let config = match &options.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => Config::load(),
    };

    if options.write_config {
        let path = write_config(config, options.mode, options.config.as_deref())?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    if config.palette()?.install().is_err() {
        warn!("Palette already initialized, config overrides ignored");
    }

    let is_tty = io::stdout().is_tty();
    let mode = options.mode.unwrap_or_else(|| config.render.resolve(is_tty));
    debug!("stdout is tty: {}, render mode: {:?}", is_tty, mode);
    set_default_render_mode(mode);

    let fragments = if options.words.is_empty() {
        samples()
    } else {
        vec![Fragment::with_attrs(options.words.join(" "), options.attrs)]
    };

    let mut stdout = io::stdout().lock();
    for fragment in &fragments {
        emit(&mut stdout, fragment, mode)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Save `config` with the command line mode applied, to `path` or the
/// default location
fn write_config(
    mut config: Config,
    mode: Option<RenderMode>,
    path: Option<&Path>,
) -> Result<PathBuf, ConfigError> {
    if let Some(mode) = mode {
        config.render = RenderSetting::from(mode);
    }
    match path {
        Some(path) => {
            config.save_to(path)?;
            Ok(path.to_path_buf())
        }
        None => config.save(),
    }
}

/// Write one fragment followed by a newline
fn emit(out: &mut impl Write, fragment: &Fragment, mode: RenderMode) -> io::Result<()> {
    match mode {
        RenderMode::Iso6429 => queue!(out, fragment, Print("\n")),
        RenderMode::Plain => writeln!(out, "{}", fragment.plain_text()),
    }
}

/// Sample fragments exercising colors, styles and composition
fn samples() -> Vec<Fragment> {
    let mut out = vec![
        Fragment::new("normal"),
        Fragment::new("red").with_color(Color::Red),
        Fragment::new("green underline")
            .with_color(Color::Green)
            .with_style(Style::UNDERLINE),
        Fragment::new("blue italic underline")
            .with_color(Color::Blue)
            .with_style(Style::ITALIC | Style::UNDERLINE),
    ];

    let mut s1 = Fragment::new("magenta underline")
        .with_color(Color::Magenta)
        .with_style(Style::UNDERLINE);
    s1.attach(Fragment::new(" orange underline").with_color(Color::Orange));
    out.push(s1.clone());
    s1.attach(
        Fragment::new(" orange italic")
            .with_color(Color::Orange)
            .with_style(Style::ITALIC),
    );
    out.push(s1);

    out.push(
        vec![
            Fragment::new("pink").with_color(Color::Pink),
            Fragment::new("bold").with_style(Style::BOLD),
        ]
        .into_iter()
        .collect(),
    );

    let nested: Fragment = vec![
        Fragment::new("bold").with_style(Style::BOLD),
        Fragment::new("brown inverted")
            .with_color(Color::Brown)
            .with_style(Style::INVERTED),
    ]
    .into_iter()
    .collect();
    out.push(
        vec![Fragment::new("pink").with_color(Color::Pink), nested]
            .into_iter()
            .collect(),
    );

    let mut s6 = Fragment::new("cyan").with_color(Color::Pink);
    s6.override_attrs(Attrs::new().color(Color::Cyan));
    out.push(s6);

    let mut s7 = Fragment::new("magenta italic")
        .with_color(Color::Magenta)
        .with_style(Style::ITALIC);
    s7.underride_attrs(Attrs::new().color(Color::Orange).style(Style::BOLD));
    out.push(s7);

    out.push(
        Fragment::new("orange on grey")
            .with_color(Color::Orange)
            .with_background(Color::Grey),
    );

    let mut s8 = Fragment::new("green").with_color(Color::Green);
    s8.attach(Fragment::new("blue").with_color(Color::Blue)).attach("green");
    out.push(s8);

    out.push(
        Fragment::new("pink bold")
            .with_color(Color::Pink)
            .with_style(Style::BOLD)
            + Fragment::new(" normal"),
    );

    out
}
