//! Salat CLI
//!
//! Usage:
//!   salat                                   # Today's schedule (same as `show`)
//!   salat show --date 2024-03-25 --json     # Another day, JSON output
//!   salat now | next                        # Current / next period
//!   salat watch --notify                    # Live view, refreshed every minute
//!   salat --lat -6.2 --lon 106.8 --tz 7 --method Kemenag show
//!   salat serve --addr 127.0.0.1:3000       # HTTP API

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use tracing::Level;

use salat::core::{build_report, run_server, Config, Overrides, ScheduleBuilder, WatchEngine, WatchTick};
use salat::types::{Method, Prayer, Report};
use salat::{DEFAULT_ADDR, VERSION, WATCH_INTERVAL_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "salat",
    version = VERSION,
    about = "Prayer times for your location, from the sun's position",
    long_about = "Salat computes the day's prayer times (Imsak, Fajr, Dhuhr, Asr,\n\
                  Maghrib, Isha) from solar declination and the equation of time.\n\n\
                  Location, method and UTC offset come from ~/.config/salat/config.json\n\
                  and can be overridden with --lat, --lon, --method and --tz.\n\n\
                  Methods:\n  \
                  MWL, ISNA, Egypt, Makkah, Karachi, Tehran, Kemenag, JAKIM"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (default: ~/.config/salat/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Latitude in degrees (north positive)
    #[arg(long, global = true, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in degrees (east positive)
    #[arg(long, global = true, allow_negative_numbers = true)]
    lon: Option<f64>,

    /// UTC offset in hours (default: system offset)
    #[arg(long, global = true, allow_negative_numbers = true)]
    tz: Option<f64>,

    /// Calculation method
    #[arg(short, long, global = true)]
    method: Option<String>,

    /// Disable colors in output
    #[arg(long, global = true)]
    no_color: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Show the day's schedule
    Show {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Single-line output
        #[arg(short, long)]
        compact: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the active period
    Now {
        #[arg(long)]
        json: bool,
    },
    /// Show the next period and time remaining
    Next {
        #[arg(long)]
        json: bool,
    },
    /// Live view, refreshed periodically
    Watch {
        /// Refresh interval in seconds
        #[arg(long, default_value_t = WATCH_INTERVAL_SECS)]
        interval: u64,
        /// Ring the terminal bell when a period starts
        #[arg(short, long)]
        notify: bool,
    },
    /// List calculation methods
    Methods,
    /// Print the effective configuration
    Config,
    /// Run as HTTP API server
    Serve {
        #[arg(long, default_value = DEFAULT_ADDR)]
        addr: String,
    },
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            latitude: self.lat,
            longitude: self.lon,
            utc_offset: self.tz,
            method: self.method.clone(),
        }
    }
}

/// Resolved settings shared by all commands
struct Session {
    config: Config,
    offset: FixedOffset,
    builder: ScheduleBuilder,
}

impl Session {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    fn report_for(&self, date: NaiveDate) -> anyhow::Result<Report> {
        let schedule = self
            .builder
            .build(date)
            .with_context(|| format!("calculating prayer times for {date}"))?;
        Ok(build_report(self.now(), schedule, self.config.coordinate(), &self.config.method))
    }

    fn report_today(&self) -> anyhow::Result<Report> {
        self.report_for(self.now().date_naive())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load_or_default(args.config.as_deref())
        .context("loading configuration")?
        .with_overrides(&args.overrides());
    let offset = config.resolve_offset(Local::now().offset().fix())?;
    let builder = ScheduleBuilder::new(config.coordinate(), config.params()).offset(offset);
    let ctx = Session { config, offset, builder };

    let command = args.command.clone().unwrap_or(Command::Show { date: None, compact: false, json: false });
    match command {
        Command::Show { date, compact, json } => {
            let report = ctx.report_for(date.unwrap_or_else(|| ctx.now().date_naive()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if compact {
                println!("{}", format_compact(&report));
            } else {
                print_schedule(&ctx, &report);
            }
        }
        Command::Now { json } => {
            let report = ctx.report_today()?;
            if json {
                println!("{}", serde_json::to_string(&serde_json::json!({ "current": report.current, "now": report.now }))?);
            } else {
                print_now(&report);
            }
        }
        Command::Next { json } => {
            let report = ctx.report_today()?;
            if json {
                println!("{}", serde_json::to_string(&serde_json::json!({
                    "next": report.next,
                    "remaining_secs": report.remaining_secs,
                }))?);
            } else {
                print_next(&report);
            }
        }
        Command::Watch { interval, notify } => run_watch(&ctx, interval, notify).await?,
        Command::Methods => print_methods(&ctx),
        Command::Config => print_config(&ctx)?,
        Command::Serve { addr } => {
            if let Err(e) = run_server(&addr).await {
                anyhow::bail!("server error: {e}");
            }
        }
    }
    Ok(())
}

/// Install the stderr fmt subscriber
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Live view: redraw every `interval` seconds until Ctrl-C
async fn run_watch(ctx: &Session, interval: u64, notify: bool) -> anyhow::Result<()> {
    let mut engine = WatchEngine::new(ctx.builder, ctx.config.method.clone());
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval.max(1)));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let tick = engine.update(&Utc::now()).context("calculating prayer times")?;
                print_watch(ctx, &tick, notify);
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\nExiting watch mode...");
                return Ok(());
            }
        }
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Color for each prayer
fn paint(prayer: Prayer, text: &str) -> ColoredString {
    match prayer {
        Prayer::Imsak => text.bright_blue(),
        Prayer::Fajr => text.bright_magenta(),
        Prayer::Dhuhr => text.bright_yellow(),
        Prayer::Asr => text.yellow(),
        Prayer::Maghrib => text.bright_red(),
        Prayer::Isha => text.bright_cyan(),
    }
}

fn format_remaining(report: &Report) -> String {
    match report.remaining_hms() {
        (0, m, s) => format!("{}m {:02}s", m, s),
        (h, m, _) => format!("{}h {:02}m", h, m),
    }
}

/// Status column: active, passed, countdown to next, or blank
fn status(report: &Report, prayer: Prayer) -> String {
    if report.current == Some(prayer) {
        "► active".to_string()
    } else if !report.next.wrapped_to_next_day && report.next.prayer == prayer {
        format_remaining(report)
    } else if report.schedule.time_of(prayer) <= report.now {
        "✓".to_string()
    } else {
        String::new()
    }
}

fn print_header(ctx: &Session, report: &Report) {
    println!();
    println!(
        "{}",
        format!("🕌 Prayer times - {}", report.schedule.date.format("%A, %d %B %Y")).bold().bright_cyan()
    );
    println!(
        "📍 {} ({}) • {} • UTC{}",
        ctx.config.location_label(),
        ctx.config.coordinate(),
        report.method,
        ctx.offset
    );
    if !report.method_known {
        println!("{}", format!("  unknown method '{}', using 18°/17°", report.method).dimmed());
    }
    println!();
}

fn print_schedule(ctx: &Session, report: &Report) {
    print_header(ctx, report);
    println!("{:<14} {:<8} {}", "PRAYER", "TIME", "STATUS");
    println!("-------------------------------");
    for (prayer, time) in report.schedule.boundaries() {
        let line = format!(
            "{} {:<11} {:<8} {}",
            prayer.symbol(),
            prayer.name(),
            time.format("%H:%M"),
            status(report, prayer)
        );
        if report.current == Some(prayer) {
            println!("{}", paint(prayer, &line).bold());
        } else {
            println!("{}", line);
        }
    }
    println!("-------------------------------");
    println!();
    print_next(report);
    println!();
}

fn format_compact(report: &Report) -> String {
    Prayer::ALL
        .iter()
        .map(|p| {
            let s = status(report, *p);
            if s.is_empty() {
                format!("{} {}", p, report.schedule.time_of(*p).format("%H:%M"))
            } else {
                format!("{} {} {}", p, report.schedule.time_of(*p).format("%H:%M"), s)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn print_now(report: &Report) {
    match report.current {
        Some(p) => println!(
            "{} {} (since {})",
            p.symbol(),
            paint(p, p.name()).bold(),
            report.schedule.time_of(p).format("%H:%M")
        ),
        None => println!("{}", "No active period (before Imsak)".dimmed()),
    }
}

fn print_next(report: &Report) {
    let next = &report.next;
    println!(
        "⏰ Next: {} {} at {} in {}",
        next.prayer.symbol(),
        paint(next.prayer, &next.label()).bold(),
        next.time.format("%H:%M"),
        format_remaining(report)
    );
}

fn print_watch(ctx: &Session, tick: &WatchTick, notify: bool) {
    const BAR_WIDTH: usize = 40;
    let report = &tick.report;

    // clear screen
    print!("\x1b[H\x1b[2J");
    print_header(ctx, report);
    println!("⏱  {}", report.now.format("%H:%M:%S"));
    println!();

    if let Some(p) = tick.entered {
        println!("{}", format!(" 🔔 {} has started ", p.name().to_uppercase()).on_red().bright_white().bold());
        println!();
        if notify {
            print!("\x07\x07\x07");
        }
    }

    for (prayer, time) in report.schedule.boundaries() {
        let line = format!("{} {:<8} {}  {}", prayer.symbol(), prayer.name(), time.format("%H:%M"), status(report, prayer));
        if report.current == Some(prayer) {
            println!("{}", paint(prayer, &line).bold());
        } else {
            println!("{}", line);
        }
    }
    println!();
    print_next(report);

    let filled = (tick.progress * BAR_WIDTH as f64) as usize;
    println!("{}", format!("{:.1}% elapsed", tick.progress * 100.0).bright_cyan());
    println!(
        "[{}{}]",
        "█".repeat(filled).bright_green(),
        "░".repeat(BAR_WIDTH - filled).bright_black()
    );
}

fn print_methods(ctx: &Session) {
    println!("{:<9} {:>6} {:>6} {:>9}  {}", "METHOD", "FAJR", "ISHA", "INTERVAL", "AUTHORITY");
    for m in Method::ALL {
        let p = m.params();
        let isha = if p.uses_isha_interval() { "-".to_string() } else { format!("{:.1}°", p.isha_angle) };
        let interval = if p.uses_isha_interval() { format!("{} min", p.isha_interval_minutes) } else { "-".to_string() };
        let line = format!("{:<9} {:>5.1}° {:>6} {:>9}  {}", m.name(), p.fajr_angle, isha, interval, m.description());
        if m.name().eq_ignore_ascii_case(ctx.config.method.trim()) {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
}

fn print_config(ctx: &Session) -> anyhow::Result<()> {
    let path = Config::default_path().map(|p| p.display().to_string()).unwrap_or_default();
    println!("Config file: {}", path);
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    println!("Effective UTC offset: {}", ctx.offset);
    Ok(())
}
