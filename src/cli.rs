use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::engine::SearchMode;
use countdown::game::{
    LARGE_POOL, Prompter, SMALL_POOL, SetupChoice, SourceNumbers, Target, draw_numbers, draw_target,
    validate_large_count,
};
use countdown::solver::constants::{DEFAULT_TIME_LIMIT, DEFAULT_WORKERS};
use countdown::solver::{CountdownSolver, Progress, SearchObserver, SearchReport, SolverConfig};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Play the numbers game against a postfix search engine
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Deal a Countdown numbers game and search for an expression that hits the target"
)]
#[command(version)]
pub struct CliArgs {
    /// Draw this many tiles from the large pool (0-4) instead of asking
    #[arg(long, conflicts_with = "numbers")]
    pub large: Option<i64>,

    /// Use these six tiles instead of asking, e.g. 25,8,10,7,1,5
    #[arg(long, value_delimiter = ',')]
    pub numbers: Option<Vec<u64>>,

    /// Target to reach (101-999); drawn at random when omitted
    #[arg(short, long)]
    pub target: Option<i64>,

    /// Seed for drawing tiles and target
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads per batch
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Search time limit in seconds
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT.as_secs())]
    pub time_limit: u64,

    /// Also sweep uncapped operator bags and mirrored pair-splits
    #[arg(long)]
    pub thorough: bool,

    /// Do not animate progress on stderr
    #[arg(long)]
    pub no_spinner: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl CliArgs {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            workers: self.workers,
            time_limit: Duration::from_secs(self.time_limit),
            mode: if self.thorough {
                SearchMode::Thorough
            } else {
                SearchMode::Tuned
            },
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialise logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    let solver = CountdownSolver::new(args.solver_config()).context("Invalid solver settings")?;
    let mut rng = args.rng();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_pools(&mut out)?;

    let flag_target = target_from_flag(&args)?;
    let (numbers, target) = match numbers_from_flags(&args, &mut rng)? {
        Some(numbers) => {
            let target = flag_target.unwrap_or_else(|| draw_target(&mut rng));
            (numbers, target)
        }
        None => interactive_setup(io::stdin().lock(), &mut out, flag_target, &mut rng)?,
    };

    print_game(&mut out, &numbers, target)?;
    info!("Starting search with {:?}", solver.config());

    let report = if args.no_spinner {
        solver.solve(&numbers, target)
    } else {
        let mut spinner = Spinner::new(io::stderr());
        let report = solver.solve_with_observer(&numbers, target, &mut spinner);
        spinner.finish();
        report
    };

    print_report(&mut out, &report)?;
    Ok(())
}

fn target_from_flag(args: &CliArgs) -> Result<Option<Target>> {
    args.target
        .map(Target::new)
        .transpose()
        .context("Invalid target")
}

/// Tiles given or drawn on the command line, or `None` to ask for them.
fn numbers_from_flags<R: Rng + ?Sized>(
    args: &CliArgs,
    rng: &mut R,
) -> Result<Option<SourceNumbers>> {
    if let Some(values) = &args.numbers {
        let numbers = SourceNumbers::from_slice(values).context("Invalid numbers")?;
        return Ok(Some(numbers));
    }

    if let Some(large) = args.large {
        let large = validate_large_count(large).context("Invalid large count")?;
        return Ok(Some(draw_numbers(large, rng)?));
    }

    Ok(None)
}

fn interactive_setup<I: BufRead, W: Write, R: Rng + ?Sized>(
    input: I,
    output: W,
    flag_target: Option<Target>,
    rng: &mut R,
) -> Result<(SourceNumbers, Target)> {
    let mut prompter = Prompter::new(input, output);

    match prompter.choose_setup()? {
        SetupChoice::Random { large } => {
            let numbers = draw_numbers(large, rng)?;
            let target = flag_target.unwrap_or_else(|| draw_target(rng));
            Ok((numbers, target))
        }
        SetupChoice::Manual => {
            let numbers = prompter.read_numbers()?;
            let target = match flag_target {
                Some(target) => target,
                None => prompter.read_target()?,
            };
            Ok((numbers, target))
        }
    }
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_pools<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to the Countdown Numbers Game!")?;
    writeln!(out)?;
    writeln!(out, "  Large numbers: {}", join(&LARGE_POOL))?;
    writeln!(out, "  Small numbers: {}", join(&SMALL_POOL))?;
    writeln!(out)
}

fn print_game<W: Write>(out: &mut W, numbers: &SourceNumbers, target: Target) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Your numbers are: {}", numbers)?;
    writeln!(out, "And your target number is: {}", target)?;
    writeln!(out)
}

fn print_report<W: Write>(out: &mut W, report: &SearchReport) -> io::Result<()> {
    match report.solution() {
        Some(solution) => {
            writeln!(out, "SOLUTION FOUND!")?;
            writeln!(out, "{}", solution)?;
        }
        None => {
            debug!("Search ended with {:?}", report.outcome);
            writeln!(out, "A solution could not be found in time.")?;
            writeln!(out, "It's possible the solution may not exist...")?;
        }
    }
    let tried = report.combinations_tried;
    let millis = report.elapsed.as_millis();
    writeln!(out, "No. of combinations tried: {}", tried)?;
    writeln!(out, "Time taken: {} milliseconds", millis)
}

const SPINNER_FRAMES: [&str; 3] = ["\\ Working \\", "/ Working /", "- Working -"];
const SPINNER_INTERVAL: Duration = Duration::from_millis(150);

/// Progress animation redrawn in place, at most once per interval.
pub struct Spinner<W: Write> {
    out: W,
    frame: usize,
    last_draw: Option<Instant>,
}

impl<W: Write> Spinner<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frame: 0,
            last_draw: None,
        }
    }

    // The spinner is cosmetic; a failed write to stderr must not end the game.
    fn draw(&mut self) {
        let frame = SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()];
        let _ = write!(self.out, "\r{}", frame);
        let _ = self.out.flush();
        self.frame += 1;
        self.last_draw = Some(Instant::now());
    }

    /// Erase the animation.
    pub fn finish(&mut self) {
        if self.last_draw.is_some() {
            let blank = " ".repeat(SPINNER_FRAMES[0].len());
            let _ = write!(self.out, "\r{}\r", blank);
            let _ = self.out.flush();
        }
    }
}

impl<W: Write> SearchObserver for Spinner<W> {
    fn on_batch(&mut self, _progress: &Progress) {
        if self
            .last_draw
            .is_none_or(|drawn| drawn.elapsed() >= SPINNER_INTERVAL)
        {
            self.draw();
        }
    }
}
