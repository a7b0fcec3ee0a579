use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use thfk::observer::{CancelToken, LogLevel, Limits, Observer};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "thfk")]
#[command(about = "Grid-diagram transverse-knot invariants")]
struct Cmd {
    #[arg(short = 'v', long, value_enum, default_value_t = Verbosity::Quiet)]
    verbosity: Verbosity,

    /// Byte budget for the search frontier; 0 means unlimited.
    #[arg(long, default_value_t = 0)]
    max_bytes: usize,

    /// States explored between progress log lines; 0 disables progress logs.
    #[arg(long, default_value_t = 0)]
    progress_every: u64,

    /// Emit the result as a JSON object instead of `NAME: YES|NO`.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    invariant: Invariant,
}

#[derive(Clone, Copy, ValueEnum)]
enum Verbosity {
    Silent,
    Quiet,
    Verbose,
}

#[derive(Subcommand)]
enum Invariant {
    /// lambda^+: whether x^+ is null-homologous in D0.
    LambdaPlus {
        #[arg(short = 'X', long, value_delimiter = ',')]
        x: Vec<u32>,
        #[arg(short = 'O', long, value_delimiter = ',')]
        o: Vec<u32>,
    },
    /// lambda^-: whether x^- is null-homologous in D0.
    LambdaMinus {
        #[arg(short = 'X', long, value_delimiter = ',')]
        x: Vec<u32>,
        #[arg(short = 'O', long, value_delimiter = ',')]
        o: Vec<u32>,
    },
    /// delta_1 lambda^+: whether x^+ is null-homologous in D1.
    Delta1LambdaPlus {
        #[arg(short = 'X', long, value_delimiter = ',')]
        x: Vec<u32>,
        #[arg(short = 'O', long, value_delimiter = ',')]
        o: Vec<u32>,
    },
    /// delta_1 lambda^-: whether x^- is null-homologous in D1.
    Delta1LambdaMinus {
        #[arg(short = 'X', long, value_delimiter = ',')]
        x: Vec<u32>,
        #[arg(short = 'O', long, value_delimiter = ',')]
        o: Vec<u32>,
    },
    /// theta_n: whether a target generator lifts to null-homologous in the
    /// n-fold branched cover. Defaults the target to x^+ when omitted.
    ThetaN {
        #[arg(short = 'X', long, value_delimiter = ',')]
        x: Vec<u32>,
        #[arg(short = 'O', long, value_delimiter = ',')]
        o: Vec<u32>,
        #[arg(short = 'n', long)]
        n: usize,
        #[arg(long, value_delimiter = ',')]
        target: Option<Vec<u32>>,
    },
}

fn main() {
    let cmd = Cmd::parse();
    SubscriberBuilder::default().with_target(false).init();
    match run(cmd) {
        Ok(()) => {}
        Err(err) => {
            tracing::error!(%err, "invariant computation failed");
            let code = err
                .downcast_ref::<thfk::Error>()
                .map(thfk::Error::exit_code)
                .unwrap_or(1);
            eprintln!("error: {err}");
            std::process::exit(code);
        }
    }
}

fn run(cmd: Cmd) -> Result<()> {
    let limits = Limits {
        max_bytes: if cmd.max_bytes == 0 {
            usize::MAX
        } else {
            cmd.max_bytes
        },
        progress_every: cmd.progress_every,
    };
    let cancel = CancelToken::new();
    let mut observer = build_observer(cmd.verbosity);

    let (name, result) = match &cmd.invariant {
        Invariant::LambdaPlus { x, o } => (
            "LAMBDA_PLUS",
            thfk::api::null_homologous_d0_with_observer(
                &thfk::grid::GridDiagram::parse(x, o)?.x_plus(),
                x,
                o,
                &limits,
                &cancel,
                &mut observer,
            )?,
        ),
        Invariant::LambdaMinus { x, o } => (
            "LAMBDA_MINUS",
            thfk::api::null_homologous_d0_with_observer(
                &thfk::grid::GridDiagram::parse(x, o)?.x_minus(),
                x,
                o,
                &limits,
                &cancel,
                &mut observer,
            )?,
        ),
        Invariant::Delta1LambdaPlus { x, o } => (
            "DELTA1_LAMBDA_PLUS",
            thfk::api::null_homologous_d1_with_observer(
                &thfk::grid::GridDiagram::parse(x, o)?.x_plus(),
                x,
                o,
                &limits,
                &cancel,
                &mut observer,
            )?,
        ),
        Invariant::Delta1LambdaMinus { x, o } => (
            "DELTA1_LAMBDA_MINUS",
            thfk::api::null_homologous_d1_with_observer(
                &thfk::grid::GridDiagram::parse(x, o)?.x_minus(),
                x,
                o,
                &limits,
                &cancel,
                &mut observer,
            )?,
        ),
        Invariant::ThetaN { x, o, n, target } => {
            let grid = thfk::grid::GridDiagram::parse(x, o)?;
            let target = target.clone().unwrap_or_else(|| grid.x_plus());
            (
                "THETA_N",
                thfk::api::null_homologous_lift_with_observer(
                    &target, *n, x, o, &limits, &cancel, &mut observer,
                )?,
            )
        }
    };

    if cmd.json {
        println!("{}", json!({ "invariant": name, "null_homologous": result }));
    } else {
        println!("{name}: {}", if result { "YES" } else { "NO" });
    }
    Ok(())
}

fn build_observer(verbosity: Verbosity) -> Observer<'static> {
    match verbosity {
        Verbosity::Silent => Observer::silent(),
        Verbosity::Quiet => Observer::silent().with_log(|level, msg| {
            if level != LogLevel::Verbose {
                tracing::info!("{msg}");
            }
        }),
        Verbosity::Verbose => Observer::silent()
            .with_log(|_level, msg| tracing::info!("{msg}"))
            .with_progress(|explored, pivots| {
                tracing::info!(explored, pivots, "progress");
            }),
    }
}
