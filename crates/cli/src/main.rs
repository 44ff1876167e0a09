//! RISC-V pipeline replay CLI.
//!
//! This binary drives a replay session against the external simulator. It performs:
//! 1. **Run:** Invoke the simulator once and print the whole run, registers and statistics.
//! 2. **Step:** Advance a fresh session cycle by cycle, showing restarts.
//! 3. **Listing:** Print the `(address, encoding)` table of a program listing.
//! 4. **Interactive:** Read `run`/`step`/`reset` commands from stdin against one session.

mod render;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rvviz_core::common::SessionError;
use rvviz_core::config::Config;
use rvviz_core::sim::{CaptureMode, ProcessInvoker, ProgramListing, Session, Step};
use rvviz_core::stats::ReplayStats;

#[derive(Parser, Debug)]
#[command(
    name = "rvviz",
    author,
    version,
    about = "Replay a RISC-V pipeline simulator run cycle by cycle",
    long_about = "Invoke the external simulator, reconstruct per-cycle state (registers, stage occupancy, hazards, forwarding, branch predictor) and print it.\n\nThe simulator binaries (simulator, simulator3) are looked up next to this executable unless --sim-dir or the config says otherwise.\n\nExamples:\n  rvviz run -p output.mc\n  rvviz step -n 5 --structured -p output.mc\n  rvviz listing output.mc\n  rvviz interactive -p output.mc"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Machine-code program passed to the simulator.
    #[arg(short, long, global = true)]
    program: Option<PathBuf>,

    /// Request one JSON record per cycle instead of the free-text log.
    #[arg(long, global = true)]
    structured: bool,

    /// Directory containing the simulator executables.
    #[arg(long, global = true)]
    sim_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the whole simulation and print every cycle.
    Run,

    /// Step through cycles; stepping past the end starts a new run.
    Step {
        /// Number of steps.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Print a program listing.
    Listing {
        /// Listing file (.mc).
        path: PathBuf,
    },

    /// Read run/step/reset/regs/quit commands from stdin.
    Interactive,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli);
    debug!(?config, "configuration");

    match cli.command {
        Commands::Run => cmd_run(&config),
        Commands::Step { count } => cmd_step(&config, count),
        Commands::Listing { path } => cmd_listing(&path),
        Commands::Interactive => cmd_interactive(&config),
    }
}

/// Loads the config file (if any) and applies command-line overrides.
fn load_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    if cli.program.is_some() {
        config.session.program.clone_from(&cli.program);
    }
    if cli.structured {
        config.session.mode = CaptureMode::Structured;
    }
    if cli.sim_dir.is_some() {
        config.simulator.directory.clone_from(&cli.sim_dir);
    }
    config
}

/// Prints the session's program listing, if it has one and it can be read.
fn show_program(session: &Session<ProcessInvoker>) {
    let Some(path) = session.program() else {
        return;
    };
    match ProgramListing::load(path) {
        Ok(listing) => {
            println!("[*] Loaded {} instructions from {}", listing.len(), path.display());
            render::print_listing(&listing);
        }
        Err(e) => eprintln!("[!] {e}"),
    }
}

/// Reports a session error and exits.
fn fail(error: &SessionError) -> ! {
    eprintln!("\n[!] {error}");
    process::exit(1);
}

fn cmd_run(config: &Config) {
    let mut session = Session::from_config(config);
    show_program(&session);

    let output = session.run().unwrap_or_else(|e| fail(&e));
    if !output.stderr.is_empty() {
        eprintln!("[!] {}", output.stderr);
    }
    match session.mode() {
        CaptureMode::Transcript => println!("{}", output.text),
        CaptureMode::Structured => {
            for snapshot in &output.snapshots {
                render::print_snapshot(snapshot);
            }
        }
    }
    println!();
    render::print_registers(session.registers());
    println!();
    println!("{}", ReplayStats::collect(&output.snapshots));
}

fn cmd_step(config: &Config, count: usize) {
    let mut session = Session::from_config(config);
    for _ in 0..count {
        let step = session.step().unwrap_or_else(|e| fail(&e));
        render::print_step(&step);
        if matches!(step, Step::Empty) {
            break;
        }
    }
    println!();
    render::print_registers(session.registers());
}

fn cmd_listing(path: &Path) {
    match ProgramListing::load(path) {
        Ok(listing) => render::print_listing(&listing),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn cmd_interactive(config: &Config) {
    let mut session = Session::from_config(config);
    show_program(&session);
    println!("Commands: run, step, reset, regs, quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else {
            break;
        };

        let result = match line.trim() {
            "" => Ok(()),
            "run" => session.run().map(|output| {
                if !output.stderr.is_empty() {
                    eprintln!("[!] {}", output.stderr);
                }
                match session.mode() {
                    CaptureMode::Transcript => println!("{}", output.text),
                    CaptureMode::Structured => {
                        output.snapshots.iter().for_each(render::print_snapshot);
                    }
                }
                render::print_registers(session.registers());
            }),
            "step" => session.step().map(|step| {
                render::print_step(&step);
                render::print_registers(session.registers());
            }),
            "reset" => {
                session.reset();
                println!("Registers reset to defaults.");
                render::print_registers(session.registers());
                Ok(())
            }
            "regs" => {
                render::print_registers(session.registers());
                Ok(())
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command: {other}");
                Ok(())
            }
        };

        if let Err(e) = result {
            eprintln!("[!] {e}");
            if e.is_terminal() {
                process::exit(1);
            }
        }
    }
}
