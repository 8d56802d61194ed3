use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use derelict_core::{BoardView, Cell, GameConfig, generate};
use rand::RngExt;

#[derive(Debug, Parser)]
#[command(
    name = "derelict",
    about = "Scan an abandoned station grid without tripping a trap"
)]
struct Cli {
    /// Board width, clamped to a minimum of 5.
    #[arg(long, default_value_t = 8)]
    width: u8,
    /// Board height, clamped to a minimum of 5.
    #[arg(long, default_value_t = 8)]
    height: u8,
    /// Fraction of cells holding a trap.
    #[arg(long, default_value_t = GameConfig::DEFAULT_TRAP_DENSITY)]
    density: f32,
    /// Seed for trap placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    verbosity: Verbosity,
}

enum Command {
    Quit,
    Scan((i32, i32)),
}

fn main() -> Result<()> {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut state = generate(args.width, args.height, args.density, seed);
    log::info!("new game, seed {seed}");

    println!("=== DERELICT STATION ===");
    println!("Find all safe areas without triggering traps.");
    println!(
        "Board size: {}x{}, Traps: {}",
        state.width(),
        state.height(),
        state.trap_count()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !state.is_terminal() {
        print!("{}", render(&BoardView::from_state(&state)));
        print!("Enter coordinates to scan (x y) or 'q' to quit: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match parse_command(&line?) {
            Some(Command::Quit) => break,
            Some(Command::Scan(target)) => state = state.scan(target),
            None => println!("Invalid input. Please enter coordinates as 'x y'."),
        }
    }

    let view = BoardView::from_state(&state);
    print!("{}", render(&view));
    if let Some(dangers) = &view.dangers {
        println!("Trap locations:");
        for (x, y) in dangers {
            println!("  - ({x}, {y})");
        }
    }
    println!("Thanks for playing!");
    Ok(())
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Some(Command::Quit);
    }

    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Scan((x, y)))
}

fn render(view: &BoardView) -> String {
    let (width, height) = view.size;
    let rule_len = usize::from(width) * 2 - 1;
    let mut out = String::new();

    out.push_str("    ");
    for x in 0..width {
        let _ = write!(out, "{} ", x % 10);
    }
    out.push('\n');
    let _ = writeln!(out, "   {}", "-".repeat(rule_len));

    for y in 0..height {
        let _ = write!(out, "{} | ", y % 10);
        for x in 0..width {
            out.push(symbol(view.cell_at((x, y))));
            out.push(' ');
        }
        out.push_str("|\n");
    }
    let _ = writeln!(out, "   {}", "-".repeat(rule_len));

    if view.game_over {
        out.push_str("\nGAME OVER! You triggered a trap!\n");
    } else if view.win {
        out.push_str("\nCONGRATULATIONS! You've scanned every safe area!\n");
    }

    out
}

const fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Hidden => '#',
        Cell::Empty => ' ',
        Cell::Danger => 'X',
        Cell::Adjacent(count) => (b'0' + count) as char,
    }
}
