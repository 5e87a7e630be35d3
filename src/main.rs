// stacklab: LIFO/FIFO and call-stack demonstrations with step-through replay

mod callstack;
mod containers;
mod demos;
mod errors;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use trace::Tracer;
use ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <demo> [--tui]", program_name);
    eprintln!("       {} all", program_name);
    eprintln!("       {} --list", program_name);
    eprintln!();
    eprintln!("Demos:");
    for demo in demos::DEMOS {
        eprintln!("  {:<16} {}", demo.name, demo.summary);
    }
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {} stack-vs-queue         # print the trace to stdout",
        program_name
    );
    eprintln!(
        "  {} spooler --tui          # step through the run interactively",
        program_name
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("stacklab");

    if args.len() < 2 {
        eprintln!("Error: No demo selected");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    }

    let selection = args[1].as_str();

    if selection == "--list" || selection == "list" {
        for demo in demos::DEMOS {
            println!("{:<16} {}", demo.name, demo.summary);
        }
        return Ok(());
    }

    if selection == "all" {
        for demo in demos::DEMOS {
            let mut tracer = Tracer::new();
            (demo.run)(&mut tracer)?;
            for line in tracer.output() {
                println!("{}", line);
            }
            println!();
        }
        return Ok(());
    }

    let wants_tui = args.iter().any(|arg| arg == "--tui");

    let tracer = match demos::run(selection) {
        Ok(tracer) => tracer,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    if !wants_tui {
        for line in tracer.output() {
            println!("{}", line);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(selection, &tracer);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
