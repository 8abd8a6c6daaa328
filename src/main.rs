// loopscan: C-like loop-construct recognizer

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use loopscan::config::{Config, USAGE};
use loopscan::pipeline::{Pipeline, PipelineOutput};
use loopscan::ui::App;
use loopscan::Error;

fn main() {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if config.help {
        println!("{}", USAGE);
        return;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level()))
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Error> {
    let paths = config.channel_paths();
    let pipeline = Pipeline::new(config.recognizer);

    let output = pipeline.run_to_files(&config.input, &paths)?;

    let summary = output.summary();
    eprintln!("Processed {}: {}", config.input.display(), summary);

    let top = summary.top_identifiers(5);
    if !top.is_empty() {
        let ranked: Vec<String> = top
            .iter()
            .map(|(name, count)| format!("{} ({})", name, count))
            .collect();
        eprintln!("Most used identifiers: {}", ranked.join(", "));
    }
    eprintln!(
        "Results written to {}, {}, {} and {}",
        paths.normalized.display(),
        paths.tokens.display(),
        paths.reserved_table.display(),
        paths.parse_results.display()
    );

    if config.tui {
        run_viewer(output, &pipeline)?;
    }

    Ok(())
}

fn run_viewer(output: PipelineOutput, pipeline: &Pipeline) -> Result<(), Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(output, pipeline.table().clone());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Error::from)
}
