//! Command line driver for the Game of Life simulation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conway_life::{
    config::{parse_cell_list, CliOverrides, Settings},
    simulation::{Simulation, TextRenderer},
    utils::ColorOutput,
    BoundaryCondition,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "conway_life")]
#[command(about = "Conway's Game of Life on a fixed-size grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Number of columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Wrap around the grid edges (overrides config)
        #[arg(short, long, overrides_with = "no_wrap")]
        wrap: bool,

        /// Treat cells past the edges as dead (overrides config)
        #[arg(long, overrides_with = "wrap")]
        no_wrap: bool,

        /// Milliseconds between generations (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Initial live cells as "row,col;row,col" (overrides config)
        #[arg(long)]
        cells: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create default and example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            config,
            rows,
            cols,
            wrap,
            no_wrap,
            interval,
            generations,
            cells,
            verbose,
        } => {
            init_logging(verbose);
            let live_cells = cells
                .as_deref()
                .map(parse_cell_list)
                .transpose()
                .context("Failed to parse --cells")?;
            let overrides = CliOverrides {
                rows,
                cols,
                wrap: wrap_override(wrap, no_wrap),
                tick_interval_ms: interval,
                max_generations: generations,
                live_cells,
            };
            run_command(&config, &overrides)
        }
        Commands::Setup { directory, force } => {
            init_logging(false);
            setup_command(directory, force)
        }
    }
}

/// `--wrap` / `--no-wrap` as an override; neither keeps the config value
fn wrap_override(wrap: bool, no_wrap: bool) -> Option<bool> {
    match (wrap, no_wrap) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(&config_path.to_path_buf())
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut simulation =
        Simulation::from_settings(&settings).context("Failed to set up simulation")?;
    let mut renderer = TextRenderer::new(std::io::stdout().lock(), settings.display.clone());

    let reason = simulation
        .run(&mut renderer, |_| false)
        .context("Simulation failed")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Finished after {} generation(s): {:?}",
            simulation.generation(),
            reason
        ))
    );
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration files..."));

    let config_dir = directory.join("config");
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)
        .with_context(|| format!("Failed to create directory {}", examples_dir.display()))?;

    let mut blinker = Settings::default();
    blinker.simulation.rows = 5;
    blinker.simulation.cols = 5;
    blinker.simulation.max_generations = Some(10);
    blinker.seed.live_cells = vec![(2, 1), (2, 2), (2, 3)];

    let mut glider_torus = Settings::default();
    glider_torus.simulation.rows = 8;
    glider_torus.simulation.cols = 8;
    glider_torus.simulation.boundary_condition = BoundaryCondition::Wrap;
    glider_torus.simulation.max_generations = Some(32);

    let files = [
        (config_dir.join("default.yaml"), Settings::default()),
        (examples_dir.join("blinker.yaml"), blinker),
        (examples_dir.join("glider_torus.yaml"), glider_torus),
    ];

    for (path, settings) in &files {
        if path.exists() && !force {
            println!("Skipped: {} (already exists)", path.display());
            continue;
        }
        settings
            .to_file(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Created: {}", path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "conway_life",
            "run",
            "--rows",
            "10",
            "--wrap",
            "--cells",
            "1,1;2,2",
            "--generations",
            "5",
        ]);

        assert!(cli.is_ok());
        match cli.unwrap().command {
            Commands::Run {
                rows, wrap, cells, ..
            } => {
                assert_eq!(rows, Some(10));
                assert!(wrap);
                assert_eq!(cells.as_deref(), Some("1,1;2,2"));
            }
            Commands::Setup { .. } => panic!("expected run command"),
        }
    }

    #[test]
    fn test_no_wrap_flag_overrides_config() {
        let cli = Cli::try_parse_from(["conway_life", "run", "--no-wrap"]).unwrap();
        let Commands::Run { wrap, no_wrap, .. } = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(wrap_override(wrap, no_wrap), Some(false));

        let cli = Cli::try_parse_from(["conway_life", "run", "--no-wrap", "--wrap"]).unwrap();
        let Commands::Run { wrap, no_wrap, .. } = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(wrap_override(wrap, no_wrap), Some(true));

        assert_eq!(wrap_override(false, false), None);

        let mut settings = Settings::default();
        settings.simulation.boundary_condition = BoundaryCondition::Wrap;
        settings.merge_with_cli(&CliOverrides {
            wrap: wrap_override(false, true),
            ..Default::default()
        });
        assert_eq!(settings.simulation.boundary_condition, BoundaryCondition::Dead);
    }

    #[test]
    fn test_run_command_validates_after_overrides() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("tiny.yaml");

        let mut tiny = Settings::default();
        tiny.simulation.rows = 2;
        tiny.simulation.cols = 2;
        tiny.seed.live_cells = vec![(5, 5)];
        tiny.to_file(&config_path).unwrap();

        let overrides = CliOverrides {
            tick_interval_ms: Some(0),
            max_generations: Some(1),
            live_cells: Some(vec![(0, 0), (0, 1), (1, 0)]),
            ..Default::default()
        };
        assert!(run_command(&config_path, &overrides).is_ok());
        assert!(run_command(&config_path, &CliOverrides::default()).is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let default_path = temp_dir.path().join("config/default.yaml");
        assert!(default_path.exists());
        assert_eq!(Settings::from_file(&default_path).unwrap(), Settings::default());

        let glider = Settings::from_file(&temp_dir.path().join("config/examples/glider_torus.yaml"))
            .unwrap();
        assert_eq!(glider.simulation.boundary_condition, BoundaryCondition::Wrap);
    }

    #[test]
    fn test_run_command_with_generation_limit() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            rows: Some(4),
            cols: Some(4),
            tick_interval_ms: Some(0),
            max_generations: Some(2),
            live_cells: Some(vec![(1, 1), (1, 2), (2, 1), (2, 2)]),
            ..Default::default()
        };

        assert!(run_command(&temp_dir.path().join("missing.yaml"), &overrides).is_ok());
    }

    #[test]
    fn test_run_command_rejects_bad_seed() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            rows: Some(3),
            cols: Some(3),
            live_cells: Some(vec![(3, 0)]),
            ..Default::default()
        };

        assert!(run_command(&temp_dir.path().join("missing.yaml"), &overrides).is_err());
    }
}
