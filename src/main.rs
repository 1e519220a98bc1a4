//! Kohonen CLI - Self-Organizing Map trainer
//!
//! Trains a map on a JSON sample file and writes the grid as a PNG.

use clap::{Parser, Subcommand};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use kohonen::dataset::load_samples;
use kohonen::render::image_dimensions;
use kohonen::{render, Config, Result, Som, SomError, SomTrainer};
use log::error;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "kohonen")]
#[command(version)]
#[command(about = "Self-Organizing Map trainer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a map and render it as a PNG
    Train {
        /// Sample file (JSON array of numeric arrays)
        #[arg(short, long)]
        samples: PathBuf,

        /// Output image
        #[arg(short, long, default_value = "som.png")]
        output: PathBuf,

        /// Configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Grid width
        #[arg(long)]
        width: Option<usize>,

        /// Grid height
        #[arg(long)]
        height: Option<usize>,

        /// Number of training iterations
        #[arg(short = 'n', long)]
        iterations: Option<usize>,

        /// Learning rate
        #[arg(short, long)]
        learning_rate: Option<f64>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Pixel size of each neuron tile
        #[arg(short, long)]
        tile_size: Option<u32>,

        /// Update neurons in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Print the default configuration as JSON
    Config,
}

struct TrainArgs {
    samples: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    width: Option<usize>,
    height: Option<usize>,
    iterations: Option<usize>,
    learning_rate: Option<f64>,
    seed: Option<u64>,
    tile_size: Option<u32>,
    parallel: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Train {
            samples,
            output,
            config,
            width,
            height,
            iterations,
            learning_rate,
            seed,
            tile_size,
            parallel,
        } => train_map(TrainArgs {
            samples,
            output,
            config,
            width,
            height,
            iterations,
            learning_rate,
            seed,
            tile_size,
            parallel,
        }),

        Commands::Config => print_default_config(),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn train_map(args: TrainArgs) -> Result<()> {
    let start_time = Instant::now();

    let samples = load_samples(&args.samples)?;
    let first = samples
        .first()
        .ok_or_else(|| {
            SomError::EmptyInput(format!("{} holds no samples", args.samples.display()))
        })?;
    println!(
        "✓ Loaded {} samples from {}",
        samples.len(),
        args.samples.display()
    );

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let mut config = Config::default();
            config.som.input_dimension = first.len();
            config
        }
    };
    if let Some(width) = args.width {
        config.som.width = width;
    }
    if let Some(height) = args.height {
        config.som.height = height;
    }
    if let Some(iterations) = args.iterations {
        config.som.iterations = iterations;
    }
    if let Some(lr) = args.learning_rate {
        config.som.learning_rate = lr;
    }
    if args.seed.is_some() {
        config.som.seed = args.seed;
    }
    if let Some(tile) = args.tile_size {
        config.render.tile_size = tile;
    }
    config.som.parallel |= args.parallel;
    config.som.validate()?;
    image_dimensions(config.som.width, config.som.height, config.render.tile_size)?;

    let som_config = config.som.clone();
    let mut som = Som::from_config(&som_config)?;
    println!(
        "✓ Initialized SOM ({}x{} = {} neurons, {}-dim weights)",
        som.width(),
        som.height(),
        som.len(),
        som.input_dim()
    );

    let pb = ProgressBar::new(som_config.iterations as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) ETA: {eta}")
            .map_err(|e| SomError::Config(e.to_string()))?
            .progress_chars("█▓▒░  "),
    );
    pb.set_message("Training SOM...");

    let mut trainer = SomTrainer::new(som_config);
    trainer.train_with_progress(&mut som, &samples, |_, _| pb.inc(1))?;
    pb.finish_and_clear();

    let qe = som.quantization_error(&samples)?;
    println!(
        "✓ Trained for {} iterations (quantization error {:.4})",
        trainer.config().iterations,
        qe
    );

    let img = render(&som, config.render.tile_size)?;
    img.save(&args.output)?;
    println!("✓ Saved image to {}", args.output.display());

    println!();
    println!("Training complete in {}", HumanDuration(start_time.elapsed()));

    Ok(())
}

fn print_default_config() -> Result<()> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    println!("{}", json);
    Ok(())
}
