use std::error::Error;
use std::io;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use tracing::info;

use shallownet::{Dataset, Mlp, Sampler};

const BASE_HIDDEN: usize = 5;
const BASE_LR: f64 = 0.01;
const BASE_EPOCHS: usize = 1000;

/// Trains one-hidden-layer networks on the cosine-product surface and
/// reports held-out MSE across hyperparameter sweeps.
#[derive(Parser)]
struct Cli {
    /// Seed for data generation and weight initialization (omit to seed
    /// from OS entropy)
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    /// Number of training samples
    #[arg(long, value_name = "INT", default_value_t = 1000)]
    train_size: usize,
    /// Number of test samples per evaluation
    #[arg(long, value_name = "INT", default_value_t = 10_000)]
    test_size: usize,
}

struct Harness {
    train: Dataset,
    sampler: Sampler<StdRng>,
    test_size: usize,
    seed: Option<u64>,
    models_built: u64,
}

impl Harness {
    fn new(cli: &Cli) -> Self {
        let mut sampler = match cli.seed {
            Some(seed) => Sampler::from_seed(seed),
            None => Sampler::from_entropy(),
        };
        let train = sampler.generate(cli.train_size);
        Self {
            train,
            sampler,
            test_size: cli.test_size,
            seed: cli.seed,
            models_built: 0,
        }
    }

    fn build(&mut self, hidden: usize, lr: f64, epochs: usize) -> shallownet::Result<Mlp> {
        self.models_built += 1;
        match self.seed {
            // Each model gets a derived seed so sweep points are
            // independently initialized but reproducible.
            Some(seed) => {
                Mlp::new_with_seed(hidden, lr, epochs, seed.wrapping_add(self.models_built))
            }
            None => Mlp::new(hidden, lr, epochs),
        }
    }

    /// Train one model and print its MSE over a freshly drawn test set.
    fn run(&mut self, hidden: usize, lr: f64, epochs: usize) -> shallownet::Result<()> {
        let mut model = self.build(hidden, lr, epochs)?;

        let start = Instant::now();
        model.fit(self.train.inputs(), self.train.targets())?;
        info!(
            "trained hidden={hidden} lr={lr} epochs={epochs} in {:.2}s",
            start.elapsed().as_secs_f64()
        );

        let test = self.sampler.generate(self.test_size);
        let mse = model.evaluate_mse(&test)?;
        println!("mean squared error on the test set: {mse}");
        Ok(())
    }

    fn sweep_epochs(&mut self) -> shallownet::Result<()> {
        for epochs in [100, 500, 1000, 2000] {
            println!("max training epochs: {epochs}");
            self.run(BASE_HIDDEN, BASE_LR, epochs)?;
            println!("--------------------");
        }
        Ok(())
    }

    fn sweep_hidden(&mut self) -> shallownet::Result<()> {
        for hidden in [2, 5, 10, 20, 50, 100] {
            println!("hidden layer width: {hidden}");
            self.run(hidden, BASE_LR, BASE_EPOCHS)?;
            println!("--------------------");
        }
        Ok(())
    }

    fn sweep_learning_rate(&mut self) -> shallownet::Result<()> {
        for lr in [0.001, 0.01, 0.1] {
            println!("learning rate: {lr}");
            self.run(BASE_HIDDEN, lr, BASE_EPOCHS)?;
            println!("--------------------");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut harness = Harness::new(&cli);

    // One run at the base configuration, then the three sweeps.
    harness.run(BASE_HIDDEN, BASE_LR, BASE_EPOCHS)?;
    harness.sweep_epochs()?;
    harness.sweep_hidden()?;
    harness.sweep_learning_rate()?;
    Ok(())
}
