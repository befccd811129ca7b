use std::{env, fs::File, process};

use anyhow::{Context, Result};
use digit_recognition::{
    arch::Architecture,
    config::TrainingConfig,
    data::{Dataset, render},
    optimization::GradientDescent,
    predict::{evaluate, predict_sample},
    training::Trainer,
};
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <train.csv> [config.json]", args[0]);
        process::exit(2);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(data_path: &str, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
            TrainingConfig::from_reader(file).with_context(|| format!("failed to parse {path}"))?
        }
        None => TrainingConfig::default(),
    };
    config.validate()?;

    let mut dataset =
        Dataset::from_csv(data_path).with_context(|| format!("failed to load {data_path}"))?;
    info!("loaded {} records from {data_path}", dataset.len());

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    dataset.shuffle(&mut rng);

    let (dev, train) = dataset.split(config.dev_size);
    let dev = dev.to_batch();
    let train = train.to_batch();
    info!("{} training and {} validation examples", train.len(), dev.len());

    let validation = (!dev.is_empty()).then(|| (dev.x.view(), dev.y.view()));
    let mut trainer = Trainer::new(
        GradientDescent::new(config.learning_rate),
        Architecture::MNIST,
        config.iterations,
        config.seed,
    );
    let training = trainer
        .train(train.x.view(), train.y.view(), validation)
        .context("training failed")?;

    let index = config.sample_index;
    let sample = predict_sample(&training.params, train.x.view(), train.y.view(), index)
        .context("failed to predict the requested sample")?;

    println!("{}", render(train.x.column(index)));
    println!("Prediction: {}", sample.predicted);
    println!("Label: {}", sample.label);

    if let Some((x, y)) = validation {
        let accuracy = evaluate(&training.params, x, y)?;
        println!("Validation accuracy: {accuracy:.4}");
    }

    Ok(())
}
