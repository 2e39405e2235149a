use rand::{rngs::StdRng, SeedableRng};
use rust_perceptron::{Dataset, Optimizer, Perceptron};
use std::error::Error;

const ITERATIONS: usize = 200_000;

fn install_logger() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt().compact().finish();
    tracing::subscriber::set_global_default(subscriber)
}

fn print_matrix(label: &str, matrix: &rust_perceptron::Matrix2<f64>) {
    println!("{label}\n\n{matrix:.6}\n");
}

fn main() -> Result<(), Box<dyn Error>> {
    install_logger()?;

    // one generator for the whole run
    let mut rng = StdRng::from_entropy();

    let mut net = Perceptron::new(3, &mut rng)?;
    print_matrix("\nInitial weights:", net.weights());

    let data = Dataset::first_feature().shuffled(&mut rng)?;
    print_matrix("Target:", data.targets());

    let optim = Optimizer::new(ITERATIONS).with_log(Some(ITERATIONS / 4));
    let activations = optim.train(&mut net, data.inputs(), data.targets())?;

    print_matrix("Weights after training:", net.weights());
    print_matrix("\nResults after training:", &activations);

    Ok(())
}
