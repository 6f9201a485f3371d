mod flower;

use flower::flower_dataset;
use planar_nn::{accuracy, predict, train_loop, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(1);
    let (x, y) = flower_dataset(400, 4.0, &mut rng);
    println!("X: {:?}, Y: {:?}, {} samples", x.shape(), y.shape(), x.cols);

    let config = TrainConfig::new();
    let result = train_loop(&x, &y, &config, &mut rng);
    for (i, cost) in result.costs.iter().enumerate().step_by(config.log_every) {
        println!("Cost after iteration {i}: {cost:.6}");
    }
    let predictions = predict(&result.parameters, &x);
    println!("Accuracy: {:.1}%", accuracy(&predictions, &y));

    println!();
    for &n_h in &[1, 2, 3, 4, 5, 20, 50] {
        let config = TrainConfig::new().hidden_size(n_h).num_iterations(5000);
        let result = train_loop(&x, &y, &config, &mut rng);
        let predictions = predict(&result.parameters, &x);
        println!("Accuracy for {n_h} hidden units: {:.1}%", accuracy(&predictions, &y));
    }
}
