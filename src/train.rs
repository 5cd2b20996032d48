use crate::{Dataset, Error, Mlp, Result};

impl Mlp {
    /// Train on the given feature/target tables for `max_epochs` full
    /// passes, updating weights sample by sample (online) in table order.
    ///
    /// Per sample, with activations `a_j` and output `y_hat` from the
    /// forward pass and `err = y - y_hat` broadcast to every hidden unit:
    ///
    /// - `v[k][j] += lr * err * w[j] * a_j * (1 - a_j) * x_k`, reading the
    ///   pre-update `w[j]`;
    /// - `w[j] += lr * err * a_j` for `j < hidden`; the bias weight
    ///   `w[hidden]` is never updated.
    ///
    /// This is a simplified update, not canonical backpropagation: the error
    /// is not decomposed per hidden unit, and the output bias stays frozen
    /// at its random initial value.
    ///
    /// There is no shuffling, no batching, and no early stopping; training
    /// always runs exactly `max_epochs` passes. Calling `fit` again resumes
    /// from the current weights (updates accumulate; nothing is reset).
    ///
    /// Returns an error if the tables differ in length. `max_epochs == 0`
    /// validates the shapes and returns without touching the weights.
    pub fn fit(&mut self, inputs: &[[f64; 2]], targets: &[f64]) -> Result<()> {
        if inputs.len() != targets.len() {
            return Err(Error::InvalidData(format!(
                "inputs/targets length mismatch: {} vs {}",
                inputs.len(),
                targets.len()
            )));
        }

        let mut scratch = self.scratch();
        for _ in 0..self.max_epochs() {
            for (input, &target) in inputs.iter().zip(targets) {
                self.update_sample(*input, target, &mut scratch);
            }
        }
        Ok(())
    }

    /// Mean squared error of the model's predictions over `data`:
    /// `mean((predict(x) - y)^2)`.
    ///
    /// Returns an error for an empty dataset (the mean is undefined).
    pub fn evaluate_mse(&self, data: &Dataset) -> Result<f64> {
        if data.is_empty() {
            return Err(Error::InvalidData("dataset must not be empty".to_owned()));
        }

        let mut scratch = self.scratch();
        let mut sum_sq = 0.0;
        for idx in 0..data.len() {
            let diff = self.forward(data.input(idx), &mut scratch) - data.target(idx);
            sum_sq += diff * diff;
        }
        Ok(sum_sq / data.len() as f64)
    }
}
