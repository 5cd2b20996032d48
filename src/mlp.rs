use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::{Error, Result};

/// Standard deviation of the Gaussian weight initialization.
const INIT_STDEV: f64 = 0.1;

/// A one-hidden-layer perceptron: two inputs, `hidden` sigmoid units with no
/// bias term, and a single linear output unit with a bias weight.
///
/// Parameter layout:
/// - `v`: hidden weights, one row per input feature; `v[k][j]` connects
///   input `k` to hidden unit `j` (shape 2 x hidden).
/// - `w`: output weights of length `hidden + 1`; `w[j]` for `j < hidden`
///   connects hidden unit `j` to the output, and `w[hidden]` is the bias
///   weight, paired with a constant 1.0 input.
///
/// The bias weight `w[hidden]` keeps its random initial value for the
/// model's lifetime: [`Mlp::fit`] updates `v` and the first `hidden`
/// entries of `w` only.
#[derive(Debug, Clone)]
pub struct Mlp {
    hidden: usize,
    lr: f64,
    max_epochs: usize,
    v: [Vec<f64>; 2],
    w: Vec<f64>,
}

/// Reusable hidden-activation buffer for [`Mlp::forward`].
///
/// The activations of the most recent forward pass live here.
#[derive(Debug, Clone)]
pub struct Scratch {
    hidden: Vec<f64>,
}

impl Mlp {
    pub fn new(hidden: usize, lr: f64, max_epochs: usize) -> Result<Self> {
        let mut rng = StdRng::from_entropy();
        Self::new_with_rng(hidden, lr, max_epochs, &mut rng)
    }

    pub fn new_with_seed(hidden: usize, lr: f64, max_epochs: usize, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_with_rng(hidden, lr, max_epochs, &mut rng)
    }

    /// Construct a model using the provided RNG.
    ///
    /// Every entry of `v`, then every entry of `w`, is drawn i.i.d. from
    /// Normal(0, 0.1^2) before any training.
    ///
    /// Errors if `hidden == 0` (a degenerate weight matrix with zero
    /// columns) or if `lr` is not finite and positive. `max_epochs == 0` is
    /// valid: training then leaves the initial weights untouched.
    pub fn new_with_rng<R: Rng + ?Sized>(
        hidden: usize,
        lr: f64,
        max_epochs: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if hidden == 0 {
            return Err(Error::InvalidConfig(
                "hidden unit count must be > 0".to_owned(),
            ));
        }
        if !(lr.is_finite() && lr > 0.0) {
            return Err(Error::InvalidConfig(
                "learning rate must be finite and > 0".to_owned(),
            ));
        }

        let dist = Normal::new(0.0, INIT_STDEV).expect("stdev is finite and positive");
        let v0: Vec<f64> = (0..hidden).map(|_| dist.sample(rng)).collect();
        let v1: Vec<f64> = (0..hidden).map(|_| dist.sample(rng)).collect();
        let w: Vec<f64> = (0..=hidden).map(|_| dist.sample(rng)).collect();

        Ok(Self {
            hidden,
            lr,
            max_epochs,
            v: [v0, v1],
            w,
        })
    }

    #[inline]
    pub fn hidden_units(&self) -> usize {
        self.hidden
    }

    #[inline]
    pub fn learning_rate(&self) -> f64 {
        self.lr
    }

    /// Number of full passes a single [`Mlp::fit`] call runs.
    #[inline]
    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    /// Returns the hidden weight rows: `hidden_weights()[k][j]` connects
    /// input `k` to hidden unit `j`.
    #[inline]
    pub fn hidden_weights(&self) -> &[Vec<f64>; 2] {
        &self.v
    }

    /// Returns the output weight vector; the last entry is the bias weight.
    #[inline]
    pub fn output_weights(&self) -> &[f64] {
        &self.w
    }

    pub fn scratch(&self) -> Scratch {
        Scratch::new(self)
    }

    /// Forward pass for a single input pair.
    ///
    /// Writes the hidden activations into `scratch` and returns the output.
    /// Each hidden unit computes `sigmoid(v[0][j]*x1 + v[1][j]*x2)` (no bias
    /// term); the output unit is linear: the activation sum weighted by `w`
    /// plus the bias weight times a constant 1.0.
    ///
    /// Pure in the current parameters; finite inputs cannot fail.
    ///
    /// Shape contract: `scratch` must be built for this model (same hidden
    /// width). Misuse panics.
    pub fn forward(&self, input: [f64; 2], scratch: &mut Scratch) -> f64 {
        assert_eq!(
            scratch.hidden.len(),
            self.hidden,
            "scratch has {} hidden slots, model has {} hidden units",
            scratch.hidden.len(),
            self.hidden
        );

        let [x1, x2] = input;
        let mut output = self.w[self.hidden];
        for j in 0..self.hidden {
            let s = self.v[0][j].mul_add(x1, self.v[1][j] * x2);
            let a = sigmoid(s);
            scratch.hidden[j] = a;
            output = self.w[j].mul_add(a, output);
        }
        output
    }

    /// Predict the output for one input pair.
    ///
    /// Convenience wrapper over [`Mlp::forward`] that allocates a fresh
    /// scratch per call. Callers that also want the hidden activations, or
    /// that predict in a loop, should hold a [`Scratch`] and call `forward`.
    #[inline]
    pub fn predict(&self, input: [f64; 2]) -> f64 {
        let mut scratch = self.scratch();
        self.forward(input, &mut scratch)
    }

    #[inline]
    pub(crate) fn update_sample(&mut self, input: [f64; 2], target: f64, scratch: &mut Scratch) {
        let output = self.forward(input, scratch);
        // One error value, broadcast to every hidden unit.
        let err = target - output;
        let [x1, x2] = input;
        for j in 0..self.hidden {
            let a = scratch.hidden[j];
            // sigmoid'(s) expressed via the cached activation; the hidden
            // update reads w[j] before it is itself updated below.
            let d_act = a * (1.0 - a);
            let dv = self.lr * err * self.w[j] * d_act;
            self.v[0][j] += dv * x1;
            self.v[1][j] += dv * x2;
            self.w[j] += self.lr * err * a;
        }
        // w[self.hidden], the bias weight, is never updated.
    }
}

impl Scratch {
    pub fn new(mlp: &Mlp) -> Self {
        Self {
            hidden: vec![0.0; mlp.hidden],
        }
    }

    /// Returns the hidden activations written by the last forward pass.
    #[inline]
    pub fn hidden(&self) -> &[f64] {
        &self.hidden
    }
}

/// Numerically stable logistic function `1 / (1 + exp(-s))`.
#[inline]
fn sigmoid(s: f64) -> f64 {
    if s >= 0.0 {
        let z = (-s).exp();
        1.0 / (1.0 + z)
    } else {
        let z = s.exp();
        z / (1.0 + z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn seeded_init_is_deterministic() {
        let a = Mlp::new_with_seed(3, 0.01, 10, 123).unwrap();
        let b = Mlp::new_with_seed(3, 0.01, 10, 123).unwrap();
        assert_eq!(a.hidden_weights(), b.hidden_weights());
        assert_eq!(a.output_weights(), b.output_weights());
        assert_eq!(a.predict([0.3, 2.7]), b.predict([0.3, 2.7]));
    }

    #[test]
    fn construction_has_expected_shapes() {
        let mlp = Mlp::new_with_seed(7, 0.01, 0, 0).unwrap();
        assert_eq!(mlp.hidden_units(), 7);
        assert_eq!(mlp.hidden_weights()[0].len(), 7);
        assert_eq!(mlp.hidden_weights()[1].len(), 7);
        assert_eq!(mlp.output_weights().len(), 8);
    }

    #[test]
    fn construction_rejects_bad_hyperparameters() {
        assert!(Mlp::new_with_seed(0, 0.01, 10, 0).is_err());
        assert!(Mlp::new_with_seed(5, 0.0, 10, 0).is_err());
        assert!(Mlp::new_with_seed(5, -0.1, 10, 0).is_err());
        assert!(Mlp::new_with_seed(5, f64::NAN, 10, 0).is_err());
        assert!(Mlp::new_with_seed(5, f64::INFINITY, 10, 0).is_err());
        assert!(Mlp::new_with_seed(1, 0.01, 0, 0).is_ok());
    }

    #[test]
    fn forward_is_pure() {
        let mlp = Mlp::new_with_seed(5, 0.01, 0, 9).unwrap();
        let first = mlp.predict([1.0, 2.0]);
        let second = mlp.predict([1.0, 2.0]);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn untrained_forward_matches_formula() {
        // H=5, lr=0.01, E=0: predict at (pi/2, pi/2) must equal the value
        // computed directly from the freshly initialized weights.
        let mlp = Mlp::new_with_seed(5, 0.01, 0, 42).unwrap();
        let x = [FRAC_PI_2, FRAC_PI_2];

        let v = mlp.hidden_weights();
        let w = mlp.output_weights();
        let mut expected = 0.0;
        for j in 0..5 {
            let s = v[0][j] * x[0] + v[1][j] * x[1];
            let a = 1.0 / (1.0 + (-s).exp());
            expected += w[j] * a;
        }
        expected += w[5];

        assert!((mlp.predict(x) - expected).abs() < 1e-12);
    }

    #[test]
    fn scratch_exposes_hidden_activations() {
        let mlp = Mlp::new_with_seed(4, 0.01, 0, 1).unwrap();
        let mut scratch = mlp.scratch();
        let out = mlp.forward([0.5, 1.5], &mut scratch);

        assert!(scratch.hidden().iter().all(|a| (0.0..=1.0).contains(a)));

        // The output is reconstructible from the exposed activations.
        let w = mlp.output_weights();
        let mut sum = w[4];
        for (a, wj) in scratch.hidden().iter().zip(w) {
            sum += wj * a;
        }
        assert!((out - sum).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn forward_panics_on_scratch_mismatch() {
        let a = Mlp::new_with_seed(3, 0.01, 0, 0).unwrap();
        let b = Mlp::new_with_seed(4, 0.01, 0, 0).unwrap();
        let mut scratch_b = b.scratch();
        a.forward([0.0, 0.0], &mut scratch_b);
    }

    #[test]
    fn sigmoid_basic_values() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(10.0) > 0.999);
        assert!(sigmoid(-10.0) < 0.001);
        assert!((sigmoid(0.5) + sigmoid(-0.5) - 1.0).abs() < 1e-15);
    }
}
