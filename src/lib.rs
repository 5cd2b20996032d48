//! A small one-hidden-layer MLP trained online against a synthetic target.
//!
//! `shallownet` generates its own labeled data from the fixed surface
//! `y = cos(x1*x2) * cos(2*x1)` with `x1, x2` uniform in `[0, pi)`, trains a
//! two-input, single-output network on it sample by sample, and reports mean
//! squared error on held-out draws of the same surface.
//!
//! # Design notes
//!
//! - One hidden layer of sigmoid units without bias terms; one linear output
//!   unit whose bias weight is drawn at initialization and never trained.
//! - The per-sample update is a simplified gradient (see [`Mlp::fit`]): one
//!   error value broadcast to all hidden units, and the pre-update output
//!   weight reused inside the hidden-weight update.
//! - Randomness is injected: datasets and models are built from seeds or
//!   caller-provided RNGs, so runs are reproducible.
//!
//! # Panics vs `Result`
//!
//! - [`Mlp::forward`] panics if the scratch buffer does not match the model.
//! - Construction and training validate inputs and return [`Result`]: zero
//!   hidden units, a non-positive or non-finite learning rate, and
//!   mismatched feature/target tables are reported as errors.
//!
//! # Quick start
//!
//! ```rust
//! use shallownet::{Mlp, Sampler};
//!
//! # fn main() -> shallownet::Result<()> {
//! let mut sampler = Sampler::from_seed(0);
//! let train = sampler.generate(200);
//!
//! let mut model = Mlp::new_with_seed(5, 0.01, 50, 1)?;
//! model.fit(train.inputs(), train.targets())?;
//!
//! let test = sampler.generate(100);
//! let mse = model.evaluate_mse(&test)?;
//! assert!(mse.is_finite() && mse >= 0.0);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod mlp;
mod train;

pub use data::{Dataset, Sampler, target};
pub use error::{Error, Result};
pub use mlp::{Mlp, Scratch};
