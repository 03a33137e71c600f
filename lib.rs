/*!
This crate defines the [`Metric`](trait.Metric.html) trait, a small interface for evaluation metrics that declare metadata and compute a single named score, along with the concrete regression metrics [`MeanSquaredError`](struct.MeanSquaredError.html) and [`RootMeanSquaredError`](struct.RootMeanSquaredError.html). Metrics can be constructed directly or resolved by name with [`load_metric`](fn.load_metric.html).
*/

#![allow(clippy::tabs_in_doc_comments)]

mod error;
mod info;
mod input;
mod mean_squared_error;
mod regression;
mod registry;
mod root_mean_squared_error;

pub use self::error::MetricError;
pub use self::info::{FeatureSchema, MetricInfo};
pub use self::input::{MetricInput, MetricResult, MetricValue, Multioutput};
pub use self::mean_squared_error::MeanSquaredError;
pub use self::regression::{mean_squared_error, root_mean_squared_error};
pub use self::registry::{load_metric, MetricConfig};
pub use self::root_mean_squared_error::RootMeanSquaredError;

/**
The `Metric` trait defines a common interface to metrics that receive predictions and references all at once and produce a single named score.

A metric holds nothing but the configuration it was constructed with, so calling `compute()` twice with the same input produces the same output. The trait is object safe, which lets a registry hand out metrics as `Box<dyn Metric>` resolved by name.

# Examples

```
use mettle::{Metric, MeanSquaredError, MetricInput, MetricValue};

let metric = MeanSquaredError::default();
let predictions = [2.5, 0.0, 2.0, 8.0];
let references = [3.0, -0.5, 2.0, 7.0];
let result = metric
	.compute(MetricInput::from_slices(&predictions, &references))
	.unwrap();
assert_eq!(result["mean_squared_error"], MetricValue::Scalar(0.375));
```
*/
pub trait Metric {
	/// The identifying tag for this metric, used as the single key of its [`MetricResult`].
	fn tag(&self) -> &str;
	/// Describe this metric to the caller: description, citation, and expected input schema.
	fn info(&self) -> MetricInfo;
	/// Compute the score for `input`, returning a result with exactly one entry keyed by `tag()`.
	fn compute(&self, input: MetricInput) -> Result<MetricResult, MetricError>;
}

impl std::fmt::Debug for dyn Metric {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Metric").field("tag", &self.tag()).finish()
	}
}
