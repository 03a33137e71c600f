use ndarray::prelude::*;
use std::collections::BTreeMap;

/**
The input to a [`Metric`](trait.Metric.html) computation.

`predictions` and `references` have shape `(n_examples, n_outputs)`. Metrics configured for scalar samples take `n_outputs == 1`; [`MetricInput::from_slices`](#method.from_slices) lifts plain slices into that shape.
*/
pub struct MetricInput<'a> {
	pub predictions: ArrayView2<'a, f32>,
	pub references: ArrayView2<'a, f32>,
	/// Optional per-sample weights of length `n_examples`. `None` means uniform weighting.
	pub sample_weight: Option<ArrayView1<'a, f32>>,
	pub multioutput: Multioutput,
	/// Legacy flag: `Some(true)` asks for the root mean squared error, `Some(false)` for the plain mean squared error. Passing it explicitly is deprecated in favor of the `root_mean_squared_error` metric, and `None` leaves the metric's default behavior in place.
	pub root: Option<bool>,
}

impl<'a> MetricInput<'a> {
	pub fn new(predictions: ArrayView2<'a, f32>, references: ArrayView2<'a, f32>) -> Self {
		Self {
			predictions,
			references,
			sample_weight: None,
			multioutput: Multioutput::default(),
			root: None,
		}
	}

	/// Treat each entry of `predictions` and `references` as one scalar-valued sample.
	pub fn from_slices(predictions: &'a [f32], references: &'a [f32]) -> Self {
		let predictions = ArrayView2::from_shape((predictions.len(), 1), predictions).unwrap();
		let references = ArrayView2::from_shape((references.len(), 1), references).unwrap();
		Self::new(predictions, references)
	}
}

/// How to aggregate per-output errors when samples are vector-valued.
#[derive(Debug, Clone, PartialEq)]
pub enum Multioutput {
	/// Average the per-output errors with uniform weight.
	UniformAverage,
	/// Return the full set of per-output errors without aggregating.
	RawValues,
	/// Average the per-output errors with the given weights, which must have one entry per output.
	Weights(Array1<f32>),
}

impl Default for Multioutput {
	fn default() -> Self {
		Multioutput::UniformAverage
	}
}

/// A computed score: a single value, or one value per output in raw-values mode.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
	Scalar(f32),
	Vector(Array1<f32>),
}

/// The result of a metric computation: exactly one entry, keyed by the metric's tag.
pub type MetricResult = BTreeMap<String, MetricValue>;
