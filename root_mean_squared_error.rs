use crate::info::{FeatureSchema, MetricInfo};
use crate::input::{MetricInput, MetricResult};
use crate::registry::MetricConfig;
use crate::{regression, Metric, MetricError};

/// The root mean squared error is the square root of the mean squared error, taken per output before aggregating across outputs.
#[derive(Default)]
pub struct RootMeanSquaredError {
	config: MetricConfig,
}

const DESCRIPTION: &str = "\
The root_mean_squared_error metric computes the square root of the mean \
square error, expressed in the same units as the target values.";

const INPUTS_DESCRIPTION: &str = "\
predictions: Estimated target values.
references: Ground truth (correct) target values.
sample_weight (optional): Weighting of each sample.
multioutput (optional): Defines aggregating of multiple output values. A
	weight per output averages the per-output errors. Alternatively, raw
	values returns a full set of errors and uniform average averages them
	with uniform weight. Defaults to uniform average.";

impl RootMeanSquaredError {
	pub fn new(config: MetricConfig) -> Self {
		Self { config }
	}
}

impl Metric for RootMeanSquaredError {
	fn tag(&self) -> &str {
		"root_mean_squared_error"
	}

	fn info(&self) -> MetricInfo {
		MetricInfo {
			description: DESCRIPTION,
			citation: crate::mean_squared_error::CITATION,
			inputs_description: INPUTS_DESCRIPTION,
			features: if self.config.is_multioutput() {
				FeatureSchema::Vector
			} else {
				FeatureSchema::Scalar
			},
			reference_urls: &[
				"https://scikit-learn.org/stable/modules/generated/sklearn.metrics.root_mean_squared_error.html",
			],
		}
	}

	fn compute(&self, input: MetricInput) -> Result<MetricResult, MetricError> {
		let value = regression::root_mean_squared_error(
			input.references,
			input.predictions,
			input.sample_weight,
			&input.multioutput,
		)?;
		let mut result = MetricResult::new();
		result.insert(self.tag().to_owned(), value);
		Ok(result)
	}
}

#[cfg(test)]
use crate::input::{MetricValue, Multioutput};
#[cfg(test)]
use ndarray::prelude::*;

#[test]
fn test_compute() {
	let metric = RootMeanSquaredError::default();
	let predictions = [2.5, 0.0, 2.0, 8.0];
	let references = [3.0, -0.5, 2.0, 7.0];
	let result = metric
		.compute(MetricInput::from_slices(&predictions, &references))
		.unwrap();
	match &result["root_mean_squared_error"] {
		MetricValue::Scalar(rmse) => assert!(f32::abs(rmse - 0.375f32.sqrt()) < 1e-6),
		MetricValue::Vector(_) => panic!("expected a scalar"),
	}
}

#[test]
fn test_compute_raw_values() {
	let metric = RootMeanSquaredError::new(MetricConfig::with_name("multioutput"));
	let predictions = arr2(&[[1.0, 0.0], [1.0, 4.0]]);
	let references = arr2(&[[0.0, 0.0], [0.0, 0.0]]);
	let mut input = MetricInput::new(predictions.view(), references.view());
	input.multioutput = Multioutput::RawValues;
	let result = metric.compute(input).unwrap();
	match &result["root_mean_squared_error"] {
		MetricValue::Vector(errors) => {
			assert!(f32::abs(errors[0] - 1.0) < 1e-6);
			assert!(f32::abs(errors[1] - 8.0f32.sqrt()) < 1e-6);
		}
		MetricValue::Scalar(_) => panic!("expected one error per output"),
	}
}
