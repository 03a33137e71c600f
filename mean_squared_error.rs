use crate::info::{FeatureSchema, MetricInfo};
use crate::input::{MetricInput, MetricResult};
use crate::registry::MetricConfig;
use crate::{regression, Metric, MetricError};

/**
The mean squared error is the weighted average of squared differences between the predicted values and the references.

This metric declares its metadata and delegates all numeric work to [`regression::mean_squared_error`](fn.mean_squared_error.html). Constructing it with the `"multioutput"` config name declares vector-valued samples; the default configuration declares scalar samples.
*/
#[derive(Default)]
pub struct MeanSquaredError {
	config: MetricConfig,
}

const DESCRIPTION: &str = "\
The mean_squared_error metric computes the mean square error, a risk metric \
corresponding to the expected value of the squared (quadratic) error or loss.";

const INPUTS_DESCRIPTION: &str = "\
predictions: Estimated target values.
references: Ground truth (correct) target values.
sample_weight (optional): Weighting of each sample.
multioutput (optional): Defines aggregating of multiple output values. A
	weight per output averages the per-output errors. Alternatively, raw
	values returns a full set of errors and uniform average averages them
	with uniform weight. Defaults to uniform average.
root (optional, deprecated): Legacy flag selecting the root mean squared
	error. Use the root_mean_squared_error metric instead.";

pub(crate) const CITATION: &str = "\
@article{scikit-learn,
  title={Scikit-learn: Machine Learning in {P}ython},
  author={Pedregosa, F. and Varoquaux, G. and Gramfort, A. and Michel, V.
         and Thirion, B. and Grisel, O. and Blondel, M. and Prettenhofer, P.
         and Weiss, R. and Dubourg, V. and Vanderplas, J. and Passos, A. and
         Cournapeau, D. and Brucher, M. and Perrot, M. and Duchesnay, E.},
  journal={Journal of Machine Learning Research},
  volume={12},
  pages={2825--2830},
  year={2011}
}";

impl MeanSquaredError {
	pub fn new(config: MetricConfig) -> Self {
		Self { config }
	}
}

impl Metric for MeanSquaredError {
	fn tag(&self) -> &str {
		"mean_squared_error"
	}

	fn info(&self) -> MetricInfo {
		MetricInfo {
			description: DESCRIPTION,
			citation: CITATION,
			inputs_description: INPUTS_DESCRIPTION,
			features: if self.config.is_multioutput() {
				FeatureSchema::Vector
			} else {
				FeatureSchema::Scalar
			},
			reference_urls: &[
				"https://scikit-learn.org/stable/modules/generated/sklearn.metrics.mean_squared_error.html",
			],
		}
	}

	fn compute(&self, input: MetricInput) -> Result<MetricResult, MetricError> {
		let root = match input.root {
			Some(root) => {
				log::warn!(
					"'root' is deprecated and will be removed in a future release. To calculate the root mean squared error, use the \"root_mean_squared_error\" metric instead."
				);
				root
			}
			None => false,
		};
		let value = if root {
			regression::root_mean_squared_error(
				input.references,
				input.predictions,
				input.sample_weight,
				&input.multioutput,
			)?
		} else {
			regression::mean_squared_error(
				input.references,
				input.predictions,
				input.sample_weight,
				&input.multioutput,
			)?
		};
		let mut result = MetricResult::new();
		result.insert(self.tag().to_owned(), value);
		Ok(result)
	}
}

#[cfg(test)]
use crate::input::{MetricValue, Multioutput};
#[cfg(test)]
use ndarray::prelude::*;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(test)]
static WARNINGS: AtomicUsize = AtomicUsize::new(0);

#[cfg(test)]
struct WarningCounter;

#[cfg(test)]
impl log::Log for WarningCounter {
	fn enabled(&self, metadata: &log::Metadata) -> bool {
		metadata.level() <= log::Level::Warn
	}

	fn log(&self, record: &log::Record) {
		if record.level() == log::Level::Warn {
			WARNINGS.fetch_add(1, Ordering::SeqCst);
		}
	}

	fn flush(&self) {}
}

#[cfg(test)]
static WARNING_COUNTER: WarningCounter = WarningCounter;

#[test]
fn test_compute() {
	let metric = MeanSquaredError::default();
	let predictions = [2.5, 0.0, 2.0, 8.0];
	let references = [3.0, -0.5, 2.0, 7.0];
	let result = metric
		.compute(MetricInput::from_slices(&predictions, &references))
		.unwrap();
	insta::assert_debug_snapshot!(result, @r###"
 {
     "mean_squared_error": Scalar(
         0.375,
     ),
 }
 "###);
}

#[test]
fn test_compute_is_idempotent() {
	let metric = MeanSquaredError::default();
	let predictions = [2.5, 0.0, 2.0, 8.0];
	let references = [3.0, -0.5, 2.0, 7.0];
	let first = metric
		.compute(MetricInput::from_slices(&predictions, &references))
		.unwrap();
	let second = metric
		.compute(MetricInput::from_slices(&predictions, &references))
		.unwrap();
	assert_eq!(first, second);
}

#[test]
fn test_compute_legacy_root_flag() {
	// tests share one process, so this must stay the only test that passes the legacy flag
	log::set_logger(&WARNING_COUNTER).unwrap();
	log::set_max_level(log::LevelFilter::Warn);
	let metric = MeanSquaredError::default();
	let predictions = [2.5, 0.0, 2.0, 8.0];
	let references = [3.0, -0.5, 2.0, 7.0];
	// omitting the flag computes silently
	let result = metric
		.compute(MetricInput::from_slices(&predictions, &references))
		.unwrap();
	assert_eq!(result["mean_squared_error"], MetricValue::Scalar(0.375));
	assert_eq!(WARNINGS.load(Ordering::SeqCst), 0);
	let mut input = MetricInput::from_slices(&predictions, &references);
	input.root = Some(true);
	let result = metric.compute(input).unwrap();
	match &result["mean_squared_error"] {
		MetricValue::Scalar(rmse) => assert!(f32::abs(rmse - 0.375f32.sqrt()) < 1e-6),
		MetricValue::Vector(_) => panic!("expected a scalar"),
	}
	assert_eq!(WARNINGS.load(Ordering::SeqCst), 1);
	// an explicit false warns too but keeps the plain mean squared error
	let mut input = MetricInput::from_slices(&predictions, &references);
	input.root = Some(false);
	let result = metric.compute(input).unwrap();
	assert_eq!(result["mean_squared_error"], MetricValue::Scalar(0.375));
	assert_eq!(WARNINGS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_compute_multioutput() {
	let metric = MeanSquaredError::new(MetricConfig::with_name("multioutput"));
	assert_eq!(metric.info().features, FeatureSchema::Vector);
	let predictions = arr2(&[[0.0, 2.0], [-1.0, 2.0], [8.0, -5.0]]);
	let references = arr2(&[[0.5, 1.0], [-1.0, 1.0], [7.0, -6.0]]);
	let mut input = MetricInput::new(predictions.view(), references.view());
	input.multioutput = Multioutput::Weights(arr1(&[0.3, 0.7]));
	let result = metric.compute(input).unwrap();
	match &result["mean_squared_error"] {
		MetricValue::Scalar(mse) => assert!(f32::abs(mse - 0.825) < 1e-6),
		MetricValue::Vector(_) => panic!("expected a scalar"),
	}
}

#[test]
fn test_compute_shape_mismatch() {
	let metric = MeanSquaredError::default();
	let predictions = [2.5, 0.0, 2.0, 8.0];
	let references = [3.0, -0.5, 2.0];
	let error = metric
		.compute(MetricInput::from_slices(&predictions, &references))
		.unwrap_err();
	assert!(matches!(error, MetricError::ShapeMismatch { .. }));
}

#[test]
fn test_info_default_schema() {
	let metric = MeanSquaredError::default();
	assert_eq!(metric.info().features, FeatureSchema::Scalar);
}
