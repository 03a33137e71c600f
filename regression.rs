use crate::{MetricError, MetricValue, Multioutput};
use itertools::izip;
use ndarray::prelude::*;
use num_traits::ToPrimitive;

/// Compute the mean squared error given references and predictions with shape (n_examples, n_outputs), aggregated across outputs according to `multioutput`.
pub fn mean_squared_error(
	references: ArrayView2<f32>,
	predictions: ArrayView2<f32>,
	sample_weight: Option<ArrayView1<f32>>,
	multioutput: &Multioutput,
) -> Result<MetricValue, MetricError> {
	let errors = output_errors(references, predictions, sample_weight)?;
	aggregate(errors, multioutput)
}

/// Compute the root mean squared error. The square root is taken per output, before aggregating across outputs.
pub fn root_mean_squared_error(
	references: ArrayView2<f32>,
	predictions: ArrayView2<f32>,
	sample_weight: Option<ArrayView1<f32>>,
	multioutput: &Multioutput,
) -> Result<MetricValue, MetricError> {
	let mut errors = output_errors(references, predictions, sample_weight)?;
	errors.mapv_inplace(f64::sqrt);
	aggregate(errors, multioutput)
}

/// Compute the weighted average of squared errors for each output, accumulating in f64.
fn output_errors(
	references: ArrayView2<f32>,
	predictions: ArrayView2<f32>,
	sample_weight: Option<ArrayView1<f32>>,
) -> Result<Array1<f64>, MetricError> {
	if predictions.shape() != references.shape() {
		return Err(MetricError::ShapeMismatch {
			predictions: predictions.shape().to_vec(),
			references: references.shape().to_vec(),
		});
	}
	let (n_examples, n_outputs) = predictions.dim();
	if n_examples == 0 || n_outputs == 0 {
		return Err(MetricError::EmptyInput);
	}
	if let Some(sample_weight) = &sample_weight {
		if sample_weight.len() != n_examples {
			return Err(MetricError::SampleWeightLength {
				found: sample_weight.len(),
				expected: n_examples,
			});
		}
		if sample_weight.iter().any(|weight| *weight < 0.0) || sample_weight.sum() <= 0.0 {
			return Err(MetricError::InvalidSampleWeight);
		}
	}
	let mut errors = Array1::<f64>::zeros(n_outputs);
	let mut weight_sum = 0.0;
	for (example_index, (prediction, reference)) in predictions
		.axis_iter(Axis(0))
		.zip(references.axis_iter(Axis(0)))
		.enumerate()
	{
		let weight = match &sample_weight {
			Some(sample_weight) => sample_weight[example_index].to_f64().unwrap(),
			None => 1.0,
		};
		weight_sum += weight;
		for (error, prediction, reference) in izip!(errors.iter_mut(), prediction.iter(), reference.iter()) {
			let difference = (*prediction - *reference).to_f64().unwrap();
			*error += weight * difference * difference;
		}
	}
	errors.mapv_inplace(|error| error / weight_sum);
	Ok(errors)
}

fn aggregate(errors: Array1<f64>, multioutput: &Multioutput) -> Result<MetricValue, MetricError> {
	match multioutput {
		Multioutput::RawValues => Ok(MetricValue::Vector(errors.mapv(|error| error as f32))),
		Multioutput::UniformAverage => {
			let mean = errors.sum() / errors.len().to_f64().unwrap();
			Ok(MetricValue::Scalar(mean as f32))
		}
		Multioutput::Weights(weights) => {
			if weights.len() != errors.len() {
				return Err(MetricError::OutputWeightLength {
					found: weights.len(),
					expected: errors.len(),
				});
			}
			if weights.iter().any(|weight| *weight < 0.0) || weights.sum() <= 0.0 {
				return Err(MetricError::InvalidOutputWeights);
			}
			let weighted: f64 = izip!(errors.iter(), weights.iter())
				.map(|(error, weight)| error * weight.to_f64().unwrap())
				.sum();
			let mean = weighted / weights.sum().to_f64().unwrap();
			Ok(MetricValue::Scalar(mean as f32))
		}
	}
}

#[cfg(test)]
fn scalar(value: &MetricValue) -> f32 {
	match value {
		MetricValue::Scalar(value) => *value,
		MetricValue::Vector(_) => panic!("expected a scalar"),
	}
}

#[test]
fn test_mean_squared_error() {
	let references = arr2(&[[3.0], [-0.5], [2.0], [7.0]]);
	let predictions = arr2(&[[2.5], [0.0], [2.0], [8.0]]);
	let mse = mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::UniformAverage,
	)
	.unwrap();
	assert_eq!(mse, MetricValue::Scalar(0.375));
}

#[test]
fn test_mean_squared_error_sample_weight() {
	let references = arr2(&[[0.0], [0.0]]);
	let predictions = arr2(&[[0.0], [1.0]]);
	let sample_weight = arr1(&[1.0, 3.0]);
	let mse = mean_squared_error(
		references.view(),
		predictions.view(),
		Some(sample_weight.view()),
		&Multioutput::UniformAverage,
	)
	.unwrap();
	assert_eq!(mse, MetricValue::Scalar(0.75));
}

#[test]
fn test_mean_squared_error_multioutput() {
	let references = arr2(&[[0.5, 1.0], [-1.0, 1.0], [7.0, -6.0]]);
	let predictions = arr2(&[[0.0, 2.0], [-1.0, 2.0], [8.0, -5.0]]);
	let raw = mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::RawValues,
	)
	.unwrap();
	match &raw {
		MetricValue::Vector(errors) => {
			assert_eq!(errors.len(), 2);
			assert!(f32::abs(errors[0] - 0.41666667) < 1e-6);
			assert!(f32::abs(errors[1] - 1.0) < 1e-6);
		}
		MetricValue::Scalar(_) => panic!("expected one error per output"),
	}
	let uniform = mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::UniformAverage,
	)
	.unwrap();
	assert!(f32::abs(scalar(&uniform) - 0.7083333) < 1e-6);
	let weighted = mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::Weights(arr1(&[0.3, 0.7])),
	)
	.unwrap();
	assert!(f32::abs(scalar(&weighted) - 0.825) < 1e-6);
	// scaling all weights by the same factor leaves the weighted mean unchanged
	let scaled = mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::Weights(arr1(&[3.0, 7.0])),
	)
	.unwrap();
	assert!(f32::abs(scalar(&scaled) - scalar(&weighted)) < 1e-6);
}

#[test]
fn test_root_mean_squared_error() {
	let references = arr2(&[[3.0], [-0.5], [2.0], [7.0]]);
	let predictions = arr2(&[[2.5], [0.0], [2.0], [8.0]]);
	let rmse = root_mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::UniformAverage,
	)
	.unwrap();
	assert!(f32::abs(scalar(&rmse) - 0.375f32.sqrt()) < 1e-6);
}

#[test]
fn test_root_mean_squared_error_roots_before_aggregating() {
	let references = arr2(&[[0.0, 0.0], [0.0, 0.0]]);
	let predictions = arr2(&[[1.0, 0.0], [1.0, 4.0]]);
	// per-output mse is [1, 8], so per-output rmse is [1, sqrt(8)]
	let rmse = root_mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::UniformAverage,
	)
	.unwrap();
	let expected = (1.0 + 8.0f32.sqrt()) / 2.0;
	assert!(f32::abs(scalar(&rmse) - expected) < 1e-6);
	let mse = mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::UniformAverage,
	)
	.unwrap();
	assert!(f32::abs(scalar(&mse) - 4.5) < 1e-6);
	assert!(f32::abs(scalar(&rmse) - scalar(&mse).sqrt()) > 1e-3);
}

#[test]
fn test_shape_mismatch() {
	let references = arr2(&[[3.0], [-0.5], [2.0]]);
	let predictions = arr2(&[[2.5], [0.0], [2.0], [8.0]]);
	let error = mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::UniformAverage,
	)
	.unwrap_err();
	insta::assert_snapshot!(error.to_string(), @"predictions have shape [4, 1] but references have shape [3, 1]");
}

#[test]
fn test_invalid_sample_weight() {
	let references = arr2(&[[1.0], [2.0]]);
	let predictions = arr2(&[[1.0], [2.0]]);
	let error = mean_squared_error(
		references.view(),
		predictions.view(),
		Some(arr1(&[1.0]).view()),
		&Multioutput::UniformAverage,
	)
	.unwrap_err();
	assert!(matches!(
		error,
		MetricError::SampleWeightLength {
			found: 1,
			expected: 2
		}
	));
	let error = mean_squared_error(
		references.view(),
		predictions.view(),
		Some(arr1(&[1.0, -1.0]).view()),
		&Multioutput::UniformAverage,
	)
	.unwrap_err();
	assert!(matches!(error, MetricError::InvalidSampleWeight));
}

#[test]
fn test_invalid_output_weights() {
	let references = arr2(&[[0.5, 1.0], [-1.0, 1.0]]);
	let predictions = arr2(&[[0.0, 2.0], [-1.0, 2.0]]);
	let error = mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::Weights(arr1(&[0.3, 0.3, 0.4])),
	)
	.unwrap_err();
	assert!(matches!(
		error,
		MetricError::OutputWeightLength {
			found: 3,
			expected: 2
		}
	));
}

#[test]
fn test_empty_input() {
	let references = Array2::<f32>::zeros((0, 1));
	let predictions = Array2::<f32>::zeros((0, 1));
	let error = mean_squared_error(
		references.view(),
		predictions.view(),
		None,
		&Multioutput::UniformAverage,
	)
	.unwrap_err();
	assert!(matches!(error, MetricError::EmptyInput));
}
