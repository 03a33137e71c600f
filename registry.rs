use crate::{MeanSquaredError, Metric, MetricError, RootMeanSquaredError};

/// Static configuration fixed at metric construction. The only recognized config name is `"multioutput"`, which declares vector-valued samples.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct MetricConfig {
	pub config_name: Option<String>,
}

impl MetricConfig {
	pub fn with_name(config_name: impl Into<String>) -> Self {
		Self {
			config_name: Some(config_name.into()),
		}
	}

	pub(crate) fn is_multioutput(&self) -> bool {
		self.config_name.as_deref() == Some("multioutput")
	}
}

/// Resolve a metric by its tag.
pub fn load_metric(name: &str, config: MetricConfig) -> Result<Box<dyn Metric>, MetricError> {
	match name {
		"mean_squared_error" => Ok(Box::new(MeanSquaredError::new(config))),
		"root_mean_squared_error" => Ok(Box::new(RootMeanSquaredError::new(config))),
		_ => Err(MetricError::UnknownMetric(name.to_owned())),
	}
}

#[cfg(test)]
use crate::input::{MetricInput, MetricValue};

#[test]
fn test_load_metric() {
	let metric = load_metric("mean_squared_error", MetricConfig::default()).unwrap();
	assert_eq!(metric.tag(), "mean_squared_error");
	let predictions = [2.5, 0.0, 2.0, 8.0];
	let references = [3.0, -0.5, 2.0, 7.0];
	let result = metric
		.compute(MetricInput::from_slices(&predictions, &references))
		.unwrap();
	assert_eq!(result["mean_squared_error"], MetricValue::Scalar(0.375));
}

#[test]
fn test_load_unknown_metric() {
	let error = load_metric("r2_score", MetricConfig::default()).unwrap_err();
	insta::assert_snapshot!(error.to_string(), @r###"unknown metric "r2_score""###);
}

#[test]
fn test_config_deserialize() {
	let config: MetricConfig = serde_json::from_str(r#"{ "config_name": "multioutput" }"#).unwrap();
	assert!(config.is_multioutput());
}
