use thiserror::Error;

/// Errors surfaced by the numeric routines and the registry. Computation never recovers locally, so every variant propagates to the caller unchanged.
#[derive(Debug, Error)]
pub enum MetricError {
	#[error("predictions have shape {predictions:?} but references have shape {references:?}")]
	ShapeMismatch {
		predictions: Vec<usize>,
		references: Vec<usize>,
	},
	#[error("input arrays are empty")]
	EmptyInput,
	#[error("sample_weight has {found} entries but there are {expected} samples")]
	SampleWeightLength { found: usize, expected: usize },
	#[error("sample_weight entries must be non-negative with a positive sum")]
	InvalidSampleWeight,
	#[error("multioutput weights have {found} entries but there are {expected} outputs")]
	OutputWeightLength { found: usize, expected: usize },
	#[error("multioutput weights must be non-negative with a positive sum")]
	InvalidOutputWeights,
	#[error("unknown metric \"{0}\"")]
	UnknownMetric(String),
}
