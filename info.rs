/// The static metadata a metric exposes to callers and registries.
#[derive(Debug, Clone)]
pub struct MetricInfo {
	pub description: &'static str,
	pub citation: &'static str,
	pub inputs_description: &'static str,
	/// The per-sample value shape this metric expects, fixed by the metric's configuration.
	pub features: FeatureSchema,
	pub reference_urls: &'static [&'static str],
}

/// Whether each sample is a single value or a fixed-width vector of target values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSchema {
	Scalar,
	Vector,
}
