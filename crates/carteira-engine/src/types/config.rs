//! Configuration for report computation.

use super::Category;
use serde::{Deserialize, Serialize};

/// How per-holding targets outside `[0, 100]` are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPolicy {
    /// Use the target exactly as stored, even when out of range.
    #[default]
    PassThrough,

    /// Clamp the target into `[0, 100]` before gap analysis.
    Clamp,
}

impl TargetPolicy {
    /// Returns the effective target for gap analysis.
    #[must_use]
    pub fn apply(&self, target_percent: f64) -> f64 {
        match self {
            Self::PassThrough => target_percent,
            Self::Clamp => {
                if target_percent.is_nan() {
                    0.0
                } else {
                    target_percent.clamp(0.0, 100.0)
                }
            }
        }
    }
}

/// Section order override for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLayout {
    /// Category the layout applies to.
    pub category: Category,

    /// Section keys in display order.
    pub sections: Vec<String>,
}

/// Configuration for report computation.
///
/// Controls parallelism, target handling, and section layouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum holdings count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Treatment of out-of-range per-holding targets.
    pub target_policy: TargetPolicy,

    /// Per-category section order overrides.
    pub section_layouts: Vec<SectionLayout>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100, // Use parallel if >100 holdings
            target_policy: TargetPolicy::PassThrough,
            section_layouts: Vec::new(),
        }
    }
}

impl ReportConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the target policy.
    #[must_use]
    pub fn with_target_policy(mut self, policy: TargetPolicy) -> Self {
        self.target_policy = policy;
        self
    }

    /// Overrides the section order of a category. Replaces any earlier override.
    #[must_use]
    pub fn with_section_layout<S: Into<String>>(
        mut self,
        category: Category,
        sections: impl IntoIterator<Item = S>,
    ) -> Self {
        self.section_layouts.retain(|l| l.category != category);
        self.section_layouts.push(SectionLayout {
            category,
            sections: sections.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Returns the section order for a category.
    ///
    /// The override wins when present, otherwise the category's canonical order.
    #[must_use]
    pub fn sections_for(&self, category: Category) -> Vec<String> {
        match self.section_layouts.iter().find(|l| l.category == category) {
            Some(layout) => layout.sections.clone(),
            None => category
                .canonical_sections()
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ReportConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 100);
        assert_eq!(config.target_policy, TargetPolicy::PassThrough);
        assert!(config.section_layouts.is_empty());
    }

    #[test]
    fn test_sequential() {
        let config = ReportConfig::sequential();
        assert!(!config.parallel);
        assert!(!config.should_parallelize(10_000));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ReportConfig::new()
            .with_parallel(true)
            .with_threshold(50)
            .with_target_policy(TargetPolicy::Clamp);

        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 50);
        assert_eq!(config.target_policy, TargetPolicy::Clamp);
    }

    #[test]
    fn test_section_layout_override() {
        let config = ReportConfig::new()
            .with_section_layout(Category::Etf, ["usa", "brazil"])
            .with_section_layout(Category::Etf, ["usa", "brazil", "europe"]);

        assert_eq!(config.section_layouts.len(), 1);
        assert_eq!(
            config.sections_for(Category::Etf),
            vec!["usa", "brazil", "europe"]
        );
        assert_eq!(
            config.sections_for(Category::Stock),
            vec!["value", "growth", "risk"]
        );
    }

    #[test]
    fn test_target_policy_apply() {
        assert_eq!(TargetPolicy::PassThrough.apply(150.0), 150.0);
        assert_eq!(TargetPolicy::Clamp.apply(150.0), 100.0);
        assert_eq!(TargetPolicy::Clamp.apply(-3.0), 0.0);
        assert_eq!(TargetPolicy::Clamp.apply(f64::NAN), 0.0);
        assert_eq!(TargetPolicy::Clamp.apply(42.0), 42.0);
    }

    #[test]
    fn test_should_parallelize() {
        let config = ReportConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
        }
    }

    #[test]
    fn test_serde() {
        let config = ReportConfig::new()
            .with_threshold(75)
            .with_target_policy(TargetPolicy::Clamp);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ReportConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.parallel_threshold, 75);
        assert_eq!(parsed.target_policy, TargetPolicy::Clamp);

        let partial: ReportConfig = serde_json::from_str(r#"{"parallel":false}"#).unwrap();
        assert!(!partial.parallel);
        assert_eq!(partial.parallel_threshold, 100);
    }
}
