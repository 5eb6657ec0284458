use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Unknown degenerate bond policy '{0}'. Expected 'error' or 'zero'.")]
    UnknownDegenerateBondPolicy(String),
}

/// What the bond-angle pass does when two consecutive positions coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateBondPolicy {
    /// Fail the conversion with `EngineError::DegenerateGeometry`.
    #[default]
    Error,
    /// Emit a bond angle of 0 for the affected residue.
    Zero,
}

impl FromStr for DegenerateBondPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(DegenerateBondPolicy::Error),
            "zero" => Ok(DegenerateBondPolicy::Zero),
            other => Err(ConfigError::UnknownDegenerateBondPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for DegenerateBondPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DegenerateBondPolicy::Error => "error",
                DegenerateBondPolicy::Zero => "zero",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversionConfig {
    pub degenerate_bonds: DegenerateBondPolicy,
}

#[derive(Default)]
pub struct ConversionConfigBuilder {
    degenerate_bonds: Option<DegenerateBondPolicy>,
}

impl ConversionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn degenerate_bonds(mut self, policy: DegenerateBondPolicy) -> Self {
        self.degenerate_bonds = Some(policy);
        self
    }

    pub fn build(self) -> ConversionConfig {
        ConversionConfig {
            degenerate_bonds: self.degenerate_bonds.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_error_policy() {
        let config = ConversionConfigBuilder::new().build();
        assert_eq!(config.degenerate_bonds, DegenerateBondPolicy::Error);
        assert_eq!(config, ConversionConfig::default());
    }

    #[test]
    fn builder_applies_explicit_policy() {
        let config = ConversionConfigBuilder::new()
            .degenerate_bonds(DegenerateBondPolicy::Zero)
            .build();
        assert_eq!(config.degenerate_bonds, DegenerateBondPolicy::Zero);
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!(
            "Zero".parse::<DegenerateBondPolicy>(),
            Ok(DegenerateBondPolicy::Zero)
        );
        assert_eq!(
            " error ".parse::<DegenerateBondPolicy>(),
            Ok(DegenerateBondPolicy::Error)
        );
    }

    #[test]
    fn policy_rejects_unknown_names() {
        assert_eq!(
            "nan".parse::<DegenerateBondPolicy>(),
            Err(ConfigError::UnknownDegenerateBondPolicy("nan".to_string()))
        );
    }

    #[test]
    fn policy_display_round_trips_through_from_str() {
        for policy in [DegenerateBondPolicy::Error, DegenerateBondPolicy::Zero] {
            assert_eq!(policy.to_string().parse::<DegenerateBondPolicy>(), Ok(policy));
        }
    }
}
