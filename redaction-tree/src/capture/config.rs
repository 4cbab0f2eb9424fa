//! Logging settings for controller actions.
//!
//! Settings are resolved in layers: defaults, then the global configuration
//! section, then an optional per-action override. Each layer is an
//! [`ActionLogConfig`] applied with [`ActionLogSettings::apply`].

use super::eq_ignore_case;
use crate::{
    redaction::{depth_from_config, ExclusionSet, Redactor, DEFAULT_MAX_DEPTH},
    Error,
};

/// One configuration layer, as read from the `LogActionFilter` section or
/// declared on an action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct ActionLogConfig {
    /// Argument name patterns to exclude, merged into the current set.
    pub exclude_arguments: Vec<String>,
    /// Claim types to log, merged into the current set.
    pub include_claims: Vec<String>,
    /// Disables request and response body logging.
    pub disable_body_content: bool,
    /// Max depth; `0` keeps the current value.
    pub max_depth: i64,
    /// Claim type carrying the user id.
    pub id_claim_type: String,
    /// Claim type carrying user roles.
    pub role_claim_type: String,
}

impl ActionLogConfig {
    /// Name of the configuration section.
    pub const LOCATION: &'static str = "LogActionFilter";
}

impl Default for ActionLogConfig {
    fn default() -> Self {
        Self {
            exclude_arguments: Vec::new(),
            include_claims: Vec::new(),
            disable_body_content: false,
            max_depth: 0,
            id_claim_type: ActionLogSettings::DEFAULT_ID_CLAIM_TYPE.to_owned(),
            role_claim_type: ActionLogSettings::DEFAULT_ROLE_CLAIM_TYPE.to_owned(),
        }
    }
}

/// Resolved settings for one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionLogSettings {
    max_depth: usize,
    excluded: ExclusionSet,
    include_claims: Vec<String>,
    disable_body_content: bool,
    id_claim_type: String,
    role_claim_type: String,
}

impl Default for ActionLogSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            excluded: ExclusionSet::defaults(),
            include_claims: Vec::new(),
            disable_body_content: false,
            id_claim_type: Self::DEFAULT_ID_CLAIM_TYPE.to_owned(),
            role_claim_type: Self::DEFAULT_ROLE_CLAIM_TYPE.to_owned(),
        }
    }
}

impl ActionLogSettings {
    pub const DEFAULT_ID_CLAIM_TYPE: &'static str = "sub";
    pub const DEFAULT_ROLE_CLAIM_TYPE: &'static str = "role";

    /// Defaults with `config` applied on top.
    pub fn from_config(config: &ActionLogConfig) -> Result<Self, Error> {
        let mut settings = Self::default();
        settings.apply(config)?;
        Ok(settings)
    }

    /// Applies one configuration layer.
    ///
    /// - `disable_body_content` is replaced
    /// - `max_depth` is replaced when positive; negative values are rejected
    /// - exclusions and included claims are merged, ignoring case
    /// - claim types are replaced when non-empty
    ///
    /// On error the settings are left unchanged.
    pub fn apply(&mut self, config: &ActionLogConfig) -> Result<(), Error> {
        let max_depth = depth_from_config(config.max_depth)?;
        let mut next = self.clone();

        next.disable_body_content = config.disable_body_content;
        if max_depth > 0 {
            next.max_depth = max_depth;
        }
        for pattern in &config.exclude_arguments {
            next.excluded.insert(pattern)?;
        }
        for claim in &config.include_claims {
            if !next.includes_claim(claim) {
                next.include_claims.push(claim.clone());
            }
        }
        if !config.id_claim_type.is_empty() {
            next.id_claim_type.clone_from(&config.id_claim_type);
        }
        if !config.role_claim_type.is_empty() {
            next.role_claim_type.clone_from(&config.role_claim_type);
        }

        *self = next;
        Ok(())
    }

    /// A copy of these settings with a per-action override applied.
    pub fn with_override(&self, config: &ActionLogConfig) -> Result<Self, Error> {
        let mut settings = self.clone();
        settings.apply(config)?;
        Ok(settings)
    }

    /// The redactor for these settings.
    pub fn redactor(&self) -> Redactor {
        Redactor::new(self.max_depth, self.excluded.clone())
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn excluded(&self) -> &ExclusionSet {
        &self.excluded
    }

    pub fn include_claims(&self) -> &[String] {
        &self.include_claims
    }

    pub fn includes_claim(&self, kind: &str) -> bool {
        self.include_claims
            .iter()
            .any(|included| eq_ignore_case(included, kind))
    }

    pub fn body_content_enabled(&self) -> bool {
        !self.disable_body_content
    }

    pub fn id_claim_type(&self) -> &str {
        &self.id_claim_type
    }

    pub fn role_claim_type(&self) -> &str {
        &self.role_claim_type
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionLogConfig, ActionLogSettings};
    use crate::Error;

    #[test]
    fn defaults() {
        let settings = ActionLogSettings::default();
        assert_eq!(settings.max_depth(), 32);
        assert!(settings.excluded().matches("password"));
        assert!(settings.body_content_enabled());
        assert_eq!(settings.id_claim_type(), "sub");
        assert_eq!(settings.role_claim_type(), "role");
    }

    #[test]
    fn zero_depth_keeps_current_value() {
        let settings = ActionLogSettings::from_config(&ActionLogConfig::default()).unwrap();
        assert_eq!(settings.max_depth(), 32);
    }

    #[test]
    fn positive_depth_replaces_current_value() {
        let config = ActionLogConfig {
            max_depth: 4,
            ..ActionLogConfig::default()
        };
        let settings = ActionLogSettings::from_config(&config).unwrap();
        assert_eq!(settings.redactor().max_depth(), 4);
    }

    #[test]
    fn negative_depth_is_rejected_without_side_effects() {
        let mut settings = ActionLogSettings::default();
        let config = ActionLogConfig {
            max_depth: -3,
            disable_body_content: true,
            ..ActionLogConfig::default()
        };
        assert!(matches!(
            settings.apply(&config),
            Err(Error::NegativeMaxDepth(-3))
        ));
        assert!(settings.body_content_enabled());
    }

    #[test]
    fn empty_pattern_leaves_settings_unchanged() {
        let mut settings = ActionLogSettings::default();
        let config = ActionLogConfig {
            exclude_arguments: vec!["iban".into(), String::new()],
            ..ActionLogConfig::default()
        };
        assert!(matches!(settings.apply(&config), Err(Error::EmptyPattern)));
        assert!(!settings.excluded().matches("iban"));
    }

    #[test]
    fn layers_merge_names_ignoring_case() {
        let global = ActionLogConfig {
            exclude_arguments: vec!["Iban".into(), "PASSWORD".into()],
            include_claims: vec!["tenant".into()],
            ..ActionLogConfig::default()
        };
        let action = ActionLogConfig {
            include_claims: vec!["TENANT".into(), "locale".into()],
            disable_body_content: true,
            ..ActionLogConfig::default()
        };

        let settings = ActionLogSettings::from_config(&global)
            .and_then(|settings| settings.with_override(&action))
            .unwrap();

        assert_eq!(settings.excluded().len(), 6);
        assert!(settings.excluded().matches("customerIban"));
        assert_eq!(settings.include_claims(), ["tenant", "locale"]);
        assert!(!settings.body_content_enabled());
    }

    #[test]
    fn empty_claim_types_keep_current_value() {
        let config = ActionLogConfig {
            id_claim_type: String::new(),
            role_claim_type: "roles".into(),
            ..ActionLogConfig::default()
        };
        let settings = ActionLogSettings::from_config(&config).unwrap();
        assert_eq!(settings.id_claim_type(), "sub");
        assert_eq!(settings.role_claim_type(), "roles");
    }
}
