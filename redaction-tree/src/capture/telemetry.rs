//! The per-request telemetry record.

use super::{
    claims::{AdditionalClaims, Principal, UserDetails},
    config::ActionLogSettings,
    response::ResponseBody,
};
use crate::redaction::{Arguments, Tree};

pub const ARGUMENTS: &str = "Arguments";
pub const USER_ID: &str = "UserId";
pub const USER_ROLES: &str = "UserRoles";
pub const USER_CLAIMS: &str = "UserClaims";
pub const RESPONSE_BODY: &str = "ResponseBody";

/// Key grouping the additional properties when a sink only takes static keys.
pub const ADDITIONAL_CLAIMS: &str = "AdditionalClaims";

const RESERVED: [&str; 5] = [ARGUMENTS, USER_ID, USER_ROLES, USER_CLAIMS, RESPONSE_BODY];

/// Everything logged about one action invocation.
///
/// Each `record_*` call replaces what an earlier call recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionTelemetry {
    arguments: Option<Tree>,
    user: UserDetails,
    response_body: Option<ResponseBody>,
    additional: Vec<(String, String)>,
}

impl ActionTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redacts the action arguments. Nothing is recorded when body content is
    /// disabled or when no argument survives.
    pub fn record_arguments(&mut self, settings: &ActionLogSettings, arguments: &Arguments<'_>) {
        if !settings.body_content_enabled() {
            return;
        }
        let tree = settings.redactor().redact_arguments(arguments);
        self.arguments = (!tree.is_empty()).then_some(tree);
    }

    pub fn record_user(&mut self, settings: &ActionLogSettings, principal: &Principal) {
        self.user = UserDetails::capture(settings, principal);
    }

    /// Replaces the additional properties with those `provider` reports for
    /// `principal`.
    pub fn record_additional_claims<P>(&mut self, provider: &P, principal: &Principal)
    where
        P: AdditionalClaims + ?Sized,
    {
        self.additional.clear();
        self.extend_properties(provider.additional_claims(principal));
    }

    /// Adds named properties after the fixed ones.
    ///
    /// A repeated name replaces the earlier value in place. Empty names and
    /// the fixed property names are ignored.
    pub fn extend_properties<I, N, V>(&mut self, properties: I)
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        for (name, value) in properties {
            let (name, value) = (name.into(), value.into());
            if name.is_empty() || RESERVED.contains(&name.as_str()) {
                continue;
            }
            match self.additional.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, slot)) => *slot = value,
                None => self.additional.push((name, value)),
            }
        }
    }

    /// Parses and redacts a JSON response body, unless body content is
    /// disabled.
    #[cfg(feature = "serde")]
    pub fn record_response_body(&mut self, settings: &ActionLogSettings, body: &str) {
        if !settings.body_content_enabled() {
            return;
        }
        self.response_body = ResponseBody::capture(body, &settings.redactor());
    }

    pub fn set_response_body(&mut self, body: ResponseBody) {
        self.response_body = Some(body);
    }

    pub fn arguments(&self) -> Option<&Tree> {
        self.arguments.as_ref()
    }

    pub fn user(&self) -> &UserDetails {
        &self.user
    }

    pub fn response_body(&self) -> Option<&ResponseBody> {
        self.response_body.as_ref()
    }

    /// Additional properties in the order they were first added.
    pub fn additional_properties(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.additional
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_none()
            && self.user.is_empty()
            && self.response_body.is_none()
            && self.additional.is_empty()
    }

    /// The recorded values as named strings, in a fixed order followed by the
    /// additional properties. Missing values are left out.
    pub fn properties(&self) -> Vec<(&str, String)> {
        let mut properties = Vec::with_capacity(5 + self.additional.len());
        if let Some(arguments) = &self.arguments {
            properties.push((ARGUMENTS, arguments.to_string()));
        }
        if let Some(user_id) = &self.user.user_id {
            properties.push((USER_ID, user_id.clone()));
        }
        if let Some(roles) = &self.user.roles {
            properties.push((USER_ROLES, roles.clone()));
        }
        if let Some(claims) = &self.user.claims {
            properties.push((USER_CLAIMS, claims.to_string()));
        }
        if let Some(body) = &self.response_body {
            properties.push((RESPONSE_BODY, body.to_string()));
        }
        properties.extend(
            self.additional
                .iter()
                .map(|(name, value)| (name.as_str(), value.clone())),
        );
        properties
    }
}
