//! User details taken from an authenticated principal.

use super::{config::ActionLogSettings, eq_ignore_case};
use crate::redaction::{Node, Tree};

/// A single typed claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    pub kind: String,
    pub value: String,
}

impl Claim {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// The caller of an action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Principal {
    pub authenticated: bool,
    pub claims: Vec<Claim>,
}

impl Principal {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated<I>(claims: I) -> Self
    where
        I: IntoIterator<Item = Claim>,
    {
        Self {
            authenticated: true,
            claims: claims.into_iter().collect(),
        }
    }

    fn claims_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Claim> + 'a {
        self.claims
            .iter()
            .filter(move |claim| eq_ignore_case(&claim.kind, kind))
    }
}

/// Supplies extra `(name, value)` properties for the caller of an action.
///
/// Closures taking a `&Principal` implement this, so a host can register
/// tenant or organisation lookups without a named type:
///
/// ```rust
/// use redaction_tree::capture::{AdditionalClaims, Claim, Principal};
///
/// let tenant = |principal: &Principal| {
///     principal
///         .claims
///         .iter()
///         .filter(|claim| claim.kind == "tid")
///         .map(|claim| ("TenantId".to_owned(), claim.value.clone()))
///         .collect::<Vec<_>>()
/// };
///
/// let principal = Principal::authenticated([Claim::new("tid", "acme")]);
/// assert_eq!(
///     tenant.additional_claims(&principal),
///     [("TenantId".to_owned(), "acme".to_owned())]
/// );
/// ```
pub trait AdditionalClaims {
    fn additional_claims(&self, principal: &Principal) -> Vec<(String, String)>;
}

impl<F> AdditionalClaims for F
where
    F: Fn(&Principal) -> Vec<(String, String)>,
{
    fn additional_claims(&self, principal: &Principal) -> Vec<(String, String)> {
        self(principal)
    }
}

/// What is logged about the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDetails {
    pub user_id: Option<String>,
    /// Role values joined with `", "`.
    pub roles: Option<String>,
    /// Included claims, keyed by claim type.
    pub claims: Option<Tree>,
}

impl UserDetails {
    pub const ROLE_SEPARATOR: &'static str = ", ";

    /// Extracts user details according to `settings`.
    ///
    /// Anonymous principals yield nothing.
    pub fn capture(settings: &ActionLogSettings, principal: &Principal) -> Self {
        if !principal.authenticated {
            return Self::default();
        }

        let user_id = principal
            .claims_of(settings.id_claim_type())
            .map(|claim| claim.value.as_str())
            .find(|value| !value.is_empty())
            .map(str::to_owned);

        let roles: Vec<&str> = principal
            .claims_of(settings.role_claim_type())
            .map(|claim| claim.value.as_str())
            .collect();

        let mut claims = Tree::new();
        for claim in &principal.claims {
            if settings.includes_claim(&claim.kind) && !claims.contains_key(&claim.kind) {
                claims.insert(claim.kind.as_str(), Node::scalar(claim.value.as_str()));
            }
        }

        Self {
            user_id,
            roles: (!roles.is_empty()).then(|| roles.join(Self::ROLE_SEPARATOR)),
            claims: (!claims.is_empty()).then_some(claims),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.roles.is_none() && self.claims.is_none()
    }
}
