//! Depth-bounded, name-based redaction.

use std::{borrow::Cow, fmt};

use super::{
    exclusion::{ExclusionSet, DEFAULT_EXCLUSIONS},
    tree::{Node, Tree},
};
use crate::{
    inspect::{FieldValue, Inspect, Shape},
    Error,
};

/// Depth used when nothing else is configured.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// A flat, ordered list of named values to redact, such as the arguments of
/// a controller action.
#[derive(Clone, Default)]
pub struct Arguments<'a> {
    entries: Vec<(Cow<'a, str>, &'a dyn Inspect)>,
}

impl<'a> Arguments<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Arguments::push`].
    #[must_use]
    pub fn with<N>(mut self, name: N, value: &'a dyn Inspect) -> Self
    where
        N: Into<Cow<'a, str>>,
    {
        self.push(name, value);
        self
    }

    pub fn push<N>(&mut self, name: N, value: &'a dyn Inspect)
    where
        N: Into<Cow<'a, str>>,
    {
        self.entries.push((name.into(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a dyn Inspect)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_ref(), *value))
    }
}

impl fmt::Debug for Arguments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values are deliberately not printed.
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}

impl Inspect for Arguments<'_> {
    fn shape(&self) -> Shape<'_> {
        Shape::mapping(
            self.entries
                .iter()
                .map(|(name, value)| (Cow::Borrowed(name.as_ref()), *value)),
        )
    }
}

/// Redactor settings as they appear in configuration.
///
/// `max_depth` is signed so that invalid input survives deserialization and is
/// rejected when the [`Redactor`] is built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct RedactionConfig {
    pub max_depth: i64,
    pub exclude: Vec<String>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            // Lossless: the default is a small constant.
            max_depth: DEFAULT_MAX_DEPTH as i64,
            exclude: DEFAULT_EXCLUSIONS.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

/// Walks inspectable values and builds a [`Tree`] without excluded names.
///
/// For every entry the redactor omits the entry when its depth has reached
/// `max_depth`, when the value is absent, or when its name contains an
/// excluded pattern. Containers are walked one level deeper and omitted when
/// nothing inside them survives. Scalars are kept as leaves.
///
/// A `Redactor` only holds immutable configuration and can be shared freely
/// between concurrent requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redactor {
    max_depth: usize,
    excluded: ExclusionSet,
}

impl Default for Redactor {
    /// [`DEFAULT_MAX_DEPTH`] with the default exclusions.
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, ExclusionSet::defaults())
    }
}

impl TryFrom<&RedactionConfig> for Redactor {
    type Error = Error;

    fn try_from(config: &RedactionConfig) -> Result<Self, Self::Error> {
        Self::try_new(config.max_depth, &config.exclude)
    }
}

impl Redactor {
    pub fn new(max_depth: usize, excluded: ExclusionSet) -> Self {
        Self {
            max_depth,
            excluded,
        }
    }

    /// Validating constructor for untrusted configuration values.
    ///
    /// Fails with [`Error::NegativeMaxDepth`] or [`Error::EmptyPattern`].
    pub fn try_new<I, S>(max_depth: i64, patterns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let max_depth = depth_from_config(max_depth)?;
        Ok(Self::new(max_depth, ExclusionSet::new(patterns)?))
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn excluded(&self) -> &ExclusionSet {
        &self.excluded
    }

    /// Redacts a flat list of named values.
    pub fn redact_arguments(&self, arguments: &Arguments<'_>) -> Tree {
        let mut tree = Tree::new();
        for (name, value) in arguments.iter() {
            self.include(name, value, 0, &mut tree);
        }
        tree
    }

    /// Redacts a root value whose entries become the top level of the tree.
    ///
    /// The root must report a mapping or a composite shape; anything else
    /// fails with [`Error::UnsupportedRoot`].
    pub fn redact<T>(&self, root: &T) -> Result<Tree, Error>
    where
        T: Inspect + ?Sized,
    {
        let mut tree = Tree::new();
        match root.shape() {
            Shape::Mapping(entries) => {
                for (name, value) in entries {
                    self.include(&name, value, 0, &mut tree);
                }
            }
            Shape::Composite(fields) => {
                for field in fields {
                    let (name, value) = field.into_parts();
                    if let Some(node) = self.field_node(&name, value, 0) {
                        tree.insert(name.into_owned(), node);
                    }
                }
            }
            other => return Err(Error::UnsupportedRoot(other.kind())),
        }
        Ok(tree)
    }

    fn admits(&self, name: &str, depth: usize) -> bool {
        depth < self.max_depth && !self.excluded.matches(name)
    }

    fn include(&self, name: &str, value: &dyn Inspect, depth: usize, parent: &mut Tree) {
        if let Some(node) = self.node(name, value, depth) {
            parent.insert(name, node);
        }
    }

    fn node(&self, name: &str, value: &dyn Inspect, depth: usize) -> Option<Node> {
        // The shape is only requested for admitted names.
        if !self.admits(name, depth) {
            return None;
        }
        self.shape_node(value.shape(), depth)
    }

    fn field_node(&self, name: &str, value: FieldValue<'_>, depth: usize) -> Option<Node> {
        match value {
            FieldValue::Inspect(value) => self.node(name, value, depth),
            FieldValue::Display(value) => self
                .admits(name, depth)
                .then(|| Node::Scalar(value.to_string())),
        }
    }

    fn shape_node(&self, shape: Shape<'_>, depth: usize) -> Option<Node> {
        let child_depth = depth + 1;
        match shape {
            Shape::Absent => None,
            Shape::Scalar(value) => Some(Node::Scalar(value.into_owned())),
            // Every child would be cut off, so the container would be empty.
            _ if child_depth >= self.max_depth => None,
            Shape::Mapping(entries) => {
                let mut nested = Tree::new();
                for (key, value) in entries {
                    self.include(&key, value, child_depth, &mut nested);
                }
                non_empty(nested)
            }
            Shape::Composite(fields) => {
                let mut nested = Tree::new();
                for field in fields {
                    let (name, value) = field.into_parts();
                    if let Some(node) = self.field_node(&name, value, child_depth) {
                        nested.insert(name.into_owned(), node);
                    }
                }
                non_empty(nested)
            }
            Shape::Sequence(elements) => {
                let items: Vec<Node> = elements
                    .enumerate()
                    .filter_map(|(index, element)| {
                        self.node(&index.to_string(), element, child_depth)
                    })
                    .collect();
                (!items.is_empty()).then_some(Node::Sequence(items))
            }
        }
    }
}

fn non_empty(tree: Tree) -> Option<Node> {
    (!tree.is_empty()).then_some(Node::Mapping(tree))
}

pub(crate) fn depth_from_config(max_depth: i64) -> Result<usize, Error> {
    if max_depth < 0 {
        return Err(Error::NegativeMaxDepth(max_depth));
    }
    Ok(usize::try_from(max_depth).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{Arguments, RedactionConfig, Redactor, DEFAULT_MAX_DEPTH};
    use crate::{Error, ExclusionSet, Inspect, Node};

    fn redactor(max_depth: usize, excluded: &[&str]) -> Redactor {
        Redactor::new(max_depth, ExclusionSet::new(excluded).unwrap())
    }

    #[test]
    fn flat_arguments_keep_order() {
        let (a, b) = (1, 2);
        let arguments = Arguments::new().with("a", &a).with("b", &b);
        let tree = redactor(1, &[]).redact_arguments(&arguments);
        assert_eq!(tree.to_string(), r#"{ "a": "1", "b": "2" }"#);
    }

    #[test]
    fn excluded_names_are_dropped() {
        let (password, id) = ("secret", 5);
        let arguments = Arguments::new()
            .with("password", &password)
            .with("id", &id);
        let tree = redactor(4, &["password"]).redact_arguments(&arguments);
        assert_eq!(tree.to_string(), r#"{ "id": "5" }"#);
    }

    #[test]
    fn zero_depth_yields_empty_tree() {
        let id = 5;
        let tree = redactor(0, &[]).redact_arguments(&Arguments::new().with("id", &id));
        assert!(tree.is_empty());
    }

    #[test]
    fn containers_at_the_depth_limit_are_omitted() {
        let values = vec![1, 2];
        let id = 9;
        let arguments = Arguments::new().with("values", &values).with("id", &id);
        let tree = redactor(1, &[]).redact_arguments(&arguments);
        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn absent_values_are_skipped() {
        let missing: Option<i32> = None;
        let tree = redactor(2, &[]).redact_arguments(&Arguments::new().with("m", &missing));
        assert!(tree.is_empty());
    }

    #[test]
    fn sequence_keeps_surviving_elements_in_order() {
        let values = vec![Some(1), None, Some(3)];
        let tree = redactor(3, &[]).redact_arguments(&Arguments::new().with("v", &values));
        assert_eq!(
            tree.get("v"),
            Some(&Node::Sequence(vec![Node::scalar("1"), Node::scalar("3")]))
        );
    }

    #[test]
    fn map_keys_use_display_form() {
        let map = BTreeMap::from([(10_u32, "ten"), (20, "twenty")]);
        let tree = redactor(3, &[]).redact_arguments(&Arguments::new().with("m", &map));
        assert_eq!(tree.to_string(), r#"{ "m": { "10": "ten", "20": "twenty" } }"#);
    }

    #[test]
    fn redact_rejects_scalar_roots() {
        let result = Redactor::default().redact(&42);
        assert!(matches!(result, Err(Error::UnsupportedRoot("scalar"))));
    }

    #[test]
    fn redact_accepts_mapping_roots() {
        let map = BTreeMap::from([("token", "abc"), ("name", "widget")]);
        let tree = Redactor::default().redact(&map).unwrap();
        assert_eq!(tree.to_string(), r#"{ "name": "widget" }"#);
    }

    #[test]
    fn try_new_rejects_negative_depth() {
        let result = Redactor::try_new(-1, ["token"]);
        assert!(matches!(result, Err(Error::NegativeMaxDepth(-1))));
    }

    #[test]
    fn config_defaults_match_redactor_defaults() {
        let redactor = Redactor::try_from(&RedactionConfig::default()).unwrap();
        assert_eq!(redactor, Redactor::default());
        assert_eq!(redactor.max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn arguments_debug_hides_values() {
        let secret = "hunter2";
        let arguments = Arguments::new().with("password", &secret);
        let debug = format!("{arguments:?}");
        assert!(debug.contains("password"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn arguments_are_inspectable() {
        let id = 1;
        let arguments = Arguments::new().with("id", &id);
        assert_eq!(arguments.shape().kind(), "mapping");
    }
}
