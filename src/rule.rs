//! Rules, rule sets, and the rule table.
//!
//! A [`Rule`] pairs a predicate with the message emitted when it fails.
//! A [`RuleSet`] is the ordered list of rules for one field; order decides
//! which message surfaces when several rules fail. A [`RuleTable`] maps
//! field names to rule sets and is the one piece of shared configuration:
//! built once, immutable afterwards, shareable across threads.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use smallvec::SmallVec;

use crate::foundation::Predicate;
use crate::value::Value;

/// Failure messages for a single field, in rule order.
///
/// Fields rarely carry more than two rules, so the common case stays on
/// the stack.
pub type Messages = SmallVec<[Cow<'static, str>; 2]>;

// ============================================================================
// RULE
// ============================================================================

/// One validation rule: a predicate plus its failure message.
///
/// # Examples
///
/// ```
/// use fieldcheck::rule::Rule;
/// use fieldcheck::predicates::required;
/// use fieldcheck::value::Value;
///
/// let rule = Rule::new(required(), "First name is required");
/// assert!(rule.passes(&Value::from("John")));
/// assert!(!rule.passes(&Value::Absent));
/// ```
pub struct Rule {
    predicate: Box<dyn Predicate>,
    message: Cow<'static, str>,
}

impl Rule {
    /// Creates a rule from a predicate and a failure message.
    pub fn new(
        predicate: impl Predicate + 'static,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// The message emitted when this rule fails.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Tests the rule's predicate against a value.
    #[must_use]
    pub fn passes(&self, value: &Value) -> bool {
        self.predicate.test(value)
    }

    pub(crate) fn message_cow(&self) -> Cow<'static, str> {
        self.message.clone()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("predicate", &"<predicate>")
            .field("message", &self.message)
            .finish()
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// The ordered rules for one field.
///
/// Rule order is significant: [`RuleSet::first_failure`] reports the
/// earliest failing rule, so presence checks conventionally come before
/// format checks.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule, builder-style.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::rule::RuleSet;
    /// use fieldcheck::predicates::{email, required};
    ///
    /// let rules = RuleSet::new()
    ///     .rule(required(), "Email is required")
    ///     .rule(email(), "Email must contain @ symbol");
    /// assert_eq!(rules.len(), 2);
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(
        mut self,
        predicate: impl Predicate + 'static,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.rules.push(Rule::new(predicate, message));
        self
    }

    /// Appends an already constructed rule in place.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Messages of every failing rule, in rule order (exhaustive).
    ///
    /// This is the per-field view; at the record level only the first of
    /// these surfaces.
    #[must_use]
    pub fn failures(&self, value: &Value) -> Messages {
        self.rules
            .iter()
            .filter(|rule| !rule.passes(value))
            .map(Rule::message_cow)
            .collect()
    }

    /// Message of the first failing rule, or `None` when every rule
    /// passes. Later rules are not evaluated after a failure.
    #[must_use]
    pub fn first_failure(&self, value: &Value) -> Option<Cow<'static, str>> {
        self.rules
            .iter()
            .find(|rule| !rule.passes(value))
            .map(Rule::message_cow)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// RULE TABLE
// ============================================================================

/// The full mapping from field name to [`RuleSet`].
///
/// A table is built once — through [`RuleTable::builder`] or the
/// [`rule_table!`](crate::rule_table) macro — and never mutated afterwards.
/// It holds no interior mutability, so `&RuleTable` (or an `Arc`) can back
/// any number of concurrent validation calls.
///
/// # Examples
///
/// ```
/// use fieldcheck::prelude::*;
///
/// let table = RuleTable::builder()
///     .field("email", RuleSet::new().rule(required(), "Email is required"))
///     .build();
///
/// assert!(table.contains("email"));
/// assert!(!table.contains("phone"));
/// ```
#[derive(Debug, Default)]
pub struct RuleTable {
    fields: HashMap<Cow<'static, str>, RuleSet>,
}

impl RuleTable {
    /// Starts building a rule table.
    #[must_use]
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// Looks up the rule set for a field, if one is configured.
    #[must_use]
    pub fn rules_for(&self, field: &str) -> Option<&RuleSet> {
        self.fields.get(field)
    }

    /// Returns `true` if the table configures the field.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of configured fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`RuleTable`].
#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    fields: HashMap<Cow<'static, str>, RuleSet>,
}

impl RuleTableBuilder {
    /// Attaches a rule set to a field name. A repeated name replaces the
    /// earlier set.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<Cow<'static, str>>, rules: RuleSet) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    /// Finalizes the table.
    #[must_use]
    pub fn build(self) -> RuleTable {
        RuleTable {
            fields: self.fields,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
