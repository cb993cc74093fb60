/// One coded value of a closed enumeration.
///
/// Declaration order is significant: item N becomes row N of the generated
/// lookup table, addressed by its identity value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationItem {
    pub short_description: String,
    pub documentation: String,
}

impl EnumerationItem {
    pub fn new(short_description: impl Into<String>, documentation: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            documentation: documentation.into(),
        }
    }
}

/// A named, closed set of coded values destined to become one lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    pub identifier: String,
    pub documentation: String,
    pub items: Vec<EnumerationItem>,
}

impl Enumeration {
    pub fn new(identifier: impl Into<String>, items: Vec<EnumerationItem>) -> Self {
        Self {
            identifier: identifier.into(),
            documentation: String::new(),
            items,
        }
    }

    /// Asserts the invariants the upstream front end is expected to have
    /// enforced. Violations panic rather than produce partial SQL.
    pub fn validate(&self) {
        assert!(
            !self.identifier.is_empty(),
            "enumeration identifier must not be empty"
        );
        assert!(
            !self.items.is_empty(),
            "enumeration ({}) must declare at least one item",
            self.identifier
        );
    }
}

/// A name scoping a set of enumerations; maps to a schema in the target
/// database. Treated as read-only by generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub enumerations: Vec<Enumeration>,
}

impl Namespace {
    pub fn new(name: impl Into<String>, enumerations: Vec<Enumeration>) -> Self {
        Self {
            name: name.into(),
            enumerations,
        }
    }

    pub fn validate(&self) {
        assert!(!self.name.is_empty(), "namespace name must not be empty");
        for enumeration in &self.enumerations {
            enumeration.validate();
        }
    }
}
