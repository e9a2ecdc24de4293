//! Grouping of identifier records by namespace.

use std::collections::HashMap;

use tagsmith_core::{IdentifierRecord, sanitize_const_name, sanitize_type_name};

/// A constant to be emitted inside a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Sanitized constant name.
    pub name: String,
    /// Literal value the constant carries.
    pub raw_value: String,
}

/// All members sharing one `parent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Sanitized type name the group is rendered as.
    pub type_name: String,
    /// Members in insertion order. Ordering is applied at render time.
    pub members: Vec<Member>,
}

/// Two or more members of one group that sanitize to the same constant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName {
    pub parent: String,
    pub name: String,
    pub count: usize,
}

/// Records grouped by namespace.
///
/// Built once from the full record list and read-only afterwards. The map has
/// no meaningful iteration order; consumers needing one must sort.
#[derive(Debug, Clone, Default)]
pub struct GroupedModel {
    groups: HashMap<String, Group>,
}

impl GroupedModel {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = IdentifierRecord>,
    {
        let mut groups: HashMap<String, Group> = HashMap::new();
        for record in records {
            let member = Member {
                name: sanitize_const_name(&record.identifier),
                raw_value: record.raw_value,
            };
            groups
                .entry(record.parent)
                .or_insert_with_key(|parent| Group {
                    type_name: sanitize_type_name(parent),
                    members: Vec::new(),
                })
                .members
                .push(member);
        }

        let model = Self { groups };
        tracing::debug!(
            groups = model.group_count(),
            identifiers = model.len(),
            "grouped identifier records"
        );
        model
    }

    /// Iterate over `(parent, group)` pairs in unspecified order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups.iter().map(|(parent, group)| (parent.as_str(), group))
    }

    /// Look up a group by its exact parent name.
    pub fn group(&self, parent: &str) -> Option<&Group> {
        self.groups.get(parent)
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of members across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(|g| g.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Constant names that occur more than once within a group.
    ///
    /// These are rendered as-is and will not compile; callers decide whether
    /// to warn or refuse. Sorted by parent, then name.
    pub fn duplicate_names(&self) -> Vec<DuplicateName> {
        let mut duplicates = Vec::new();
        for (parent, group) in &self.groups {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for member in &group.members {
                *counts.entry(member.name.as_str()).or_default() += 1;
            }
            duplicates.extend(counts.into_iter().filter(|(_, count)| *count > 1).map(
                |(name, count)| DuplicateName {
                    parent: parent.clone(),
                    name: name.to_string(),
                    count,
                },
            ));
        }
        duplicates.sort_by(|a, b| a.parent.cmp(&b.parent).then_with(|| a.name.cmp(&b.name)));
        duplicates
    }

    /// Type names shared by more than one parent, with those parents sorted.
    pub fn type_name_collisions(&self) -> Vec<(String, Vec<String>)> {
        let mut by_type: HashMap<&str, Vec<String>> = HashMap::new();
        for (parent, group) in &self.groups {
            by_type
                .entry(group.type_name.as_str())
                .or_default()
                .push(parent.clone());
        }

        let mut collisions: Vec<(String, Vec<String>)> = by_type
            .into_iter()
            .filter(|(_, parents)| parents.len() > 1)
            .map(|(type_name, mut parents)| {
                parents.sort();
                (type_name.to_string(), parents)
            })
            .collect();
        collisions.sort();
        collisions
    }

    #[cfg(test)]
    pub(crate) fn insert_group(&mut self, parent: &str, group: Group) {
        self.groups.insert(parent.to_string(), group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(parent: &str, identifier: &str, raw_value: &str) -> IdentifierRecord {
        IdentifierRecord::new(parent, identifier, raw_value)
    }

    #[test]
    fn test_groups_by_parent() {
        let model = GroupedModel::from_records([
            record("A", "foo", "x1"),
            record("B", "bar", "x0"),
            record("A", "baz", "x2"),
        ]);

        assert_eq!(model.group_count(), 2);
        assert_eq!(model.len(), 3);
        let a = model.group("A").unwrap();
        assert_eq!(a.members.len(), 2);
        assert_eq!(a.members[0].name, "FOO");
        assert_eq!(a.members[1].raw_value, "x2");
    }

    #[test]
    fn test_parent_match_is_case_sensitive() {
        let model =
            GroupedModel::from_records([record("home", "a", "1"), record("Home", "b", "2")]);

        assert_eq!(model.group_count(), 2);
        assert!(model.group("HOME").is_none());
    }

    #[test]
    fn test_type_name_is_sanitized() {
        let model = GroupedModel::from_records([record("login screen", "a", "1")]);
        assert_eq!(model.group("login screen").unwrap().type_name, "LoginScreen");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let model = GroupedModel::from_records([
            record("A", "userName", "1"),
            record("A", "user_name", "2"),
            record("B", "userName", "3"),
        ]);

        assert_eq!(model.len(), 3);
        assert_eq!(
            model.duplicate_names(),
            vec![DuplicateName {
                parent: "A".to_string(),
                name: "USER_NAME".to_string(),
                count: 2,
            }]
        );
    }

    #[test]
    fn test_type_name_collisions() {
        let model = GroupedModel::from_records([
            record("login_screen", "a", "1"),
            record("LoginScreen", "b", "2"),
            record("Home", "c", "3"),
        ]);

        assert_eq!(
            model.type_name_collisions(),
            vec![(
                "LoginScreen".to_string(),
                vec!["LoginScreen".to_string(), "login_screen".to_string()]
            )]
        );
    }

    #[test]
    fn test_empty_input() {
        let model = GroupedModel::from_records(Vec::new());
        assert!(model.is_empty());
        assert_eq!(model.group_count(), 0);
        assert!(model.duplicate_names().is_empty());
        assert!(model.type_name_collisions().is_empty());
    }
}
