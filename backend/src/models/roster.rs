use std::collections::HashSet;

use crate::error::RotationConfigError;

/// Ordered team roster. Position in the list is the rotation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRoster {
    members: Vec<String>,
}

impl TeamRoster {
    /// Builds a roster, rejecting empty rosters, blank names and duplicates.
    pub fn new<I, S>(members: I) -> Result<Self, RotationConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: Vec<String> = members
            .into_iter()
            .map(|m| m.into().trim().to_string())
            .collect();

        if members.is_empty() {
            return Err(RotationConfigError::EmptyRoster);
        }

        let mut seen = HashSet::with_capacity(members.len());
        for (position, name) in members.iter().enumerate() {
            if name.is_empty() {
                return Err(RotationConfigError::BlankMember(position));
            }
            if !seen.insert(name.as_str()) {
                return Err(RotationConfigError::DuplicateMember(name.clone()));
            }
        }

        Ok(Self { members })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for a constructed roster; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.members.get(index).map(String::as_str)
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }
}
