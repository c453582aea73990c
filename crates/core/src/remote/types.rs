//! Domain types for the remote-ledger capability.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabsplit_shared::types::{ExpenseId, ParticipantId};

/// Mapping of member display name to remote participant id.
pub type MemberDirectory = BTreeMap<String, ParticipantId>;

/// A remote expense group with its member directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Remote group identifier.
    pub id: tabsplit_shared::types::GroupId,
    /// Group display name.
    pub name: String,
    /// Display name to participant id.
    pub members: MemberDirectory,
}

/// Summary information for a group listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Group display name.
    pub name: String,
    /// Number of members in the group.
    pub member_count: usize,
}

/// Result of submitting an expense to the remote ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The remote ledger created the expense and assigned an identifier.
    Created(ExpenseId),
    /// The remote ledger rejected the expense with business errors.
    Rejected(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsplit_shared::types::GroupId;

    #[test]
    fn test_member_directory_is_name_keyed() {
        let mut members = MemberDirectory::new();
        members.insert("Ana".to_string(), ParticipantId::new(1));
        members.insert("Ben".to_string(), ParticipantId::new(2));

        let group = Group {
            id: GroupId::new(7),
            name: "Flatmates".to_string(),
            members,
        };
        assert_eq!(group.members.get("Ana"), Some(&ParticipantId::new(1)));
        assert_eq!(group.members.len(), 2);
    }
}
