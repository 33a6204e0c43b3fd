//! Budget owner visibility for the current user.

/// Set of budget owners a user may see.
///
/// Super admins see every owner; ordinary users see only the owners granted to them
/// through `user_access`. Repositories narrow their queries with this.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnerScope {
    All,
    Only(Vec<i32>),
}

impl OwnerScope {
    pub fn allows(&self, budget_owner_id: i32) -> bool {
        match self {
            OwnerScope::All => true,
            OwnerScope::Only(ids) => ids.contains(&budget_owner_id),
        }
    }

    /// Owner IDs to filter by, or `None` when unrestricted.
    pub fn owner_ids(&self) -> Option<&[i32]> {
        match self {
            OwnerScope::All => None,
            OwnerScope::Only(ids) => Some(ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_allows_any_owner() {
        assert!(OwnerScope::All.allows(42));
        assert_eq!(OwnerScope::All.owner_ids(), None);
    }

    #[test]
    fn only_allows_listed_owners() {
        let scope = OwnerScope::Only(vec![1, 3]);

        assert!(scope.allows(1));
        assert!(!scope.allows(2));
        assert_eq!(scope.owner_ids(), Some(&[1, 3][..]));
    }

    #[test]
    fn empty_scope_allows_nothing() {
        assert!(!OwnerScope::Only(vec![]).allows(1));
    }
}
