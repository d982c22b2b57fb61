//! Back-office accounts: permissions, roles and admin users

use crate::value_objects::Snowflake;

/// A single grantable capability, e.g. `manage_users`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    pub id: Snowflake,
    pub key: String,
}

impl Permission {
    pub fn new(id: Snowflake, key: String) -> Self {
        Self { id, key }
    }
}

/// Named bundle of permissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: Snowflake,
    pub name: String,
    pub permissions: Vec<Permission>,
}

impl Role {
    /// Every role starts with its own empty permission list
    pub fn new(id: Snowflake, name: String) -> Self {
        Self {
            id,
            name,
            permissions: Vec::new(),
        }
    }

    /// Grant a permission. Granting the same permission twice is a no-op.
    pub fn add_permission(&mut self, permission: Permission) {
        if !self.permissions.iter().any(|p| p.id == permission.id) {
            self.permissions.push(permission);
        }
    }

    pub fn has_permission(&self, key: &str) -> bool {
        self.permissions.iter().any(|p| p.key == key)
    }
}

/// Administrator account, separate from marketplace users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub id: Snowflake,
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}

impl AdminUser {
    pub fn new(id: Snowflake, username: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            password_hash,
            roles: Vec::new(),
        }
    }

    /// Assign a role. Assigning the same role twice is a no-op.
    pub fn assign_role(&mut self, role: Role) {
        if !self.roles.iter().any(|r| r.id == role.id) {
            self.roles.push(role);
        }
    }

    /// Whether any assigned role grants `key`
    pub fn can(&self, key: &str) -> bool {
        self.roles.iter().any(|r| r.has_permission(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_do_not_share_permissions() {
        let mut support = Role::new(Snowflake::new(1), "support".to_string());
        let auditor = Role::new(Snowflake::new(2), "auditor".to_string());

        support.add_permission(Permission::new(Snowflake::new(10), "manage_users".to_string()));

        assert_eq!(support.permissions.len(), 1);
        assert!(auditor.permissions.is_empty());
    }

    #[test]
    fn test_add_permission_is_idempotent() {
        let mut role = Role::new(Snowflake::new(1), "admin".to_string());
        let perm = Permission::new(Snowflake::new(10), "manage_users".to_string());
        role.add_permission(perm.clone());
        role.add_permission(perm);
        assert_eq!(role.permissions.len(), 1);
        assert!(role.has_permission("manage_users"));
    }

    #[test]
    fn test_assign_role_is_idempotent() {
        let mut role = Role::new(Snowflake::new(1), "admin".to_string());
        role.add_permission(Permission::new(Snowflake::new(10), "manage_ads".to_string()));

        let mut admin = AdminUser::new(Snowflake::new(5), "root".to_string(), "hashed_x".to_string());
        admin.assign_role(role.clone());
        admin.assign_role(role);

        assert_eq!(admin.roles.len(), 1);
        assert!(admin.can("manage_ads"));
        assert!(!admin.can("manage_users"));
    }
}
