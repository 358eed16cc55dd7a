use serde::Serialize;

/// Capability tags carried in a signed token.
pub mod permissions {
    pub const PRODUCTS_CREATE: &str = "products:create";
    pub const PRODUCTS_UPDATE: &str = "products:update";
    pub const PRODUCTS_DELETE: &str = "products:delete";

    /// The full permission set granted to the administrative identity.
    pub fn all() -> Vec<String> {
        vec![
            PRODUCTS_CREATE.to_string(),
            PRODUCTS_DELETE.to_string(),
            PRODUCTS_UPDATE.to_string(),
        ]
    }
}

/// An authenticated identity and the permissions it carries.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub permissions: Vec<String>,
}

impl Identity {
    pub fn has_permission(&self, required: &str) -> bool {
        self.permissions.iter().any(|p| p == required)
    }
}

/// The single non-admin credential configured through the environment.
/// Either field may be absent, in which case no environment login exists.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ConfiguredCredentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => u == username && p == password,
            _ => false,
        }
    }
}
