use zenith_core_types::Sensitive;

/// User account record
///
/// Kept in its own `UserStore`; the quote catalog never touches it.
/// No `Serialize` impl: the password must not leave the process.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: Sensitive<String>,
}
