use chrono::{NaiveDate, NaiveDateTime};

// pre-hashed with PBKDF2-SHA512 (100,000 rounds) from ADMIN_PASSWORD
const ADMIN_PASSWORD_HASH: &str = "$pbkdf2-sha512$100000$yTmnVGqNcS4l5DwHwHiv1Q$bR0zpDLXDkEz7.kx8hKO4nHJxH.4hIy6TIJw0.7x8jM.0u0ggOVbSN.Qq0ILG3NwCLXMvOVpNq7KpOb.2wT4Fw";
const ADMIN_PASSWORD: &str = "AdminPassword123!";

/// The single user written into every seed script. Never read from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    /// Printed by the seed script so the operator knows how to log in.
    pub initial_password: String,
    pub confirmed_at: NaiveDateTime,
}

impl SeedUser {
    pub fn admin() -> Self {
        let confirmed_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();

        Self {
            email: "keamonk@stud.kea.dk".to_string(),
            name: "Admin".to_string(),
            password_hash: ADMIN_PASSWORD_HASH.to_string(),
            initial_password: ADMIN_PASSWORD.to_string(),
            confirmed_at,
        }
    }
}
