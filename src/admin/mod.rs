//! One-shot admin account bootstrap used by the `setup_admin` binary.

pub mod password;
pub mod repo;

use async_trait::async_trait;
use tracing::info;

use self::repo::User;

pub const ROLE: &str = "admin";
pub const STATUS: &str = "active";
pub const DEFAULT_EMAIL: &str = "admin@bizsite.local";
pub const DEFAULT_NAME: &str = "Administrator";

/// Lookup and insert against the users table.
///
/// Uniqueness comes from calling `find_by_email` before `insert`; two
/// concurrent bootstraps can still race.
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn insert(&self, seed: &AdminSeed) -> anyhow::Result<i64>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl AdminSeed {
    /// Reads `ADMIN_EMAIL`, `ADMIN_NAME` and either `ADMIN_PASSWORD_HASH` or
    /// `ADMIN_PASSWORD` through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let set = |k: &str| lookup(k).filter(|v| !v.is_empty());

        let password_hash = match (set("ADMIN_PASSWORD_HASH"), set("ADMIN_PASSWORD")) {
            (Some(hash), _) => {
                password::check_phc(&hash)?;
                hash
            }
            (None, Some(plain)) => password::hash_password(&plain)?,
            (None, None) => anyhow::bail!("set ADMIN_PASSWORD_HASH or ADMIN_PASSWORD"),
        };

        Ok(Self {
            name: set("ADMIN_NAME").unwrap_or_else(|| DEFAULT_NAME.into()),
            email: set("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_EMAIL.into()),
            password_hash,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created(i64),
    AlreadyExists(i64),
}

pub async fn ensure_admin<D>(dir: &D, seed: &AdminSeed) -> anyhow::Result<Outcome>
where
    D: AdminDirectory + ?Sized,
{
    if let Some(existing) = dir.find_by_email(&seed.email).await? {
        info!(user_id = existing.id, email = %existing.email, role = %existing.role, "admin user already exists");
        return Ok(Outcome::AlreadyExists(existing.id));
    }

    let id = dir.insert(seed).await?;
    info!(user_id = id, email = %seed.email, "admin user created");
    Ok(Outcome::Created(id))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct MemoryDirectory {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl AdminDirectory for MemoryDirectory {
        async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn insert(&self, seed: &AdminSeed) -> anyhow::Result<i64> {
            let mut users = self.users.lock().unwrap();
            let id = users.len() as i64 + 1;
            users.push(User {
                id,
                name: seed.name.clone(),
                email: seed.email.clone(),
                password_hash: seed.password_hash.clone(),
                role: ROLE.into(),
                status: STATUS.into(),
            });
            Ok(id)
        }
    }

    fn seed() -> AdminSeed {
        AdminSeed {
            name: DEFAULT_NAME.into(),
            email: DEFAULT_EMAIL.into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA".into(),
        }
    }

    #[tokio::test]
    async fn second_run_creates_nothing() {
        let dir = MemoryDirectory::default();
        assert_eq!(ensure_admin(&dir, &seed()).await.unwrap(), Outcome::Created(1));
        assert_eq!(ensure_admin(&dir, &seed()).await.unwrap(), Outcome::AlreadyExists(1));

        let users = dir.users.lock().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, "admin");
        assert_eq!(users[0].status, "active");
    }

    #[test]
    fn seed_hashes_plain_password() {
        let s = AdminSeed::from_lookup(|k| match k {
            "ADMIN_PASSWORD" => Some("change-me-now".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(s.email, DEFAULT_EMAIL);
        assert!(password::verify_password("change-me-now", &s.password_hash).unwrap());
    }

    #[test]
    fn seed_prefers_precomputed_hash() {
        let hash = password::hash_password("x").unwrap();
        let s = AdminSeed::from_lookup(|k| match k {
            "ADMIN_PASSWORD_HASH" => Some(hash.clone()),
            "ADMIN_PASSWORD" => Some("ignored".into()),
            "ADMIN_EMAIL" => Some("owner@example.com".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(s.password_hash, hash);
        assert_eq!(s.email, "owner@example.com");
    }

    #[test]
    fn seed_without_password_fails() {
        assert!(AdminSeed::from_lookup(|_| None).is_err());
    }
}
