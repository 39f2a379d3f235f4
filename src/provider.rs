//! Database provider profiles and the `.env` switch built on them.

use std::{fmt, path::Path, str::FromStr};

use anyhow::Context;
use tracing::info;

use crate::envfile::EnvFile;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SwitchError {
    #[error("unknown provider `{0}`; expected `aws` or `azure`")]
    UnknownProvider(String),
    #[error("missing provider argument; usage: switch_db <aws|azure>")]
    MissingProvider,
    #[error("{0} is not set; refusing to write an empty DB_PASSWORD")]
    MissingPassword(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Aws,
    Azure,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Azure => "azure",
        }
    }

    pub fn profile(self) -> &'static Profile {
        match self {
            Self::Aws => &PROFILES[0],
            Self::Azure => &PROFILES[1],
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws" => Ok(Self::Aws),
            "azure" => Ok(Self::Azure),
            other => Err(SwitchError::UnknownProvider(other.to_string())),
        }
    }
}

/// Non-secret half of a provider's credential set. The password lives in the
/// environment variable named by `password_env`.
#[derive(Debug)]
pub struct Profile {
    pub provider: Provider,
    pub host: &'static str,
    pub user: &'static str,
    pub database: &'static str,
    pub password_env: &'static str,
}

static PROFILES: [Profile; 2] = [
    Profile {
        provider: Provider::Aws,
        host: "bizsite-db.cluster-example.us-east-1.rds.amazonaws.com",
        user: "bizsite_app",
        database: "bizsite",
        password_env: "AWS_DB_PASSWORD",
    },
    Profile {
        provider: Provider::Azure,
        host: "bizsite-db.postgres.database.azure.com",
        user: "bizsite_app",
        database: "bizsite",
        password_env: "AZURE_DB_PASSWORD",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub provider: Provider,
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Profile {
    pub fn resolve(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Credentials, SwitchError> {
        let password = lookup(self.password_env)
            .filter(|p| !p.is_empty())
            .ok_or(SwitchError::MissingPassword(self.password_env))?;
        Ok(Credentials {
            provider: self.provider,
            host: self.host.into(),
            user: self.user.into(),
            password,
            database: self.database.into(),
        })
    }
}

impl Credentials {
    pub fn apply(&self, file: &mut EnvFile) {
        file.set("DB_PROVIDER", self.provider.as_str());
        file.set("DB_HOST", &self.host);
        file.set("DB_USER", &self.user);
        file.set("DB_PASSWORD", &self.password);
        file.set("DB_NAME", &self.database);
    }
}

/// Rewrites the database keys in `path` for `creds`.
pub fn switch_file(path: &Path, creds: &Credentials) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let mut file = EnvFile::parse(&text);
    creds.apply(&mut file);
    std::fs::write(path, file.serialize())
        .with_context(|| format!("write {}", path.display()))?;
    info!(provider = %creds.provider, host = %creds.host, path = %path.display(), "database provider switched");
    Ok(())
}

/// Validates everything before touching `path`, so a bad token or a missing
/// password leaves the file as it was.
pub fn run_switch(
    token: Option<&str>,
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Credentials> {
    let provider: Provider = token.ok_or(SwitchError::MissingProvider)?.parse()?;
    let creds = provider.profile().resolve(lookup)?;
    switch_file(path, &creds)?;
    Ok(creds)
}
