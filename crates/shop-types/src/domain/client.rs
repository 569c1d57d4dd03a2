use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub registered_at: DateTime<Utc>,
    pub premium: bool,
}

impl Client {
    pub fn new(
        name: String,
        email: String,
        phone: String,
        address: String,
        registered_at: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Self> {
        let client = Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            address,
            registered_at: registered_at.unwrap_or_else(Utc::now),
            premium: false,
        };
        client.validate()?;
        Ok(client)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("client name is required");
        }
        if self.email.trim().is_empty() {
            anyhow::bail!("client email is required");
        }
        Ok(())
    }

    /// Case-insensitive match on name or email.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }
}
