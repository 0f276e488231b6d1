//! Breach records as reported by the lookup service.
//!
//! The service encodes flags as `0`/`1` integers; booleans are accepted too so
//! hand-written fixtures and other hosts can use either form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Origin of a single breach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachSource {
    pub name: String,
    #[serde(default)]
    pub breach_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        serialize_with = "serialize_flag"
    )]
    pub unverified: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        serialize_with = "serialize_flag"
    )]
    pub passwordless: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        serialize_with = "serialize_flag"
    )]
    pub compilation: bool,
}

impl BreachSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            breach_date: None,
            unverified: false,
            passwordless: false,
            compilation: false,
        }
    }

    pub fn with_date(mut self, breach_date: &str) -> Self {
        self.breach_date = Some(breach_date.to_string());
        self
    }

    pub fn unverified(mut self) -> Self {
        self.unverified = true;
        self
    }

    pub fn compilation(mut self) -> Self {
        self.compilation = true;
        self
    }

    /// Breach date, with an empty string treated as absent.
    pub fn breach_date(&self) -> Option<&str> {
        self.breach_date.as_deref().filter(|d| !d.is_empty())
    }

    pub fn is_verified(&self) -> bool {
        !self.unverified
    }
}

/// One exposure event for the queried subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub source: BreachSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl BreachRecord {
    pub fn new(source: BreachSource) -> Self {
        Self {
            password: None,
            source,
            email: None,
            username: None,
            fields: Vec::new(),
        }
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// The exposed password, if a non-empty one was found.
    pub fn exposed_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    pub fn has_password(&self) -> bool {
        self.exposed_password().is_some()
    }

    /// Email if present, otherwise username.
    pub fn subject(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|e| !e.is_empty())
            .or_else(|| self.username.as_deref().filter(|u| !u.is_empty()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawFlag>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawFlag::Bool(b)) => b,
        Some(RawFlag::Int(n)) => n != 0,
        None => false,
    })
}

fn serialize_flag<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}
