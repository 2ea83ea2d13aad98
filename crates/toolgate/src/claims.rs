//! Claims carried in the token payload
//!
//! Two shapes are supported: [`ClaimSet`], an ordered key/value mapping whose
//! insertion order is the serialized order, and structs annotated with
//! `#[claims]`, which gain the registered claim fields.

use crate::claims;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Alias to allow macro-generated code to reference toolgate::StandardClaims within this crate
use crate as toolgate;

/// The `StandardClaims` trait defines the registered JWT claims.
pub trait StandardClaims {
    /// Issuer (iss) - identifies the principal that issued the JWT
    fn issuer(&self) -> Option<&str>;
    /// Subject (sub) - identifies the principal that is the subject of the JWT
    fn subject(&self) -> Option<&str>;
    /// Audience (aud) - identifies the recipients that the JWT is intended for
    fn audience(&self) -> Option<&str>;
    /// Expiration Time (exp) - identifies the expiration time (seconds since Unix epoch)
    fn expiration(&self) -> Option<i64>;
    /// Not Before (nbf) - identifies the time before which the JWT MUST NOT be accepted
    fn not_before(&self) -> Option<i64>;
    /// Issued At (iat) - identifies the time at which the JWT was issued
    fn issued_at(&self) -> Option<i64>;
    /// JWT ID (jti) - provides a unique identifier for the JWT
    fn jwt_id(&self) -> Option<&str>;
}

/// Registered claims only
#[claims]
pub struct Claims {}

/// Ordered claims mapping
///
/// Keys serialize in insertion order. Setting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet {
    entries: Map<String, Value>,
}

impl ClaimSet {
    /// Create an empty claims set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary claim
    pub fn claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a claim
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Set the issuer (`iss`)
    pub fn with_issuer(self, iss: impl Into<String>) -> Self {
        self.claim("iss", iss.into())
    }

    /// Set the subject (`sub`)
    pub fn with_subject(self, sub: impl Into<String>) -> Self {
        self.claim("sub", sub.into())
    }

    /// Set the audience (`aud`)
    pub fn with_audience(self, aud: impl Into<String>) -> Self {
        self.claim("aud", aud.into())
    }

    /// Set the expiration time (`exp`)
    pub fn with_expiration(self, exp: i64) -> Self {
        self.claim("exp", exp)
    }

    /// Set the not-before time (`nbf`)
    pub fn with_not_before(self, nbf: i64) -> Self {
        self.claim("nbf", nbf)
    }

    /// Set the issued-at time (`iat`)
    pub fn with_issued_at(self, iat: i64) -> Self {
        self.claim("iat", iat)
    }

    /// Set the JWT ID (`jti`)
    pub fn with_jwt_id(self, jti: impl Into<String>) -> Self {
        self.claim("jti", jti.into())
    }

    /// Look up a claim
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Claim keys in serialization order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        self.entries.get(key).and_then(Value::as_i64)
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl StandardClaims for ClaimSet {
    fn issuer(&self) -> Option<&str> {
        self.get_str("iss")
    }

    fn subject(&self) -> Option<&str> {
        self.get_str("sub")
    }

    fn audience(&self) -> Option<&str> {
        self.get_str("aud")
    }

    fn expiration(&self) -> Option<i64> {
        self.get_i64("exp")
    }

    fn not_before(&self) -> Option<i64> {
        self.get_i64("nbf")
    }

    fn issued_at(&self) -> Option<i64> {
        self.get_i64("iat")
    }

    fn jwt_id(&self) -> Option<&str> {
        self.get_str("jti")
    }
}
