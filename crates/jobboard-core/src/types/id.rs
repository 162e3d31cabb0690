//! Short job identifiers.
//!
//! A [`JobId`] is six bytes from the operating system's secure random
//! source, rendered as unpadded URL-safe base64 (`A-Za-z0-9-_`). That gives
//! an eight character token with 48 bits of entropy. Uniqueness is
//! probabilistic only; nothing checks a fresh id against stored ones.
//!
//! When the `sqlx` feature is enabled the type maps to a PostgreSQL `TEXT`
//! column.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Number of random bytes behind every job identifier.
pub const JOB_ID_ENTROPY_BYTES: usize = 6;

/// Length of the encoded identifier.
pub const JOB_ID_LEN: usize = 8;

/// Server-assigned identifier of a job posting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Generate a fresh identifier from the OS random source.
    pub fn generate() -> AppResult<Self> {
        let mut bytes = [0u8; JOB_ID_ENTROPY_BYTES];
        getrandom::getrandom(&mut bytes).map_err(AppError::random_source)?;
        Ok(Self::from_entropy(bytes))
    }

    /// Encode the given random bytes as an identifier.
    pub fn from_entropy(bytes: [u8; JOB_ID_ENTROPY_BYTES]) -> Self {
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the owned identifier string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Whether `b` belongs to the URL-safe base64 alphabet.
pub fn is_url_safe_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "sqlx")]
impl sqlx::Type<sqlx::Postgres> for JobId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "sqlx")]
impl<'q> sqlx::Encode<'q, sqlx::Postgres> for JobId {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

// Stored identifiers are taken as-is; the table is only written through
// `JobId::generate`.
#[cfg(feature = "sqlx")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for JobId {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        <String as sqlx::Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
    }
}
