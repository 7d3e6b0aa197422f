//! DTOs for link shortening endpoint.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Request to shorten a URL.
///
/// Decoding is lenient:
/// - a `null` body, a missing `url` key and a `null` value all leave `url` empty
/// - keys are matched against `url` ignoring ASCII case
/// - when several keys match, the last one in the document wins
/// - unknown keys are ignored
///
/// Anything other than an object or `null` (arrays, strings, numbers) is
/// rejected, as is a non-string `url`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ShortenRequest {
    pub url: String,
}

impl<'de> Deserialize<'de> for ShortenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(ShortenRequestVisitor)
    }
}

struct ShortenRequestVisitor;

impl<'de> Visitor<'de> for ShortenRequestVisitor {
    type Value = ShortenRequest;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with a string `url` field")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ShortenRequest::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ShortenRequest::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = ShortenRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("url") {
                if let Some(url) = map.next_value::<Option<String>>()? {
                    request.url = url;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(request)
    }
}

impl ShortenRequest {
    /// Decodes the first JSON value of a request body.
    ///
    /// Anything after the first complete value is ignored and the
    /// `Content-Type` header is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] for an empty body, malformed JSON, or
    /// a value that is not an object (or `null`) with a string `url`.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        match serde_json::Deserializer::from_slice(body)
            .into_iter::<Self>()
            .next()
        {
            Some(Ok(request)) => Ok(request),
            Some(Err(e)) => {
                tracing::debug!(error = %e, "Rejected shorten request body");
                Err(AppError::bad_request("Invalid Request"))
            }
            None => Err(AppError::bad_request("Invalid Request")),
        }
    }
}

/// Response carrying the short code.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
