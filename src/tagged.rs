//! Labeled values with a strict JSON shape.
//!
//! A [`Tagged`] record has exactly two fields, `tag` and `value`. Parsing
//! rejects extra fields and a `tag` that is not a string, so a record
//! either has the expected shape or fails loudly.

use std::fmt::Display;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::show::Shower;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tagged<T> {
    pub tag: String,
    pub value: T,
}

impl<T> Tagged<T> {
    pub fn new(tag: impl Into<String>, value: T) -> Self {
        Self {
            tag: tag.into(),
            value,
        }
    }
}

impl<T: DeserializeOwned> Tagged<T> {
    /// Parse a record from JSON.
    pub fn from_json(input: &str) -> Result<Self> {
        let tagged: Self = serde_json::from_str(input).context("invalid tagged record")?;
        log::debug!("parsed tagged record {:?}", tagged.tag);
        Ok(tagged)
    }
}

impl<T: Display> Shower for Tagged<T> {
    fn show(&self) -> String {
        format!("{}: {}", self.tag, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::show::describe;

    #[test]
    fn parses_well_formed_record() {
        let t: Tagged<String> = Tagged::from_json(r#"{"tag":"hello","value":"world"}"#).unwrap();
        assert_eq!(t, Tagged::new("hello", "world".to_string()));
    }

    #[test]
    fn rejects_extra_field() {
        let err = Tagged::<String>::from_json(r#"{"tag":"hello","value":"world","ext":true}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid tagged record"));
        assert!(format!("{err:#}").contains("ext"));
    }

    #[test]
    fn rejects_numeric_tag() {
        let result = Tagged::<String>::from_json(r#"{"tag":42,"value":"41++"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_value() {
        let err = Tagged::<String>::from_json(r#"{"tag":"hello"}"#).unwrap_err();
        assert!(format!("{err:#}").contains("value"));
    }

    #[test]
    fn value_type_is_enforced() {
        assert!(Tagged::<u32>::from_json(r#"{"tag":"n","value":"seven"}"#).is_err());
        let t = Tagged::<u32>::from_json(r#"{"tag":"n","value":7}"#).unwrap();
        assert_eq!(t.value, 7);
    }

    #[test]
    fn shows_tag_and_value() {
        let t = Tagged::new("hello", "world");
        assert_eq!(t.show(), "hello: world");
        assert_eq!(describe(&t), "hello: world");
    }
}
