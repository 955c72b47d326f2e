//! Product data structure
//!
//! A catalog entry as it travels over the wire. Image bytes are carried
//! inline as base64 in `imgContent` when a listing asks for them.

use serde::{Deserialize, Serialize};

/// A product in the catalog
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID (UUID string), empty before insertion
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub desc: String,
    /// Blob ID of the product image
    pub img: String,
    /// Raw image bytes, populated on listing only
    #[serde(
        rename = "imgContent",
        default,
        with = "base64_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub img_content: Option<Vec<u8>>,
}

impl Product {
    /// Create a product that has not been stored yet
    pub fn new(name: impl Into<String>, desc: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            desc: desc.into(),
            img: img.into(),
            img_content: None,
        }
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
