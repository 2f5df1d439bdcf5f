#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Kind of a media attachment.
///
/// When the `sea-orm` feature is enabled, this enum can be used directly in SeaORM entities.
/// It is stored by name (`IMAGE`, `VIDEO`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "IMAGE"))]
    Image,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "VIDEO"))]
    Video,
}

impl MediaType {
    /// All accepted values.
    pub const ALL: &'static [MediaType] = &[Self::Image, Self::Video];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IMAGE" => Ok(Self::Image),
            "VIDEO" => Ok(Self::Video),
            other => Err(DomainError::Validation(format!(
                "unknown media type '{other}', expected one of IMAGE, VIDEO"
            ))),
        }
    }
}

/// Media entity - a single image or video attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: i32,
    pub media_type: MediaType,
    pub url: String,
    /// `None` while the attachment is not linked to a post.
    pub post_id: Option<i32>,
}

/// Input for uploading an attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMedia {
    pub media_type: MediaType,
    pub url: String,
    pub post_id: Option<i32>,
}

impl NewMedia {
    pub fn new(media_type: MediaType, url: impl Into<String>) -> Self {
        Self {
            media_type,
            url: url.into(),
            post_id: None,
        }
    }

    pub fn attached_to(mut self, post_id: i32) -> Self {
        self.post_id = Some(post_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        for ty in MediaType::ALL {
            assert_eq!(ty.as_str().parse::<MediaType>().unwrap(), *ty);
        }
    }

    #[test]
    fn test_parse_rejects_other_values() {
        assert!(matches!(
            "AUDIO".parse::<MediaType>(),
            Err(DomainError::Validation(_))
        ));
        // Stored by name, not by lowercase value.
        assert!("image".parse::<MediaType>().is_err());
    }
}
