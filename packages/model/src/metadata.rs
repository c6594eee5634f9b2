use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page-level metadata persisted as a sibling payload next to the section
/// array. The editing core carries these fields through save/load without
/// examining them; unknown keys survive a round trip via the flattened
/// `extra` map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageMetadata {
    pub fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// Slug used to seed section IDs; untitled pages share a fixed seed.
    pub fn slug_or_default(&self) -> &str {
        self.slug.as_deref().unwrap_or("untitled")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_metadata_keys_survive_round_trip() {
        let raw = json!({
            "title": "Home",
            "slug": "home",
            "status": "draft",
            "analyticsId": "UA-1234",
            "seo": { "description": "Landing page" }
        });

        let metadata: PageMetadata = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(metadata.extra["analyticsId"], "UA-1234");

        let back = serde_json::to_value(&metadata).unwrap();
        assert_eq!(back["analyticsId"], "UA-1234");
        assert_eq!(back["seo"]["description"], "Landing page");
    }

    #[test]
    fn publish_at_parses_rfc3339() {
        let raw = json!({ "publishAt": "2026-09-01T08:00:00Z" });
        let metadata: PageMetadata = serde_json::from_value(raw).unwrap();
        assert!(metadata.publish_at.is_some());
    }
}
