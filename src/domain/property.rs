//! Property records shown on the detail page and in the catalogue.

use serde::{Deserialize, Deserializer, Serialize};

use super::id::PropertyId;

/// Image shown when a property carries no image reference of its own.
pub const PLACEHOLDER_IMAGE: &str = "prop.webp";

const FALLBACK_NAME: &str = "Property Title";
const FALLBACK_CATEGORY: &str = "Property Category";
const FALLBACK_LOCATION: &str = "Property Location";
const FALLBACK_LTP: &str = "Property LTP";
const FALLBACK_DESCRIPTION: &str = "Welcome to your dream home! Nestled in the heart of a vibrant \
     community, this charming property boasts modern comforts and classic appeal.";

/// Accept a JSON string or number and keep its textual form.
fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Helper {
        Str(String),
        Int(i64),
        Float(f64),
        Null,
    }
    Ok(match Helper::deserialize(deserializer)? {
        Helper::Str(s) => s,
        Helper::Int(n) => n.to_string(),
        Helper::Float(n) => n.to_string(),
        Helper::Null => String::new(),
    })
}

fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<PropertyId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = de_text(deserializer)?;
    Ok(PropertyId::parse(Some(&raw)))
}

fn de_id<'de, D>(deserializer: D) -> Result<PropertyId, D::Error>
where
    D: Deserializer<'de>,
{
    de_text(deserializer).map(PropertyId::new)
}

/// A single property as served by `GET /api/properties/{id}`.
///
/// Immutable once fetched; a refetch or fallback replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<PropertyId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    /// Last traded price, kept as display text.
    #[serde(default, deserialize_with = "de_text")]
    pub ltp: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl PropertyRecord {
    /// The fixed record shown whenever live data cannot be assembled.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            id: None,
            name: FALLBACK_NAME.into(),
            category: FALLBACK_CATEGORY.into(),
            location: FALLBACK_LOCATION.into(),
            ltp: FALLBACK_LTP.into(),
            description: FALLBACK_DESCRIPTION.into(),
            image: None,
        }
    }

    #[must_use]
    pub fn image_or_default(&self) -> &str {
        self.image
            .as_deref()
            .filter(|image| !image.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// A catalogue entry on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySummary {
    #[serde(deserialize_with = "de_id")]
    pub id: PropertyId,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "de_text")]
    pub ltp: String,
}

impl PropertySummary {
    fn listing(id: &str, image: &str, category: &str, location: &str, ltp: &str) -> Self {
        Self {
            id: PropertyId::new(id),
            image: Some(image.into()),
            category: category.into(),
            location: location.into(),
            ltp: ltp.into(),
        }
    }

    /// Static listings shown when the catalogue endpoint has nothing to offer.
    #[must_use]
    pub fn featured() -> Vec<Self> {
        vec![
            Self::listing("1", "property1.jpg", "Apartment", "New York", "$500,000"),
            Self::listing("2", "property2.jpg", "House", "Los Angeles", "$750,000"),
            Self::listing("3", "property3.jpg", "Condo", "Chicago", "$400,000"),
            Self::listing("4", "property1.jpg", "Apartment", "New York", "$500,000"),
            Self::listing("5", "property2.jpg", "House", "Los Angeles", "$750,000"),
        ]
    }

    /// Route to this property's detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/property/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_uses_fixed_literals() {
        let record = PropertyRecord::fallback();
        assert_eq!(record.name, "Property Title");
        assert_eq!(record.category, "Property Category");
        assert_eq!(record.location, "Property Location");
        assert_eq!(record.ltp, "Property LTP");
        assert!(record.description.starts_with("Welcome to your dream home!"));
        assert!(record.description.ends_with("classic appeal."));
        assert_eq!(record.id, None);
    }

    #[test]
    fn record_accepts_numeric_id_and_ltp() {
        let record: PropertyRecord = serde_json::from_str(
            r#"{"id": 42, "name": "Loft", "category": "Condo", "location": "Austin",
                "ltp": 125000.5, "description": "Bright", "image": null}"#,
        )
        .unwrap();
        assert_eq!(record.id, Some(PropertyId::new("42")));
        assert_eq!(record.ltp, "125000.5");
        assert_eq!(record.image_or_default(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn record_accepts_string_ltp_and_missing_fields() {
        let record: PropertyRecord =
            serde_json::from_str(r#"{"name": "Barn", "ltp": "$90,000"}"#).unwrap();
        assert_eq!(record.ltp, "$90,000");
        assert_eq!(record.id, None);
        assert!(record.category.is_empty());
    }

    #[test]
    fn image_reference_is_preferred_over_placeholder() {
        let record = PropertyRecord {
            image: Some("barn.jpg".into()),
            ..PropertyRecord::fallback()
        };
        assert_eq!(record.image_or_default(), "barn.jpg");
    }

    #[test]
    fn featured_listing_has_five_entries() {
        let featured = PropertySummary::featured();
        assert_eq!(featured.len(), 5);
        assert_eq!(featured[2].category, "Condo");
        assert_eq!(featured[2].detail_path(), "/property/3");
    }
}
