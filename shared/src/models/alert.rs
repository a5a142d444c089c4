//! Alert Model

use serde::{Deserialize, Serialize};

/// Closed category set for civic alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertCategory {
    Infrastructure,
    Environment,
    Security,
    Noise,
    PublicServices,
    Other,
}

/// All categories, in display order
pub const ALERT_CATEGORIES: [AlertCategory; 6] = [
    AlertCategory::Infrastructure,
    AlertCategory::Environment,
    AlertCategory::Security,
    AlertCategory::Noise,
    AlertCategory::PublicServices,
    AlertCategory::Other,
];

/// Display metadata for a category (label + badge color)
///
/// The exhaustive `match` guarantees every variant has an entry —
/// adding a category without metadata fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDisplay {
    pub label: &'static str,
    pub color: &'static str,
}

impl AlertCategory {
    pub fn display(&self) -> CategoryDisplay {
        match self {
            AlertCategory::Infrastructure => CategoryDisplay {
                label: "Infraestructura",
                color: "orange",
            },
            AlertCategory::Environment => CategoryDisplay {
                label: "Medio Ambiente",
                color: "green",
            },
            AlertCategory::Security => CategoryDisplay {
                label: "Seguridad",
                color: "blue",
            },
            AlertCategory::Noise => CategoryDisplay {
                label: "Ruido",
                color: "yellow",
            },
            AlertCategory::PublicServices => CategoryDisplay {
                label: "Servicios Públicos",
                color: "purple",
            },
            AlertCategory::Other => CategoryDisplay {
                label: "Otro",
                color: "gray",
            },
        }
    }
}

/// Alert entity (API-facing)
///
/// An alert is "active" iff `is_resolved == false` and
/// `expires_at > now`. Expiry is a query-time filter — alerts are
/// never physically deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: Option<String>,
    pub creator_id: String,
    pub creator_display_name: Option<String>,
    pub category: AlertCategory,
    /// Free-text description, max 250 chars
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Unix millis, assigned server-side at creation
    pub created_at: i64,
    /// Unix millis, `created_at + 14d`, fixed at creation
    pub expires_at: i64,
    #[serde(default)]
    pub is_resolved: bool,
    /// Denormalized counter, kept in sync by the like repository
    #[serde(default)]
    pub likes_count: i64,
    /// Denormalized counter, kept in sync by the comment repository
    #[serde(default)]
    pub comments_count: i64,
}

/// Create alert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertCreate {
    pub category: AlertCategory,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_display_metadata() {
        for category in ALERT_CATEGORIES {
            let display = category.display();
            assert!(!display.label.is_empty());
            assert!(!display.color.is_empty());
        }
    }

    #[test]
    fn category_serializes_as_variant_name() {
        let json = serde_json::to_string(&AlertCategory::PublicServices).unwrap();
        assert_eq!(json, "\"PublicServices\"");
    }
}
