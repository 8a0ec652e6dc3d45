// clarity-core/src/domain/fixtures/assets.rs

use serde::{Deserialize, Serialize};

use super::{Fixture, FixtureKind};
use crate::domain::filter::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Connected,
    Warning,
    Error,
}

impl SourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTable {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub record_count: u64,
    #[serde(default)]
    pub column_count: u64,
    #[serde(default)]
    pub data_volume: String,
    #[serde(default)]
    pub quality_score: Option<f64>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSchema {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub table_count: u64,
    #[serde(default)]
    pub tables: Vec<CatalogTable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: SourceStatus,
    #[serde(default)]
    pub environment: String,
    pub connection_health: f64,
    pub last_synced: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub schemas: Vec<CatalogSchema>,
}

impl Searchable for DataSource {
    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "type" => Some(self.kind.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_data_sources: u64,
    pub connected_sources: u64,
    pub total_tables: u64,
    pub total_records: u64,
    pub total_data_volume: String,
    pub avg_connection_health: f64,
}

/// Root of `assets.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCatalog {
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
    #[serde(default)]
    pub summary: CatalogSummary,
}

impl Fixture for AssetCatalog {
    const KIND: FixtureKind = FixtureKind::Assets;
}
