//! Municipality record model.

use serde::{Deserialize, Serialize};

/// A single municipality as it appears in the scraped dataset.
///
/// Values are kept as the display strings from the source table. The
/// numeric-looking columns carry thousands separators and footnote residue,
/// so they are never parsed into numbers; records are display values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    /// Municipality name, unique across the dataset.
    #[serde(rename = "Obcina")]
    pub name: String,

    /// Area in km².
    #[serde(rename = "Povrsina")]
    pub area: String,

    /// Population count.
    #[serde(rename = "Prebivalci")]
    pub population: String,

    /// Population density per km².
    #[serde(rename = "Gostota")]
    pub density: String,

    /// Number of settlements.
    #[serde(rename = "Naselja")]
    pub settlements: String,

    /// Founding year.
    #[serde(rename = "Leto")]
    pub founded: String,

    /// Province, the filterable grouping attribute.
    #[serde(rename = "Pokrajina")]
    pub province: String,

    /// Statistical region, display-only.
    #[serde(rename = "Statisticnaregija")]
    pub statistical_region: String,

    /// Commune or municipality this one seceded from, if any.
    #[serde(rename = "OdcepitevOdkomuneobcine", default)]
    pub seceded_from: Option<String>,

    /// Link to the municipality's wiki page.
    #[serde(rename = "url", default)]
    pub url: Option<String>,
}

impl Municipality {
    /// Relative path of the municipality's emblem image.
    ///
    /// Emblem assets are laid out as
    /// `municipalities/<name with spaces as underscores>/grb.png`.
    pub fn emblem_path(&self) -> String {
        format!("municipalities/{}/grb.png", self.name.replace(' ', "_"))
    }
}
