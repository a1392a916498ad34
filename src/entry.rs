//! Catalog entry model.
//!
//! Field names on the wire match the reference backend (`type`, `health`,
//! `model`, ...). `is_playing_sound` is a runtime overlay and never persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creature category, a fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Passive,
    Neutral,
    Hostile,
    Boss,
    Utility,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Passive => write!(f, "Passive"),
            Category::Neutral => write!(f, "Neutral"),
            Category::Hostile => write!(f, "Hostile"),
            Category::Boss => write!(f, "Boss"),
            Category::Utility => write!(f, "Utility"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "passive" => Ok(Category::Passive),
            "neutral" => Ok(Category::Neutral),
            "hostile" => Ok(Category::Hostile),
            "boss" => Ok(Category::Boss),
            "utility" => Ok(Category::Utility),
            _ => Err(anyhow::anyhow!("Unknown category: {}", s)),
        }
    }
}

/// Either a concrete category or the synthetic "All" filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

/// Drop rarity, a fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rarity::Common => write!(f, "Common"),
            Rarity::Uncommon => write!(f, "Uncommon"),
            Rarity::Rare => write!(f, "Rare"),
            Rarity::Legendary => write!(f, "Legendary"),
        }
    }
}

/// Three-component vector for model placement in the external viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

fn default_scale() -> f64 {
    1.0
}

/// One catalog record: a creature, its metadata, and its asset references.
///
/// Asset refs (`model`, `image`, `banner`, `sound`) are opaque paths/URLs
/// managed by the backend; the catalog stores them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub health: f64,
    pub damage: String,
    pub behavior: String,
    pub habitat: String,
    #[serde(default)]
    pub drops: Vec<String>,
    pub rarity: Rarity,
    pub description: String,
    pub model: String,
    pub image: String,
    pub banner: String,
    pub sound: String,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Server-assigned, present only on entries that came from the backend.
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Transient display flag, reconciled on playback completion events.
    #[serde(skip)]
    pub is_playing_sound: bool,
}

/// Client-submitted data for a new entry, before id assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub health: f64,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub behavior: String,
    #[serde(default)]
    pub habitat: String,
    #[serde(default)]
    pub drops: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub banner: String,
    #[serde(default)]
    pub sound: String,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
}

impl EntryDraft {
    /// Collect the names of missing or malformed required fields.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        let text_fields = [
            ("name", &self.name),
            ("damage", &self.damage),
            ("behavior", &self.behavior),
            ("habitat", &self.habitat),
            ("description", &self.description),
            ("model", &self.model),
            ("image", &self.image),
            ("banner", &self.banner),
            ("sound", &self.sound),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                missing.push(field.to_string());
            }
        }
        if self.category.is_none() {
            missing.push("type".to_string());
        }
        if self.rarity.is_none() {
            missing.push("rarity".to_string());
        }
        if self.health <= 0.0 {
            missing.push("health".to_string());
        }
        if self.scale <= 0.0 {
            missing.push("scale".to_string());
        }
        missing
    }

    /// Materialize the draft into an entry under the given id.
    ///
    /// Callers must have validated the draft first; the unwraps here are on
    /// fields `missing_fields` already checked.
    pub fn into_entry(self, id: String) -> Entry {
        Entry {
            id,
            name: self.name,
            category: self.category.unwrap_or(Category::Passive),
            health: self.health,
            damage: self.damage,
            behavior: self.behavior,
            habitat: self.habitat,
            drops: self.drops,
            rarity: self.rarity.unwrap_or(Rarity::Common),
            description: self.description,
            model: self.model,
            image: self.image,
            banner: self.banner,
            sound: self.sound,
            scale: self.scale,
            position: self.position,
            rotation: self.rotation,
            weaknesses: self.weaknesses,
            abilities: self.abilities,
            created_at: None,
            updated_at: None,
            is_playing_sound: false,
        }
    }
}

/// A partial update. Only supplied fields replace the stored values; asset
/// refs in particular are retained unless a new reference is provided.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habitat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drops: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<String>>,
}

impl EntryPatch {
    /// Merge the patch over an existing entry in place.
    pub fn apply(&self, entry: &mut Entry) {
        if let Some(ref v) = self.name {
            entry.name = v.clone();
        }
        if let Some(v) = self.category {
            entry.category = v;
        }
        if let Some(v) = self.health {
            entry.health = v;
        }
        if let Some(ref v) = self.damage {
            entry.damage = v.clone();
        }
        if let Some(ref v) = self.behavior {
            entry.behavior = v.clone();
        }
        if let Some(ref v) = self.habitat {
            entry.habitat = v.clone();
        }
        if let Some(ref v) = self.drops {
            entry.drops = v.clone();
        }
        if let Some(v) = self.rarity {
            entry.rarity = v;
        }
        if let Some(ref v) = self.description {
            entry.description = v.clone();
        }
        if let Some(ref v) = self.model {
            entry.model = v.clone();
        }
        if let Some(ref v) = self.image {
            entry.image = v.clone();
        }
        if let Some(ref v) = self.banner {
            entry.banner = v.clone();
        }
        if let Some(ref v) = self.sound {
            entry.sound = v.clone();
        }
        if let Some(v) = self.scale {
            entry.scale = v;
        }
        if let Some(v) = self.position {
            entry.position = v;
        }
        if let Some(v) = self.rotation {
            entry.rotation = v;
        }
        if let Some(ref v) = self.weaknesses {
            entry.weaknesses = v.clone();
        }
        if let Some(ref v) = self.abilities {
            entry.abilities = v.clone();
        }
        entry.updated_at = Some(Utc::now());
    }
}
