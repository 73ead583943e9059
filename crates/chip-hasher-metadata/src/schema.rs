/*!
# CHIP-0007 Metadata Schema

The record hashed for every qualifying CSV row.

## ⚠️ Field Order Is Part Of The Hash

Serialization follows struct declaration order, and the digest is taken over
those exact bytes. Reordering fields, renaming keys or changing field types
changes every hash ever produced by this tool.
*/

use serde::{Deserialize, Serialize};

/// Format tag written into every record
pub const CHIP_0007_FORMAT: &str = "CHIP-0007";

/// Trait name of the attribute prepended to every record
pub const GENDER_TRAIT: &str = "gender";

pub const DEFAULT_COLLECTION_NAME: &str = "Zuri NFT Tickets for Free Lunch";
pub const DEFAULT_COLLECTION_ID: &str = "b774f676-c1d5-422e-beed-00ef5510c64d";
pub const DEFAULT_COLLECTION_ATTRIBUTE_TYPE: &str = "description";
pub const DEFAULT_COLLECTION_ATTRIBUTE_VALUE: &str = "Rewards for accomplishments during HNGi9.";

/// Metadata record for a single NFT.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipMetadata {
    pub format: String,
    pub name: String,
    pub description: String,
    /// Team that minted the NFT
    pub minting_tool: String,
    pub sensitive_content: bool,
    pub series_number: u64,
    pub series_total: u64,
    /// Gender first, then the traits parsed from the attributes cell
    pub attributes: Vec<Attribute>,
    pub collection: Collection,
}

/// A single trait/value pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// Collection descriptor shared by every record of a run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub id: String,
    /// Serialized under a capitalized key; existing published hashes depend on it.
    #[serde(rename = "Attributes")]
    pub attributes: CollectionAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionAttributes {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            name: DEFAULT_COLLECTION_NAME.to_string(),
            id: DEFAULT_COLLECTION_ID.to_string(),
            attributes: CollectionAttributes {
                kind: DEFAULT_COLLECTION_ATTRIBUTE_TYPE.to_string(),
                value: DEFAULT_COLLECTION_ATTRIBUTE_VALUE.to_string(),
            },
        }
    }
}
