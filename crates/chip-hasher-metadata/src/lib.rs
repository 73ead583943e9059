/*!
# CHIP-0007 Metadata

Data model, attribute parsing and hashing for CHIP-0007 NFT metadata records.

## Usage

```rust
use chip_hasher_metadata::{parse_attributes, MetadataHasher, ChipMetadata, Collection, MetadataResult};

fn example() -> MetadataResult<()> {
    let metadata = ChipMetadata {
        format: "CHIP-0007".to_string(),
        name: "adewale-the-amebo".to_string(),
        description: String::new(),
        minting_tool: "Bevel".to_string(),
        sensitive_content: false,
        series_number: 1,
        series_total: 1,
        attributes: parse_attributes("hair: bald, eyes: black"),
        collection: Collection::default(),
    };

    let digest = MetadataHasher::hash(&metadata)?;
    assert_eq!(digest.hash.len(), 64);
    Ok(())
}
```
*/

pub mod attributes;
pub mod errors;
pub mod hasher;
pub mod schema;

pub use attributes::parse_attributes;
pub use errors::{MetadataError, MetadataResult};
pub use hasher::{MetadataDigest, MetadataHasher};
pub use schema::{
    Attribute, ChipMetadata, Collection, CollectionAttributes, CHIP_0007_FORMAT, GENDER_TRAIT,
};
