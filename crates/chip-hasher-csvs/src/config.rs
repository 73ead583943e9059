use chip_hasher_metadata::{Collection, CHIP_0007_FORMAT};

/// Settings for a hashing run
#[derive(Debug, Clone)]
pub struct HashConfig {
    /// Format tag written into every record
    pub format: String,

    /// Collection descriptor embedded unchanged in every record
    pub collection: Collection,

    /// Header of the column appended to the output file
    pub hash_column: String,

    /// Replaces the input file's extension to form the output file name
    pub output_suffix: String,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            format: CHIP_0007_FORMAT.to_string(),
            collection: Collection::default(),
            hash_column: "Hash".to_string(),
            output_suffix: "output.csv".to_string(),
        }
    }
}
