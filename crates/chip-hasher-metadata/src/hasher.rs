use crate::{errors::MetadataResult, schema::ChipMetadata};
use serde::Serialize;
use serde_json::ser::Formatter;
use sha2::{Digest, Sha256};
use std::io;

/// Canonical JSON text of a record together with its SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDigest {
    /// Exact bytes that were hashed, as UTF-8 text
    pub json: String,
    /// Uppercase hex encoding of the digest (64 characters)
    pub hash: String,
}

/// Serializes metadata records and hashes them.
///
/// Every call hashes with a fresh [`Sha256`] instance, so no state is
/// carried from one record to the next.
#[derive(Clone, Debug, Default)]
pub struct MetadataHasher;

impl MetadataHasher {
    /// Compact JSON in struct declaration order, with `&`, `<`, `>`, U+2028
    /// and U+2029 written as `\u` escapes.
    pub fn to_canonical_json(metadata: &ChipMetadata) -> MetadataResult<String> {
        let mut bytes = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut bytes, HtmlSafeFormatter);
        metadata.serialize(&mut serializer)?;
        Ok(String::from_utf8(bytes)?)
    }

    pub fn hash_bytes(bytes: &[u8]) -> [u8; 32] {
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&Sha256::digest(bytes));
        hash
    }

    /// Uppercase hex digest of already serialized JSON text.
    pub fn hash_json(json: &str) -> String {
        hex::encode_upper(Self::hash_bytes(json.as_bytes()))
    }

    pub fn hash(metadata: &ChipMetadata) -> MetadataResult<MetadataDigest> {
        let json = Self::to_canonical_json(metadata)?;
        let hash = Self::hash_json(&json);
        Ok(MetadataDigest { json, hash })
    }
}

/// Compact formatter that escapes HTML-significant characters and the
/// JavaScript line separators inside strings. Published hashes were computed
/// over text escaped this way.
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, c) in fragment.char_indices() {
            let escaped = match c {
                '&' => "\\u0026",
                '<' => "\\u003c",
                '>' => "\\u003e",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = index + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Attribute, Collection, CHIP_0007_FORMAT, GENDER_TRAIT};

    fn create_test_metadata(name: &str, series_number: u64) -> ChipMetadata {
        ChipMetadata {
            format: CHIP_0007_FORMAT.to_string(),
            name: name.to_string(),
            description: "test description".to_string(),
            minting_tool: "Bevel".to_string(),
            sensitive_content: false,
            series_number,
            series_total: 10,
            attributes: vec![Attribute::new(GENDER_TRAIT, "Female")],
            collection: Collection::default(),
        }
    }

    #[test]
    fn test_hash_is_uppercase_hex() {
        let digest = MetadataHasher::hash(&create_test_metadata("a", 1)).unwrap();
        assert_eq!(digest.hash.len(), 64);
        assert!(digest
            .hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_hash_matches_manual_calculation() {
        let metadata = create_test_metadata("a", 1);
        let digest = MetadataHasher::hash(&metadata).unwrap();

        let json = serde_json::to_vec(&metadata).unwrap();
        let expected = hex::encode_upper(Sha256::digest(&json));

        assert_eq!(digest.hash, expected);
        assert_eq!(digest.json.as_bytes(), json.as_slice());
    }

    #[test]
    fn test_html_characters_are_escaped() {
        let mut metadata = create_test_metadata("salt & pepper", 1);
        metadata.description = "<b>hi</b>\u{2028}\u{2029}".to_string();

        let json = MetadataHasher::to_canonical_json(&metadata).unwrap();

        assert!(json.contains("\"name\":\"salt \\u0026 pepper\""));
        assert!(json.contains(
            "\"description\":\"\\u003cb\\u003ehi\\u003c/b\\u003e\\u2028\\u2029\""
        ));
        assert!(!json.contains('&'));
        assert!(!json.contains('<'));
        assert!(!json.contains('>'));
    }

    #[test]
    fn test_escaped_json_pins_exact_bytes() {
        let mut metadata = create_test_metadata("salt & pepper", 3);
        metadata.attributes.push(Attribute::new("a\"b", "x>y"));

        assert_eq!(
            MetadataHasher::to_canonical_json(&metadata).unwrap(),
            "{\"format\":\"CHIP-0007\",\"name\":\"salt \\u0026 pepper\",\
             \"description\":\"test description\",\"minting_tool\":\"Bevel\",\
             \"sensitive_content\":false,\"series_number\":3,\"series_total\":10,\
             \"attributes\":[{\"trait_type\":\"gender\",\"value\":\"Female\"},\
             {\"trait_type\":\"a\\\"b\",\"value\":\"x\\u003ey\"}],\
             \"collection\":{\"name\":\"Zuri NFT Tickets for Free Lunch\",\
             \"id\":\"b774f676-c1d5-422e-beed-00ef5510c64d\",\
             \"Attributes\":{\"type\":\"description\",\
             \"value\":\"Rewards for accomplishments during HNGi9.\"}}}"
        );
    }

    #[test]
    fn test_known_digest() {
        // SHA-256("abc")
        assert_eq!(
            hex::encode_upper(MetadataHasher::hash_bytes(b"abc")),
            "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
        );
    }

    #[test]
    fn test_no_state_carried_between_records() {
        let first = create_test_metadata("first", 1);
        let second = create_test_metadata("second", 2);

        let second_alone = MetadataHasher::hash(&second).unwrap();
        MetadataHasher::hash(&first).unwrap();
        let second_after_first = MetadataHasher::hash(&second).unwrap();

        assert_eq!(second_alone, second_after_first);
    }

    #[test]
    fn test_every_field_changes_the_hash() {
        let base = create_test_metadata("a", 1);
        let base_hash = MetadataHasher::hash(&base).unwrap().hash;

        let mut variants = Vec::new();
        let mut m = base.clone();
        m.name = "b".to_string();
        variants.push(m);
        let mut m = base.clone();
        m.description = "other".to_string();
        variants.push(m);
        let mut m = base.clone();
        m.minting_tool = "Headlight".to_string();
        variants.push(m);
        let mut m = base.clone();
        m.series_number = 2;
        variants.push(m);
        let mut m = base.clone();
        m.series_total = 11;
        variants.push(m);
        let mut m = base.clone();
        m.attributes[0].value = "Male".to_string();
        variants.push(m);
        let mut m = base.clone();
        m.attributes.push(Attribute::new("hair", "bald"));
        variants.push(m);

        for variant in variants {
            assert_ne!(MetadataHasher::hash(&variant).unwrap().hash, base_hash);
        }
    }
}
