pub mod hash_csv;
