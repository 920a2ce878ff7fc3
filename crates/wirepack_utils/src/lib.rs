pub mod bitset;
pub mod collections;
pub mod concat_string;
pub mod ecmascript;
pub mod hash_placeholder;
pub mod path_ext;
pub mod pretty_type_name;
pub mod rayon;
pub mod sanitize_file_name;
pub mod xxhash;

pub use rustc_hash;
