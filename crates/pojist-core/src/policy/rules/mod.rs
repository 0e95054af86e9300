//! Rule-based building blocks shared by the insurer extractors.

pub mod amounts;
pub mod birth_number;
pub mod patterns;
pub mod phone;
pub mod text;

pub use amounts::{limit_pair, strip_grouping};
pub use birth_number::birth_date_from_national_id;
pub use phone::normalize_phone;
pub use text::{capture_in, collapse_whitespace, yes_no, DocumentText};
