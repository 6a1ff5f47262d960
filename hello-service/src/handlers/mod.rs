pub mod fallback;
pub mod root;

pub use fallback::not_found;
pub use root::{root, GREETING};
