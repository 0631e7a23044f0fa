//! Domain entity definitions.

mod handle;
mod movie;

pub use handle::HandlePair;
pub use movie::{Movie, Poster, is_web_url};
