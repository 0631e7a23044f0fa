mod footer_bar;
mod input;
mod movie_card;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use input::TextInput;
pub use movie_card::{CARD_HEIGHT, CARD_WIDTH, MovieCard};
