//! UI screens.

mod app;
mod card_screen;
mod final_screen;
mod input_screen;
mod landing_screen;
mod loading_screen;

pub use app::App;
pub use card_screen::{CardMode, CardScreen, CardScreenState};
pub use final_screen::{FinalScreen, FinalScreenState};
pub use input_screen::{InputAction, InputScreen};
pub use landing_screen::LandingScreen;
pub use loading_screen::LoadingScreen;
