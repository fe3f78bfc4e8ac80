mod deck;
mod home;
mod invalid;
mod mode_select;

pub use deck::{Deck, DeckSlide, ModeRedirect};
pub use home::Home;
pub use invalid::InvalidUrl;
pub use mode_select::ModeSelect;
