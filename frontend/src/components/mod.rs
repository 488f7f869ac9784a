mod card_frame;

pub use card_frame::{CardFrame, CardStatus};
