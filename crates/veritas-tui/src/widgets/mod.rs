//! Custom widget components

mod confidence_meter;
mod feature_cards;
mod file_prompt;
mod hero;
mod key_hints;
pub mod modal_overlay;
mod nav_bar;
mod notification;
mod result_card;
mod upload_panel;

pub use confidence_meter::{meter_fill, ConfidenceMeter, MeterAnimation, METER_DELAY, METER_DURATION};
pub use feature_cards::FeatureCards;
pub use file_prompt::FilePrompt;
pub use hero::Hero;
pub use key_hints::KeyHints;
pub use nav_bar::NavBar;
pub use notification::NotificationDialog;
pub use result_card::{ResultCard, MODEL_VERSION};
pub use upload_panel::UploadPanel;
