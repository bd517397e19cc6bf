pub mod coordinator;
pub mod labeler;
pub mod parsing;

pub use crate::domain::model::{FlightOption, PriceLabel, RankedFare};
pub use crate::domain::ports::{ConfigProvider, FareSource, SessionStore, TextGenerator};
pub use crate::utils::error::Result;
