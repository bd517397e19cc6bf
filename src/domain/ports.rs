use crate::domain::model::FlightOption;

/// Produces candidate fares for a trip.
pub trait FareSource {
    fn list_fares(&self, origin: &str, start_date: &str, end_date: &str) -> Vec<FlightOption>;
}

/// Remembers each user's home airport for the lifetime of the process.
pub trait SessionStore {
    /// Stores `code` uppercased, replacing any earlier value.
    fn set_home_airport(&mut self, user_id: &str, code: &str);
    fn get_home_airport(&self, user_id: &str) -> Option<String>;
}

/// Free-text generation capability (travel tips and the like).
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> String;
}

pub trait ConfigProvider {
    fn user_id(&self) -> &str;
    fn tips_enabled(&self) -> bool;
    /// Fare catalog override; `None` keeps the built-in catalog.
    fn catalog(&self) -> Option<&[FlightOption]>;
}
