use crate::domain::model::FlightOption;
use crate::domain::ports::FareSource;

/// Fixed fare table. Prices are made up but in a realistic range.
pub fn default_catalog() -> Vec<FlightOption> {
    vec![
        FlightOption::new("SLC", 220, "Utah resorts: Snowbird, Alta, Park City"),
        FlightOption::new("RNO", 260, "Lake Tahoe region: Northstar, Heavenly, Palisades"),
        FlightOption::new("JAC", 420, "Jackson Hole Mountain Resort"),
        FlightOption::new("EGE", 380, "Vail & Beaver Creek"),
        FlightOption::new("YVR", 310, "Whistler/Blackcomb (drive from Vancouver)"),
        FlightOption::new("BZN", 360, "Big Sky, Montana"),
    ]
}

/// Serves the same catalog for every origin and date range.
#[derive(Debug, Clone)]
pub struct StaticFareSource {
    catalog: Vec<FlightOption>,
}

impl StaticFareSource {
    pub fn new() -> Self {
        Self {
            catalog: default_catalog(),
        }
    }

    pub fn with_catalog(catalog: Vec<FlightOption>) -> Self {
        Self { catalog }
    }
}

impl Default for StaticFareSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FareSource for StaticFareSource {
    fn list_fares(&self, origin: &str, start_date: &str, end_date: &str) -> Vec<FlightOption> {
        tracing::debug!(
            "Listing {} catalog fares (origin={}, dates={}..{})",
            self.catalog.len(),
            origin,
            start_date,
            end_date
        );
        self.catalog.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ignores_origin_and_dates() {
        let source = StaticFareSource::new();
        let from_den = source.list_fares("DEN", "your start date", "your end date");
        let from_ord = source.list_fares("ORD", "Feb 15", "Feb 20");
        assert_eq!(from_den, from_ord);
        assert_eq!(from_den.len(), 6);
    }

    #[test]
    fn test_catalog_keeps_insertion_order() {
        let codes: Vec<String> = StaticFareSource::new()
            .list_fares("DEN", "", "")
            .into_iter()
            .map(|f| f.destination)
            .collect();
        assert_eq!(codes, vec!["SLC", "RNO", "JAC", "EGE", "YVR", "BZN"]);
    }

    #[test]
    fn test_custom_catalog() {
        let source = StaticFareSource::with_catalog(vec![FlightOption::new("SUN", 199, "Sun Valley")]);
        let fares = source.list_fares("BOI", "", "");
        assert_eq!(fares, vec![FlightOption::new("SUN", 199, "Sun Valley")]);
    }
}
