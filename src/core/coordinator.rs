use crate::core::labeler::filter_and_rank;
use crate::core::parsing::{extract_airport_code, extract_budget, parse_set_home_airport};
use crate::domain::model::RankedFare;
use crate::domain::ports::{FareSource, SessionStore, TextGenerator};

pub const START_DATE_PLACEHOLDER: &str = "your start date";
pub const END_DATE_PLACEHOLDER: &str = "your end date";

pub const UNKNOWN_HOME_AIRPORT_REPLY: &str = "I don't know your home airport yet. \
     Please say something like: 'Set my home airport to DEN'.";

pub const NO_FARES_REPLY: &str = "I couldn't find any ski destinations that match your budget. \
     Try raising it or leaving it out.";

/// Turns one user message into one reply. Holds no per-conversation state
/// of its own; everything it remembers lives in the session store.
pub struct Coordinator<S: SessionStore, F: FareSource, G: TextGenerator> {
    session: S,
    fares: F,
    generator: G,
    tips_enabled: bool,
}

impl<S: SessionStore, F: FareSource, G: TextGenerator> Coordinator<S, F, G> {
    pub fn new(session: S, fares: F, generator: G) -> Self {
        Self {
            session,
            fares,
            generator,
            tips_enabled: false,
        }
    }

    pub fn with_tips(mut self, enabled: bool) -> Self {
        self.tips_enabled = enabled;
        self
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn handle_message(&mut self, user_id: &str, message: &str) -> String {
        if let Some(airport) = parse_set_home_airport(message) {
            self.session.set_home_airport(user_id, &airport);
            return format!("Got it. I will remember your home airport as {}.", airport);
        }

        // An empty stored code counts as unknown.
        let origin = match self
            .session
            .get_home_airport(user_id)
            .filter(|code| !code.is_empty())
        {
            Some(code) => code,
            None => match extract_airport_code(message) {
                Some(code) => {
                    tracing::debug!("Using one-off origin {} for user {}", code, user_id);
                    code
                }
                None => {
                    tracing::warn!("No home airport known for user {}", user_id);
                    return UNKNOWN_HOME_AIRPORT_REPLY.to_string();
                }
            },
        };

        // Dates are not parsed yet.
        let start_date = START_DATE_PLACEHOLDER;
        let end_date = END_DATE_PLACEHOLDER;

        let budget = extract_budget(message);
        tracing::debug!("origin={} budget={:?}", origin, budget);

        let options = self.fares.list_fares(&origin, start_date, end_date);
        let ranked = filter_and_rank(options, budget);

        if ranked.is_empty() {
            tracing::warn!("No fares left for origin {} with budget {:?}", origin, budget);
            return NO_FARES_REPLY.to_string();
        }

        self.render(&origin, start_date, end_date, budget, &ranked)
    }

    fn render(
        &self,
        origin: &str,
        start_date: &str,
        end_date: &str,
        budget: Option<u32>,
        ranked: &[RankedFare],
    ) -> String {
        let mut lines = Vec::with_capacity(ranked.len() + 2);

        match budget {
            Some(b) => lines.push(format!(
                "Ski trip options from {} ({} to {}), budget ${}:",
                origin, start_date, end_date, b
            )),
            None => lines.push(format!(
                "Ski trip options from {} ({} to {}):",
                origin, start_date, end_date
            )),
        }

        for fare in ranked {
            lines.push(format!(
                "- {}: ${} ({}) - {}",
                fare.destination, fare.price_usd, fare.label, fare.notes
            ));
        }

        if self.tips_enabled {
            let cheapest = &ranked[0];
            let prompt = format!(
                "Give one short travel tip for a ski trip from {} to {} ({}).",
                origin, cheapest.destination, cheapest.notes
            );
            let tip = self.generator.generate(&prompt);
            if !tip.trim().is_empty() {
                lines.push(format!("Tip: {}", tip.trim()));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionStore, PlaceholderTextGenerator, StaticFareSource};
    use crate::domain::model::FlightOption;
    use std::cell::RefCell;

    fn coordinator() -> Coordinator<InMemorySessionStore, StaticFareSource, PlaceholderTextGenerator>
    {
        Coordinator::new(
            InMemorySessionStore::new(),
            StaticFareSource::new(),
            PlaceholderTextGenerator,
        )
    }

    struct RecordingGenerator {
        prompts: RefCell<Vec<String>>,
    }

    impl TextGenerator for RecordingGenerator {
        fn generate(&self, prompt: &str) -> String {
            self.prompts.borrow_mut().push(prompt.to_string());
            "Pack a neck gaiter.".to_string()
        }
    }

    struct OriginCheckingSource;

    impl FareSource for OriginCheckingSource {
        fn list_fares(&self, origin: &str, start_date: &str, end_date: &str) -> Vec<FlightOption> {
            assert_eq!(start_date, START_DATE_PLACEHOLDER);
            assert_eq!(end_date, END_DATE_PLACEHOLDER);
            vec![FlightOption::new("SLC", 100, origin)]
        }
    }

    #[test]
    fn test_set_home_airport_reply() {
        let mut c = coordinator();
        let reply = c.handle_message("u1", "Set my home airport to DEN");
        assert_eq!(reply, "Got it. I will remember your home airport as DEN.");
        assert_eq!(c.session().get_home_airport("u1").as_deref(), Some("DEN"));
    }

    #[test]
    fn test_set_phrase_matches_anywhere() {
        let mut c = coordinator();
        let reply = c.handle_message("u1", "I never said set my home airport to sea, really");
        assert_eq!(
            reply,
            "Got it. I will remember your home airport as SEA, REALLY."
        );
    }

    #[test]
    fn test_unknown_home_airport_prompt() {
        let mut c = coordinator();
        assert_eq!(
            c.handle_message("u1", "What about next weekend"),
            UNKNOWN_HOME_AIRPORT_REPLY
        );
    }

    #[test]
    fn test_empty_stored_airport_counts_as_unknown() {
        let mut c = coordinator();
        assert_eq!(
            c.handle_message("u1", "set my home airport to   "),
            "Got it. I will remember your home airport as ."
        );
        assert_eq!(
            c.handle_message("u1", "Show me some fares"),
            UNKNOWN_HOME_AIRPORT_REPLY
        );
        assert!(c
            .handle_message("u1", "Show me fares from ORD")
            .starts_with("Ski trip options from ORD"));
    }

    #[test]
    fn test_stored_airport_wins_over_message_code() {
        let mut c = Coordinator::new(
            InMemorySessionStore::new(),
            OriginCheckingSource,
            PlaceholderTextGenerator,
        );
        c.handle_message("u1", "Set my home airport to DEN");
        let reply = c.handle_message("u1", "Plan a trip from ORD");
        assert_eq!(
            reply,
            "Ski trip options from DEN (your start date to your end date):\n\
             - SLC: $100 (budget-friendly) - DEN"
        );
    }

    #[test]
    fn test_render_without_budget() {
        let mut c = coordinator();
        c.handle_message("u1", "Set my home airport to DEN");
        let reply = c.handle_message("u1", "Show me some fares");
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines[0], "Ski trip options from DEN (your start date to your end date):");
        assert_eq!(lines[1], "- SLC: $220 (budget-friendly) - Utah resorts: Snowbird, Alta, Park City");
        assert_eq!(lines[6], "- JAC: $420 (premium) - Jackson Hole Mountain Resort");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_render_with_budget_header() {
        let mut c = coordinator();
        c.handle_message("u1", "Set my home airport to DEN");
        let reply = c.handle_message("u1", "Plan a ski trip with a $300 budget");
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(
            lines[0],
            "Ski trip options from DEN (your start date to your end date), budget $300:"
        );
        // 1.5 x 300 = 450 keeps everything; 420 is above 1.2 x 300.
        assert_eq!(lines[6], "- JAC: $420 (above budget) - Jackson Hole Mountain Resort");
    }

    #[test]
    fn test_no_fares_reply() {
        let mut c = coordinator();
        c.handle_message("u1", "Set my home airport to DEN");
        assert_eq!(c.handle_message("u1", "budget is $99"), NO_FARES_REPLY);
    }

    #[test]
    fn test_tips_disabled_by_default() {
        let generator = RecordingGenerator {
            prompts: RefCell::new(Vec::new()),
        };
        let mut c = Coordinator::new(InMemorySessionStore::new(), StaticFareSource::new(), generator);
        let reply = c.handle_message("u1", "fares from DEN");
        assert!(!reply.contains("Tip:"));
        assert!(c.generator.prompts.borrow().is_empty());
    }

    #[test]
    fn test_tip_uses_injected_generator() {
        let generator = RecordingGenerator {
            prompts: RefCell::new(Vec::new()),
        };
        let mut c = Coordinator::new(InMemorySessionStore::new(), StaticFareSource::new(), generator)
            .with_tips(true);
        let reply = c.handle_message("u1", "fares from DEN");
        assert!(reply.ends_with("\nTip: Pack a neck gaiter."));
        let prompts = c.generator.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("from DEN to SLC"));
    }
}
