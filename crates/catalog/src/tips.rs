//! Hand-written local tips per destination.

use serde::{Deserialize, Serialize};

/// Tips grouped by topic. Unknown destinations get empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalTips {
    pub dining: Vec<String>,
    pub money_saving: Vec<String>,
    pub transportation: Vec<String>,
    pub language: Vec<String>,
    pub safety: Vec<String>,
}

impl LocalTips {
    pub fn is_empty(&self) -> bool {
        self.sections().iter().all(|(_, tips)| tips.is_empty())
    }

    /// Sections paired with their display headings, in display order
    pub fn sections(&self) -> [(&'static str, &[String]); 5] {
        [
            ("Dining", self.dining.as_slice()),
            ("Money saving", self.money_saving.as_slice()),
            ("Transportation", self.transportation.as_slice()),
            ("Language", self.language.as_slice()),
            ("Safety", self.safety.as_slice()),
        ]
    }
}

pub fn local_tips(destination: &str) -> LocalTips {
    if !destination.trim().eq_ignore_ascii_case("paris") {
        return LocalTips::default();
    }

    LocalTips {
        dining: owned(&[
            "Ask for 'une carafe d'eau' for free tap water",
            "Cafés open early (7-8am), lunch is 12-2pm, dinner starts at 7:30pm",
            "Always greet with 'Bonjour' when entering shops",
            "Try croissants from award-winning bakeries like Du Pain et des Idées",
            "Service is included in the bill ('service compris')",
        ]),
        money_saving: owned(&[
            "Museums are free on first Sunday of each month",
            "Buy a carnet of 10 metro tickets (cheaper than singles)",
            "Eat main meal at lunch with 'formule' menu",
            "Picnic in parks with baguettes, cheese, and wine",
            "Use Vélib' bike sharing for short trips",
        ]),
        transportation: owned(&[
            "Metro runs 5:30am-1:15am (2:15am weekends)",
            "RER B train connects CDG airport to central Paris (€11.40)",
            "Keep ticket until you exit (inspections occur)",
            "Visit Louvre on Wednesday/Friday evenings to avoid crowds",
            "Book tickets online to skip lines at major attractions",
        ]),
        language: owned(&[
            "Bonjour (bon-zhoor) - Hello",
            "Merci (mehr-see) - Thank you",
            "S'il vous plaît (seel voo pleh) - Please",
            "Excusez-moi (ex-koo-zay mwah) - Excuse me",
            "L'addition, s'il vous plaît (lah-dee-see-ohn seel voo pleh) - The bill, please",
        ]),
        safety: owned(&[
            "Be vigilant on metro line 1 and at tourist spots",
            "Avoid petition signers (common scam)",
            "Keep bags zipped and in front of you",
            "Emergency number: 112",
            "Drinking water from Wallace fountains is safe",
        ]),
    }
}

fn owned(tips: &[&str]) -> Vec<String> {
    tips.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paris_has_five_tips_per_section() {
        let tips = local_tips("PARIS");
        for (heading, section) in tips.sections() {
            assert_eq!(section.len(), 5, "section {heading}");
        }
        assert!(!tips.is_empty());
    }

    #[test]
    fn test_unknown_destination_is_empty() {
        let tips = local_tips("Reykjavik");
        assert!(tips.is_empty());
        assert_eq!(tips, LocalTips::default());
    }
}
