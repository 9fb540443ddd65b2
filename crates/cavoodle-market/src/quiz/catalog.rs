//! Presentation copy for each archetype, shown on listing pages after a quiz.
//!
//! Scoring never reads from this table; the five-axis trait scores here are
//! editorial and independent of any submitted answers.

use serde::Serialize;

use super::personality::PersonalityType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogTraitScores {
    pub energy: u8,
    pub floof: u8,
    pub sass: u8,
    pub cuddle: u8,
    pub chaos: u8,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub celeb_match: &'static str,
    pub rarity_level: &'static str,
    pub emoji: &'static str,
    pub trait_scores: CatalogTraitScores,
}

static CATALOG: [CatalogEntry; 8] = [
    CatalogEntry {
        title: "🛋️ Professional Couch Thief",
        tagline: "Your spot? My spot now.",
        description: "The moment you get up - even for a SECOND - this floofy opportunist has claimed your warm spot. They've perfected the art of looking deeply asleep and impossible to move. Scientists believe they can sense your intent to stand approximately 0.3 seconds before you do.",
        strengths: &[
            "Expert at thermoregulation (via your body heat)",
            "Olympic-level sprawling",
            "Academy Award-worthy fake sleeping",
        ],
        weaknesses: &[
            "Absolutely zero respect for personal furniture boundaries",
            "Will hold grudges if moved",
        ],
        celeb_match: "If your cavoodle was a celebrity, they'd be George Costanza",
        rarity_level: "Very Common",
        emoji: "🛋️",
        trait_scores: CatalogTraitScores { energy: 2, floof: 4, sass: 5, cuddle: 5, chaos: 3 },
    },
    CatalogEntry {
        title: "🏃 Olympic Zoomies Gold Medalist",
        tagline: "MUST. RUN. NOW. REASON? UNCLEAR.",
        description: "At exactly 3:47 AM, or immediately after a bath, or sometimes just BECAUSE, this cavoodle transforms into a furry rocket ship. Furniture is merely an obstacle course. The path must include at least 47 laps of the living room and one dramatic slide across hardwood floors.",
        strengths: &[
            "Unlimited energy reserves",
            "Can run on any surface at any angle",
            "Professional entertainment",
        ],
        weaknesses: &[
            "Zero impulse control",
            "RIP to anything breakable at tail height",
        ],
        celeb_match: "If your cavoodle was a celebrity, they'd be The Flash on a sugar high",
        rarity_level: "Very Common",
        emoji: "🏃",
        trait_scores: CatalogTraitScores { energy: 5, floof: 3, sass: 3, cuddle: 2, chaos: 5 },
    },
    CatalogEntry {
        title: "🍪 Professional Treat Negotiator",
        tagline: "I did a sit. That's at LEAST two treats minimum.",
        description: "This cunning entrepreneur has turned treat acquisition into an art form. They know every hiding spot. They've memorized the sound of every treat bag in a 5-mile radius. 'Sit' isn't a command, it's an opening offer in a complex negotiation.",
        strengths: &[
            "Will actually do tricks (for adequate compensation)",
            "Highly motivated learner",
            "Excellent memory (for treat-related things only)",
        ],
        weaknesses: &[
            "Knows you're a pushover",
            "Has probably already found the secret stash",
        ],
        celeb_match: "If your cavoodle was a celebrity, they'd be a tiny, fluffy Gordon Gecko",
        rarity_level: "Extremely Common",
        emoji: "🍪",
        trait_scores: CatalogTraitScores { energy: 4, floof: 3, sass: 5, cuddle: 3, chaos: 3 },
    },
    CatalogEntry {
        title: "🧦 Sock Acquisition Specialist",
        tagline: "One sock from every pair. Those are the rules.",
        description: "Somewhere in your home exists a secret sock hoard of impressive proportions. This fluffy kleptomaniac specifically targets the LEFT sock (always the left, never explained why). They don't chew them, they're not monsters, they simply... relocate them to a secure facility.",
        strengths: &[
            "Excellent at hide and seek",
            "Forces you to buy new socks regularly (supporting the economy)",
            "Very soft crimes",
        ],
        weaknesses: &[
            "Your sock drawer is a crime scene",
            "Will 100% blame the cat",
        ],
        celeb_match: "If your cavoodle was a celebrity, they'd be Carmen Sandiego",
        rarity_level: "Very Common",
        emoji: "🧦",
        trait_scores: CatalogTraitScores { energy: 3, floof: 4, sass: 4, cuddle: 3, chaos: 4 },
    },
    CatalogEntry {
        title: "⚖️ Barking Barrister",
        tagline: "That leaf looked at me wrong.",
        description: "This vigilant advocate has taken it upon themselves to object to ALL threats. Leaves. Plastic bags. The audacity of people walking on the sidewalk. Someone three blocks away closing a car door. All must be barked at. All must be cross-examined.",
        strengths: &[
            "You'll never be surprised by a delivery person",
            "Excellent hearing",
            "Very alert",
        ],
        weaknesses: &[
            "Will bark at literal air",
            "Believes they have prevented 847 invasions that were actually just wind",
        ],
        celeb_match: "If your cavoodle was a celebrity, they'd be a retired mall cop",
        rarity_level: "Very Common",
        emoji: "⚖️",
        trait_scores: CatalogTraitScores { energy: 3, floof: 3, sass: 4, cuddle: 2, chaos: 4 },
    },
    CatalogEntry {
        title: "🧲 Velcro Dog Extraordinaire",
        tagline: "Personal space? Never heard of it.",
        description: "This cavoodle has eliminated the concept of 'alone time' from your vocabulary. Going to the bathroom? They're coming. Taking a shower? They're watching. Sitting down? They're already on you. They're not clingy, they're just conducting very important research on your whereabouts at all times.",
        strengths: &[
            "Never lonely",
            "Built-in heated blanket",
            "Excellent emotional support",
        ],
        weaknesses: &[
            "You cannot sneeze without a concerned wet nose investigating",
            "Privacy is a distant memory",
        ],
        celeb_match: "If your cavoodle was a celebrity, they'd be a loving but slightly concerning stalker",
        rarity_level: "Extremely Common",
        emoji: "🧲",
        trait_scores: CatalogTraitScores { energy: 3, floof: 5, sass: 2, cuddle: 5, chaos: 2 },
    },
    CatalogEntry {
        title: "🌱 Landscape Remodeling Consultant",
        tagline: "Your garden needed more holes. You're welcome.",
        description: "This cavoodle has a vision for your backyard and it involves CRATERS. Every plant is a potential excavation site. Every garden bed is simply unfinished landscaping. They're not destroying the garden, they're improving it according to their proprietary Dog Feng Shui methodology.",
        strengths: &[
            "Excellent at digging (if you need holes)",
            "Never bored outdoors",
            "Very thorough detector of buried things",
        ],
        weaknesses: &[
            "RIP to your lawn",
            "Will emerge from explorations looking like a different colored dog",
        ],
        celeb_match: "If your cavoodle was a celebrity, they'd be Bob the Builder but chaotic",
        rarity_level: "Common",
        emoji: "🌱",
        trait_scores: CatalogTraitScores { energy: 5, floof: 3, sass: 3, cuddle: 2, chaos: 5 },
    },
    CatalogEntry {
        title: "🎭 Dramatic Arts Major",
        tagline: "Excuse me, I was MILDLY inconvenienced.",
        description: "The Academy has overlooked this four-legged thespian for too long. The heavy SIGHS when asked to move. The betrayed stare when dinner is 3 minutes late. The full-body collapse when told 'no'. This cavoodle feels emotions at 500% volume and needs you to KNOW about it.",
        strengths: &[
            "Never boring",
            "Very expressive communication",
            "Will let you know EXACTLY how they feel",
        ],
        weaknesses: &[
            "May call RSPCA if you cut their nails",
            "Holds grudges FOREVER",
        ],
        celeb_match: "If your cavoodle was a celebrity, they'd be any Real Housewife",
        rarity_level: "Very Common",
        emoji: "🎭",
        trait_scores: CatalogTraitScores { energy: 3, floof: 4, sass: 5, cuddle: 3, chaos: 4 },
    },
];

impl PersonalityType {
    pub fn catalog_entry(self) -> &'static CatalogEntry {
        &CATALOG[self as usize]
    }
}
