use serde::{Deserialize, Serialize};

use super::traits::{Trait, TraitScores};

/// Archetypes a quiz can classify into. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityType {
    CouchThief,
    ZoomiesChampion,
    TreatNegotiator,
    SockCollector,
    BarkingBarrister,
    VelcroVelvet,
    GardenDestroyer,
    DramaQueen,
}

/// Static classification data for one archetype.
#[derive(Debug, PartialEq, Eq)]
pub struct PersonalityProfile {
    pub kind: PersonalityType,
    pub traits: (Trait, Trait),
    pub display_name: &'static str,
    pub description: &'static str,
}

static PROFILES: [PersonalityProfile; 8] = [
    PersonalityProfile {
        kind: PersonalityType::CouchThief,
        traits: (Trait::Couch, Trait::Sass),
        display_name: "Professional Couch Thief",
        description: "Will steal your spot the moment you stand up. Has perfected the art of looking innocent.",
    },
    PersonalityProfile {
        kind: PersonalityType::ZoomiesChampion,
        traits: (Trait::Zoomies, Trait::Energy),
        display_name: "Olympic Zoomies Champion",
        description: "Powered by an unknown energy source. May spontaneously achieve lightspeed.",
    },
    PersonalityProfile {
        kind: PersonalityType::TreatNegotiator,
        traits: (Trait::Treat, Trait::Sass),
        display_name: "Professional Treat Negotiator",
        description: "Has never met a treat they didn't deserve. Expert in puppy-eye diplomacy.",
    },
    PersonalityProfile {
        kind: PersonalityType::SockCollector,
        traits: (Trait::Sock, Trait::Garden),
        display_name: "Certified Sock Collector",
        description: "Curator of a private sock museum. Location: classified.",
    },
    PersonalityProfile {
        kind: PersonalityType::BarkingBarrister,
        traits: (Trait::Bark, Trait::Sass),
        display_name: "Barking Barrister",
        description: "Objects to everything. Loudly. The wind? Objectionable. Leaves? Also objectionable.",
    },
    PersonalityProfile {
        kind: PersonalityType::VelcroVelvet,
        traits: (Trait::Velcro, Trait::Chill),
        display_name: "Velcro Dog Extraordinaire",
        description: "Personal space is a myth. Your lap is their office.",
    },
    PersonalityProfile {
        kind: PersonalityType::GardenDestroyer,
        traits: (Trait::Garden, Trait::Energy),
        display_name: "Landscape Architect",
        description: "Has redesigned your backyard. You're welcome.",
    },
    PersonalityProfile {
        kind: PersonalityType::DramaQueen,
        traits: (Trait::Drama, Trait::Sass),
        display_name: "Dramatic Arts Major",
        description: "Oscar-worthy performances daily. Specializes in betrayed looks.",
    },
];

impl PersonalityType {
    pub const ALL: [PersonalityType; 8] = [
        PersonalityType::CouchThief,
        PersonalityType::ZoomiesChampion,
        PersonalityType::TreatNegotiator,
        PersonalityType::SockCollector,
        PersonalityType::BarkingBarrister,
        PersonalityType::VelcroVelvet,
        PersonalityType::GardenDestroyer,
        PersonalityType::DramaQueen,
    ];

    pub fn profile(self) -> &'static PersonalityProfile {
        &PROFILES[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            PersonalityType::CouchThief => "CouchThief",
            PersonalityType::ZoomiesChampion => "ZoomiesChampion",
            PersonalityType::TreatNegotiator => "TreatNegotiator",
            PersonalityType::SockCollector => "SockCollector",
            PersonalityType::BarkingBarrister => "BarkingBarrister",
            PersonalityType::VelcroVelvet => "VelcroVelvet",
            PersonalityType::GardenDestroyer => "GardenDestroyer",
            PersonalityType::DramaQueen => "DramaQueen",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn display_name(self) -> &'static str {
        self.profile().display_name
    }

    pub fn description(self) -> &'static str {
        self.profile().description
    }

    /// Sum of the two trait totals that define this archetype.
    pub fn type_score(self, scores: &TraitScores) -> u32 {
        let (first, second) = self.profile().traits;
        scores.get(first).saturating_add(scores.get(second))
    }
}

/// Picks the archetype with the strictly highest type score; earlier variants win ties.
pub fn classify(scores: &TraitScores) -> PersonalityType {
    let mut best = PersonalityType::ALL[0];
    let mut best_score = best.type_score(scores);

    for kind in PersonalityType::ALL.into_iter().skip(1) {
        let score = kind.type_score(scores);
        if score > best_score {
            best = kind;
            best_score = score;
        }
    }

    best
}
