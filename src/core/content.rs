//! Static page content

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// A statistic counted up from zero when the stats grid scrolls into view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Statistic {
    pub label: &'static str,
    pub target: u64,
}

/// Share of population at risk, drawn as a bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskLevel {
    pub hazard: &'static str,
    /// Fill width in percent
    pub percent: u8,
}

impl RiskLevel {
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmergencyContact {
    pub service: &'static str,
    pub number: &'static str,
}

/// In-page sections listed in the navbar, `(id, label)`
pub const NAV_SECTIONS: [(&str, &str); 6] = [
    ("disasters", "Disasters"),
    ("first-aid", "First Aid"),
    ("statistics", "Statistics"),
    ("quiz", "Quiz"),
    ("flashcards", "Flashcards"),
    ("emergency", "Emergency"),
];

pub const DISASTERS: [InfoCard; 4] = [
    InfoCard {
        icon: "🌊",
        title: "Floods",
        body: "Move to higher ground early. Six inches of moving water can knock you down.",
    },
    InfoCard {
        icon: "🌍",
        title: "Earthquakes",
        body: "Drop, cover and hold on. Stay away from windows and heavy furniture.",
    },
    InfoCard {
        icon: "☀️",
        title: "Droughts",
        body: "Conserve water, protect livestock and watch for signs of heat illness.",
    },
    InfoCard {
        icon: "🌀",
        title: "Cyclones",
        body: "Follow official warnings, secure loose objects and shelter in a strong building.",
    },
];

pub const FIRST_AID: [InfoCard; 4] = [
    InfoCard {
        icon: "🩹",
        title: "Bleeding",
        body: "Press firmly on the wound with a clean cloth and keep the pressure on.",
    },
    InfoCard {
        icon: "🔥",
        title: "Burns",
        body: "Cool the burn under running water for at least 20 minutes.",
    },
    InfoCard {
        icon: "🦴",
        title: "Fractures",
        body: "Keep the injured limb still and support it in the position found.",
    },
    InfoCard {
        icon: "❤️",
        title: "CPR",
        body: "Push hard and fast in the centre of the chest, 100 to 120 times a minute.",
    },
];

pub const STATISTICS: [Statistic; 4] = [
    Statistic {
        label: "People affected by disasters each year",
        target: 160_000_000,
    },
    Statistic {
        label: "Earthquakes recorded annually",
        target: 12_000,
    },
    Statistic {
        label: "Major floods per year",
        target: 500,
    },
    Statistic {
        label: "Tropical cyclones per year",
        target: 85,
    },
];

pub const RISK_LEVELS: [RiskLevel; 4] = [
    RiskLevel {
        hazard: "Flood",
        percent: 85,
    },
    RiskLevel {
        hazard: "Earthquake",
        percent: 60,
    },
    RiskLevel {
        hazard: "Cyclone",
        percent: 70,
    },
    RiskLevel {
        hazard: "Drought",
        percent: 45,
    },
];

pub const EMERGENCY_CONTACTS: [EmergencyContact; 4] = [
    EmergencyContact {
        service: "National Emergency",
        number: "112",
    },
    EmergencyContact {
        service: "Ambulance",
        number: "108",
    },
    EmergencyContact {
        service: "Earthquake Rescue",
        number: "1092",
    },
    EmergencyContact {
        service: "Disaster Management",
        number: "1070",
    },
];
