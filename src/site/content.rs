//! Copy shown on the landing page.

/// Everything the landing page displays.
#[derive(Debug, Clone, Copy)]
pub struct FestivalContent {
    pub name: &'static str,
    pub tagline: &'static str,
    pub dates: &'static str,
    pub venue: &'static str,
    pub about: &'static [&'static str],
    pub schedule: &'static [ScheduleEntry],
    pub highlights: &'static [Highlight],
    pub footer: Footer,
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleEntry {
    pub time: &'static str,
    pub title: &'static str,
    pub kind: EventKind,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    SpecialEvent,
    Masterclass,
    Workshop,
    Panel,
}

impl EventKind {
    pub fn label(self) -> &'static str {
        match self {
            EventKind::SpecialEvent => "Special Event",
            EventKind::Masterclass => "Masterclass",
            EventKind::Workshop => "Workshop",
            EventKind::Panel => "Panel",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Footer {
    pub tagline: &'static str,
    pub address: &'static [&'static str],
    pub email: &'static str,
    pub copyright: &'static str,
}

pub const FESTIVAL: FestivalContent = FestivalContent {
    name: "Nusantara Film Festival",
    tagline: "Empowering stories from every island",
    dates: "November 20 - 23, 2026",
    venue: "Jakarta Selatan, Indonesia",
    about: &[
        "A national celebration of Indonesian cinema, art and performance, showcasing the brightest talents and most compelling stories.",
        "Four days of screenings, masterclasses and conversations bring filmmakers and audiences together under one roof.",
    ],
    schedule: &[
        ScheduleEntry {
            time: "Nov 20, 19:00",
            title: "Opening Night",
            kind: EventKind::SpecialEvent,
            description: "Red carpet premiere of the festival's opening film followed by a reception with the cast.",
        },
        ScheduleEntry {
            time: "Nov 21, 10:00",
            title: "Directing Masterclass",
            kind: EventKind::Masterclass,
            description: "An award-winning director walks through the making of a feature from script to screen.",
        },
        ScheduleEntry {
            time: "Nov 22, 14:00",
            title: "Sound for Film",
            kind: EventKind::Workshop,
            description: "Hands-on session on field recording, foley and the final mix.",
        },
        ScheduleEntry {
            time: "Nov 23, 16:00",
            title: "The Future of Cinema",
            kind: EventKind::Panel,
            description: "Producers and distributors discuss streaming, festivals and independent releases.",
        },
    ],
    highlights: &[
        Highlight {
            title: "Feature Competition",
            description: "Twelve new Indonesian features compete for the festival's top prize.",
        },
        Highlight {
            title: "Short Film Showcase",
            description: "Emerging filmmakers present short works selected from open submissions.",
        },
        Highlight {
            title: "Community Screenings",
            description: "Free outdoor screenings in neighbourhoods across the city.",
        },
    ],
    footer: Footer {
        tagline: "Celebrating Indonesian film, art and performance.",
        address: &[
            "Jl. Lebak Bulus I No.1, RT.4/RW.4",
            "Cilandak Bar., Kec. Cilandak",
            "Jakarta Selatan, Indonesia",
        ],
        email: "hello@nusantarafilmfest.id",
        copyright: "Nusantara Film Festival. All rights reserved.",
    },
};
