//! Declarative site content.
//!
//! Routes, sections, navigation entries, and copy are plain static data;
//! the TUI lays them out. Section anchors are the targets navigation
//! entries can scroll to, and they are resolved against the page the
//! viewer is currently on.

/// Site brand shown in the bar and hero.
pub const BRAND: &str = "Northlight";

/// Tagline under the brand in the hero.
pub const TAGLINE: &str = "A collective for people who build in the open";

/// One page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Team,
}

impl Route {
    /// All routes, in bar order.
    pub fn all() -> &'static [Route] {
        &[Route::Home, Route::About, Route::Team]
    }

    /// URL-style path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Team => "/team",
        }
    }

    /// Page title shown in the window chrome.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Team => "Team",
        }
    }
}

/// Where a navigation entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// In-page anchor, resolved against the current page's sections.
    Anchor(&'static str),
    /// Page switch.
    Route(Route),
}

/// One entry in the navigation bar and the overlay menu.
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: NavTarget,
}

/// The bar's navigation entries.
///
/// `initiatives` deliberately has no matching section anywhere; selecting
/// it exercises the absent-anchor path (close without scrolling).
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "About",
        target: NavTarget::Anchor("about"),
    },
    NavEntry {
        label: "Initiatives",
        target: NavTarget::Anchor("initiatives"),
    },
    NavEntry {
        label: "Team",
        target: NavTarget::Anchor("team"),
    },
    NavEntry {
        label: "Contact",
        target: NavTarget::Anchor("contact"),
    },
];

/// Cross-page link embedded in a section body.
#[derive(Debug, Clone, Copy)]
pub struct SectionLink {
    pub label: &'static str,
    pub route: Route,
}

/// One renderable block of a page.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Anchor name navigation can target, if any.
    pub anchor: Option<&'static str>,
    pub title: &'static str,
    pub body: &'static [&'static str],
    /// Optional trailing link to another page.
    pub link: Option<SectionLink>,
}

/// A member card on the team grid.
#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub blurb: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Mara Quinn",
        role: "Founder & Director",
        blurb: "Started Northlight after a decade maintaining community radio software.",
    },
    TeamMember {
        name: "Tomas Vieira",
        role: "Co-founder & Engineering",
        blurb: "Keeps the infrastructure boring so the projects can be interesting.",
    },
    TeamMember {
        name: "Priya Shah",
        role: "Community Lead",
        blurb: "Runs the mentorship circles and the yearly contributor summit.",
    },
    TeamMember {
        name: "Ilya Brandt",
        role: "Outreach",
        blurb: "Talks to schools, libraries, and anyone else with a spare projector.",
    },
];

const HOME_SECTIONS: &[Section] = &[
    Section {
        anchor: None,
        title: "Build in the open",
        body: &[
            "Northlight is a volunteer collective that designs, ships, and",
            "maintains public-interest software. Everything we make is open",
            "from the first commit.",
        ],
        link: None,
    },
    Section {
        anchor: Some("about"),
        title: "What we do",
        body: &[
            "We pair experienced maintainers with newcomers, adopt abandoned",
            "tools that communities still depend on, and document the craft",
            "of keeping software alive.",
        ],
        link: Some(SectionLink {
            label: "Read our story",
            route: Route::About,
        }),
    },
    Section {
        anchor: Some("team"),
        title: "The people",
        body: &[
            "A small core crew and a long tail of contributors across four",
            "continents.",
        ],
        link: Some(SectionLink {
            label: "Meet the full team",
            route: Route::Team,
        }),
    },
    Section {
        anchor: None,
        title: "Join the next cohort",
        body: &[
            "Mentorship circles open twice a year. No application essay,",
            "just a project you care about.",
        ],
        link: None,
    },
    Section {
        anchor: Some("contact"),
        title: "Contact",
        body: &[
            "hello@northlight.example",
            "Matrix: #northlight:matrix.example",
        ],
        link: None,
    },
];

const ABOUT_SECTIONS: &[Section] = &[
    Section {
        anchor: None,
        title: "Our story",
        body: &[
            "Northlight began as three people fixing a broken bus-timetable",
            "app nobody owned anymore. The fix outlived the company that",
            "abandoned it, and the habit stuck.",
        ],
        link: None,
    },
    Section {
        anchor: Some("values"),
        title: "Values",
        body: &[
            "Open by default. Credit is shared. Maintenance is honored the",
            "same as invention. Newcomers are a feature, not a cost.",
        ],
        link: None,
    },
    Section {
        anchor: Some("mission"),
        title: "Mission",
        body: &[
            "Keep the software a community relies on alive, legible, and",
            "owned by no one in particular.",
        ],
        link: None,
    },
    Section {
        anchor: None,
        title: "Milestones",
        body: &[
            "2019  first adopted project",
            "2021  mentorship circles begin",
            "2023  one hundred contributors",
            "2025  first contributor summit",
        ],
        link: Some(SectionLink {
            label: "Back to the front page",
            route: Route::Home,
        }),
    },
];

const TEAM_SECTIONS: &[Section] = &[
    Section {
        anchor: None,
        title: "The crew",
        body: &[
            "The people who keep the lights on. Everyone here started as a",
            "contributor.",
        ],
        link: None,
    },
    Section {
        anchor: Some("crew"),
        title: "Core team",
        // The member grid renders from TEAM; this body is the intro line.
        body: &["Four core members, listed in order of appearance."],
        link: Some(SectionLink {
            label: "Back to the front page",
            route: Route::Home,
        }),
    },
];

/// Sections of a page, in render order.
pub fn sections(route: Route) -> &'static [Section] {
    match route {
        Route::Home => HOME_SECTIONS,
        Route::About => ABOUT_SECTIONS,
        Route::Team => TEAM_SECTIONS,
    }
}

/// Resolves an anchor name to a section index on the given page.
///
/// Returns `None` when the page has no section with that anchor, which is
/// a legitimate outcome (navigation treats it as a no-op scroll).
pub fn section_index_by_anchor(route: Route, anchor: &str) -> Option<usize> {
    sections(route)
        .iter()
        .position(|section| section.anchor == Some(anchor))
}
