// SPDX-License-Identifier: MPL-2.0
//! Built-in page content.
//!
//! The application renders a single brochure page whose sections are
//! described by this data model. Content is compiled in; the model
//! exists so the layout and behaviors stay independent of the words.

/// Identifier of a page section, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Training,
    Stats,
    Gallery,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Training,
        SectionId::Stats,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Navigation label.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Training => "Training",
            SectionId::Stats => "Our Numbers",
            SectionId::Gallery => "Gallery",
            SectionId::Contact => "Contact",
        }
    }
}

/// One animated statistic.
#[derive(Debug, Clone)]
pub struct Stat {
    pub label: &'static str,
    pub target: u64,
    /// Climb duration override in milliseconds; `None` uses the default.
    pub duration_ms: Option<u64>,
}

/// One gallery image, loaded on demand.
#[derive(Debug, Clone)]
pub struct ImageSpec {
    pub path: &'static str,
    pub caption: &'static str,
}

/// What a section contains.
#[derive(Debug, Clone)]
pub enum SectionBody {
    Prose(&'static str),
    Stats(Vec<Stat>),
    Gallery(Vec<ImageSpec>),
    Contact,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    pub body: SectionBody,
}

#[derive(Debug, Clone)]
pub struct Hero {
    pub heading: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub hero: Hero,
    pub sections: Vec<Section>,
}

impl Page {
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }
}

/// The brochure page shipped with the application.
pub fn page() -> Page {
    Page {
        hero: Hero {
            heading: "Northwind Climbing Hall",
            tagline: "Climb higher, together.",
        },
        sections: vec![
            Section {
                id: SectionId::About,
                body: SectionBody::Prose(
                    "Northwind is a community climbing hall in the heart of the \
                     harbor district. Since 2008 we have grown from a single \
                     bouldering cave into three floors of walls, a training \
                     mezzanine, and a café that closes far too late.",
                ),
            },
            Section {
                id: SectionId::Training,
                body: SectionBody::Prose(
                    "We run courses for every level: taster sessions for complete \
                     beginners, technique clinics, lead-climbing certification, \
                     and a competitive youth squad. All instructors are certified \
                     and all gear is included in the course fee.",
                ),
            },
            Section {
                id: SectionId::Stats,
                body: SectionBody::Stats(vec![
                    Stat {
                        label: "Routes set",
                        target: 1_250,
                        duration_ms: None,
                    },
                    Stat {
                        label: "Active members",
                        target: 3_400,
                        duration_ms: None,
                    },
                    Stat {
                        label: "Courses per year",
                        target: 180,
                        duration_ms: Some(2_500),
                    },
                ]),
            },
            Section {
                id: SectionId::Gallery,
                body: SectionBody::Gallery(vec![
                    ImageSpec {
                        path: "assets/photos/main_wall.png",
                        caption: "The main wall",
                    },
                    ImageSpec {
                        path: "assets/photos/boulder_cave.png",
                        caption: "The boulder cave",
                    },
                ]),
            },
            Section {
                id: SectionId::Contact,
                body: SectionBody::Contact,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_every_section_in_order() {
        let page = page();
        let ids: Vec<SectionId> = page.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL);
    }

    #[test]
    fn section_lookup_finds_each_id() {
        let page = page();
        for id in SectionId::ALL {
            assert!(page.section(id).is_some());
        }
    }
}
