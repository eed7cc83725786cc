use crate::enums::SelectedView;
use crate::poster::model::{Block, Heading, Inline, PageContent, Person, Section};

pub fn page() -> PageContent {
    PageContent {
        view: SelectedView::Team,
        title: Some("Team"),
        divider: true,
        blocks: vec![
            Block::Person(Person {
                name: "Hudson Reynolds",
                affiliation: "Student Researcher, Boston University",
                program: "Computer Engineering, Class of 2025",
                email: "hudsonre@bu.edu",
                links: profile_links(
                    "https://github.com/HudsonReynolds2",
                    "https://www.linkedin.com/in/hudson-m-reynolds/",
                ),
            }),
            Block::Person(Person {
                name: "Alex Tuecke",
                affiliation: "Student Researcher, Worcester Polytechnic Institute (WPI)",
                program: "Computer Science, Robotics, Class of 2028",
                email: "ahtuecke@wpi.edu",
                links: profile_links(
                    "https://github.com/atuecke",
                    "https://www.linkedin.com/in/alex-tuecke-06ab6b291/",
                ),
            }),
            Section::new(Heading::h2("Advisors"))
                .rich_list(vec![
                    vec![
                        Inline::Strong("Mike Sherman"),
                        Inline::Text(" \u{2014} University of Chicago"),
                    ],
                    vec![
                        Inline::Strong("Kate Keahey"),
                        Inline::Text(" \u{2014} University of Chicago / Argonne National Laboratory"),
                    ],
                ])
                .into(),
            Section::new(Heading::h2("Acknowledgements"))
                .paragraph(
                    "This work is supported in part by the National Science Foundation \
                     OAC-2150500 award.",
                )
                .into(),
        ],
    }
}

fn profile_links(github: &'static str, linkedin: &'static str) -> Vec<Inline> {
    vec![
        Inline::Link {
            label: "GitHub",
            href: github,
        },
        Inline::Text(" | "),
        Inline::Link {
            label: "LinkedIn",
            href: linkedin,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Person> {
        page()
            .blocks
            .into_iter()
            .filter_map(|b| match b {
                Block::Person(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_two_team_members() {
        let names: Vec<_> = people().iter().map(|p| p.name).collect();
        assert_eq!(names, ["Hudson Reynolds", "Alex Tuecke"]);
    }

    #[test]
    fn test_profile_links_are_https() {
        for person in people() {
            let hrefs: Vec<_> = person
                .links
                .iter()
                .filter_map(|l| match l {
                    Inline::Link { href, .. } => Some(*href),
                    _ => None,
                })
                .collect();
            assert_eq!(hrefs.len(), 2, "{}", person.name);
            assert!(hrefs.iter().all(|h| h.starts_with("https://")));
        }
    }

    #[test]
    fn test_acknowledges_nsf_award() {
        assert!(page().plain_text().contains("OAC-2150500"));
    }
}
