use super::assets::Asset;
use crate::enums::SelectedView;

/// One rendered tab: optional heading plus a list of blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub view: SelectedView,
    /// Page heading; Home uses the hero instead
    pub title: Option<&'static str>,
    /// Wave banner above the heading
    pub divider: bool,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Hero {
        image: Asset,
        title: &'static str,
        subtitle: &'static str,
    },
    Section(Section),
    /// Two-column grid, stacks on narrow screens
    Columns(Vec<Column>),
    Image(Asset),
    Person(Person),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Column {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<Heading>,
    pub body: Vec<Body>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Paragraph(Vec<Inline>),
    List(Vec<Vec<Inline>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Strong(&'static str),
    LineBreak,
    /// External link, opened in a new tab
    Link {
        label: &'static str,
        href: &'static str,
    },
}

/// Team member entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: &'static str,
    pub affiliation: &'static str,
    pub program: &'static str,
    pub email: &'static str,
    pub links: Vec<Inline>,
}

// ---------------------------------------------------------------------------
// Builders used by the page modules
// ---------------------------------------------------------------------------

impl Heading {
    pub fn h2(text: &'static str) -> Self {
        Self {
            level: HeadingLevel::H2,
            text,
        }
    }

    pub fn h3(text: &'static str) -> Self {
        Self {
            level: HeadingLevel::H3,
            text,
        }
    }
}

impl Section {
    pub fn new(heading: Heading) -> Self {
        Self {
            heading: Some(heading),
            body: Vec::new(),
        }
    }

    pub fn paragraph(mut self, text: &'static str) -> Self {
        self.body.push(Body::Paragraph(vec![Inline::Text(text)]));
        self
    }

    pub fn rich_paragraph(mut self, inlines: Vec<Inline>) -> Self {
        self.body.push(Body::Paragraph(inlines));
        self
    }

    pub fn list<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let items = items.into_iter().map(|s| vec![Inline::Text(s)]).collect();
        self.body.push(Body::List(items));
        self
    }

    pub fn rich_list(mut self, items: Vec<Vec<Inline>>) -> Self {
        self.body.push(Body::List(items));
        self
    }
}

impl Column {
    pub fn of(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl From<Section> for Block {
    fn from(section: Section) -> Self {
        Block::Section(section)
    }
}

// ---------------------------------------------------------------------------
// Text extraction
// ---------------------------------------------------------------------------

impl PageContent {
    /// Every visible text node joined with newlines, image alt text included.
    pub fn plain_text(&self) -> String {
        let mut out = Vec::new();
        if let Some(title) = self.title {
            out.push(title.to_string());
        }
        for block in &self.blocks {
            block.collect_text(&mut out);
        }
        out.join("\n")
    }

    /// Images referenced by the page, in document order (divider first).
    pub fn assets(&self) -> Vec<Asset> {
        let mut out = Vec::new();
        if self.divider {
            out.push(Asset::Wave);
        }
        for block in &self.blocks {
            block.collect_assets(&mut out);
        }
        out
    }
}

impl Block {
    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Block::Hero {
                image,
                title,
                subtitle,
            } => {
                out.push(image.alt().to_string());
                out.push(title.to_string());
                out.push(subtitle.to_string());
            }
            Block::Section(section) => {
                if let Some(heading) = section.heading {
                    out.push(heading.text.to_string());
                }
                for body in &section.body {
                    match body {
                        Body::Paragraph(inlines) => out.push(inline_text(inlines)),
                        Body::List(items) => out.extend(items.iter().map(|i| inline_text(i))),
                    }
                }
            }
            Block::Columns(columns) => {
                for block in columns.iter().flat_map(|c| &c.blocks) {
                    block.collect_text(out);
                }
            }
            Block::Image(asset) => out.push(asset.alt().to_string()),
            Block::Person(person) => {
                out.push(person.name.to_string());
                out.push(person.affiliation.to_string());
                out.push(person.program.to_string());
                out.push(format!("Email: {}", person.email));
                out.push(inline_text(&person.links));
            }
        }
    }

    fn collect_assets(&self, out: &mut Vec<Asset>) {
        match self {
            Block::Hero { image, .. } | Block::Image(image) => out.push(*image),
            Block::Columns(columns) => {
                for block in columns.iter().flat_map(|c| &c.blocks) {
                    block.collect_assets(out);
                }
            }
            Block::Section(_) | Block::Person(_) => {}
        }
    }
}

fn inline_text(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(s) | Inline::Strong(s) => *s,
            Inline::Link { label, .. } => *label,
            Inline::LineBreak => "\n",
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_text_joins_runs() {
        let inlines = [
            Inline::Strong("Mike Sherman"),
            Inline::Text(" - University of Chicago"),
            Inline::LineBreak,
            Inline::Link {
                label: "GitHub",
                href: "https://github.com/",
            },
        ];
        assert_eq!(
            inline_text(&inlines),
            "Mike Sherman - University of Chicago\nGitHub"
        );
    }

    #[test]
    fn test_plain_text_walks_columns() {
        let page = PageContent {
            view: SelectedView::Approach,
            title: Some("Approach"),
            divider: true,
            blocks: vec![Block::Columns(vec![
                Column::of(vec![Section::new(Heading::h3("Left"))
                    .list(["one", "two"])
                    .into()]),
                Column::of(vec![Block::Image(Asset::Architecture)]),
            ])],
        };
        assert_eq!(page.plain_text(), "Approach\nLeft\none\ntwo\nSystem architecture");
        assert_eq!(page.assets(), vec![Asset::Wave, Asset::Architecture]);
    }
}
