pub mod content_block;
pub mod content_page;
pub mod inline_text;
pub mod page_header;
pub mod person_card;

pub use content_block::ContentBlock;
pub use content_page::ContentPage;
pub use inline_text::InlineText;
pub use page_header::PageHeader;
pub use person_card::PersonCard;
