pub mod segment;
pub mod markdown;
pub mod types;
pub mod dates;
pub mod filter;

pub use segment::{segment, shorten_url, Segment, Segmented};
pub use markdown::to_markdown_links;
pub use types::{CreateResearchLogInput, ResearchLog, UpdateResearchLogInput, SHEET_HEADERS};
pub use dates::{format_display_date, format_input_date, parse_date, today};
pub use filter::{sort_newest_first, FilterOptions};
