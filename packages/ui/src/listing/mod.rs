//! Job listing view: filters, market snapshot, job cards and relocation help.

mod filter_panel;
mod job_card;
mod job_list;
mod page;
mod relocation;
mod snapshot;

pub use filter_panel::FilterPanel;
pub use job_card::JobCard;
pub use job_list::JobList;
pub use page::ListingPage;
pub use relocation::RelocationSection;
pub use snapshot::MarketSnapshot;
