pub mod budget;
pub mod listing;
pub mod proposal;
pub mod record;
pub mod verdict;
