mod catalog;
mod event;
mod news;
mod quote;
mod week;

pub use catalog::{display_name, MarketCategory};
pub use event::{EconomicEvent, Impact};
pub use news::NewsItem;
pub use quote::Quote;
pub use week::CalendarWeek;
