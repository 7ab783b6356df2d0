mod calendar_client;
mod news_client;
mod quote_client;

pub use calendar_client::CalendarClient;
pub use news_client::NewsClient;
pub use quote_client::QuoteClient;
