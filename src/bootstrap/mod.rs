//! Process bootstrap helpers run once before the service starts.

pub mod logger;
