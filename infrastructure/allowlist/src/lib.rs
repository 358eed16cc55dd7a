mod client;

pub use client::AllowedCategoryClient;
