pub mod adapter;
pub mod locales;

pub use adapter::FakerContentProvider;
pub use locales::LocaleKey;
