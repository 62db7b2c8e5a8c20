pub(crate) mod banner;
pub mod logger;
