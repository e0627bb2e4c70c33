pub(crate) mod driver;
pub(crate) mod mapper;
pub(crate) mod metrics;
pub(crate) mod parallax;
