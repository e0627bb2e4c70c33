pub(crate) mod decor;
pub(crate) mod intro;
pub(crate) mod snapshot;
