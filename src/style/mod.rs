pub(crate) mod colormap;
pub(crate) mod config;
pub(crate) mod resolve;
