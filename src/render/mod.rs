pub(crate) mod axes;
pub(crate) mod projection;
pub(crate) mod raster;
pub(crate) mod scene;
