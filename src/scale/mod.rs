pub(crate) mod bounds;
pub(crate) mod round;
pub(crate) mod sizer;
pub(crate) mod ticks;
