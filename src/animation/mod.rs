pub(crate) mod ease;
pub(crate) mod ramp;
pub(crate) mod spring;
pub(crate) mod tween;
