pub(crate) mod bbox;
pub(crate) mod tilt;
