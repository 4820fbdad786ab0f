pub(crate) mod customize;
pub(crate) mod feature;
pub(crate) mod landmarks;
