pub(crate) mod cross;
pub(crate) mod palette;
pub(crate) mod square;
