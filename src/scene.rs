pub(crate) mod color;
pub(crate) mod object;
pub(crate) mod spawner;
pub(crate) mod star;
