pub(crate) mod wobble;
