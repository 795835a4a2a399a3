pub(crate) mod basics;
pub(crate) mod parameterized;
