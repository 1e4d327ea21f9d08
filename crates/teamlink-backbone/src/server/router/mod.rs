pub(crate) mod teams;
