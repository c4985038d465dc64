pub(crate) mod bottom_nav;
pub(crate) mod header;
pub(crate) mod layout;
pub(crate) mod setup;
pub(crate) mod setup_validation;
