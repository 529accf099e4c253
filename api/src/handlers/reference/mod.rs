pub(crate) mod reference_handlers;
