pub(crate) mod film_handlers;
