//! Process-wide [`Responder`].
//!
//! Configure once at startup, then call the category functions from any
//! handler. Code that can take a `Responder` by injection should prefer that.

use std::fmt::Display;
use std::sync::{LazyLock, PoisonError, RwLock};

use http::StatusCode;

use crate::category::{Category, with_categories};
use crate::error::SendError;
use crate::responder::{Options, Responder};
use crate::response::ResponseWriter;

static RESPONDER: LazyLock<RwLock<Responder>> = LazyLock::new(|| RwLock::new(Responder::new()));

pub fn configure(options: Options) {
    RESPONDER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .configure(options);
}

pub fn configure_defaults() {
    RESPONDER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .configure_defaults();
}

/// Snapshot of the active configuration.
pub fn current() -> Responder {
    RESPONDER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn emit<E: Display + ?Sized>(
    w: &mut dyn ResponseWriter,
    status: StatusCode,
    err: &E,
) -> Result<(), SendError> {
    current().emit(w, status, err)
}

pub fn respond<E: Display + ?Sized>(category: Category, w: &mut dyn ResponseWriter, err: &E) {
    current().respond(category, w, err)
}

macro_rules! global_functions {
    ($(($variant:ident, $method:ident, $code:literal, $status:ident, $phrase:literal)),* $(,)?) => {
        $(
            #[doc = concat!("Sends an error with status ", stringify!($code), " ", $phrase, " using the global configuration.")]
            pub fn $method<E: Display + ?Sized>(w: &mut dyn ResponseWriter, err: &E) {
                respond(Category::$variant, w, err)
            }
        )*
    };
}

with_categories!(global_functions);
