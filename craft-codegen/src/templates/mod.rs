//! The fixed template catalog, indexed by kind.

mod module;
mod response;
mod service;

pub use module::{CONTROLLER_GO, DTO_GO, MIDDLEWARE_GO, SERVICE_GO, WIRE_GO};
pub use response::RESPONSE;
pub use service::SERVICE;

use crate::{Kind, Template};

/// Templates rendered for a kind, in report order.
pub fn bundle(kind: Kind) -> &'static [Template] {
    match kind {
        Kind::Module => module::TEMPLATES,
        Kind::Service => service::TEMPLATES,
        Kind::Response => response::TEMPLATES,
    }
}
