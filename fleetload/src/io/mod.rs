mod export;
mod import;

/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

#[doc(inline)]
pub use export::{export, export_allocation};

#[doc(inline)]
pub use import::{import, import_move, import_request, import_vehicle};
