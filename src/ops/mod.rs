pub mod debounce;
pub mod port;
pub mod search;
pub mod store;

pub use port::PresentationPort;
pub use store::{Field, StoreError, TaskStore};
