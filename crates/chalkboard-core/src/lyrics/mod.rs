pub mod layout;
pub mod stage;
pub mod sync;

pub use layout::*;
pub use stage::*;
pub use sync::*;
