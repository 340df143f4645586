pub mod projection;
pub mod ribbon;
pub mod session;
pub mod stroke;
pub mod style;

pub use projection::*;
pub use ribbon::*;
pub use session::*;
pub use stroke::*;
pub use style::*;
