pub mod cover;
pub mod platform;
pub mod request;
pub mod response;

pub use cover::*;
pub use platform::*;
pub use request::*;
pub use response::*;
