pub mod decision;
pub mod report;
pub mod request;
pub mod violation;

pub use decision::*;
pub use report::*;
pub use request::*;
pub use violation::*;
