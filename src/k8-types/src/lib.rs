mod crd;
mod metadata;

pub use self::crd::*;
pub use self::metadata::*;
