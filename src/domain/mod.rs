mod amount;
mod category;
mod transaction;

pub use amount::*;
pub use category::*;
pub use transaction::*;
