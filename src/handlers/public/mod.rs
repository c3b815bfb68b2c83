// handlers/public - endpoints reachable without credentials
pub mod root;
pub mod users;

pub use root::{health, root};
pub use users::{login, signup};
