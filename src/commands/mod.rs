pub mod add;
pub mod commit;
pub mod pull;
pub mod push;
pub mod session;
pub mod status;
pub mod tag;

pub use add::*;
pub use commit::*;
pub use pull::*;
pub use push::*;
pub use session::*;
pub use status::*;
pub use tag::*;
