/// Server services
pub mod accounts;
pub mod notes;
pub mod token;

pub use accounts::{AccountService, Session};
pub use notes::{NoteEdit, NoteService};
pub use token::{Claims, TokenService};
