mod ids;
mod note;
mod user;

pub use ids::{NoteId, UserId};
pub use note::{normalize_tags, CreateNote, Note, UpdateNote};
pub use user::{NewUser, User};
