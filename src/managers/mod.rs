// Shelfmark storage collaborators
// The controller reads and mutates the bookmark collection only through these.

pub mod bookmark_storage;
pub mod local_storage;
