pub mod contact;
pub mod filter;
pub mod values;

pub use contact::{Contact, ContactDraft, ContactEdit, Link};
pub use filter::{ContactFilter, FindScope};
pub use values::{Address, Email, FieldKey, FieldValue, Index, LinkLabel, Name, Phone, Tag};
