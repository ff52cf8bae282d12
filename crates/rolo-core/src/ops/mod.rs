pub mod address_book;
pub mod contact_ops;
pub mod field_ops;
pub mod link_ops;
pub mod tag_ops;

pub use address_book::AddressBook;
