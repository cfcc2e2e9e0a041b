mod error;
mod iter;
mod key;
mod table;

pub use error::TableError;
pub use iter::TableIter;
pub use key::{StrKey, TableKey};
pub use table::{
    HASH_EMPTY, HASH_KILLED, MIN_CAPACITY, MIN_LOOKUPS, Table, TableHash,
};
