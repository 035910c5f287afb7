mod collection;

pub use collection::{ensure_indexes_exist, Coll, MongoCollection};
