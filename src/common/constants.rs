// doc constants
pub const DOC_ID: &str = "_id";
pub const DOC_FIELDS: &str = "_fields";
pub const DOC_IN_SYNC: &str = "_in_sync";
pub const RESERVED_FIELDS: [&str; 3] = [DOC_ID, DOC_FIELDS, DOC_IN_SYNC];

// Compile-time assertion for reserved fields count
const _: () = {
    const RESERVED_FIELDS_COUNT: usize = 3;
    const ACTUAL_COUNT: usize = RESERVED_FIELDS.len();
    const _: [(); 1] = [(); (ACTUAL_COUNT == RESERVED_FIELDS_COUNT) as usize];
};

pub const MEMODB_VERSION: &str = env!("CARGO_PKG_VERSION");
