mod argument_index;
mod argument_spec;
mod scanner;
mod selection_key;
mod shape_error;

pub use argument_index::ArgumentIndex;
pub use argument_spec::ArgumentSpec;
pub use scanner::root_record;
pub use scanner::scan;
pub use scanner::scan_record;
pub use selection_key::SelectionKey;
pub use shape_error::ShapeError;
