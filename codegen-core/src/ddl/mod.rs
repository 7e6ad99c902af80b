mod parser;
mod types;


// 重新导出公共接口
pub use parser::parse_create_table;
pub use types::{ColumnDefinition, TableDefinition};
