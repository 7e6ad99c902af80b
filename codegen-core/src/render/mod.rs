mod data_object;
mod mapper;
pub mod xml;

pub use data_object::{data_object_file_name, render_data_object};
pub use mapper::{build_mapper_document, mapper_file_name, render_mapper};

/// 渲染结果：文件名与文件内容
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub content: String,
}
