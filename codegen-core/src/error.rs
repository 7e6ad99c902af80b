use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodegenError>;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("DDL 解析错误: {0}")]
    Parse(String),

    #[error("主键引用了未声明的列: {0}")]
    UnknownPrimaryKeyColumn(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件未找到: {}", .0.display())]
    ConfigNotFound(std::path::PathBuf),

    #[error("配置错误: {0}")]
    Config(#[from] toml::de::Error),

    #[error("自定义错误: {0}")]
    Custom(String),
}

impl CodegenError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }
}
