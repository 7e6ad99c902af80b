//! mybatis-gen 项目信息模块
//!
//! 项目元数据统一在这里定义，codegen-core 作为内部库只提供技术性常量

/// 项目元数据（自动从 Cargo.toml 同步）
pub mod metadata {
    /// 项目描述
    pub const PROJECT_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

    /// 项目作者
    pub const PROJECT_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

    /// 用户友好的显示名称（手动维护，用于帮助信息）
    pub mod display {
        /// CLI 工具的完整名称
        pub const CLI_FULL_NAME: &str = "MyBatis Generator CLI";

        /// 项目详细描述
        pub const DESCRIPTION_LONG: &str = "读取一条 MySQL CREATE TABLE 语句，生成带注释字段的 PO 类，\
以及包含 resultMap、按主键查询、插入、按主键更新和按主键删除的 MyBatis Mapper XML";
    }
}

/// 版本信息
pub mod version_info {
    /// CLI 版本（自动从 Cargo.toml 同步）
    pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// 获取版本信息字符串
pub fn get_version_string() -> String {
    format!(
        "{} v{}",
        metadata::display::CLI_FULL_NAME,
        version_info::CLI_VERSION
    )
}
