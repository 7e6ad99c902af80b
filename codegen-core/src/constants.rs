/// Mapper XML 相关常量
pub mod mapper {
    /// 未声明主键时使用的列名
    pub const DEFAULT_PRIMARY_KEY: &str = "id";

    /// namespace 与文件名的后缀: `<表名>Mapper`
    pub const NAMESPACE_SUFFIX: &str = "Mapper";

    /// Mapper 文件扩展名
    pub const FILE_EXTENSION: &str = "xml";

    /// resultMap 的 id
    pub const BASE_RESULT_MAP: &str = "BaseResultMap";

    /// 按主键查询/删除时的参数类型
    pub const DEFAULT_KEY_PARAMETER_TYPE: &str = "java.lang.Integer";

    /// XML 声明
    pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

    /// DOCTYPE 声明
    pub mod doctype {
        pub const ROOT_ELEMENT: &str = "mapper";
        pub const PUBLIC_ID: &str = "-//mybatis.org//DTD Mapper 3.0//EN";
        pub const SYSTEM_ID: &str = "http://mybatis.org/dtd/mybatis-3-mapper.dtd";
    }

    /// 语句 id
    pub mod statement {
        pub const SELECT_BY_PRIMARY_KEY: &str = "selectByPrimaryKey";
        pub const INSERT: &str = "insert";
        pub const UPDATE_BY_PRIMARY_KEY: &str = "updateByPrimaryKey";
        pub const DELETE_BY_PRIMARY_KEY: &str = "deleteByPrimaryKey";
    }

    /// 序列化时每层缩进
    pub const INDENT: &str = "    ";
}

/// 配置文件相关常量
pub mod config {
    /// 默认配置文件名
    pub const DEFAULT_CONFIG_FILE: &str = "mybatis-gen.toml";

    /// 按优先级查找的配置文件
    pub const CONFIG_FILE_CANDIDATES: &[&str] = &["mybatis-gen.toml", ".mybatis-gen.toml"];

    /// 默认输出目录
    pub const DEFAULT_OUTPUT_DIR: &str = ".";
}

/// 内置示例
pub mod sample {
    /// 用户表，`--sample` 时作为输入
    pub const USERS_DDL: &str = "CREATE TABLE `users` (\n\
  `id` INT(11) NOT NULL AUTO_INCREMENT COMMENT '用户ID',\n\
  `user_name` VARCHAR(50) DEFAULT NULL COMMENT '用户名',\n\
  `pass_word` VARCHAR(50) DEFAULT NULL COMMENT '密码',\n\
  PRIMARY KEY (`user_name`)\n\
) ENGINE=InnoDB DEFAULT CHARSET=utf8 COMMENT='用户表';";
}
