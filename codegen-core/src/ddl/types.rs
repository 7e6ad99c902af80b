use crate::constants::mapper::DEFAULT_PRIMARY_KEY;
use crate::naming::capitalize;

/// 表列定义
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// 反引号中的原始列名
    pub name: String,
    /// 列名后的第一个记号，已转为小写，如 `int(11)`
    pub sql_type: String,
    /// `COMMENT '...'` 中的内容，没有注释时为空串
    pub comment: String,
    pub is_primary_key: bool,
}

impl ColumnDefinition {
    pub fn new(
        name: impl Into<String>,
        sql_type: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            comment: comment.into(),
            is_primary_key: false,
        }
    }
}

/// 表定义
#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    /// 表级 `COMMENT='...'`
    pub comment: Option<String>,
}

impl TableDefinition {
    /// PO 类名，即首字母大写的表名
    pub fn class_name(&self) -> String {
        capitalize(&self.name)
    }

    pub fn primary_key(&self) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.is_primary_key)
    }

    /// 主键列名，未声明主键时退回到 `id`
    pub fn primary_key_column(&self) -> &str {
        self.primary_key()
            .map(|column| column.name.as_str())
            .unwrap_or(DEFAULT_PRIMARY_KEY)
    }
}
