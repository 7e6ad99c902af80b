//! 标识符与类型映射
//!
//! 列名 → 驼峰属性名，表名 → 类名，SQL 类型 → 目标语言类型。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 下划线转驼峰: `user_name` → `userName`, `ID` → `id`
///
/// `_` 被丢弃并使下一个字符大写，其余字符一律转小写。
pub fn camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for ch in name.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

/// 首字母大写，其余部分原样保留: `users` → `Users`
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 与目标语言无关的字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostType {
    Int32,
    Text,
    DateTime,
    Object,
}

impl HostType {
    /// 按前缀匹配 SQL 类型，先匹配者优先
    pub fn from_sql_type(sql_type: &str) -> Self {
        let sql_type = sql_type.to_lowercase();
        if sql_type.starts_with("int") {
            HostType::Int32
        } else if sql_type.starts_with("varchar") || sql_type.starts_with("text") {
            HostType::Text
        } else if sql_type.starts_with("timestamp") || sql_type.starts_with("datetime") {
            HostType::DateTime
        } else {
            HostType::Object
        }
    }
}

/// PO 类的目标语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    Java,
    TypeScript,
}

impl TargetLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::Java => "java",
            TargetLanguage::TypeScript => "typescript",
        }
    }

    /// PO 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            TargetLanguage::Java => "java",
            TargetLanguage::TypeScript => "ts",
        }
    }

    pub fn type_name(&self, host_type: HostType) -> &'static str {
        match (self, host_type) {
            (TargetLanguage::Java, HostType::Int32) => "int",
            (TargetLanguage::Java, HostType::Text) => "String",
            (TargetLanguage::Java, HostType::DateTime) => "java.util.Date",
            (TargetLanguage::Java, HostType::Object) => "Object",
            (TargetLanguage::TypeScript, HostType::Int32) => "number",
            (TargetLanguage::TypeScript, HostType::Text) => "string",
            (TargetLanguage::TypeScript, HostType::DateTime) => "Date",
            (TargetLanguage::TypeScript, HostType::Object) => "unknown",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(TargetLanguage::Java),
            "typescript" | "ts" => Ok(TargetLanguage::TypeScript),
            other => Err(format!("不支持的目标语言: {other}（可选 java, typescript）")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("user_name"), "userName");
        assert_eq!(camel_case("pass_word"), "passWord");
        assert_eq!(camel_case("a_b_c"), "aBc");
        assert_eq!(camel_case("ID"), "id");
        assert_eq!(camel_case("created_at"), "createdAt");
    }

    #[test]
    fn test_camel_case_leading_underscore() {
        // 只有下划线之后的字符会大写
        assert_eq!(camel_case("_id"), "Id");
        assert_eq!(camel_case("User_ID"), "userId");
    }

    #[test]
    fn test_camel_case_idempotent_without_underscores() {
        for name in ["username", "id", "abc123"] {
            let once = camel_case(name);
            assert_eq!(camel_case(&once), once);
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("users"), "Users");
        assert_eq!(capitalize("user_info"), "User_info");
        assert_eq!(capitalize("Users"), "Users");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_host_type_mapping() {
        assert_eq!(HostType::from_sql_type("int(11)"), HostType::Int32);
        assert_eq!(HostType::from_sql_type("INT"), HostType::Int32);
        assert_eq!(HostType::from_sql_type("varchar(50)"), HostType::Text);
        assert_eq!(HostType::from_sql_type("text"), HostType::Text);
        assert_eq!(HostType::from_sql_type("datetime"), HostType::DateTime);
        assert_eq!(HostType::from_sql_type("timestamp"), HostType::DateTime);
        assert_eq!(HostType::from_sql_type("bigint(20)"), HostType::Object);
        assert_eq!(HostType::from_sql_type("decimal(10,2)"), HostType::Object);
    }

    #[test]
    fn test_target_language() {
        assert_eq!(TargetLanguage::Java.type_name(HostType::DateTime), "java.util.Date");
        assert_eq!(TargetLanguage::TypeScript.type_name(HostType::Int32), "number");
        assert_eq!(TargetLanguage::TypeScript.extension(), "ts");
        assert_eq!("TS".parse::<TargetLanguage>(), Ok(TargetLanguage::TypeScript));
        assert!("kotlin".parse::<TargetLanguage>().is_err());
        assert_eq!(format!("{}", TargetLanguage::Java), "java");
    }
}
