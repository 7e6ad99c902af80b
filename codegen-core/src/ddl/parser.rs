use super::types::{ColumnDefinition, TableDefinition};
use crate::error::{CodegenError, Result};
use regex::Regex;
use tracing::{debug, info};

/// 列注释: `COMMENT '用户名'`
pub(crate) const COLUMN_COMMENT_PATTERN: &str = r"COMMENT\s+'([^']+)'";

/// 表注释: `) ENGINE=InnoDB COMMENT='用户表'`
const TABLE_COMMENT_PATTERN: &str = r"(?i)COMMENT\s*=?\s*'([^']*)'";

/// 列定义块中不属于列的条目（索引、约束），生成时直接跳过
const SKIPPED_ENTRY_KEYWORDS: &[&str] = &[
    "KEY",
    "INDEX",
    "UNIQUE",
    "FULLTEXT",
    "SPATIAL",
    "CONSTRAINT",
    "FOREIGN KEY",
    "CHECK",
];

/// 解析单条 CREATE TABLE 语句
pub fn parse_create_table(ddl: &str) -> Result<TableDefinition> {
    let open_paren = ddl
        .find('(')
        .ok_or_else(|| CodegenError::parse("未找到列定义块的左括号 '('"))?;

    let table_name = extract_table_name(ddl, open_paren)?;
    debug!("解析表: {}", table_name);

    let close_paren = find_matching_paren(ddl, open_paren)
        .ok_or_else(|| CodegenError::parse("列定义块的括号不匹配"))?;

    let block = &ddl[open_paren + 1..close_paren];
    if block.trim().is_empty() {
        return Err(CodegenError::parse(format!("表 {table_name} 的列定义块为空")));
    }

    let comment_regex = compile_regex(COLUMN_COMMENT_PATTERN)?;
    let mut columns: Vec<ColumnDefinition> = Vec::new();
    let mut primary_key: Option<String> = None;

    for entry in split_column_entries(block) {
        let upper = entry.to_uppercase();

        if upper.starts_with("PRIMARY KEY") {
            let key_name = extract_primary_key_name(entry)?;
            if let Some(existing) = &primary_key {
                return Err(CodegenError::parse(format!(
                    "重复的主键定义: {existing} 与 {key_name}"
                )));
            }

            let column = columns
                .iter_mut()
                .find(|column| column.name == key_name)
                .ok_or_else(|| CodegenError::UnknownPrimaryKeyColumn(key_name.clone()))?;
            column.is_primary_key = true;
            debug!("主键列: {}", key_name);
            primary_key = Some(key_name);
            continue;
        }

        if is_skipped_entry(&upper) {
            debug!("跳过索引或约束定义: {}", entry);
            continue;
        }

        let column = parse_column_entry(entry, &comment_regex)?;
        if columns.iter().any(|existing| existing.name == column.name) {
            return Err(CodegenError::parse(format!("重复的列名: {}", column.name)));
        }
        debug!("解析列: {} {}", column.name, column.sql_type);
        columns.push(column);
    }

    if columns.is_empty() {
        return Err(CodegenError::parse(format!("表 {table_name} 没有任何列定义")));
    }

    let comment = extract_table_comment(&ddl[close_paren + 1..])?;

    info!("成功解析表 {}，共 {} 列", table_name, columns.len());
    Ok(TableDefinition {
        name: table_name,
        columns,
        comment,
    })
}

/// 表名取第一个左括号之前的前两个反引号之间的内容，
/// 因此 `CREATE TABLE IF NOT EXISTS` 前缀不影响结果
fn extract_table_name(ddl: &str, open_paren: usize) -> Result<String> {
    let head = &ddl[..open_paren];
    let missing = || CodegenError::parse("列定义块之前缺少反引号包裹的表名");

    let first = head.find('`').ok_or_else(missing)?;
    let second = head[first + 1..]
        .find('`')
        .map(|offset| first + 1 + offset)
        .ok_or_else(missing)?;

    let name = &head[first + 1..second];
    if name.is_empty() {
        return Err(CodegenError::parse("表名为空"));
    }
    Ok(name.to_string())
}

/// 引号状态机，逐字符判断当前字符是否位于引号之外
#[derive(Debug, Default)]
struct QuoteState {
    quote: Option<char>,
    escape_next: bool,
}

impl QuoteState {
    fn is_code(&mut self, ch: char) -> bool {
        if self.escape_next {
            self.escape_next = false;
            return false;
        }

        match self.quote {
            Some(quote) => {
                if ch == '\\' && quote != '`' {
                    self.escape_next = true;
                } else if ch == quote {
                    self.quote = None;
                }
                false
            }
            None => {
                if matches!(ch, '\'' | '"' | '`') {
                    self.quote = Some(ch);
                    false
                } else {
                    true
                }
            }
        }
    }
}

/// 查找与 `open` 处左括号配对的右括号，忽略引号内的括号
fn find_matching_paren(ddl: &str, open: usize) -> Option<usize> {
    let mut state = QuoteState::default();
    let mut depth = 0usize;

    for (offset, ch) in ddl[open..].char_indices() {
        if !state.is_code(ch) {
            continue;
        }
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }

    None
}

/// 按顶层逗号切分列定义块。
///
/// `VARCHAR(50)`、`DECIMAL(10,2)` 里的逗号以及注释文本里的逗号都不会切分，
/// 所以单行格式的 DDL 也能正确解析。
pub(crate) fn split_column_entries(block: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut state = QuoteState::default();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in block.char_indices() {
        if !state.is_code(ch) {
            continue;
        }
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(&block[start..idx]);
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }
    entries.push(&block[start..]);

    entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn is_skipped_entry(upper: &str) -> bool {
    SKIPPED_ENTRY_KEYWORDS.iter().any(|keyword| {
        upper
            .strip_prefix(keyword)
            .is_some_and(|rest| {
                rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace() || c == '(' || c == '`')
            })
    })
}

/// 解析普通列条目：第一个记号是列名，第二个记号是类型
fn parse_column_entry(entry: &str, comment_regex: &Regex) -> Result<ColumnDefinition> {
    let mut tokens = entry.split_whitespace();

    let name = tokens.next().unwrap_or_default().replace('`', "");
    if name.is_empty() {
        return Err(CodegenError::parse(format!("列名为空: {entry}")));
    }

    let sql_type = tokens
        .next()
        .ok_or_else(|| CodegenError::parse(format!("列 {name} 缺少类型定义")))?
        .to_lowercase();

    let comment = extract_column_comment(entry, comment_regex);

    Ok(ColumnDefinition::new(name, sql_type, comment))
}

pub(crate) fn extract_column_comment(entry: &str, comment_regex: &Regex) -> String {
    comment_regex
        .captures(entry)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// 提取 `PRIMARY KEY (`user_name`)` 中的列名
fn extract_primary_key_name(entry: &str) -> Result<String> {
    let open = entry
        .find('(')
        .ok_or_else(|| CodegenError::parse(format!("主键定义缺少括号: {entry}")))?;
    let close = entry[open..]
        .find(')')
        .map(|offset| open + offset)
        .ok_or_else(|| CodegenError::parse(format!("主键定义缺少右括号: {entry}")))?;

    let name = entry[open + 1..close].replace('`', "").trim().to_string();
    if name.is_empty() {
        return Err(CodegenError::parse(format!("主键定义未指定列: {entry}")));
    }
    Ok(name)
}

fn extract_table_comment(table_options: &str) -> Result<Option<String>> {
    let regex = compile_regex(TABLE_COMMENT_PATTERN)?;
    Ok(regex
        .captures(table_options)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|comment| !comment.is_empty()))
}

pub(crate) fn compile_regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| CodegenError::custom(format!("正则表达式编译失败: {e}")))
}
