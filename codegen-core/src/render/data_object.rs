use super::GeneratedFile;
use crate::ddl::{ColumnDefinition, TableDefinition};
use crate::naming::{HostType, TargetLanguage, camel_case};

const FIELD_INDENT: &str = "  ";

/// PO 文件名: `<类名>.<扩展名>`
pub fn data_object_file_name(class_name: &str, language: TargetLanguage) -> String {
    format!("{class_name}.{}", language.extension())
}

/// 渲染 PO 类：每列一个带注释的字段，外加一个无参构造方法
pub fn render_data_object(table: &TableDefinition, language: TargetLanguage) -> GeneratedFile {
    let class_name = table.class_name();
    let mut out = String::new();

    if let Some(comment) = &table.comment {
        push_doc_block(&mut out, "", comment);
    }

    let class_keyword = match language {
        TargetLanguage::Java => "public class",
        TargetLanguage::TypeScript => "export class",
    };
    out.push_str(&format!("{class_keyword} {class_name} {{\n\n"));

    for column in &table.columns {
        push_doc_block(&mut out, FIELD_INDENT, &column.comment);
        out.push_str(FIELD_INDENT);
        out.push_str(&field_declaration(column, language));
        out.push_str("\n\n");
    }

    let constructor = match language {
        TargetLanguage::Java => format!("public {class_name}()"),
        TargetLanguage::TypeScript => "constructor()".to_string(),
    };
    out.push_str(&format!(
        "{FIELD_INDENT}{constructor} {{\n{FIELD_INDENT}{FIELD_INDENT}// 默认构造方法\n{FIELD_INDENT}}}\n\n}}\n"
    ));

    GeneratedFile {
        file_name: data_object_file_name(&class_name, language),
        content: out,
    }
}

fn field_declaration(column: &ColumnDefinition, language: TargetLanguage) -> String {
    let field_name = camel_case(&column.name);
    let type_name = language.type_name(HostType::from_sql_type(&column.sql_type));
    match language {
        TargetLanguage::Java => format!("private {type_name} {field_name};"),
        TargetLanguage::TypeScript => format!("{field_name}?: {type_name};"),
    }
}

/// 没有注释时保留空的文档块
fn push_doc_block(out: &mut String, indent: &str, comment: &str) {
    out.push_str(&format!("{indent}/**\n"));
    out.push_str(format!("{indent} * {comment}").trim_end());
    out.push('\n');
    out.push_str(&format!("{indent} */\n"));
}
