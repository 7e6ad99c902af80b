use super::GeneratedFile;
use super::xml::{DocType, XmlDocument, XmlElement};
use crate::config::{MapperConfig, PropertyStyle};
use crate::constants::mapper::{
    BASE_RESULT_MAP, FILE_EXTENSION, NAMESPACE_SUFFIX, doctype, statement,
};
use crate::ddl::{ColumnDefinition, TableDefinition};
use crate::naming::camel_case;
use tracing::debug;

/// Mapper 文件名: `<表名>Mapper.xml`
pub fn mapper_file_name(table_name: &str) -> String {
    format!("{table_name}{NAMESPACE_SUFFIX}.{FILE_EXTENSION}")
}

/// 渲染 MyBatis Mapper XML
pub fn render_mapper(table: &TableDefinition, options: &MapperConfig) -> GeneratedFile {
    let document = build_mapper_document(table, options);
    GeneratedFile {
        file_name: mapper_file_name(&table.name),
        content: document.to_xml_string(),
    }
}

/// 构建 Mapper 文档树：resultMap、按主键查询、插入、按主键更新、按主键删除
pub fn build_mapper_document(table: &TableDefinition, options: &MapperConfig) -> XmlDocument {
    let class_name = table.class_name();
    let key_condition = primary_key_condition(table);
    debug!("Mapper 主键条件: {}", key_condition);

    let mut root = XmlElement::new("mapper").with_attribute(
        "namespace",
        format!("{}{NAMESPACE_SUFFIX}", table.name),
    );

    root.append_child(build_result_map(table, &class_name, options));

    root.append_child(
        XmlElement::new("select")
            .with_attribute("id", statement::SELECT_BY_PRIMARY_KEY)
            .with_attribute("parameterType", options.key_parameter_type.as_str())
            .with_attribute("resultMap", BASE_RESULT_MAP)
            .with_text(format!("SELECT * FROM {} WHERE {key_condition}", table.name)),
    );

    // 插入语句沿用 select 标签
    root.append_child(
        XmlElement::new("select")
            .with_attribute("id", statement::INSERT)
            .with_attribute("parameterType", class_name.as_str())
            .with_text(insert_body(table)),
    );

    root.append_child(build_update(table, &class_name, &key_condition));

    root.append_child(
        XmlElement::new("delete")
            .with_attribute("id", statement::DELETE_BY_PRIMARY_KEY)
            .with_attribute("parameterType", options.key_parameter_type.as_str())
            .with_text(format!("DELETE FROM {} WHERE {key_condition}", table.name)),
    );

    XmlDocument::new(root).with_doctype(DocType {
        root: doctype::ROOT_ELEMENT.to_string(),
        public_id: doctype::PUBLIC_ID.to_string(),
        system_id: doctype::SYSTEM_ID.to_string(),
    })
}

/// `<pk列> = #{<pk属性>}`
fn primary_key_condition(table: &TableDefinition) -> String {
    let key_column = table.primary_key_column();
    format!("{key_column} = #{{{}}}", camel_case(key_column))
}

fn build_result_map(
    table: &TableDefinition,
    class_name: &str,
    options: &MapperConfig,
) -> XmlElement {
    let mut result_map = XmlElement::new("resultMap")
        .with_attribute("id", BASE_RESULT_MAP)
        .with_attribute("type", class_name);

    for column in &table.columns {
        let tag = if column.is_primary_key { "id" } else { "result" };
        result_map.append_child(
            XmlElement::new(tag)
                .with_attribute("column", column.name.as_str())
                .with_attribute("property", property_name(column, options.property_style)),
        );
    }

    result_map
}

fn property_name(column: &ColumnDefinition, style: PropertyStyle) -> String {
    match style {
        PropertyStyle::Raw => column.name.clone(),
        PropertyStyle::CamelCase => camel_case(&column.name),
    }
}

fn insert_body(table: &TableDefinition) -> String {
    let column_list = table
        .columns
        .iter()
        .map(|column| format!("  {}", column.name))
        .collect::<Vec<_>>()
        .join(",\n");
    let value_list = table
        .columns
        .iter()
        .map(|column| format!("  #{{{}}}", camel_case(&column.name)))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "INSERT INTO {} (\n{column_list}\n) VALUES (\n{value_list}\n)",
        table.name
    )
}

/// 每个 `<if>` 分支都以逗号结尾，由 MyBatis 的 `<set>` 去掉最后一个
fn build_update(table: &TableDefinition, class_name: &str, key_condition: &str) -> XmlElement {
    let mut set = XmlElement::new("set");
    for column in &table.columns {
        let property = camel_case(&column.name);
        set.append_child(
            XmlElement::new("if")
                .with_attribute("test", format!("{property} != null"))
                .with_text(format!("{} = #{{{property}}},", column.name)),
        );
    }

    let mut update = XmlElement::new("update")
        .with_attribute("id", statement::UPDATE_BY_PRIMARY_KEY)
        .with_attribute("parameterType", class_name);
    update.append_child(set);
    update.append_text(format!("WHERE {key_condition}"));
    update
}
