use crate::config::GeneratorConfig;
use crate::ddl::{TableDefinition, parse_create_table};
use crate::error::Result;
use crate::render::{GeneratedFile, render_data_object, render_mapper};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 一次生成的全部产物
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArtifacts {
    pub table: TableDefinition,
    pub data_object: GeneratedFile,
    pub mapper: GeneratedFile,
}

impl GeneratedArtifacts {
    /// 按写入顺序返回: PO 类在前，Mapper 在后
    pub fn files(&self) -> [&GeneratedFile; 2] {
        [&self.data_object, &self.mapper]
    }
}

/// 代码生成器：解析 DDL 并渲染 PO 类与 Mapper XML
pub struct CodeGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// 解析并渲染，不做任何文件写入
    pub fn generate(&self, ddl: &str) -> Result<GeneratedArtifacts> {
        let table = parse_create_table(ddl)?;

        let data_object = render_data_object(&table, self.config.output.language);
        info!("生成 PO 类: {}", data_object.file_name);

        let mapper = render_mapper(&table, &self.config.mapper);
        info!("生成 Mapper: {}", mapper.file_name);

        Ok(GeneratedArtifacts {
            table,
            data_object,
            mapper,
        })
    }

    /// 依次写入输出目录，前一个文件写完并关闭后才写下一个。
    /// 中途失败时已写入的文件不会回滚。
    pub fn write_all(
        &self,
        artifacts: &GeneratedArtifacts,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir)?;

        let mut written = Vec::new();
        for file in artifacts.files() {
            let path = output_dir.join(&file.file_name);
            fs::write(&path, &file.content)?;
            info!("✅ 已写入: {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PropertyStyle;
    use crate::constants::sample::USERS_DDL;
    use crate::naming::TargetLanguage;
    use tempfile::tempdir;

    const USERS_WITHOUT_PK: &str = "CREATE TABLE `users` (
  `id` INT(11) NOT NULL AUTO_INCREMENT COMMENT '用户ID',
  `user_name` VARCHAR(50) DEFAULT NULL COMMENT '用户名',
  `pass_word` VARCHAR(50) DEFAULT NULL COMMENT '密码'
) ENGINE=InnoDB;";

    #[test]
    fn test_users_table_scenario() {
        let config = GeneratorConfig::default();
        let artifacts = CodeGenerator::new(&config).generate(USERS_DDL).unwrap();

        assert_eq!(artifacts.table.class_name(), "Users");
        assert_eq!(artifacts.data_object.file_name, "Users.java");
        assert_eq!(artifacts.mapper.file_name, "usersMapper.xml");

        let po = &artifacts.data_object.content;
        let id = po.find("private int id;").unwrap();
        let user_name = po.find("private String userName;").unwrap();
        let pass_word = po.find("private String passWord;").unwrap();
        assert!(id < user_name && user_name < pass_word);

        let xml = &artifacts.mapper.content;
        assert!(xml.contains("<mapper namespace=\"usersMapper\">"));
        assert!(xml.contains("<result column=\"id\" property=\"id\"/>"));
        assert!(xml.contains("<id column=\"user_name\" property=\"user_name\"/>"));
        assert!(xml.contains("<result column=\"pass_word\" property=\"pass_word\"/>"));
        assert!(xml.contains("SELECT * FROM users WHERE user_name = #{userName}"));
    }

    #[test]
    fn test_no_primary_key_scenario() {
        let config = GeneratorConfig::default();
        let artifacts = CodeGenerator::new(&config).generate(USERS_WITHOUT_PK).unwrap();

        let xml = &artifacts.mapper.content;
        assert!(!xml.contains("<id "));
        assert_eq!(xml.matches("<result ").count(), 3);
        assert!(xml.contains("SELECT * FROM users WHERE id = #{id}"));
        assert!(xml.contains("WHERE id = #{id}\n    </update>"));
        assert!(xml.contains("DELETE FROM users WHERE id = #{id}"));
    }

    #[test]
    fn test_datetime_column_scenario() {
        let ddl = "CREATE TABLE `events` (\n  `id` INT(11) NOT NULL COMMENT '主键',\n  `created_at` DATETIME NOT NULL COMMENT '创建时间'\n);";
        let config = GeneratorConfig::default();
        let artifacts = CodeGenerator::new(&config).generate(ddl).unwrap();
        assert!(
            artifacts
                .data_object
                .content
                .contains("private java.util.Date createdAt;")
        );
    }

    #[test]
    fn test_empty_comment_scenario() {
        let ddl = "CREATE TABLE `notes` (\n  `id` INT(11) NOT NULL,\n  `body` TEXT\n);";
        let config = GeneratorConfig::default();
        let artifacts = CodeGenerator::new(&config).generate(ddl).unwrap();

        assert!(artifacts.table.columns.iter().all(|c| c.comment.is_empty()));
        assert!(
            artifacts
                .data_object
                .content
                .contains("  /**\n   *\n   */\n  private String body;")
        );
    }

    #[test]
    fn test_config_drives_rendering() {
        let mut config = GeneratorConfig::default();
        config.output.language = TargetLanguage::TypeScript;
        config.mapper.property_style = PropertyStyle::CamelCase;
        config.mapper.key_parameter_type = "int".to_string();

        let artifacts = CodeGenerator::new(&config).generate(USERS_DDL).unwrap();
        assert_eq!(artifacts.data_object.file_name, "Users.ts");
        assert!(artifacts.mapper.content.contains("property=\"userName\""));
        assert!(artifacts.mapper.content.contains("parameterType=\"int\""));
    }

    #[test]
    fn test_parse_error_is_propagated() {
        let config = GeneratorConfig::default();
        let err = CodeGenerator::new(&config)
            .generate("CREATE TABLE users (id INT)")
            .unwrap_err();
        assert!(matches!(err, crate::error::CodegenError::Parse(_)));
    }

    #[test]
    fn test_write_all_creates_both_files() {
        let temp_dir = tempdir().unwrap();
        let output_dir = temp_dir.path().join("out");

        let config = GeneratorConfig::default();
        let generator = CodeGenerator::new(&config);
        let artifacts = generator.generate(USERS_DDL).unwrap();
        let written = generator.write_all(&artifacts, &output_dir).unwrap();

        assert_eq!(
            written,
            vec![output_dir.join("Users.java"), output_dir.join("usersMapper.xml")]
        );
        assert_eq!(
            fs::read_to_string(&written[0]).unwrap(),
            artifacts.data_object.content
        );
        assert_eq!(fs::read_to_string(&written[1]).unwrap(), artifacts.mapper.content);
    }

    #[test]
    fn test_write_all_reports_io_error() {
        let temp_dir = tempdir().unwrap();
        // 输出目录位置已被普通文件占用
        let blocker = temp_dir.path().join("blocked");
        fs::write(&blocker, "x").unwrap();

        let config = GeneratorConfig::default();
        let generator = CodeGenerator::new(&config);
        let artifacts = generator.generate(USERS_DDL).unwrap();
        let err = generator.write_all(&artifacts, &blocker).unwrap_err();
        assert!(matches!(err, crate::error::CodegenError::Io(_)));
    }
}
